//! The three gateway operations: daily challenge, recent challenges,
//! question detail.
//!
//! Each operation is an async fetch wrapper over a pure assembly
//! function, so the full decision table is testable without touching
//! the network. Operations never fail: every outcome becomes a result
//! object carrying exactly one of payload or error.

use chrono::Datelike;
use serde::Serialize;
use serde_json::Value;

use crate::client::{RawResponse, UpstreamClient};
use crate::error::GatewayError;
use crate::fallback;
use crate::models::{decode_stats, ChallengeDetail, ChallengeListing, DailyChallenge};
use crate::normalize::normalize;
use crate::queries;

/// Extractor path for the daily-challenge operation.
const DAILY_PATH: &[&str] = &["data", "activeDailyCodingChallengeQuestion"];

/// Extractor path for the recent-challenges operation.
const RECENT_PATH: &[&str] = &["data", "dailyCodingChallengeV2", "challenges"];

/// Extractor path for the question-detail operation.
const DETAIL_PATH: &[&str] = &["data", "question"];

/// Listing length cap; upstream order (most recent first) is preserved.
const RECENT_LIMIT: usize = 5;

// ---------------------------------------------------------------------------
// Result objects
// ---------------------------------------------------------------------------

/// Result of the daily-challenge operation.
#[derive(Debug, Serialize)]
pub struct DailyChallengeResult {
    pub challenge: Option<DailyChallenge>,
    pub error: Option<String>,
}

/// Result of the recent-challenges operation. `advisory` is non-fatal:
/// it marks a success view served from sample data.
#[derive(Debug, Serialize)]
pub struct RecentChallengesResult {
    pub questions: Vec<ChallengeListing>,
    pub advisory: Option<&'static str>,
    pub error: Option<String>,
}

/// Result of the question-detail operation. `stats` is decoded from the
/// upstream's encoded string; it is `{}` when absent or undecodable.
#[derive(Debug, Serialize)]
pub struct QuestionDetailResult {
    pub question: Option<ChallengeDetail>,
    pub stats: serde_json::Map<String, Value>,
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

/// Facade over the upstream client plus the normalization and fallback
/// policies of the three operations.
pub struct LeetCodeGateway {
    client: UpstreamClient,
}

impl LeetCodeGateway {
    /// Gateway against the public LeetCode endpoint.
    pub fn new() -> Self {
        Self::with_client(UpstreamClient::new())
    }

    pub fn with_client(client: UpstreamClient) -> Self {
        Self { client }
    }

    /// Fetch the active daily challenge. No fallback: an empty result
    /// surfaces as "No daily question found".
    pub async fn daily(&self) -> DailyChallengeResult {
        let raw = self.client.fetch(queries::DAILY_QUESTION, Value::Null).await;
        assemble_daily(raw)
    }

    /// Fetch the current month's challenges, truncated to the newest 5.
    ///
    /// The query range is always the current calendar year/month; the
    /// caller supplies no dates. An empty month is replaced by the
    /// sample set with an advisory.
    pub async fn recent(&self) -> RecentChallengesResult {
        let today = chrono::Local::now();
        let variables = serde_json::json!({
            "year": today.year(),
            "month": today.month(),
        });
        let raw = self.client.fetch(queries::RECENT_QUESTIONS, variables).await;
        assemble_recent(raw)
    }

    /// Fetch one question's full payload by slug.
    pub async fn question_detail(&self, slug: &str) -> QuestionDetailResult {
        let variables = serde_json::json!({ "titleSlug": slug });
        let raw = self.client.fetch(queries::QUESTION_DETAIL, variables).await;
        assemble_detail(raw)
    }
}

impl Default for LeetCodeGateway {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Assembly (pure)
// ---------------------------------------------------------------------------

/// Assemble the daily result from a raw fetch outcome.
pub fn assemble_daily(raw: Result<RawResponse, GatewayError>) -> DailyChallengeResult {
    match extract_daily(raw) {
        Ok(challenge) => DailyChallengeResult {
            challenge: Some(challenge),
            error: None,
        },
        Err(GatewayError::EmptyField(_)) => DailyChallengeResult {
            challenge: None,
            error: Some("No daily question found".to_string()),
        },
        Err(err) => DailyChallengeResult {
            challenge: None,
            error: Some(err.to_string()),
        },
    }
}

fn extract_daily(raw: Result<RawResponse, GatewayError>) -> Result<DailyChallenge, GatewayError> {
    let value = normalize(raw?, DAILY_PATH)?;
    serde_json::from_value(value).map_err(|_| GatewayError::Decode("activeDailyCodingChallengeQuestion"))
}

/// Assemble the recent result, applying truncation and the fallback
/// policy.
pub fn assemble_recent(raw: Result<RawResponse, GatewayError>) -> RecentChallengesResult {
    match fallback::supply_if_empty(extract_recent(raw)) {
        Ok((questions, advisory)) => RecentChallengesResult {
            questions,
            advisory,
            error: None,
        },
        Err(err) => RecentChallengesResult {
            questions: Vec::new(),
            advisory: None,
            error: Some(err.to_string()),
        },
    }
}

fn extract_recent(
    raw: Result<RawResponse, GatewayError>,
) -> Result<Vec<ChallengeListing>, GatewayError> {
    let value = normalize(raw?, RECENT_PATH)?;
    let challenges: Vec<ChallengeListing> =
        serde_json::from_value(value).map_err(|_| GatewayError::Decode("challenges"))?;
    Ok(challenges.into_iter().take(RECENT_LIMIT).collect())
}

/// Assemble the detail result, containing stats-decode failures to the
/// one field.
pub fn assemble_detail(raw: Result<RawResponse, GatewayError>) -> QuestionDetailResult {
    match extract_detail(raw) {
        Ok(question) => {
            let stats = decode_stats(question.stats.as_deref());
            QuestionDetailResult {
                question: Some(question),
                stats,
                error: None,
            }
        }
        Err(GatewayError::EmptyField(_)) => QuestionDetailResult {
            question: None,
            stats: serde_json::Map::new(),
            error: Some("Question not found".to_string()),
        },
        Err(err) => QuestionDetailResult {
            question: None,
            stats: serde_json::Map::new(),
            error: Some(err.to_string()),
        },
    }
}

fn extract_detail(raw: Result<RawResponse, GatewayError>) -> Result<ChallengeDetail, GatewayError> {
    let value = normalize(raw?, DETAIL_PATH)?;
    serde_json::from_value(value).map_err(|_| GatewayError::Decode("question"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::{sample_challenges, SAMPLE_DATA_ADVISORY};
    use crate::models::{Difficulty, UserStatus};
    use serde_json::json;

    fn ok(body: Value) -> Result<RawResponse, GatewayError> {
        Ok(RawResponse { status: 200, body })
    }

    fn status(code: u16) -> Result<RawResponse, GatewayError> {
        Ok(RawResponse {
            status: code,
            body: Value::Null,
        })
    }

    fn question_json(n: u32) -> Value {
        json!({
            "title": format!("Problem {n}"),
            "difficulty": "Medium",
            "acRate": 42.0,
            "frontendQuestionId": n.to_string(),
            "paidOnly": false,
            "titleSlug": format!("problem-{n}"),
            "topicTags": [{"name": "Array"}]
        })
    }

    fn recent_body(count: u32) -> Value {
        let challenges: Vec<Value> = (0..count)
            .map(|n| {
                json!({
                    "date": format!("2025-09-{:02}", 30 - n),
                    "link": format!("/problems/problem-{n}"),
                    "question": question_json(n)
                })
            })
            .collect();
        json!({ "data": { "dailyCodingChallengeV2": { "challenges": challenges } } })
    }

    // -- Non-200 statuses surface as errors on every operation --

    #[test]
    fn upstream_status_errors_on_all_operations() {
        let daily = assemble_daily(status(502));
        assert!(daily.challenge.is_none());
        assert_eq!(daily.error.as_deref(), Some("Failed to fetch data: 502"));

        let recent = assemble_recent(status(429));
        assert!(recent.questions.is_empty());
        assert!(recent.advisory.is_none());
        assert_eq!(recent.error.as_deref(), Some("Failed to fetch data: 429"));

        let detail = assemble_detail(status(500));
        assert!(detail.question.is_none());
        assert_eq!(detail.error.as_deref(), Some("Failed to fetch data: 500"));
    }

    // -- GraphQL errors are reported even when data is present --

    #[test]
    fn graphql_errors_reported_with_data_present() {
        let body = json!({
            "errors": [{"message": "query complexity exceeded"}],
            "data": { "activeDailyCodingChallengeQuestion": {
                "date": "2025-09-05", "link": "/problems/x",
                "userStatus": "NotStart", "question": question_json(1)
            }}
        });
        let result = assemble_daily(ok(body));
        assert!(result.challenge.is_none());
        let error = result.error.unwrap();
        assert!(error.starts_with("API Error:"), "got: {error}");
        assert!(error.contains("query complexity exceeded"));
    }

    // -- Empty recent list -> the 5 sample records + advisory, no error --

    #[test]
    fn empty_recent_list_serves_samples_as_success() {
        let result = assemble_recent(ok(recent_body(0)));
        assert_eq!(result.questions, sample_challenges());
        assert_eq!(result.advisory, Some(SAMPLE_DATA_ADVISORY));
        assert!(result.error.is_none());
    }

    #[test]
    fn missing_challenges_field_serves_samples_as_success() {
        let body = json!({ "data": { "dailyCodingChallengeV2": {} } });
        let result = assemble_recent(ok(body));
        assert_eq!(result.questions.len(), 5);
        assert_eq!(result.questions[0].question.title, "Sample Problem 1");
        assert_eq!(result.advisory, Some(SAMPLE_DATA_ADVISORY));
        assert!(result.error.is_none());
    }

    // -- Overfull month -> first 5, order preserved, no advisory --

    #[test]
    fn recent_truncates_to_first_five_in_upstream_order() {
        let result = assemble_recent(ok(recent_body(8)));
        assert_eq!(result.questions.len(), 5);
        let titles: Vec<&str> = result
            .questions
            .iter()
            .map(|c| c.question.title.as_str())
            .collect();
        assert_eq!(
            titles,
            ["Problem 0", "Problem 1", "Problem 2", "Problem 3", "Problem 4"]
        );
        assert!(result.advisory.is_none());
        assert!(result.error.is_none());
    }

    // -- Invalid stats string -> empty map, no error --

    #[test]
    fn invalid_stats_degrades_to_empty_map_without_error() {
        let body = json!({ "data": { "question": {
            "questionId": "1",
            "questionFrontendId": "1",
            "title": "Two Sum",
            "titleSlug": "two-sum",
            "content": "<p>Given an array...</p>",
            "difficulty": "Easy",
            "likes": 10, "dislikes": 1,
            "stats": "not valid json {{"
        }}});
        let result = assemble_detail(ok(body));
        assert!(result.error.is_none());
        assert!(result.stats.is_empty());
        let question = result.question.unwrap();
        assert_eq!(question.title, "Two Sum");
        assert_eq!(question.difficulty, Difficulty::Easy);
    }

    #[test]
    fn valid_stats_is_decoded() {
        let body = json!({ "data": { "question": {
            "questionId": "2",
            "questionFrontendId": "2",
            "title": "Add Two Numbers",
            "titleSlug": "add-two-numbers",
            "difficulty": "Medium",
            "stats": "{\"totalAccepted\": \"3.1M\"}"
        }}});
        let result = assemble_detail(ok(body));
        assert!(result.error.is_none());
        assert_eq!(result.stats["totalAccepted"], "3.1M");
    }

    // -- Network failure -> error with network indicator, no panic --

    #[test]
    fn network_failure_surfaces_on_all_operations() {
        let timeout = || GatewayError::Network("operation timed out".to_string());

        let daily = assemble_daily(Err(timeout()));
        assert!(daily.challenge.is_none());
        assert!(daily.error.as_deref().unwrap().starts_with("Network error:"));

        let recent = assemble_recent(Err(timeout()));
        assert!(recent.questions.is_empty());
        assert!(recent.error.as_deref().unwrap().starts_with("Network error:"));

        let detail = assemble_detail(Err(timeout()));
        assert!(detail.question.is_none());
        assert!(detail.error.as_deref().unwrap().starts_with("Network error:"));
    }

    // -- Daily happy path and empty results --

    #[test]
    fn daily_happy_path_populates_challenge() {
        let body = json!({ "data": { "activeDailyCodingChallengeQuestion": {
            "date": "2025-09-05",
            "userStatus": "Finish",
            "link": "/problems/problem-1/",
            "question": question_json(1)
        }}});
        let result = assemble_daily(ok(body));
        assert!(result.error.is_none());
        let challenge = result.challenge.unwrap();
        assert_eq!(challenge.date, "2025-09-05");
        assert_eq!(challenge.user_status, UserStatus::Solved);
        assert_eq!(challenge.question.frontend_question_id, "1");
    }

    #[test]
    fn empty_daily_surfaces_no_daily_question_found() {
        let body = json!({ "data": { "activeDailyCodingChallengeQuestion": {} } });
        let result = assemble_daily(ok(body));
        assert!(result.challenge.is_none());
        assert_eq!(result.error.as_deref(), Some("No daily question found"));
    }

    #[test]
    fn missing_question_surfaces_question_not_found() {
        let body = json!({ "data": { "question": null } });
        let result = assemble_detail(ok(body));
        assert!(result.question.is_none());
        assert_eq!(result.error.as_deref(), Some("Question not found"));
    }

    #[test]
    fn no_data_body_surfaces_no_data_error() {
        let result = assemble_recent(ok(json!({ "data": null })));
        assert!(result.questions.is_empty());
        assert_eq!(result.error.as_deref(), Some("No data received from API"));
    }
}
