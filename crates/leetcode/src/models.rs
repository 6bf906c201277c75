//! View models deserialized from the upstream GraphQL payloads.
//!
//! Field names follow the upstream camelCase wire format on both sides
//! so the JSON rendered to clients matches what the upstream returns.
//! Everything here is an immutable snapshot; the only local identity is
//! the question's `titleSlug`.

use serde::{Deserialize, Serialize};

/// Question difficulty as reported by the upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Per-user progress on a challenge, upstream-defined.
///
/// The upstream wire values have drifted over time (`NotStart`,
/// `Finish`); unknown strings degrade to `NotAttempted` rather than
/// failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum UserStatus {
    #[default]
    NotAttempted,
    Attempted,
    Solved,
}

impl From<String> for UserStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Finish" | "Solved" => UserStatus::Solved,
            "Tried" | "Attempted" => UserStatus::Attempted,
            _ => UserStatus::NotAttempted,
        }
    }
}

/// A topic tag attached to a question. Extra upstream fields (id, slug)
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTag {
    pub name: String,
}

/// Snapshot of one question as shown in challenge listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeQuestion {
    pub title: String,
    pub difficulty: Difficulty,
    /// Acceptance rate, 0-100.
    pub ac_rate: f64,
    /// Frontend-facing numeric id; a string on the wire.
    pub frontend_question_id: String,
    #[serde(default)]
    pub paid_only: bool,
    /// Lookup key for the detail page. Absent in fallback fixtures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_slug: Option<String>,
    #[serde(default)]
    pub topic_tags: Vec<TopicTag>,
}

/// The active daily challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallenge {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub user_status: UserStatus,
    /// Relative URL path to the problem.
    pub link: String,
    pub question: ChallengeQuestion,
}

/// One row of the recent-challenges listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeListing {
    pub date: String,
    pub link: String,
    pub question: ChallengeQuestion,
}

/// A contributor entry on a question's detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A starter code snippet for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub lang: String,
    pub lang_slug: String,
    pub code: String,
}

/// Full question payload keyed by slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDetail {
    pub question_id: String,
    pub question_frontend_id: String,
    pub title: String,
    pub title_slug: String,
    /// HTML problem statement; null for paid-only questions.
    #[serde(default)]
    pub content: Option<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
    #[serde(default)]
    pub contributors: Vec<Contributor>,
    #[serde(default)]
    pub topic_tags: Vec<TopicTag>,
    #[serde(default)]
    pub code_snippets: Vec<CodeSnippet>,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub sample_test_case: Option<String>,
    /// JSON-encoded stats string as sent by the upstream; decoded via
    /// [`decode_stats`] and not re-serialized in raw form.
    #[serde(default, skip_serializing)]
    pub stats: Option<String>,
}

/// Decode the upstream `stats` field (a JSON object encoded as a string).
///
/// Decoding failure is contained to this one field: any absent, invalid,
/// or non-object value yields an empty map, never an error.
pub fn decode_stats(raw: Option<&str>) -> serde_json::Map<String, serde_json::Value> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}
