//! GraphQL query texts sent to the upstream endpoint.
//!
//! The aliases (`frontendQuestionId`, `paidOnly`) match the field names
//! the view models deserialize, so the query text and model shapes must
//! change together.

/// Query for the active daily challenge (no variables).
pub const DAILY_QUESTION: &str = r#"
query questionOfToday {
    activeDailyCodingChallengeQuestion {
        date
        userStatus
        link
        question {
            acRate
            difficulty
            freqBar
            frontendQuestionId: questionFrontendId
            isFavor
            paidOnly: isPaidOnly
            status
            title
            titleSlug
            hasVideoSolution
            hasSolution
            topicTags {
                name
                id
                slug
            }
        }
    }
}
"#;

/// Query for one calendar month of daily challenges.
/// Variables: `$year: Int!`, `$month: Int!`.
pub const RECENT_QUESTIONS: &str = r#"
query recentDailyQuestions($year: Int!, $month: Int!) {
    dailyCodingChallengeV2(year: $year, month: $month) {
        challenges {
            date
            userStatus
            link
            question {
                acRate
                difficulty
                freqBar
                frontendQuestionId: questionFrontendId
                isFavor
                paidOnly: isPaidOnly
                status
                title
                titleSlug
                hasVideoSolution
                hasSolution
                topicTags {
                    name
                    id
                    slug
                }
            }
        }
    }
}
"#;

/// Query for a single question's full payload.
/// Variables: `$titleSlug: String!`.
pub const QUESTION_DETAIL: &str = r#"
query questionContent($titleSlug: String!) {
    question(titleSlug: $titleSlug) {
        questionId
        questionFrontendId
        title
        titleSlug
        content
        difficulty
        likes
        dislikes
        similarQuestions
        contributors {
            username
            profileUrl
            avatarUrl
        }
        topicTags {
            name
            slug
            translatedName
        }
        codeSnippets {
            lang
            langSlug
            code
        }
        stats
        hints
        status
        sampleTestCase
        metaData
    }
}
"#;
