//! Normalizer for the upstream GraphQL envelope.
//!
//! Classifies a [`RawResponse`] into either the substructure a gateway
//! operation asked for or one [`GatewayError`] variant. The decision
//! procedure is evaluated strictly in order: HTTP status, `errors`
//! list, `data` presence, addressed field presence.

use serde_json::Value;

use crate::client::RawResponse;
use crate::error::GatewayError;

/// Extract the field addressed by `path` (rooted at the body, e.g.
/// `["data", "question"]`) from a raw upstream response.
///
/// A non-empty `errors` list takes precedence over any `data` that may
/// also be present. An absent, null, or empty addressed field yields
/// [`GatewayError::EmptyField`]; whether that is fatal is the caller's
/// policy decision.
pub fn normalize(raw: RawResponse, path: &[&str]) -> Result<Value, GatewayError> {
    if raw.status != 200 {
        return Err(GatewayError::UpstreamStatus(raw.status));
    }

    if let Some(errors) = raw.body.get("errors").and_then(Value::as_array) {
        if !errors.is_empty() {
            return Err(GatewayError::UpstreamGraphQL(
                Value::Array(errors.clone()).to_string(),
            ));
        }
    }

    if is_empty(raw.body.get("data")) {
        return Err(GatewayError::NoData);
    }

    let mut value = &raw.body;
    for key in path {
        match value.get(key) {
            Some(inner) => value = inner,
            None => return Err(GatewayError::EmptyField(path.join("."))),
        }
    }

    if is_empty(Some(value)) {
        return Err(GatewayError::EmptyField(path.join(".")));
    }

    Ok(value.clone())
}

/// Absent, null, `{}`, and `[]` all count as "nothing to say".
fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok_response(body: Value) -> RawResponse {
        RawResponse { status: 200, body }
    }

    #[test]
    fn non_200_status_wins_over_everything() {
        for status in [403, 429, 500, 503] {
            let raw = RawResponse {
                status,
                body: Value::Null,
            };
            let err = normalize(raw, &["data", "question"]).unwrap_err();
            assert!(matches!(err, GatewayError::UpstreamStatus(s) if s == status));
        }
    }

    #[test]
    fn graphql_errors_take_precedence_over_present_data() {
        let raw = ok_response(json!({
            "errors": [{"message": "rate limited"}],
            "data": {"question": {"title": "present anyway"}}
        }));
        let err = normalize(raw, &["data", "question"]).unwrap_err();
        match err {
            GatewayError::UpstreamGraphQL(details) => {
                assert!(details.contains("rate limited"), "got: {details}");
            }
            other => panic!("expected UpstreamGraphQL, got {other:?}"),
        }
    }

    #[test]
    fn empty_errors_list_is_not_an_error() {
        let raw = ok_response(json!({
            "errors": [],
            "data": {"question": {"title": "t"}}
        }));
        assert!(normalize(raw, &["data", "question"]).is_ok());
    }

    #[test]
    fn missing_or_empty_data_is_no_data() {
        for body in [json!({}), json!({ "data": null }), json!({ "data": {} })] {
            let err = normalize(ok_response(body), &["data", "question"]).unwrap_err();
            assert!(matches!(err, GatewayError::NoData));
        }
    }

    #[test]
    fn absent_addressed_field_is_empty_field() {
        let raw = ok_response(json!({ "data": {"somethingElse": 1} }));
        let err = normalize(raw, &["data", "question"]).unwrap_err();
        assert!(matches!(err, GatewayError::EmptyField(p) if p == "data.question"));
    }

    #[test]
    fn null_empty_object_and_empty_array_fields_are_empty() {
        for field in [json!(null), json!({}), json!([])] {
            let raw = ok_response(json!({ "data": {"question": field} }));
            let err = normalize(raw, &["data", "question"]).unwrap_err();
            assert!(matches!(err, GatewayError::EmptyField(_)));
        }
    }

    #[test]
    fn nested_path_extracts_the_addressed_value() {
        let raw = ok_response(json!({
            "data": {"dailyCodingChallengeV2": {"challenges": [{"date": "2025-09-05"}]}}
        }));
        let value = normalize(raw, &["data", "dailyCodingChallengeV2", "challenges"]).unwrap();
        assert_eq!(value, json!([{"date": "2025-09-05"}]));
    }
}
