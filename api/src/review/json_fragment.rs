//! Best-effort extraction of the admin JSON object from free-form model output.
//!
//! The span is taken from the first `{` to the last `}` in the whole text.
//! Nesting is not balanced, so two separate objects in one reply end up in a
//! single span and fail to parse.

use serde_json::{Map, Value};
use thiserror::Error;

/// Placeholder stored when a field cannot be extracted.
pub const PLACEHOLDER: &str = "N/A";

#[derive(Debug, Error)]
pub enum ExtractError {
    /// No `{ ... }` span in the text.
    #[error("no JSON object found in model output")]
    NotFound,

    /// A span was found but is not a valid JSON object.
    #[error("malformed JSON object in model output: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Locates the `first '{' ..= last '}'` span and parses it strictly as a JSON object.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, ExtractError> {
    let start = text.find('{').ok_or(ExtractError::NotFound)?;
    let end = text.rfind('}').ok_or(ExtractError::NotFound)?;
    if end < start {
        return Err(ExtractError::NotFound);
    }
    let candidate = &text[start..=end];
    Ok(serde_json::from_str::<Map<String, Value>>(candidate)?)
}

/// Admin-only analysis of a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminInsight {
    pub summary: String,
    pub action: String,
}

impl AdminInsight {
    /// Both fields set to [`PLACEHOLDER`].
    pub fn placeholder() -> Self {
        Self {
            summary: PLACEHOLDER.to_string(),
            action: PLACEHOLDER.to_string(),
        }
    }

    /// Builds the insight from a parsed object. Missing or `null` keys fall
    /// back to [`PLACEHOLDER`] individually; non-string values keep their
    /// compact JSON text.
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            summary: field_text(obj, "summary"),
            action: field_text(obj, "action"),
        }
    }

    /// Extracts and maps in one step. Never fails: extraction problems
    /// degrade to [`AdminInsight::placeholder`].
    pub fn from_model_output(text: &str) -> Self {
        match extract_json_object(text) {
            Ok(obj) => Self::from_object(&obj),
            Err(err) => {
                tracing::warn!(error = %err, output_len = text.len(), "admin insight unavailable, using placeholders");
                Self::placeholder()
            }
        }
    }
}

fn field_text(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_object_parses() {
        let obj =
            extract_json_object(r#"{"summary":"Positive feedback","action":"None needed"}"#)
                .unwrap();
        assert_eq!(obj["summary"], "Positive feedback");
        assert_eq!(obj["action"], "None needed");
    }

    #[test]
    fn surrounding_prose_and_fences_are_ignored() {
        let text = "Sure! Here you go:\n```json\n{\"summary\": \"Late order\", \"action\": \"Refund\"}\n```\nHope that helps.";
        let insight = AdminInsight::from_model_output(text);
        assert_eq!(insight.summary, "Late order");
        assert_eq!(insight.action, "Refund");
    }

    #[test]
    fn nested_objects_inside_one_span_parse() {
        let obj = extract_json_object(r#"x {"summary": "a", "meta": {"k": 1}} y"#).unwrap();
        assert_eq!(obj["meta"]["k"], 1);
    }

    #[test]
    fn no_braces_is_not_found() {
        assert!(matches!(
            extract_json_object("I cannot help with that."),
            Err(ExtractError::NotFound)
        ));
    }

    #[test]
    fn closing_before_opening_is_not_found() {
        assert!(matches!(
            extract_json_object("} nothing here {"),
            Err(ExtractError::NotFound)
        ));
    }

    #[test]
    fn two_objects_make_one_unparseable_span() {
        let text = r#"{"summary": "a", "action": "b"} and also {"summary": "c"}"#;
        assert!(matches!(
            extract_json_object(text),
            Err(ExtractError::Malformed(_))
        ));
        assert_eq!(AdminInsight::from_model_output(text), AdminInsight::placeholder());
    }

    #[test]
    fn malformed_span_degrades_to_placeholders() {
        let insight = AdminInsight::from_model_output("{summary: 'not json'}");
        assert_eq!(insight, AdminInsight::placeholder());
    }

    #[test]
    fn missing_or_null_keys_default_individually() {
        let insight = AdminInsight::from_model_output(r#"{"summary": "Only summary", "action": null}"#);
        assert_eq!(insight.summary, "Only summary");
        assert_eq!(insight.action, PLACEHOLDER);

        let insight = AdminInsight::from_model_output(r#"{"action": "Call back"}"#);
        assert_eq!(insight.summary, PLACEHOLDER);
        assert_eq!(insight.action, "Call back");
    }

    #[test]
    fn non_string_values_keep_their_json_text() {
        let insight =
            AdminInsight::from_model_output(r#"{"summary": 42, "action": ["refund", "apologize"]}"#);
        assert_eq!(insight.summary, "42");
        assert_eq!(insight.action, r#"["refund","apologize"]"#);
    }

    #[test]
    fn empty_text_degrades_to_placeholders() {
        assert_eq!(AdminInsight::from_model_output(""), AdminInsight::placeholder());
    }
}
