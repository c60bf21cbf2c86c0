//! Pulling a JSON object out of free-form model text.
//!
//! Models wrap JSON in prose or Markdown fences often enough that a strict
//! parse of the whole reply is not workable.

use serde_json::Value;

use crate::error::BedrockError;

/// Parse the outermost JSON object in a model reply.
///
/// Takes everything from the first `{` to the last `}`, so surrounding
/// prose and ```` ```json ```` fences are ignored.
pub fn extract_json_object(text: &str) -> Result<Value, BedrockError> {
    let start = text.find('{').ok_or(BedrockError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(BedrockError::NoJsonObject)?;
    if end < start {
        return Err(BedrockError::NoJsonObject);
    }
    let candidate = &text[start..=end];
    let value: Value = serde_json::from_str(candidate).map_err(|e| {
        BedrockError::ResponseParse(format!("invalid JSON in model reply: {e}. Reply: {text}"))
    })?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(BedrockError::NoJsonObject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_object() {
        let value = extract_json_object(r#"{"riskLevel":"Low"}"#).unwrap();
        assert_eq!(value["riskLevel"], "Low");
    }

    #[test]
    fn fenced_object_with_prose() {
        let text = "Here is the assessment:\n```json\n{\"riskLevel\": \"High\", \"riskPercentage\": 80}\n```\nLet me know.";
        let value = extract_json_object(text).unwrap();
        assert_eq!(value["riskPercentage"], 80);
    }

    #[test]
    fn nested_objects_are_kept_whole() {
        let text = r#"{"a": {"b": 1}, "c": [ {"d": 2} ]}"#;
        let value = extract_json_object(text).unwrap();
        assert_eq!(value["c"][0]["d"], 2);
    }

    #[test]
    fn no_braces() {
        assert!(matches!(
            extract_json_object("I cannot help with that."),
            Err(BedrockError::NoJsonObject)
        ));
        assert!(matches!(extract_json_object("} {"), Err(BedrockError::NoJsonObject)));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            extract_json_object("{riskLevel: Low}"),
            Err(BedrockError::ResponseParse(_))
        ));
    }
}
