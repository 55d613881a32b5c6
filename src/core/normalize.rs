use crate::domain::model::Reading;
use crate::utils::error::Result;

/// Remove a surrounding Markdown code fence (with optional `json` tag) and whitespace.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        text = rest
            .strip_prefix("json")
            .or_else(|| rest.strip_prefix("JSON"))
            .unwrap_or(rest);
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

/// Parse model output into a `Reading`.
/// Tries the stripped text first, then the outermost `{...}` span.
pub fn parse_reading(raw: &str) -> Result<Reading> {
    let text = strip_code_fences(raw);

    match serde_json::from_str::<Reading>(text) {
        Ok(reading) => Ok(reading),
        Err(e) => match extract_json_object(text) {
            Some(inner) if inner != text => Ok(serde_json::from_str(inner)?),
            _ => Err(e.into()),
        },
    }
}

/// Always yields a well-formed reading; model text that does not fit the shape
/// is replaced by the placeholder.
pub fn normalize_reading(raw: &str) -> Reading {
    match parse_reading(raw) {
        Ok(reading) => reading,
        Err(e) => {
            tracing::warn!(error = %e, "Model output did not match reading shape, using placeholder");
            Reading::placeholder()
        }
    }
}

fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"intro":"...","readings":["a","b","c"],"conclusion":"d"}"#;

    #[test]
    fn test_strip_fenced_json() {
        let fenced = format!("```json\n{}\n```", BODY);
        assert_eq!(strip_code_fences(&fenced), BODY);

        let bare_fence = format!("```\n{}\n```\n", BODY);
        assert_eq!(strip_code_fences(&bare_fence), BODY);
    }

    #[test]
    fn test_strip_is_noop_on_plain_json() {
        assert_eq!(strip_code_fences(BODY), BODY);
        assert_eq!(strip_code_fences(&format!("  {}\n", BODY)), BODY);
    }

    #[test]
    fn test_fenced_and_plain_parse_to_same_reading() {
        let fenced = parse_reading(&format!("```json\n{}\n```", BODY)).unwrap();
        let plain = parse_reading(BODY).unwrap();
        assert_eq!(fenced, plain);
        assert_eq!(serde_json::to_string(&fenced).unwrap(), BODY);
    }

    #[test]
    fn test_parse_reading_with_surrounding_prose() {
        let chatty = format!("다음은 해석입니다:\n{}\n행운을 빕니다.", BODY);
        let reading = parse_reading(&chatty).unwrap();
        assert_eq!(reading.conclusion, "d");
    }

    #[test]
    fn test_non_conforming_text_becomes_placeholder() {
        assert_eq!(normalize_reading("I cannot do that."), Reading::placeholder());
        assert_eq!(
            normalize_reading(r#"{"intro":"x","readings":["only one"],"conclusion":"y"}"#),
            Reading::placeholder()
        );
    }
}
