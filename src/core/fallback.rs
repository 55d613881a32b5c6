use crate::domain::model::Reading;

/// Upper bound on the diagnostic fragment embedded in a fallback conclusion.
pub const MAX_DIAGNOSTIC_CHARS: usize = 120;

const FALLBACK_INTRO: &str = "타로 마스터가 새로운 기운을 느끼고 있습니다.";
const FALLBACK_READINGS: [&str; 3] = [
    "과거의 흐름이 당신에게 지혜를 주고 있습니다.",
    "현재는 명확한 판단이 필요한 시기입니다.",
    "미래는 당신의 결단에 따라 변화할 것입니다.",
];
const PLACEHOLDER_CONCLUSION: &str =
    "카드의 메시지가 아직 흐릿합니다. 마음을 가다듬고 잠시 후 다시 카드를 펼쳐 보세요.";

impl Reading {
    /// Fixed reading served when no candidate produced a response.
    pub fn fallback(diagnostic: &str) -> Self {
        Self {
            conclusion: format!("[진단: {}]", truncate_diagnostic(diagnostic)),
            ..Self::placeholder()
        }
    }

    /// Fixed reading served when the model answered outside the reading shape.
    pub fn placeholder() -> Self {
        Self {
            intro: FALLBACK_INTRO.to_string(),
            readings: FALLBACK_READINGS.map(str::to_string),
            conclusion: PLACEHOLDER_CONCLUSION.to_string(),
        }
    }
}

pub fn truncate_diagnostic(diagnostic: &str) -> String {
    let diagnostic = diagnostic.trim();
    if diagnostic.is_empty() {
        return "알 수 없는 오류".to_string();
    }

    match diagnostic.char_indices().nth(MAX_DIAGNOSTIC_CHARS) {
        Some((cut, _)) => format!("{}…", &diagnostic[..cut]),
        None => diagnostic.to_string(),
    }
}
