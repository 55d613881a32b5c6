// Upstream error classification: maps raw upstream error text to an actionable hint.

/// Kind of upstream failure recognised from its message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    QuotaExceeded,
    RegionRestricted,
    InvalidCredential,
    ModelUnavailable,
}

struct Rule {
    needle: &'static str,
    kind: FailureKind,
    hint: &'static str,
}

// 依序比對，先符合者優先
const RULES: &[Rule] = &[
    Rule {
        needle: "limit: 0",
        kind: FailureKind::QuotaExceeded,
        hint: "무료 할당량이 0입니다. 결제 설정 또는 다른 프로젝트의 키를 확인하세요.",
    },
    Rule {
        needle: "quota",
        kind: FailureKind::QuotaExceeded,
        hint: "할당량 초과: 잠시 후 다시 시도하거나 요금제를 확인하세요.",
    },
    Rule {
        needle: "resource_exhausted",
        kind: FailureKind::QuotaExceeded,
        hint: "할당량 초과: 잠시 후 다시 시도하거나 요금제를 확인하세요.",
    },
    Rule {
        needle: "location is not supported",
        kind: FailureKind::RegionRestricted,
        hint: "지역 제한: 현재 서버 위치에서는 이 API를 사용할 수 없습니다.",
    },
    Rule {
        needle: "failed_precondition",
        kind: FailureKind::RegionRestricted,
        hint: "지역 제한: 현재 서버 위치에서는 이 API를 사용할 수 없습니다.",
    },
    Rule {
        needle: "api key not valid",
        kind: FailureKind::InvalidCredential,
        hint: "API 키가 유효하지 않습니다. 키를 다시 발급받으세요.",
    },
    Rule {
        needle: "is not found for api version",
        kind: FailureKind::ModelUnavailable,
        hint: "이 API 버전에서 지원하지 않는 모델입니다.",
    },
];

/// Case-insensitive lookup of the first matching rule.
pub fn classify_upstream_message(message: &str) -> Option<(FailureKind, &'static str)> {
    let lowered = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| lowered.contains(rule.needle))
        .map(|rule| (rule.kind, rule.hint))
}

/// Render a failure for the diagnostic trail: the hint when one applies, then the raw text.
pub fn describe_failure(message: &str) -> String {
    match classify_upstream_message(message) {
        Some((_, hint)) => format!("{} ({})", hint, message),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_quota_messages() {
        let (kind, _) =
            classify_upstream_message("You exceeded your current quota, please check your plan")
                .unwrap();
        assert_eq!(kind, FailureKind::QuotaExceeded);

        let (kind, hint) = classify_upstream_message(
            "Quota exceeded for metric: generate_content_free_tier_requests, limit: 0",
        )
        .unwrap();
        assert_eq!(kind, FailureKind::QuotaExceeded);
        assert!(hint.contains("0"));

        assert!(classify_upstream_message("RESOURCE_EXHAUSTED").is_some());
    }

    #[test]
    fn test_classify_region_restriction() {
        let (kind, _) =
            classify_upstream_message("User location is not supported for the API use.").unwrap();
        assert_eq!(kind, FailureKind::RegionRestricted);
    }

    #[test]
    fn test_classify_unknown_message() {
        assert!(classify_upstream_message("Internal error encountered.").is_none());
        assert_eq!(
            describe_failure("Internal error encountered."),
            "Internal error encountered."
        );
    }

    #[test]
    fn test_describe_failure_keeps_raw_text() {
        let described = describe_failure("API key not valid. Please pass a valid API key.");
        assert!(described.starts_with("API 키가 유효하지 않습니다"));
        assert!(described.contains("API key not valid"));
    }
}
