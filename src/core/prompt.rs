use crate::domain::model::ReadingRequest;
use crate::utils::error::Result;

const RESPONSE_SHAPE: &str =
    r#"{"intro":"..","readings":["과거 해석","현재 해석","미래 해석"],"conclusion":".."}"#;

/// Render the reading prompt. The concern is interpolated as-is.
pub fn build_prompt(request: &ReadingRequest) -> Result<String> {
    let spread = request.spread()?;

    let cards = spread
        .iter()
        .enumerate()
        .map(|(i, (position, card))| {
            format!(
                "{}. {}: {} ({})",
                i + 1,
                position.label(),
                card.name,
                card.orientation().label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        "타로 마스터로서 고민(\"{}\")과 세 장의 카드를 분석해 JSON으로 답하세요. 반드시 한국어로 답변하세요.\n\
         카드:\n{}\n\
         다른 설명 없이 다음 형식의 JSON만 출력하세요: {}",
        request.concern, cards, RESPONSE_SHAPE
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CardDraw;

    fn request(cards: &[(&str, Option<bool>)]) -> ReadingRequest {
        ReadingRequest {
            concern: "career change".to_string(),
            cards: cards
                .iter()
                .map(|(name, is_reversed)| CardDraw {
                    name: name.to_string(),
                    is_reversed: *is_reversed,
                })
                .collect(),
        }
    }

    #[test]
    fn test_prompt_embeds_concern_positions_and_orientation() {
        let prompt = build_prompt(&request(&[
            ("The Fool", Some(false)),
            ("The Tower", Some(true)),
            ("The Sun", None),
        ]))
        .unwrap();

        assert!(prompt.contains("\"career change\""));
        assert!(prompt.contains("1. 과거: The Fool (정방향)"));
        assert!(prompt.contains("2. 현재: The Tower (역방향)"));
        assert!(prompt.contains("3. 미래: The Sun (정방향)"));
        assert!(prompt.contains(r#""readings""#));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let req = request(&[("A", None), ("B", None), ("C", Some(true))]);
        assert_eq!(build_prompt(&req).unwrap(), build_prompt(&req).unwrap());
    }

    #[test]
    fn test_prompt_rejects_short_spread() {
        assert!(build_prompt(&request(&[("A", None)])).is_err());
    }
}
