use crate::core::handler::{HandlerResponse, ReadingHandler};
use crate::domain::ports::{ConfigProvider, Generator};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// API Gateway / Function URL proxy event (payload v1 or v2).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub http: Option<HttpContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpContext {
    pub method: String,
}

impl GatewayRequest {
    pub fn method(&self) -> &str {
        self.http_method
            .as_deref()
            .or_else(|| {
                self.request_context
                    .as_ref()
                    .and_then(|ctx| ctx.http.as_ref())
                    .map(|http| http.method.as_str())
            })
            .unwrap_or_default()
    }

    pub fn body_bytes(&self) -> Vec<u8> {
        let Some(body) = &self.body else {
            return Vec::new();
        };

        if self.is_base64_encoded {
            // 解碼失敗時交給處理器當作格式錯誤
            STANDARD.decode(body).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to decode base64 request body");
                Vec::new()
            })
        } else {
            body.as_bytes().to_vec()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl From<HandlerResponse> for GatewayResponse {
    fn from(response: HandlerResponse) -> Self {
        Self {
            status_code: response.status,
            headers: response
                .headers
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            body: response.body.unwrap_or_default(),
            is_base64_encoded: false,
        }
    }
}

pub async fn handle_event<G, C>(
    handler: &ReadingHandler<G, C>,
    request: GatewayRequest,
) -> GatewayResponse
where
    G: Generator,
    C: ConfigProvider,
{
    handler
        .handle(request.method(), &request.body_bytes())
        .await
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_v1_and_v2_events() {
        let v1: GatewayRequest =
            serde_json::from_str(r#"{"httpMethod":"POST","body":"{}"}"#).unwrap();
        assert_eq!(v1.method(), "POST");

        let v2: GatewayRequest = serde_json::from_str(
            r#"{"requestContext":{"http":{"method":"OPTIONS"}},"isBase64Encoded":false}"#,
        )
        .unwrap();
        assert_eq!(v2.method(), "OPTIONS");

        assert_eq!(GatewayRequest::default().method(), "");
    }

    #[test]
    fn test_base64_body_is_decoded() {
        let request = GatewayRequest {
            http_method: Some("POST".to_string()),
            body: Some(STANDARD.encode(r#"{"concern":"x"}"#)),
            is_base64_encoded: true,
            ..Default::default()
        };
        assert_eq!(request.body_bytes(), br#"{"concern":"x"}"#.to_vec());
    }

    #[test]
    fn test_response_serializes_in_gateway_shape() {
        let response = GatewayResponse {
            status_code: 204,
            headers: HashMap::from([("Access-Control-Allow-Origin".to_string(), "*".to_string())]),
            body: String::new(),
            is_base64_encoded: false,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 204);
        assert_eq!(value["headers"]["Access-Control-Allow-Origin"], "*");
        assert_eq!(value["isBase64Encoded"], false);
    }
}
