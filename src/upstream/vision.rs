use crate::{
    config::VisionConfig,
    error::{GridError, Result},
    models::VisionMessageResponse,
    prompts::DESCRIPTION_MAX_TOKENS,
    upstream::traits::VisionModel,
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the Anthropic Messages API, used to describe source photos.
#[derive(Clone)]
pub struct VisionClient {
    client: Client,
    config: VisionConfig,
}

impl VisionClient {
    pub fn new(client: Client, config: VisionConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl VisionModel for VisionClient {
    async fn describe_image(
        &self,
        media_type: &str,
        image_base64: &str,
        instruction: &str,
    ) -> Result<String> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            GridError::ConfigError("ANTHROPIC_API_KEY is not configured".into())
        })?;

        let payload = json!({
            "model": self.config.model,
            "max_tokens": DESCRIPTION_MAX_TOKENS,
            "messages": [{
                "role": "user",
                "content": [
                    {
                        "type": "image",
                        "source": {
                            "type": "base64",
                            "media_type": media_type,
                            "data": image_base64
                        }
                    },
                    {
                        "type": "text",
                        "text": instruction
                    }
                ]
            }]
        });

        log::info!("Describing image with model: {}", self.config.model);

        let response = self
            .client
            .post(format!("{}/v1/messages", self.config.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| GridError::RequestError(format!("Vision request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            log::error!("Vision API returned {}: {}", status, detail);
            return Err(GridError::UpstreamError {
                status: status.as_u16(),
                detail,
            });
        }

        let message: VisionMessageResponse = response
            .json()
            .await
            .map_err(|e| GridError::SerializationError(e.to_string()))?;

        message
            .first_text()
            .ok_or_else(|| GridError::EmptyResponse("Vision model returned no text".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn config_for(server: &MockServer) -> VisionConfig {
        VisionConfig::new()
            .with_api_key("test-key")
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn describes_an_image() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-key"))
            .and(header("anthropic-version", ANTHROPIC_VERSION))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "text", "text": "A man in a red jacket."}]
            })))
            .mount(&server)
            .await;

        let vision = VisionClient::new(Client::new(), config_for(&server));
        let description = vision
            .describe_image("image/jpeg", "AAAA", "Describe this person.")
            .await
            .unwrap();
        assert_eq!(description, "A man in a red jacket.");

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["max_tokens"], 4000);
        let blocks = body["messages"][0]["content"].as_array().unwrap();
        assert_eq!(blocks[0]["source"]["media_type"], "image/jpeg");
        assert_eq!(blocks[0]["source"]["data"], "AAAA");
        assert_eq!(blocks[1]["text"], "Describe this person.");
    }

    #[tokio::test]
    async fn empty_content_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": []})))
            .mount(&server)
            .await;

        let vision = VisionClient::new(Client::new(), config_for(&server));
        let err = vision
            .describe_image("image/png", "AAAA", "Describe this person.")
            .await
            .unwrap_err();
        assert!(matches!(err, GridError::EmptyResponse(_)));
    }

    #[tokio::test]
    async fn upstream_failures_carry_the_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let vision = VisionClient::new(Client::new(), config_for(&server));
        let err = vision
            .describe_image("image/png", "AAAA", "Describe this person.")
            .await
            .unwrap_err();
        match err {
            GridError::UpstreamError { status, detail } => {
                assert_eq!(status, 429);
                assert_eq!(detail, "rate limited");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let server = MockServer::start().await;
        let vision = VisionClient::new(
            Client::new(),
            VisionConfig::new().with_base_url(server.uri()),
        );
        let err = vision
            .describe_image("image/png", "AAAA", "Describe this person.")
            .await
            .unwrap_err();
        assert!(matches!(err, GridError::ConfigError(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
