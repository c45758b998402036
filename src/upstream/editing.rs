use crate::{
    config::EditingConfig,
    error::{GridError, Result},
    models::FluxEditResponse,
    upstream::traits::ImageEditor,
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const EDIT_ENDPOINT: &str = "fal-ai/flux-2/edit";

/// Client for the fal.ai image-editing API that renders the 3x3 grid.
#[derive(Clone)]
pub struct EditingClient {
    client: Client,
    config: EditingConfig,
}

impl EditingClient {
    pub fn new(client: Client, config: EditingConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ImageEditor for EditingClient {
    async fn edit_image(&self, prompt: &str, image_url: &str, image_size: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| GridError::ConfigError("FAL_KEY is not configured".into()))?;

        let payload = json!({
            "prompt": prompt,
            "image_urls": [image_url],
            "guidance_scale": self.config.guidance_scale,
            "num_inference_steps": self.config.inference_steps,
            "image_size": image_size,
            "num_images": 1,
            "enable_safety_checker": false
        });

        log::info!("Requesting grid edit at size: {}", image_size);

        let response = self
            .client
            .post(format!("{}/{}", self.config.base_url, EDIT_ENDPOINT))
            .header("Authorization", format!("Key {}", api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| GridError::RequestError(format!("Editing request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            log::error!("Editing API returned {}: {}", status, detail);
            return Err(GridError::UpstreamError {
                status: status.as_u16(),
                detail,
            });
        }

        let edit: FluxEditResponse = response
            .json()
            .await
            .map_err(|e| GridError::SerializationError(e.to_string()))?;

        edit.images
            .into_iter()
            .next()
            .map(|image| image.url)
            .ok_or_else(|| GridError::EmptyResponse("Editing API returned no images".into()))
    }
}
