use crate::{
    config::HostingConfig,
    error::{GridError, Result},
    models::ImgbbUploadResponse,
    upstream::traits::ImageHost,
};
use async_trait::async_trait;
use reqwest::{multipart::Form, Client};
use serde_json::Value;

/// Client for the imgbb hosting API. The editing API only accepts source
/// images by URL, so uploads here turn browser payloads into public links.
#[derive(Clone)]
pub struct HostingClient {
    client: Client,
    config: HostingConfig,
}

impl HostingClient {
    pub fn new(client: Client, config: HostingConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ImageHost for HostingClient {
    async fn upload_image(&self, image_base64: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| GridError::ConfigError("IMGBB_API_KEY is not configured".into()))?;

        let form = Form::new()
            .text("key", api_key.to_string())
            .text("image", image_base64.to_string());

        log::info!("Uploading image to host ({} base64 chars)", image_base64.len());

        let response = self
            .client
            .post(format!("{}/1/upload", self.config.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| GridError::RequestError(format!("Hosting request failed: {}", e)))?;

        // The host signals failure through its success flag, not the HTTP
        // status, and the raw payload is worth keeping for diagnostics.
        let payload: Value = response
            .json()
            .await
            .map_err(|e| GridError::SerializationError(e.to_string()))?;
        let upload: ImgbbUploadResponse =
            serde_json::from_value(payload.clone()).unwrap_or_default();

        if !upload.success {
            log::error!("Host rejected upload: {}", payload);
            return Err(GridError::UploadRejected { details: payload });
        }

        let url = upload.data.map(|data| data.url).unwrap_or_default();
        if url.is_empty() {
            return Err(GridError::EmptyResponse("Host returned no URL".into()));
        }
        Ok(url)
    }
}
