use crate::{
    error::{GridError, Result},
    models::FetchedBytes,
    upstream::traits::ByteFetcher,
};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header::CONTENT_TYPE, Client};

/// Plain GET client that streams a remote image body without buffering it.
#[derive(Clone)]
pub struct FetchClient {
    client: Client,
}

impl FetchClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ByteFetcher for FetchClient {
    async fn fetch_bytes(&self, url: &str) -> Result<FetchedBytes> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GridError::RequestError(format!("Fetch failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GridError::UpstreamError {
                status: status.as_u16(),
                detail: format!("Origin returned {}", status),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);

        let bytes = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| GridError::RequestError(e.to_string())));

        Ok(FetchedBytes {
            content_type,
            bytes: Box::pin(bytes),
        })
    }
}
