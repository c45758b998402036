use crate::{error::Result, models::FetchedBytes};
use async_trait::async_trait;

/// A vision-capable model that can describe an image in prose.
#[async_trait]
pub trait VisionModel: Send + Sync {
    async fn describe_image(
        &self,
        media_type: &str,
        image_base64: &str,
        instruction: &str,
    ) -> Result<String>;
}

/// An image-to-image editing model driven by a text prompt.
#[async_trait]
pub trait ImageEditor: Send + Sync {
    async fn edit_image(&self, prompt: &str, image_url: &str, image_size: &str) -> Result<String>;
}

/// A hosting service that turns raw image bytes into a public URL.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload_image(&self, image_base64: &str) -> Result<String>;
}

/// Anything that can stream the bytes behind a URL.
#[async_trait]
pub trait ByteFetcher: Send + Sync {
    async fn fetch_bytes(&self, url: &str) -> Result<FetchedBytes>;
}
