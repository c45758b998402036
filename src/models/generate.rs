use serde::{Deserialize, Serialize};

/// Request for the generation operation: a hosted source image URL, the
/// grid prompt, and the desired aspect ratio.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub prompt: String,
    pub aspect: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Wire shape of the editing API's synchronous response.
#[derive(Debug, Deserialize)]
pub struct FluxEditResponse {
    #[serde(default)]
    pub images: Vec<FluxEditImage>,
}

#[derive(Debug, Deserialize)]
pub struct FluxEditImage {
    pub url: String,
}
