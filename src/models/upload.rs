use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Wire shape of the hosting API's upload response. The service signals
/// failure through the `success` flag rather than the HTTP status, so both
/// fields default when absent and the caller inspects them.
#[derive(Debug, Default, Deserialize)]
pub struct ImgbbUploadResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<ImgbbUploadData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImgbbUploadData {
    #[serde(default)]
    pub url: String,
}
