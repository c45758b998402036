use serde::{Deserialize, Serialize};

/// Request for the analysis operation: one photo as a data URI plus the
/// desired grid mode. `aspect` is accepted for API symmetry with the
/// generation request; the describe-then-template flow does not use it.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub image: String,
    pub mode: Option<String>,
    pub aspect: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub prompt: String,
    #[serde(rename = "characterDescription")]
    pub character_description: String,
}

/// Wire shape of the vision model's messages response; only the content
/// blocks matter here.
#[derive(Debug, Deserialize)]
pub struct VisionMessageResponse {
    #[serde(default)]
    pub content: Vec<VisionContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct VisionContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub text: String,
}

impl VisionMessageResponse {
    /// First textual block, if the model produced one.
    pub fn first_text(self) -> Option<String> {
        self.content
            .into_iter()
            .find(|block| block.block_type == "text")
            .map(|block| block.text)
    }
}
