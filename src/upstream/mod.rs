pub mod editing;
pub mod fetch;
pub mod hosting;
pub mod traits;
pub mod vision;

use std::sync::Arc;

use crate::{
    config::Config,
    error::{GridError, Result},
    logger,
    models::{
        download_filename, split_data_uri, AnalyzeRequest, AnalyzeResponse, DownloadedImage,
        GenerateRequest, GenerateResponse, UploadRequest, UploadResponse,
        DEFAULT_DOWNLOAD_CONTENT_TYPE,
    },
    prompts::{describe_instruction, grid_prompt, normalize_description, AspectRatio, GridMode},
};

pub use editing::EditingClient;
pub use fetch::FetchClient;
pub use hosting::HostingClient;
pub use traits::{ByteFetcher, ImageEditor, ImageHost, VisionModel};
pub use vision::VisionClient;

const PREVIEW_CHARS: usize = 200;

/// Facade over the upstream services behind the grid pipeline: a vision
/// model for descriptions, an editing model for generation, an image host
/// for source uploads, and a byte fetcher for the download proxy.
///
/// Construction never fails; each operation checks the credential it needs
/// when it runs, so one missing key only disables its own route.
#[derive(Clone)]
pub struct GridClient {
    vision: Arc<dyn VisionModel>,
    editor: Arc<dyn ImageEditor>,
    host: Arc<dyn ImageHost>,
    fetcher: Arc<dyn ByteFetcher>,
}

impl GridClient {
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::new();
        Self {
            vision: Arc::new(VisionClient::new(client.clone(), config.vision.clone())),
            editor: Arc::new(EditingClient::new(client.clone(), config.editing.clone())),
            host: Arc::new(HostingClient::new(client.clone(), config.hosting.clone())),
            fetcher: Arc::new(FetchClient::new(client)),
        }
    }

    pub fn new(
        vision: Arc<dyn VisionModel>,
        editor: Arc<dyn ImageEditor>,
        host: Arc<dyn ImageHost>,
        fetcher: Arc<dyn ByteFetcher>,
    ) -> Self {
        Self {
            vision,
            editor,
            host,
            fetcher,
        }
    }

    /// Describes the person in the submitted photo and interpolates the
    /// description into the grid prompt for the requested mode.
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
        if request.image.is_empty() {
            return Err(GridError::InvalidInput("Image required".into()));
        }

        let _timer = logger::timer("analyze");
        let mode = GridMode::parse(request.mode.as_deref().unwrap_or(""));
        let payload = split_data_uri(&request.image);
        log::info!(
            "Analyzing {} image in {} mode",
            payload.media_type,
            mode.as_str()
        );

        let raw = self
            .vision
            .describe_image(&payload.media_type, &payload.data, describe_instruction())
            .await?;
        let description = normalize_description(&raw);
        log::debug!("Character description: {}", preview(&description));

        let prompt = grid_prompt(mode, &description);
        Ok(AnalyzeResponse {
            prompt,
            character_description: description,
        })
    }

    /// Renders the 3x3 grid by sending the prompt and hosted source image
    /// to the editing model.
    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        if request.image.is_empty() || request.prompt.is_empty() {
            return Err(GridError::InvalidInput("Image and prompt required".into()));
        }

        let _timer = logger::timer("generate");
        let aspect = AspectRatio::parse(request.aspect.as_deref().unwrap_or(""));
        log::info!("Generating {} grid from {}", aspect.as_str(), request.image);

        let image_url = self
            .editor
            .edit_image(&request.prompt, &request.image, aspect.image_size())
            .await?;
        log::info!("Grid ready: {}", image_url);

        Ok(GenerateResponse {
            success: true,
            image_url,
        })
    }

    /// Hosts the submitted photo publicly so the editing model can fetch it.
    pub async fn upload(&self, request: UploadRequest) -> Result<UploadResponse> {
        if request.image.is_empty() {
            return Err(GridError::InvalidInput("Image required".into()));
        }

        let _timer = logger::timer("upload");
        let payload = split_data_uri(&request.image);
        let url = self.host.upload_image(&payload.data).await?;
        log::info!("Hosted source image at {}", url);

        Ok(UploadResponse { url })
    }

    /// Fetches a generated image and dresses it up as a browser download.
    pub async fn download(&self, url: &str) -> Result<DownloadedImage> {
        if url.is_empty() {
            return Err(GridError::InvalidInput("URL required".into()));
        }

        let _timer = logger::timer("download");
        log::info!("Proxying download of {}", url);
        let fetched = self.fetcher.fetch_bytes(url).await?;
        let content_type = fetched
            .content_type
            .unwrap_or_else(|| DEFAULT_DOWNLOAD_CONTENT_TYPE.to_string());

        Ok(DownloadedImage {
            content_type,
            filename: download_filename(),
            bytes: fetched.bytes,
        })
    }
}

/// Head of a description for log lines, truncated on a character boundary.
fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
