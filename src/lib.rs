//! Turns one photo of a person into a 3x3 character grid: a vision model
//! describes the subject, the description is folded into a mode-specific
//! grid prompt, and an image-editing model renders the grid from the hosted
//! source photo.
//!
//! The HTTP surface (feature `server`, on by default) exposes the pipeline
//! as four routes plus a health check; the library layer works standalone:
//!
//! ```no_run
//! use ninegrid::{AnalyzeRequest, Config, GridClient};
//!
//! # async fn run() -> ninegrid::Result<()> {
//! let client = GridClient::from_config(&Config::from_env());
//! let analysis = client
//!     .analyze(AnalyzeRequest {
//!         image: "data:image/jpeg;base64,...".into(),
//!         mode: Some("angles".into()),
//!         aspect: None,
//!     })
//!     .await?;
//! println!("{}", analysis.prompt);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod prompts;
#[cfg(feature = "server")]
pub mod server;
pub mod upstream;

pub use config::{Config, EditingConfig, HostingConfig, VisionConfig};
pub use error::{GridError, Result};
pub use logger::{LogLevel, LoggerConfig, Timer};
pub use models::{
    AnalyzeRequest, AnalyzeResponse, DownloadQuery, DownloadedImage, GenerateRequest,
    GenerateResponse, UploadRequest, UploadResponse,
};
pub use prompts::{grid_prompt, normalize_description, AspectRatio, GridMode};
pub use upstream::{
    ByteFetcher, EditingClient, FetchClient, GridClient, HostingClient, ImageEditor, ImageHost,
    VisionClient, VisionModel,
};
