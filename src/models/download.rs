use std::{fmt, pin::Pin};

use bytes::Bytes;
use chrono::Utc;
use futures::Stream;
use serde::Deserialize;

use crate::error::Result;

/// Content type assumed when the origin does not declare one.
pub const DEFAULT_DOWNLOAD_CONTENT_TYPE: &str = "image/png";

#[derive(Debug, Clone, Deserialize)]
pub struct DownloadQuery {
    #[serde(default)]
    pub url: String,
}

/// Body bytes streamed straight through from the origin.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// Raw fetch result before download semantics are applied.
pub struct FetchedBytes {
    pub content_type: Option<String>,
    pub bytes: ByteStream,
}

// The stream has no Debug form, so both impls are manual and elide it.
impl fmt::Debug for FetchedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchedBytes")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// A fetched image dressed up as an attachment.
pub struct DownloadedImage {
    pub content_type: String,
    pub filename: String,
    pub bytes: ByteStream,
}

impl fmt::Debug for DownloadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadedImage")
            .field("content_type", &self.content_type)
            .field("filename", &self.filename)
            .finish_non_exhaustive()
    }
}

/// Builds the suggested save name for a downloaded grid image.
pub fn download_filename() -> String {
    format!("grid_{}.png", Utc::now().timestamp_millis())
}
