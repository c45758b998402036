pub mod analyze;
pub mod common;
pub mod download;
pub mod generate;
pub mod upload;

pub use analyze::{AnalyzeRequest, AnalyzeResponse, VisionContentBlock, VisionMessageResponse};
pub use common::{split_data_uri, ImagePayload, FALLBACK_MEDIA_TYPE};
pub use download::{
    download_filename, ByteStream, DownloadQuery, DownloadedImage, FetchedBytes,
    DEFAULT_DOWNLOAD_CONTENT_TYPE,
};
pub use generate::{FluxEditImage, FluxEditResponse, GenerateRequest, GenerateResponse};
pub use upload::{ImgbbUploadData, ImgbbUploadResponse, UploadRequest, UploadResponse};
