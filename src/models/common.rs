/// Media type assumed when the data-URI prefix is missing or unparseable.
pub const FALLBACK_MEDIA_TYPE: &str = "image/jpeg";

/// Raster types the vision model accepts; anything else falls back.
const SUPPORTED_MEDIA_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// A base64 image payload with its resolved media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub media_type: String,
    pub data: String,
}

/// Splits a `data:<type>;base64,<payload>` URI into media type and bare
/// payload. This never fails: inputs without a recognizable prefix are
/// treated as an already-bare payload, and media types outside the
/// supported raster set fall back to [`FALLBACK_MEDIA_TYPE`].
pub fn split_data_uri(image: &str) -> ImagePayload {
    if let Some(rest) = image.strip_prefix("data:") {
        if let Some((head, payload)) = rest.split_once(";base64,") {
            let media_type = if SUPPORTED_MEDIA_TYPES.contains(&head) {
                head.to_string()
            } else {
                FALLBACK_MEDIA_TYPE.to_string()
            };
            return ImagePayload {
                media_type,
                data: payload.to_string(),
            };
        }
    }

    ImagePayload {
        media_type: FALLBACK_MEDIA_TYPE.to_string(),
        data: image.to_string(),
    }
}
