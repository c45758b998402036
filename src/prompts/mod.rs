pub mod normalize;
pub mod templates;

pub use normalize::normalize_description;
pub use templates::{describe_instruction, grid_prompt, DESCRIPTION_MAX_TOKENS};

/// Panel layout requested for the 3x3 grid.
///
/// Parsing is total: anything that is not a known mode falls back to
/// [`GridMode::Freeform`], so a request can never fail on this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMode {
    /// 9 camera angles of one static scene, same person in every panel.
    Angles,
    /// 9 clickbait thumbnail compositions, each with a different angle,
    /// pose and expression.
    Thumbnail,
    /// 9 sequential narrative beats; time progresses across panels.
    Storyboard,
    /// Generic 9-variation grid, the documented default.
    Freeform,
}

impl GridMode {
    pub fn parse(value: &str) -> Self {
        match value {
            "angles" => GridMode::Angles,
            "thumbnail" => GridMode::Thumbnail,
            "storyboard" => GridMode::Storyboard,
            _ => GridMode::Freeform,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GridMode::Angles => "angles",
            GridMode::Thumbnail => "thumbnail",
            GridMode::Storyboard => "storyboard",
            GridMode::Freeform => "freeform",
        }
    }
}

/// Human-facing aspect ratio of the generated grid image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Widescreen,
    Vertical,
    Square,
}

impl AspectRatio {
    /// Total mapping; unrecognized strings (including empty) become
    /// [`AspectRatio::Widescreen`].
    pub fn parse(value: &str) -> Self {
        match value {
            "16:9" => AspectRatio::Widescreen,
            "9:16" => AspectRatio::Vertical,
            "1:1" => AspectRatio::Square,
            _ => AspectRatio::Widescreen,
        }
    }

    /// Provider-specific size code sent to the editing API.
    pub fn image_size(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "landscape_16_9",
            AspectRatio::Vertical => "portrait_16_9",
            AspectRatio::Square => "square",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Square => "1:1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parsing_is_total() {
        assert_eq!(GridMode::parse("angles"), GridMode::Angles);
        assert_eq!(GridMode::parse("thumbnail"), GridMode::Thumbnail);
        assert_eq!(GridMode::parse("storyboard"), GridMode::Storyboard);
        assert_eq!(GridMode::parse(""), GridMode::Freeform);
        assert_eq!(GridMode::parse("ANGLES"), GridMode::Freeform);
        assert_eq!(GridMode::parse("collage"), GridMode::Freeform);
    }

    #[test]
    fn aspect_parsing_is_total() {
        assert_eq!(AspectRatio::parse("16:9"), AspectRatio::Widescreen);
        assert_eq!(AspectRatio::parse("9:16"), AspectRatio::Vertical);
        assert_eq!(AspectRatio::parse("1:1"), AspectRatio::Square);
        assert_eq!(AspectRatio::parse(""), AspectRatio::Widescreen);
        assert_eq!(AspectRatio::parse("4:3"), AspectRatio::Widescreen);
    }

    #[test]
    fn aspect_maps_to_exact_size_codes() {
        assert_eq!(AspectRatio::parse("16:9").image_size(), "landscape_16_9");
        assert_eq!(AspectRatio::parse("9:16").image_size(), "portrait_16_9");
        assert_eq!(AspectRatio::parse("1:1").image_size(), "square");
        assert_eq!(AspectRatio::parse("21:9").image_size(), "landscape_16_9");
    }
}
