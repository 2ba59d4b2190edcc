use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone)]
pub struct AnalyzeReceiptInput {
    pub image: ReceiptImage,
}

#[derive(Debug, Clone)]
pub struct ReceiptImage {
    pub data: Vec<u8>,
    pub mime: ImageMime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
}

impl ImageMime {
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageMime::Jpeg),
            "image/png" => Some(ImageMime::Png),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
        }
    }
}

/// Qualitative banding of the 1-10 footprint score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoreBand {
    Low,
    Moderate,
    High,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score <= 3.0 {
            ScoreBand::Low
        } else if score <= 6.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds_match_the_score_scale() {
        assert_eq!(ScoreBand::from_score(1.0), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(3.0), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(3.5), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(6.0), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(6.1), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(10.0), ScoreBand::High);
    }

    #[test]
    fn mime_resolution_accepts_jpeg_and_png_only() {
        assert_eq!(ImageMime::from_content_type("image/jpeg"), Some(ImageMime::Jpeg));
        assert_eq!(ImageMime::from_content_type("image/jpg"), Some(ImageMime::Jpeg));
        assert_eq!(ImageMime::from_content_type("IMAGE/PNG"), Some(ImageMime::Png));
        assert_eq!(ImageMime::from_content_type("image/webp"), None);
        assert_eq!(ImageMime::from_content_type("text/plain"), None);
    }
}
