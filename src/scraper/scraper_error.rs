use thiserror::Error;

/// Why a single listing URL could not be turned into a record.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    #[error("Summary item {index} has no text")]
    EmptySummaryItem { index: usize },

    #[error("og:image tag has no content attribute")]
    MissingImageContent,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Why a thumbnail preview could not be shown.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Image is larger than {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image encode error: {0}")]
    Encode(String),
}
