use astra::Response;
// errors.rs
use thiserror::Error;

/// Errors that end a single HTTP request. Per-listing and per-thumbnail
/// failures never get here; they are rendered inside the page.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Request body is larger than {limit} bytes")]
    PayloadTooLarge { limit: u64 },

    #[error("No listings to export. Fetch listings first.")]
    NoSession,

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) | ServerError::NoSession => 400,
            ServerError::PayloadTooLarge { .. } => 413,
            ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}
