use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

pub use crate::errors::ResultResp;

/// Convert a ServerError into an HTML error page with the matching status.
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    if status >= 500 {
        tracing::error!(error = %err, "request failed");
    } else {
        tracing::debug!(error = %err, status, "request rejected");
    }

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &err.to_string()).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
