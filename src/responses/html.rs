use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_builder()
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// HTML page that also (re)sets a cookie.
pub fn html_response_with_cookie(markup: Markup, set_cookie: &str) -> ResultResp {
    html_builder()
        .header("Set-Cookie", set_cookie)
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

pub fn text_response(text: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
        .body(Body::from(text.to_string()))
        .map_err(|_| ServerError::InternalError)
}

fn html_builder() -> ResponseBuilder {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
}
