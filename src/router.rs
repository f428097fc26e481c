use crate::domain::{Extraction, ListingRecord};
use crate::errors::ServerError;
use crate::pipeline::load_previews;
use crate::responses::{
    html_response, html_response_with_cookie, json_response, text_response, ResultResp,
};
use crate::session::{generate_token_default, session_cookie, session_token};
use crate::spreadsheets::export_listings_xlsx;
use crate::state::AppState;
use crate::templates::pages::{home_page, no_listings_page, results_page, ResultsVm};
use astra::Request;
use chrono::Utc;
use std::io::Read;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(home_page()),
        ("POST", "/fetch") => fetch_listings(req, state),
        ("GET", "/export") => export_listings(&req, state),
        ("POST", "/api/listings") => api_listings(req, state),
        ("GET", "/health") => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}

/// Form submit: extract every pasted URL, remember the table for `/export`,
/// render table and previews.
fn fetch_listings(req: Request, state: &AppState) -> ResultResp {
    let existing = session_token(&req);
    let body = read_body(req, state.config.max_body_bytes)?;
    let input = form_field(&body, "urls").unwrap_or_default();

    let extractions = state.pipeline().run_detailed(&input);

    if extractions.is_empty() {
        if let Some(token) = &existing {
            state.sessions.clear(token);
        }
        return html_response(no_listings_page(&input));
    }

    let failed = extractions.iter().filter(|e| e.error().is_some()).count();
    tracing::info!(total = extractions.len(), failed, "listings extracted");

    let records: Vec<ListingRecord> = extractions
        .into_iter()
        .map(Extraction::into_record)
        .collect();

    let previews = load_previews(
        state.fetcher.as_ref(),
        &records,
        state.thumbnail_options(),
        state.config.max_concurrency,
    );

    let token = existing.unwrap_or_else(generate_token_default);
    state.sessions.save(&token, records.clone());

    let page = results_page(&ResultsVm {
        input: &input,
        records: &records,
        previews: &previews,
        fetched_at: Utc::now(),
    });

    html_response_with_cookie(page, &session_cookie(&token))
}

fn export_listings(req: &Request, state: &AppState) -> ResultResp {
    let token = session_token(req).ok_or(ServerError::NoSession)?;
    let records = state.sessions.get(&token).ok_or(ServerError::NoSession)?;

    export_listings_xlsx(&records)
}

/// Plain-text body, one URL per line; answers with the records as JSON.
fn api_listings(req: Request, state: &AppState) -> ResultResp {
    let body = read_body(req, state.config.max_body_bytes)?;
    let records = state.pipeline().run(&body);
    json_response(&records)
}

fn read_body(req: Request, limit: u64) -> Result<String, ServerError> {
    let mut body = req.into_body();
    let mut buf = Vec::new();

    body.reader()
        .take(limit.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read body: {e}")))?;

    if buf.len() as u64 > limit {
        return Err(ServerError::PayloadTooLarge { limit });
    }

    String::from_utf8(buf).map_err(|_| ServerError::BadRequest("Body is not valid UTF-8".into()))
}

fn form_field(body: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(body.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}
