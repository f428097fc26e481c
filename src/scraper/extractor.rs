// extractor.rs
use crate::domain::listing::{ListingRecord, COMING_SOON, NOT_AVAILABLE};
use crate::domain::Extraction;
use crate::scraper::{ExtractError, PageFetcher};
use ::scraper::{ElementRef, Html, Selector};
use once_cell::sync::Lazy;
use regex::Regex;

static PRICE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\d{1,3}(,\d{3})+").unwrap());

const PRICE_CANDIDATES: &str = "span";
const SUMMARY_ITEMS: &str = r#"span[data-testid="bed-bath-item"]"#;
const HEADLINE: &str = r#"h1[data-testid="home-details-summary-headline"]"#;
const PREVIEW_IMAGE: &str = r#"meta[property="og:image"]"#;

/// Fetch and parse one listing. Failures come back as the uniform error record.
pub fn extract(fetcher: &dyn PageFetcher, url: &str) -> ListingRecord {
    Extraction::new(url, try_extract(fetcher, url)).into_record()
}

/// Fetch and parse one listing, keeping the failure reason.
pub fn try_extract(fetcher: &dyn PageFetcher, url: &str) -> Result<ListingRecord, ExtractError> {
    let html = fetcher.fetch_page(url)?;
    parse_listing(url, &html)
}

/// Map a listing page to a record. No network access.
pub fn parse_listing(url: &str, html: &str) -> Result<ListingRecord, ExtractError> {
    let document = Html::parse_document(html);

    let price = find_price(&document)?.unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let items = summary_items(&document)?;
    let beds = first_token(&items, 0)?;
    let baths = first_token(&items, 1)?;
    let square_feet = items
        .get(2)
        .cloned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let (city, state) = match find_headline(&document)? {
        Some(text) => split_headline(&text),
        None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
    };

    let thumbnail = find_preview_image(&document)?;

    Ok(ListingRecord {
        url: url.to_string(),
        price,
        beds,
        baths,
        square_feet,
        city,
        state,
        high_school: COMING_SOON.to_string(),
        school_rating: COMING_SOON.to_string(),
        thumbnail,
    })
}

/// Split "City, ST" into its parts.
///
/// Headlines with more than one comma ("123 Main St, Springfield, IL") keep the
/// last two segments. Without a comma both parts are N/A.
pub fn split_headline(text: &str) -> (String, String) {
    let parts: Vec<&str> = text.split(',').collect();

    match parts.as_slice() {
        [.., city, state] => (city.trim().to_string(), state.trim().to_string()),
        _ => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
    }
}

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::HtmlParse(e.to_string()))
}

/// First leaf `span` whose text looks like "$123,456".
fn find_price(document: &Html) -> Result<Option<String>, ExtractError> {
    let spans = selector(PRICE_CANDIDATES)?;

    let price = document
        .select(&spans)
        .filter(|el| !el.children().any(|c| c.value().is_element()))
        .map(|el| el.text().collect::<String>())
        .find(|text| PRICE_RE.is_match(text))
        .map(|text| text.trim().to_string());

    Ok(price)
}

fn summary_items(document: &Html) -> Result<Vec<String>, ExtractError> {
    let items = selector(SUMMARY_ITEMS)?;
    Ok(document.select(&items).map(normalized_text).collect())
}

fn first_token(items: &[String], index: usize) -> Result<String, ExtractError> {
    match items.get(index) {
        None => Ok(NOT_AVAILABLE.to_string()),
        Some(text) => text
            .split_whitespace()
            .next()
            .map(str::to_string)
            .ok_or(ExtractError::EmptySummaryItem { index }),
    }
}

fn find_headline(document: &Html) -> Result<Option<String>, ExtractError> {
    let headline = selector(HEADLINE)?;
    Ok(document
        .select(&headline)
        .next()
        .map(|el| el.text().collect::<String>()))
}

fn find_preview_image(document: &Html) -> Result<Option<String>, ExtractError> {
    let meta = selector(PREVIEW_IMAGE)?;

    match document.select(&meta).next() {
        None => Ok(None),
        Some(el) => el
            .value()
            .attr("content")
            .map(|c| Some(c.trim()).filter(|c| !c.is_empty()).map(str::to_string))
            .ok_or(ExtractError::MissingImageContent),
    }
}

/// Text nodes trimmed and joined by single spaces: `<b>3</b> <i>bd</i>` -> "3 bd".
fn normalized_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
