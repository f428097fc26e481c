use crate::domain::listing::{COMING_SOON, ERROR, NOT_AVAILABLE};
use crate::scraper::{extract, parse_listing, try_extract, ExtractError};
use crate::tests::utils::{listing_page, FakeFetcher};

const URL: &str = "https://www.zillow.com/homedetails/1";

#[test]
fn full_page_extracts_every_field() {
    let html = listing_page(
        Some("$450,000"),
        &["4 bd", "3 ba", "2,310 sqft"],
        Some("Boise, ID"),
        Some("https://photos.example/1.jpg"),
    );

    let rec = parse_listing(URL, &html).unwrap();

    assert_eq!(rec.url, URL);
    assert_eq!(rec.price, "$450,000");
    assert_eq!(rec.beds, "4");
    assert_eq!(rec.baths, "3");
    assert_eq!(rec.square_feet, "2,310 sqft");
    assert_eq!(rec.city, "Boise");
    assert_eq!(rec.state, "ID");
    assert_eq!(rec.high_school, COMING_SOON);
    assert_eq!(rec.school_rating, COMING_SOON);
    assert_eq!(rec.thumbnail.as_deref(), Some("https://photos.example/1.jpg"));
}

#[test]
fn street_address_headline_uses_last_two_segments() {
    let html = listing_page(
        Some("$1,234,567"),
        &["3 bd", "2 ba", "1,500 sqft"],
        Some("123 Main St, Springfield, IL"),
        None,
    );

    let rec = parse_listing(URL, &html).unwrap();

    assert_eq!(rec.price, "$1,234,567");
    assert_eq!(rec.beds, "3");
    assert_eq!(rec.baths, "2");
    assert_eq!(rec.square_feet, "1,500 sqft");
    assert_eq!(rec.city, "Springfield");
    assert_eq!(rec.state, "IL");
}

#[test]
fn missing_summary_items_are_independently_not_available() {
    let html = listing_page(Some("$300,000"), &[], Some("Austin, TX"), None);

    let rec = parse_listing(URL, &html).unwrap();

    assert_eq!(rec.beds, NOT_AVAILABLE);
    assert_eq!(rec.baths, NOT_AVAILABLE);
    assert_eq!(rec.square_feet, NOT_AVAILABLE);
    assert_eq!(rec.price, "$300,000");
    assert_eq!(rec.city, "Austin");
    assert_eq!(rec.state, "TX");
}

#[test]
fn partial_summary_fills_only_present_positions() {
    let html = listing_page(None, &["2 bd"], None, None);

    let rec = parse_listing(URL, &html).unwrap();

    assert_eq!(rec.beds, "2");
    assert_eq!(rec.baths, NOT_AVAILABLE);
    assert_eq!(rec.square_feet, NOT_AVAILABLE);
}

#[test]
fn bare_page_is_all_not_available_without_thumbnail() {
    let rec = parse_listing(URL, "<html><body><p>Nothing here</p></body></html>").unwrap();

    for value in [&rec.price, &rec.beds, &rec.baths, &rec.square_feet, &rec.city, &rec.state] {
        assert_eq!(value, NOT_AVAILABLE);
    }
    assert!(rec.thumbnail.is_none());
}

#[test]
fn headline_without_comma_gives_not_available_location() {
    let html = listing_page(Some("$99,000"), &[], Some("Somewhere nice"), None);

    let rec = parse_listing(URL, &html).unwrap();

    assert_eq!(rec.city, NOT_AVAILABLE);
    assert_eq!(rec.state, NOT_AVAILABLE);
}

#[test]
fn price_needs_a_thousands_group() {
    let html = r#"<html><body><span>$950</span><span>$1,050</span></body></html>"#;
    let rec = parse_listing(URL, html).unwrap();
    assert_eq!(rec.price, "$1,050");
}

#[test]
fn blank_summary_item_fails_the_listing() {
    let html = r#"<html><body><span data-testid="bed-bath-item">  </span></body></html>"#;

    assert!(matches!(
        parse_listing(URL, html),
        Err(ExtractError::EmptySummaryItem { index: 0 })
    ));
}

#[test]
fn preview_tag_without_content_fails_the_listing() {
    let html = r#"<html><head><meta property="og:image"></head><body></body></html>"#;

    assert!(matches!(
        parse_listing(URL, html),
        Err(ExtractError::MissingImageContent)
    ));
}

#[test]
fn empty_preview_content_means_no_thumbnail() {
    for content in ["", "   "] {
        let html = format!(
            r#"<html><head><meta property="og:image" content="{content}"></head><body></body></html>"#
        );

        let rec = parse_listing(URL, &html).unwrap();

        assert!(rec.thumbnail.is_none());
        assert_eq!(rec.price, NOT_AVAILABLE);
    }
}

#[test]
fn network_failure_becomes_error_record() {
    let fetcher = FakeFetcher::new();

    let rec = extract(&fetcher, URL);

    assert_eq!(rec.url, URL);
    assert!(rec.cells()[1..].iter().all(|c| *c == ERROR));
    assert!(rec.thumbnail.is_none());
}

#[test]
fn timeout_is_reported_as_timeout_and_projects_to_error_record() {
    let fetcher = FakeFetcher::new().timeout(URL);

    assert!(matches!(
        try_extract(&fetcher, URL),
        Err(ExtractError::Timeout { secs: 10 })
    ));
    assert_eq!(extract(&fetcher, URL).price, ERROR);
}

#[test]
fn parse_failure_becomes_error_record() {
    let fetcher = FakeFetcher::new().page(
        URL,
        r#"<html><head><meta property="og:image"></head><body><span>$500,000</span></body></html>"#,
    );

    let rec = extract(&fetcher, URL);

    assert!(rec.is_error());
    assert_eq!(rec.city, ERROR);
    assert_eq!(rec.high_school, ERROR);
}
