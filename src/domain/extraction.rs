use crate::domain::listing::ListingRecord;
use crate::scraper::ExtractError;

/// Outcome of processing one URL, before it is flattened for display.
#[derive(Debug)]
pub struct Extraction {
    pub url: String,
    pub outcome: Result<ListingRecord, ExtractError>,
}

impl Extraction {
    pub fn new(url: &str, outcome: Result<ListingRecord, ExtractError>) -> Self {
        Self {
            url: url.to_string(),
            outcome,
        }
    }

    /// Project to the displayed record. Any failure becomes the uniform error row.
    pub fn into_record(self) -> ListingRecord {
        match self.outcome {
            Ok(rec) => rec,
            Err(_) => ListingRecord::error(&self.url),
        }
    }

    pub fn error(&self) -> Option<&ExtractError> {
        self.outcome.as_ref().err()
    }
}
