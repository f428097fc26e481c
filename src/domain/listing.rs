use serde::Serialize;

/// Placeholder for a field the page did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for every field of a listing that could not be extracted.
pub const ERROR: &str = "Error";

/// School fields are not scraped yet.
pub const COMING_SOON: &str = "Coming soon";

/// Table and spreadsheet columns, in display order. Thumbnail is never a column.
pub const COLUMNS: [&str; 9] = [
    "URL",
    "Price",
    "Beds",
    "Baths",
    "Square Feet",
    "City",
    "State",
    "High School",
    "School Rating",
];

/// One row of the listings table: the fixed-schema result of processing one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRecord {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Beds")]
    pub beds: String,
    #[serde(rename = "Baths")]
    pub baths: String,
    #[serde(rename = "Square Feet")]
    pub square_feet: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "High School")]
    pub high_school: String,
    #[serde(rename = "School Rating")]
    pub school_rating: String,
    #[serde(rename = "Thumbnail")]
    pub thumbnail: Option<String>,
}

impl ListingRecord {
    /// The record shown for a URL whose extraction failed.
    pub fn error(url: &str) -> Self {
        Self {
            url: url.to_string(),
            price: ERROR.to_string(),
            beds: ERROR.to_string(),
            baths: ERROR.to_string(),
            square_feet: ERROR.to_string(),
            city: ERROR.to_string(),
            state: ERROR.to_string(),
            high_school: ERROR.to_string(),
            school_rating: ERROR.to_string(),
            thumbnail: None,
        }
    }

    /// Cell values in [`COLUMNS`] order.
    pub fn cells(&self) -> [&str; 9] {
        [
            &self.url,
            &self.price,
            &self.beds,
            &self.baths,
            &self.square_feet,
            &self.city,
            &self.state,
            &self.high_school,
            &self.school_rating,
        ]
    }

    pub fn is_error(&self) -> bool {
        self.price == ERROR && self.thumbnail.is_none()
    }

    /// Caption shown above a thumbnail, e.g. "Springfield, IL — $450,000".
    pub fn caption(&self) -> String {
        format!("{}, {} — {}", self.city, self.state, self.price)
    }
}
