mod cache;
mod extractor;
mod fetcher;
mod scraper_error;

pub use cache::ListingCache;
pub use extractor::{extract, parse_listing, try_extract};
pub use fetcher::{HttpFetcher, PageFetcher, DEFAULT_USER_AGENT};
pub use scraper_error::{ExtractError, ThumbnailError};
