pub mod extraction;
pub mod listing;

pub use extraction::Extraction;
pub use listing::{ListingRecord, COLUMNS};
