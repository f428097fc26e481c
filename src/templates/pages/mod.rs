pub mod home;
pub mod results;

pub use home::home_page;
pub use results::{no_listings_page, results_page, ResultsVm};
