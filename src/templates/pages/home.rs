// templates/pages/home.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout("Zillow Scraper App", main_content("", html! {}))
}

/// Page chrome shared by the home and results pages: title, instructions,
/// the URL form (pre-filled with `input`) and whatever goes below it.
pub fn main_content(input: &str, below: Markup) -> Markup {
    html! {
        main class="container" {
            h1 { "Zillow Listing Extractor 🏡" }
            p {
                "Paste Zillow links below (one per line). "
                "We'll extract key details and group by location."
            }

            (url_form(input))

            (below)
        }
    }
}

pub fn url_form(input: &str) -> Markup {
    html! {
        form method="post" action="/fetch" {
            label for="urls" { "Zillow Links" }
            textarea id="urls" name="urls" placeholder="https://www.zillow.com/homedetails/..." { (input) }
            button type="submit" class="primary" { "Fetch Listings" }
        }
    }
}
