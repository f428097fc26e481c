use crate::domain::listing::{ListingRecord, COLUMNS};
use crate::pipeline::Preview;
use maud::{html, Markup};

pub mod error;

pub use error::error_page;

pub fn success(text: &str) -> Markup {
    html! { div class="notice success" role="status" { (text) } }
}

pub fn warning(text: &str) -> Markup {
    html! { div class="notice warning" role="alert" { (text) } }
}

/// Listings table: one row per record, Thumbnail omitted.
pub fn listings_table(records: &[ListingRecord]) -> Markup {
    html! {
        div style="overflow-x: auto;" {
            table class="listings" {
                thead {
                    tr {
                        @for col in COLUMNS {
                            th scope="col" { (col) }
                        }
                    }
                }
                tbody {
                    @for record in records {
                        tr class=[record.is_error().then_some("error")] {
                            @for cell in record.cells() {
                                td { (cell) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Caption with the scaled image, or a warning in its place.
pub fn preview(p: &Preview) -> Markup {
    html! {
        div class="preview" {
            p { strong { (p.caption) } }
            @match &p.image {
                Ok(thumb) => {
                    img src=(thumb.data_uri) width=(thumb.width) height=(thumb.height) alt=(p.caption);
                }
                Err(_) => {
                    (warning("Thumbnail failed to load."))
                }
            }
        }
    }
}
