use crate::domain::ListingRecord;
use crate::pipeline::Preview;
use crate::templates::components::{listings_table, preview, success, warning};
use crate::templates::desktop_layout;
use crate::templates::pages::home::main_content;
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub struct ResultsVm<'a> {
    pub input: &'a str,
    pub records: &'a [ListingRecord],
    pub previews: &'a [Preview],
    pub fetched_at: DateTime<Utc>,
}

pub fn results_page(vm: &ResultsVm) -> Markup {
    let failed = vm.records.iter().filter(|r| r.is_error()).count();

    desktop_layout(
        "Listings",
        main_content(
            vm.input,
            html! {
                (success("Listings extracted!"))

                p {
                    "Fetched " strong { (vm.records.len()) } " listing(s) at "
                    (vm.fetched_at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                    @if failed > 0 {
                        " (" (failed) " could not be read)"
                    }
                    "."
                }

                (listings_table(vm.records))

                @if !vm.previews.is_empty() {
                    h2 { "Previews" }
                    div class="previews" {
                        @for p in vm.previews {
                            (preview(p))
                        }
                    }
                }

                a class="button" href="/export" download { "Download Excel File" }
            },
        ),
    )
}

pub fn no_listings_page(input: &str) -> Markup {
    desktop_layout(
        "Listings",
        main_content(input, warning("No valid listings extracted.")),
    )
}
