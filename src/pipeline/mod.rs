//! Turns the pasted URL list into ordered listing records.
//!
//! Nothing here renders or writes files; the router hands the records to
//! `templates` and `spreadsheets`.

pub mod thumbnails;

use crate::domain::{Extraction, ListingRecord};
use crate::scraper::{try_extract, ExtractError, ListingCache, PageFetcher};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

pub use thumbnails::{load_previews, Preview, ThumbnailOptions};

/// One URL per line; lines are trimmed and blanks dropped. Order and
/// duplicates are kept.
pub fn split_urls(raw_input: &str) -> Vec<String> {
    raw_input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct Pipeline<'a> {
    fetcher: &'a dyn PageFetcher,
    cache: &'a ListingCache,
    max_concurrency: usize,
}

impl<'a> Pipeline<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, cache: &'a ListingCache, max_concurrency: usize) -> Self {
        Self {
            fetcher,
            cache,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Records for every URL in `raw_input`, in input order.
    pub fn run(&self, raw_input: &str) -> Vec<ListingRecord> {
        self.run_detailed(raw_input)
            .into_iter()
            .map(Extraction::into_record)
            .collect()
    }

    /// Like [`Pipeline::run`] but keeps the failure reason of each URL.
    pub fn run_detailed(&self, raw_input: &str) -> Vec<Extraction> {
        let urls = split_urls(raw_input);
        tracing::info!(count = urls.len(), "extracting listings");

        map_ordered(
            &urls,
            self.max_concurrency,
            |url| self.extract_one(url),
            |url| {
                tracing::error!(%url, "extraction thread panicked");
                Extraction::new(url, Err(ExtractError::Internal("extraction panicked".into())))
            },
        )
    }

    fn extract_one(&self, url: &str) -> Extraction {
        if let Some(record) = self.cache.get(url) {
            tracing::debug!(%url, "cache hit");
            return Extraction::new(url, Ok(record));
        }

        let outcome = try_extract(self.fetcher, url);
        match &outcome {
            Ok(record) => self.cache.insert(url, record.clone()),
            Err(e) => tracing::warn!(%url, error = %e, "extraction failed"),
        }

        Extraction::new(url, outcome)
    }
}

/// Apply `f` to every item on at most `concurrency` worker threads pulling
/// from a shared index, so a slow item only delays its own result.
/// Results keep the order of `items`; a panicking call yields `on_panic(item)`.
pub(crate) fn map_ordered<T, R, F, P>(items: &[T], concurrency: usize, f: F, on_panic: P) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
    P: Fn(&T) -> R,
{
    let next = AtomicUsize::new(0);
    let workers = concurrency.max(1).min(items.len());
    let (f, next) = (&f, &next);

    let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(items.len()).collect();

    thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                s.spawn(move || {
                    let mut done = Vec::new();
                    loop {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        let Some(item) = items.get(i) else { break };
                        let result = panic::catch_unwind(AssertUnwindSafe(|| f(item))).ok();
                        done.push((i, result));
                    }
                    done
                })
            })
            .collect();

        for handle in handles {
            if let Ok(done) = handle.join() {
                for (i, result) in done {
                    slots[i] = result;
                }
            }
        }
    });

    slots
        .into_iter()
        .zip(items)
        .map(|(slot, item)| slot.unwrap_or_else(|| on_panic(item)))
        .collect()
}
