use crate::config::Config;
use crate::pipeline::{Pipeline, ThumbnailOptions};
use crate::scraper::{ExtractError, HttpFetcher, ListingCache, PageFetcher};
use crate::session::SessionStore;

/// Everything a request handler needs, shared by all server workers.
pub struct AppState {
    pub config: Config,
    pub fetcher: Box<dyn PageFetcher>,
    pub cache: ListingCache,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ExtractError> {
        let fetcher = HttpFetcher::new(&config.user_agent, config.request_timeout)?;
        Ok(Self::with_fetcher(config, Box::new(fetcher)))
    }

    pub fn with_fetcher(config: Config, fetcher: Box<dyn PageFetcher>) -> Self {
        let cache = ListingCache::new(config.cache_capacity, config.cache_ttl);
        let sessions = SessionStore::new(config.max_sessions, config.session_ttl);

        Self {
            config,
            fetcher,
            cache,
            sessions,
        }
    }

    pub fn pipeline(&self) -> Pipeline<'_> {
        Pipeline::new(self.fetcher.as_ref(), &self.cache, self.config.max_concurrency)
    }

    pub fn thumbnail_options(&self) -> ThumbnailOptions {
        ThumbnailOptions {
            max_width: self.config.thumbnail_width,
            max_bytes: self.config.thumbnail_max_bytes,
        }
    }
}
