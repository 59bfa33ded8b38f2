//! Search pipeline for EstrenosGO
//!
//! query -> fetch results page -> series candidates -> fetch each series
//! page -> episode links -> entries. Every failure along the way is logged
//! and skipped; a search never returns an error.

use std::collections::BTreeSet;

use tracing::Instrument;

use crate::client::EstrenosClient;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::parser::{parse_episode_links, parse_search_results, SearchHit};
use crate::query::{clean_search_string, search_path};
use crate::types::{Candidate, EpisodeLink, ResultEntry, SearchRequest};

/// Search adapter for EstrenosGO
///
/// # Example
/// ```no_run
/// use estrenosgo_core::{EstrenosScraper, SearchRequest, SiteConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = EstrenosScraper::new()?;
///     let requests = SearchRequest::for_entry("The Boys S04E01", &[]);
///     let entries = scraper.search(&requests, SiteConfig::enabled()).await;
///     println!("Found {} entries", entries.len());
///     Ok(())
/// }
/// ```
pub struct EstrenosScraper {
    client: EstrenosClient,
    span: tracing::Span,
}

impl EstrenosScraper {
    /// Create a scraper with the default client and log span.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(EstrenosClient::new()?))
    }

    /// Create a scraper around a pre-configured client.
    pub fn with_client(client: EstrenosClient) -> Self {
        Self::with_span(client, tracing::info_span!("estrenosgo"))
    }

    /// Create a scraper that logs under the given span.
    pub fn with_span(client: EstrenosClient, span: tracing::Span) -> Self {
        Self { client, span }
    }

    pub fn client(&self) -> &EstrenosClient {
        &self.client
    }

    /// Run every search request and collect the resulting entries.
    ///
    /// Returns an empty set when the site is disabled or nothing could be
    /// fetched.
    pub async fn search(&self, requests: &[SearchRequest], config: SiteConfig) -> BTreeSet<ResultEntry> {
        self.search_inner(requests, config)
            .instrument(self.span.clone())
            .await
    }

    async fn search_inner(&self, requests: &[SearchRequest], config: SiteConfig) -> BTreeSet<ResultEntry> {
        let mut entries = BTreeSet::new();

        if !config.enabled {
            tracing::debug!("site disabled, skipping search");
            return entries;
        }

        tracing::debug!("Using EstrenosGO!");

        for request in requests {
            tracing::debug!(search_string = %request.search_string, "search string");
            for candidate in self.find_candidates(request).await {
                self.collect_episodes(&candidate, &mut entries).await;
            }
        }

        tracing::info!(count = entries.len(), "search finished");
        entries
    }

    /// Fetch and parse the results page for one search string.
    async fn find_candidates(&self, request: &SearchRequest) -> Vec<Candidate> {
        tracing::debug!(
            cleaned = %clean_search_string(&request.search_string),
            "using search"
        );

        let html = match self.client.fetch(&search_path(&request.search_string)).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(error = %e, "EstrenosGO request failed");
                return Vec::new();
            }
        };

        let rows = match parse_search_results(&html) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(error = %e, "unexpected search page layout, treating as empty");
                return Vec::new();
            }
        };

        rows.into_iter()
            .filter_map(|row| match row {
                Ok(SearchHit::Series(candidate)) => Some(candidate),
                Ok(SearchHit::Other { href }) => {
                    tracing::warn!(href = %href, "Not a series link, skipping");
                    None
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed result row");
                    None
                }
            })
            .collect()
    }

    /// Fetch one candidate's series page and add its episodes to `entries`.
    async fn collect_episodes(&self, candidate: &Candidate, entries: &mut BTreeSet<ResultEntry>) {
        for episode in self.find_episodes(candidate).await {
            let entry = ResultEntry::assemble(candidate, &episode);
            tracing::debug!(title = %entry.title, url = %entry.url, "found entry");
            entries.insert(entry);
        }
    }

    async fn find_episodes(&self, candidate: &Candidate) -> Vec<EpisodeLink> {
        let html = match self.client.fetch(&candidate.href).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(href = %candidate.href, error = %e, "EstrenosGO request failed");
                return Vec::new();
            }
        };

        let rows = match parse_episode_links(&html) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(
                    href = %candidate.href,
                    error = %e,
                    "unexpected series page layout, treating as empty"
                );
                return Vec::new();
            }
        };

        rows.into_iter()
            .filter_map(|row| {
                row.map_err(|e| tracing::warn!(error = %e, "skipping malformed episode row"))
                    .ok()
            })
            .collect()
    }
}
