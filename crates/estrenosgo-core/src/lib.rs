//! EstrenosGO Search Core Library
//!
//! Searches estrenosgo.in for series and turns their episode tables into
//! downloadable entries for a media-automation host.
//!
//! # Features
//! - Query cleanup tuned for the site's search engine
//! - Series-only filtering of search hits
//! - Episode torrent links with protocol-relative URLs fixed up
//! - Deduplicated, deterministic output; failures are logged, never raised

pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod query;
pub mod scraper;
pub mod types;

pub use client::{ClientConfig, EstrenosClient, RateLimiter};
pub use config::SiteConfig;
pub use error::{EstrenosError, Result};
pub use scraper::EstrenosScraper;
pub use types::{Candidate, EpisodeLink, ResultEntry, SearchRequest};
