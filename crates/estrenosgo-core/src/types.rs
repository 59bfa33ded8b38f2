//! Data types for the EstrenosGO search adapter
//!
//! Nothing here outlives a single search call. `ResultEntry` is the only
//! type handed back to the caller.

use serde::{Deserialize, Serialize};

/// One search string variant to run against the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub search_string: String,
}

impl SearchRequest {
    pub fn new(search_string: impl Into<String>) -> Self {
        Self {
            search_string: search_string.into(),
        }
    }

    /// Build the requests for a host entry.
    ///
    /// Falls back to the entry title when no search strings were supplied.
    pub fn for_entry(title: &str, search_strings: &[String]) -> Vec<Self> {
        if search_strings.is_empty() {
            vec![Self::new(title)]
        } else {
            search_strings.iter().map(|s| Self::new(s.as_str())).collect()
        }
    }
}

/// A series hit on the search results page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Series title as shown in the result row
    pub title: String,
    /// Link to the series page, as written in the HTML
    pub href: String,
    /// Free-text quality label, e.g. "HD" or "720p"
    pub quality: String,
}

/// One row of an episode listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeLink {
    /// Episode label from the first table cell, e.g. "Cap 1"
    pub label: String,
    /// Absolute torrent URL
    pub url: String,
}

/// The unit returned to the caller
///
/// Ordered by (url, title, quality) so a set of entries iterates
/// deterministically. Equal field sets are the same entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResultEntry {
    pub url: String,
    pub title: String,
    pub quality: String,
}

impl ResultEntry {
    /// Combine a series candidate with one of its episodes.
    ///
    /// The title is `<series> <episode> <quality>`.
    pub fn assemble(candidate: &Candidate, episode: &EpisodeLink) -> Self {
        Self {
            url: episode.url.clone(),
            title: format!("{} {} {}", candidate.title, episode.label, candidate.quality),
            quality: candidate.quality.clone(),
        }
    }
}
