//! HTML parsers for EstrenosGO pages
//!
//! - `search`: the `/buscar/<query>` results page
//! - `episodes`: a series page with its episode table
//!
//! Both parsers report each row separately so one malformed row never
//! hides the others.

pub mod episodes;
pub mod search;

use scraper::{ElementRef, Selector};

use crate::error::{EstrenosError, Result};

pub use episodes::{normalize_torrent_url, parse_episode_links, DOWNLOAD_LINK_SELECTOR};
pub use search::{parse_search_results, SearchHit};

/// Compile a CSS selector, mapping failures to `ParseError`.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| EstrenosError::ParseError(format!("Invalid selector {}: {:?}", css, e)))
}

/// First descendant of `element` matching `css`.
pub(crate) fn find_first<'a>(element: &ElementRef<'a>, css: &str) -> Result<ElementRef<'a>> {
    let sel = selector(css)?;
    element
        .select(&sel)
        .next()
        .ok_or_else(|| EstrenosError::ElementNotFound(css.to_string()))
}

/// Text content with whitespace runs collapsed and the ends trimmed.
pub(crate) fn clean_text(element: &ElementRef) -> String {
    let text = element.text().collect::<String>();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
