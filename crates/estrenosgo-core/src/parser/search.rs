//! Search results parser for EstrenosGO
//!
//! Result page shape:
//! `div.card-body` > `p` (no class) > `span` > `a.text-decoration-none`
//! with the quality label in a nested `span`.

use scraper::{ElementRef, Html};

use crate::error::{EstrenosError, Result};
use crate::types::Candidate;

use super::{clean_text, find_first, selector};

/// Container holding every search hit
const CARD_BODY: &str = "div.card-body";

/// One search hit per classless paragraph
const RESULT_ROW: &str = "p:not([class])";

/// Anchor carrying the link and title of a hit
const RESULT_LINK: &str = "a.text-decoration-none";

/// Series pages are the only links worth following
const SERIES_MARKER: &str = "serie";

/// A well-formed row of the search results page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchHit {
    /// Link to a series page
    Series(Candidate),
    /// Anything else (films, documentaries); carries the href for logging
    Other { href: String },
}

/// Parse the rows of a search results page.
///
/// # Returns
/// * `Ok(rows)` with one `Result` per result row, in page order
/// * `Err(EstrenosError::ElementNotFound)` if the results container is missing
pub fn parse_search_results(html: &str) -> Result<Vec<Result<SearchHit>>> {
    let document = Html::parse_document(html);
    let card_body = find_first(&document.root_element(), CARD_BODY)?;

    let row_selector = selector(RESULT_ROW)?;
    let rows = card_body
        .select(&row_selector)
        .map(|row| parse_result_row(&row))
        .collect();
    Ok(rows)
}

/// Parse a single `p` result row.
fn parse_result_row(row: &ElementRef) -> Result<SearchHit> {
    let span = find_first(row, "span")?;
    let link = find_first(&span, RESULT_LINK)?;

    let href = link
        .value()
        .attr("href")
        .ok_or_else(|| EstrenosError::ElementNotFound(format!("{}[href]", RESULT_LINK)))?
        .to_string();

    if !href.contains(SERIES_MARKER) {
        return Ok(SearchHit::Other { href });
    }

    let quality = clean_text(&find_first(&span, "span")?);

    let title = clean_text(&link);
    if title.is_empty() {
        return Err(EstrenosError::ParseError(format!("empty title for {}", href)));
    }

    Ok(SearchHit::Series(Candidate {
        title,
        href,
        quality,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: &str) -> String {
        format!(
            r#"<html><body><div class="card"><div class="card-body">{}</div></div></body></html>"#,
            rows
        )
    }

    const SERIES_ROW: &str = r#"
        <p>
          <span>
            <a class="text-decoration-none" href="/serie/la-casa-de-papel">
              La Casa de Papel
            </a>
            <span class="badge">HDTV 720p</span>
          </span>
        </p>"#;

    #[test]
    fn test_parse_series_row() {
        let rows = parse_search_results(&page(SERIES_ROW)).unwrap();
        assert_eq!(rows.len(), 1);

        match &rows[0] {
            Ok(SearchHit::Series(candidate)) => {
                assert_eq!(candidate.title, "La Casa de Papel");
                assert_eq!(candidate.href, "/serie/la-casa-de-papel");
                assert_eq!(candidate.quality, "HDTV 720p");
            }
            other => panic!("Expected series hit, got {:?}", other),
        }
    }

    #[test]
    fn test_non_series_link_is_other() {
        let row = r#"<p><span><a class="text-decoration-none" href="/pelicula/dune">Dune</a><span>4K</span></span></p>"#;
        let rows = parse_search_results(&page(row)).unwrap();

        assert_eq!(
            rows[0].as_ref().unwrap(),
            &SearchHit::Other {
                href: "/pelicula/dune".to_string()
            }
        );
    }

    #[test]
    fn test_paragraphs_with_class_are_ignored() {
        let rows = format!(r#"<p class="lead">Resultados de la búsqueda</p>{}"#, SERIES_ROW);
        let rows = parse_search_results(&page(&rows)).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(matches!(rows[0], Ok(SearchHit::Series(_))));
    }

    #[test]
    fn test_malformed_row_does_not_hide_others() {
        let rows = format!(
            r#"<p>No span here</p><p><span><a href="/serie/x">Missing class</a></span></p>{}"#,
            SERIES_ROW
        );
        let rows = parse_search_results(&page(&rows)).unwrap();

        assert_eq!(rows.len(), 3);
        assert!(matches!(rows[0], Err(EstrenosError::ElementNotFound(_))));
        assert!(matches!(rows[1], Err(EstrenosError::ElementNotFound(_))));
        assert!(matches!(rows[2], Ok(SearchHit::Series(_))));
    }

    #[test]
    fn test_series_row_without_quality_is_error() {
        let row = r#"<p><span><a class="text-decoration-none" href="/serie/x">X</a></span></p>"#;
        let rows = parse_search_results(&page(row)).unwrap();
        assert!(matches!(rows[0], Err(EstrenosError::ElementNotFound(_))));
    }

    #[test]
    fn test_series_row_with_empty_title_is_error() {
        let row = r#"<p><span><a class="text-decoration-none" href="/serie/x">  </a><span>HD</span></span></p>"#;
        let rows = parse_search_results(&page(row)).unwrap();
        assert!(matches!(rows[0], Err(EstrenosError::ParseError(_))));
    }

    #[test]
    fn test_missing_card_body() {
        match parse_search_results("<html><body><p>Sin resultados</p></body></html>") {
            Err(EstrenosError::ElementNotFound(css)) => assert_eq!(css, "div.card-body"),
            other => panic!("Expected ElementNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_card_body() {
        let rows = parse_search_results(&page("")).unwrap();
        assert!(rows.is_empty());
    }
}
