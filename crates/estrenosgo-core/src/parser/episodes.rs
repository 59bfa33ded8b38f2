//! Episode table parser for EstrenosGO series pages
//!
//! Page shape: `tbody` > `tr`, where the first `td` holds the episode label
//! and the download button anchor holds the torrent link.

use scraper::{ElementRef, Html};

use crate::error::{EstrenosError, Result};
use crate::types::EpisodeLink;

use super::{clean_text, find_first, selector};

/// Styling of the torrent download button
pub const DOWNLOAD_LINK_SELECTOR: &str =
    "a.text-white.bg-primary.rounded-pill.d-block.shadow-sm.text-decoration-none.my-1.py-1";

/// Make a torrent link absolute.
///
/// Links not starting with `http` are protocol-relative on this site
/// (`//host/file.torrent`) and get an `https:` prefix. Other inputs are
/// not validated: a site-relative `/x` becomes `https:/x` and an empty
/// href becomes `https:`.
///
/// # Examples
/// ```
/// use estrenosgo_core::parser::normalize_torrent_url;
///
/// assert_eq!(normalize_torrent_url("//host/ep1"), "https://host/ep1");
/// assert_eq!(normalize_torrent_url("http://host/ep1"), "http://host/ep1");
/// ```
pub fn normalize_torrent_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https:{}", url)
    }
}

/// Parse the episode table of a series page.
///
/// # Returns
/// * `Ok(rows)` with one `Result` per table row, in page order
/// * `Err(EstrenosError::ElementNotFound)` if the page has no `tbody`
pub fn parse_episode_links(html: &str) -> Result<Vec<Result<EpisodeLink>>> {
    let document = Html::parse_document(html);
    let tbody = find_first(&document.root_element(), "tbody")?;

    let row_selector = selector("tr")?;
    let rows = tbody
        .select(&row_selector)
        .map(|row| parse_episode_row(&row))
        .collect();
    Ok(rows)
}

fn parse_episode_row(row: &ElementRef) -> Result<EpisodeLink> {
    let label = clean_text(&find_first(row, "td")?);
    let link = find_first(row, DOWNLOAD_LINK_SELECTOR)?;

    let href = link
        .value()
        .attr("href")
        .ok_or_else(|| EstrenosError::ElementNotFound("download link href".to_string()))?;
    tracing::debug!(href, "found torrent link");

    let url = normalize_torrent_url(href.trim());
    if url != href {
        tracing::debug!(url = %url, "formatted torrent link");
    }

    Ok(EpisodeLink { label, url })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BUTTON_CLASS: &str =
        "text-white bg-primary rounded-pill d-block shadow-sm text-decoration-none my-1 py-1";

    fn table(rows: &str) -> String {
        format!(
            "<html><body><table><thead><tr><th>Episodio</th><th>Descarga</th></tr></thead><tbody>{}</tbody></table></body></html>",
            rows
        )
    }

    fn row(label: &str, href: &str) -> String {
        format!(
            r#"<tr><td>{}</td><td><a class="{}" href="{}">Descargar</a></td></tr>"#,
            label, BUTTON_CLASS, href
        )
    }

    #[test]
    fn test_normalize_protocol_relative() {
        assert_eq!(normalize_torrent_url("//host/ep1"), "https://host/ep1");
    }

    #[test]
    fn test_normalize_passes_absolute_through() {
        assert_eq!(normalize_torrent_url("https://host/ep1"), "https://host/ep1");
        assert_eq!(normalize_torrent_url("http://host/ep1"), "http://host/ep1");
    }

    #[test]
    fn test_normalize_does_not_validate_other_inputs() {
        assert_eq!(normalize_torrent_url("/torrents/ep1"), "https:/torrents/ep1");
        assert_eq!(normalize_torrent_url(""), "https:");
    }

    #[test]
    fn test_parse_episode_rows() {
        let html = table(&format!(
            "{}{}",
            row("Cap 1", "//host/ep1.torrent"),
            row("Cap 2", "https://host/ep2.torrent")
        ));
        let rows = parse_episode_links(&html).unwrap();

        let links: Vec<EpisodeLink> = rows.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(
            links,
            vec![
                EpisodeLink {
                    label: "Cap 1".to_string(),
                    url: "https://host/ep1.torrent".to_string(),
                },
                EpisodeLink {
                    label: "Cap 2".to_string(),
                    url: "https://host/ep2.torrent".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_label_whitespace_is_collapsed() {
        let html = table(&row("\n   Temporada 1\n   Capitulo 3  ", "//host/ep3"));
        let rows = parse_episode_links(&html).unwrap();
        assert_eq!(rows[0].as_ref().unwrap().label, "Temporada 1 Capitulo 3");
    }

    #[test]
    fn test_row_without_download_button_is_error() {
        let html = table(&format!(
            r#"<tr><td>Cap 1</td><td><a class="btn" href="//host/ep1">Ver</a></td></tr>{}"#,
            row("Cap 2", "//host/ep2")
        ));
        let rows = parse_episode_links(&html).unwrap();

        assert_eq!(rows.len(), 2);
        assert!(matches!(rows[0], Err(EstrenosError::ElementNotFound(_))));
        assert_eq!(rows[1].as_ref().unwrap().url, "https://host/ep2");
    }

    #[test]
    fn test_header_rows_outside_tbody_are_ignored() {
        let rows = parse_episode_links(&table(&row("Cap 1", "//host/ep1"))).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_missing_tbody() {
        match parse_episode_links("<html><body><p>Sin episodios</p></body></html>") {
            Err(EstrenosError::ElementNotFound(css)) => assert_eq!(css, "tbody"),
            other => panic!("Expected ElementNotFound, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_non_http_gets_https_prefix(rest in "//[a-z]{1,10}/[a-z0-9]{0,10}") {
            prop_assert_eq!(normalize_torrent_url(&rest), format!("https:{}", rest));
        }

        #[test]
        fn prop_http_prefixed_unchanged(rest in "[a-z0-9:/.]{0,20}") {
            let url = format!("http{}", rest);
            prop_assert_eq!(normalize_torrent_url(&url), url);
        }
    }
}
