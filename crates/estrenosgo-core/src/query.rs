//! Search query builder
//!
//! The site's search engine does poorly with the full release name, so the
//! last word of every search string is dropped before querying.

/// Drop the trailing word of a search string.
///
/// Removes the run of non-whitespace characters that follows the last
/// whitespace character. The whitespace itself is kept. A single trailing
/// newline is preserved and ignored when locating the last word. Strings
/// without whitespace, or ending in whitespace, come back unchanged.
///
/// # Examples
/// ```
/// use estrenosgo_core::query::clean_search_string;
///
/// assert_eq!(clean_search_string("Show Name S01"), "Show Name ");
/// assert_eq!(clean_search_string("Show"), "Show");
/// ```
pub fn clean_search_string(search_string: &str) -> String {
    let (body, newline) = match search_string.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (search_string, ""),
    };

    match body.rfind(is_search_whitespace) {
        Some(idx) => {
            // Keep the whitespace character itself
            let ws_len = body[idx..].chars().next().map_or(1, char::len_utf8);
            format!("{}{}", &body[..idx + ws_len], newline)
        }
        None => search_string.to_string(),
    }
}

/// Unicode whitespace plus the ASCII information separators U+001C..U+001F.
fn is_search_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Build the request path for a search string: `/buscar/<cleaned>`.
///
/// The cleaned string is percent-encoded, except for `/`, which goes
/// through literally as the site expects.
pub fn search_path(search_string: &str) -> String {
    let cleaned = clean_search_string(search_string);
    let encoded = cleaned
        .split('/')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("/buscar/{}", encoded)
}
