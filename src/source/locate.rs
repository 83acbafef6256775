use scraper::{ElementRef, Html};

/// Errors that can occur when looking for the most recent minutes.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LocateError {
    /// The front page has no element with the recent meetings id.
    #[error("no element with id '{0}' on the front page")]
    AnchorNotFound(String),

    /// Nothing is listed after the recent meetings anchor.
    #[error("no list item follows the '{0}' anchor")]
    ListItemNotFound(String),

    /// The most recent entry is not a link.
    #[error("the most recent minutes entry has no link")]
    LinkNotFound,

    /// The link has no target.
    #[error("the most recent minutes link has no href")]
    MissingHref,
}

/// Finds the link to the most recent minutes on the wiki's front page.
///
/// The recent meetings are listed after the element whose `id` is
/// `anchor_id`. The first list item after that element, in document order,
/// is the newest meeting, and its first link points at the minutes.
///
/// # Errors
///
/// Returns an error if the anchor, the list item, the link or its `href` is
/// missing.
pub fn recent_minutes_href(markup: &str, anchor_id: &str) -> Result<String, LocateError> {
    let document = Html::parse_document(markup);
    let mut nodes = document.tree.root().descendants();

    nodes
        .by_ref()
        .find(|node| {
            node.value()
                .as_element()
                .is_some_and(|element| element.id() == Some(anchor_id))
        })
        .ok_or_else(|| LocateError::AnchorNotFound(anchor_id.to_string()))?;

    let item = nodes
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "li")
        .ok_or_else(|| LocateError::ListItemNotFound(anchor_id.to_string()))?;

    let link = item
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "a")
        .ok_or(LocateError::LinkNotFound)?;

    let href = link.value().attr("href").ok_or(LocateError::MissingHref)?;
    tracing::debug!(href, "Found most recent minutes");
    Ok(href.to_string())
}

/// Resolves a wiki path against the base URL.
///
/// Exactly one `/` separates the two. Absolute URLs are returned unchanged.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    const ANCHOR: &str = "Recent_Meetings";

    const FRONT_PAGE: &str = r#"<html><body>
<ul><li><a href="/Main_Page">Main page</a></li></ul>
<h2><span class="mw-headline" id="Recent_Meetings">Recent Meetings</span></h2>
<ul>
  <li><b>March</b> <a href="/Meeting_Minutes_03/10/2015">03/10/2015</a> <a href="/Other">other</a></li>
  <li><a href="/Meeting_Minutes_03/03/2015">03/03/2015</a></li>
</ul>
</body></html>"#;

    #[test]
    fn finds_first_link_after_anchor() {
        let href = recent_minutes_href(FRONT_PAGE, ANCHOR).unwrap();
        assert_eq!(href, "/Meeting_Minutes_03/10/2015");
    }

    #[test]
    fn missing_anchor() {
        let error = recent_minutes_href("<p>Welcome</p>", ANCHOR).unwrap_err();
        assert_eq!(error, LocateError::AnchorNotFound(ANCHOR.to_string()));
    }

    #[test]
    fn missing_list_item() {
        let page = r#"<li><a href="/too-early">x</a></li><span id="Recent_Meetings"></span><p>none yet</p>"#;
        let error = recent_minutes_href(page, ANCHOR).unwrap_err();
        assert_eq!(error, LocateError::ListItemNotFound(ANCHOR.to_string()));
    }

    #[test]
    fn missing_link() {
        let page = r#"<span id="Recent_Meetings"></span><ul><li>coming soon</li></ul>"#;
        let error = recent_minutes_href(page, ANCHOR).unwrap_err();
        assert_eq!(error, LocateError::LinkNotFound);
    }

    #[test]
    fn missing_href() {
        let page = r#"<span id="Recent_Meetings"></span><ul><li><a name="x">03/10</a></li></ul>"#;
        let error = recent_minutes_href(page, ANCHOR).unwrap_err();
        assert_eq!(error, LocateError::MissingHref);
    }

    #[test_case("http://wiki.lvl1.org", "/Minutes", "http://wiki.lvl1.org/Minutes"; "leading slash")]
    #[test_case("http://wiki.lvl1.org/", "/Minutes", "http://wiki.lvl1.org/Minutes"; "slash on both sides")]
    #[test_case("http://wiki.lvl1.org", "03/10/2015", "http://wiki.lvl1.org/03/10/2015"; "no slash")]
    #[test_case("http://wiki.lvl1.org", "https://mirror.example/Minutes", "https://mirror.example/Minutes"; "absolute link")]
    fn joins_urls(base: &str, path: &str, expected: &str) {
        assert_eq!(join_url(base, path), expected);
    }
}
