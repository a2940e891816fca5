// src/listing/html.rs
// =============================================================================
// Turns an autoindex HTML page into the list of entries it names.
//
// Autoindex pages (nginx, Apache, python -m http.server...) are little more
// than a <pre> full of anchors:
//
//   <a href="../">../</a>
//   <a href="sub/">sub/</a>
//   <a href="README">README</a>
//
// Directories carry a trailing '/'. The parent link is dropped here so the
// crawler never walks back up the tree.
//
// Rust concepts:
// - let-else: bail out early when a precondition fails
// - Iterators: filter_map to skip anchors we can't use
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

/// The parent-directory entry every listing carries.
const PARENT_LINK: &str = "../";

/// One anchor from a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The href exactly as written in the page, e.g. "sub/" or "README"
    pub href: String,
    /// The href resolved against the listing's own URL
    pub url: Url,
}

impl Link {
    /// A subdirectory entry: the href ends with '/'.
    pub fn is_directory(&self) -> bool {
        self.href.ends_with('/')
    }

    /// The marker file: the href is exactly "README".
    pub fn is_marker(&self) -> bool {
        self.href == "README"
    }
}

// Extracts every entry of a listing page, in page order
//
// Parameters:
//   html: the listing body
//   page_url: the URL the body was fetched from (used to resolve hrefs)
//
// Returns: the entries, minus the parent link and minus hrefs that don't
//          resolve to a URL. Garbage in gives an empty Vec, never a panic.
pub fn extract_listing_links(html: &str, page_url: &Url) -> Vec<Link> {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| *href != PARENT_LINK)
        .filter_map(|href| {
            let url = page_url.join(href).ok()?;
            Some(Link {
                href: href.to_string(),
                url,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Url {
        Url::parse("http://localhost:8080/.hidden/").unwrap()
    }

    #[test]
    fn test_extracts_entries_in_listing_order() {
        let html = r#"<html><body><pre>
            <a href="../">../</a>
            <a href="zeta/">zeta/</a>
            <a href="alpha/">alpha/</a>
            <a href="README">README</a>
        </pre></body></html>"#;

        let links = extract_listing_links(html, &page());
        let hrefs: Vec<&str> = links.iter().map(|l| l.href.as_str()).collect();

        assert_eq!(hrefs, vec!["zeta/", "alpha/", "README"]);
    }

    #[test]
    fn test_resolves_relative_hrefs() {
        let html = r#"<a href="sub/">sub/</a><a href="README">README</a>"#;
        let links = extract_listing_links(html, &page());

        assert_eq!(links[0].url.as_str(), "http://localhost:8080/.hidden/sub/");
        assert_eq!(links[1].url.as_str(), "http://localhost:8080/.hidden/README");
    }

    #[test]
    fn test_only_parent_links_gives_nothing() {
        let html = r#"<a href="../">../</a><a href="../">../</a>"#;
        assert!(extract_listing_links(html, &page()).is_empty());
    }

    #[test]
    fn test_garbage_body_gives_nothing() {
        let links = extract_listing_links("\u{0}<<<not html at all>>", &page());
        assert!(links.is_empty());
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<a name="top">top</a><a href="sub/">sub/</a>"#;
        let links = extract_listing_links(html, &page());
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_link_kinds() {
        let html = r#"
            <a href="sub/">sub/</a>
            <a href="README">README</a>
            <a href="README.md">README.md</a>
        "#;
        let links = extract_listing_links(html, &page());

        assert!(links[0].is_directory());
        assert!(!links[0].is_marker());
        assert!(links[1].is_marker());
        assert!(!links[1].is_directory());
        assert!(!links[2].is_marker());
        assert!(!links[2].is_directory());
    }
}
