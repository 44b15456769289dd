//! `Link`-header pagination: parsing and page-set derivation
//!
//! The platform communicates pagination through a `Link` response header
//! carrying `rel="next"` and `rel="last"` relations with page numbers
//! embedded in query strings. Everything here is pure so it can be tested
//! without a server.

use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Url;

lazy_static! {
    static ref LINK_RE: Regex = Regex::new(r#"<([^>]+)>;\s*rel="(\w+)""#).expect("link relation pattern");
}

/// The pagination relations pulled out of one `Link` header.
#[derive(Debug, Default)]
pub(crate) struct PageLinks {
    pub next: Option<Url>,
    pub last: Option<Url>,
}

/// Parses a `Link` header value into its `next`/`last` relations.
///
/// Relations other than `next` and `last` (`first`, `prev`) are ignored;
/// a malformed URL inside a relation is skipped rather than fatal.
pub(crate) fn parse_links(header: Option<&str>) -> PageLinks {
    let mut links = PageLinks::default();
    let Some(header) = header else {
        return links;
    };

    for capture in LINK_RE.captures_iter(header) {
        let Ok(url) = Url::parse(&capture[1]) else {
            continue;
        };
        match &capture[2] {
            "next" => links.next = Some(url),
            "last" => links.last = Some(url),
            _ => {}
        }
    }

    links
}

/// Reads the `page` query parameter out of a pagination link.
pub(crate) fn page_number(url: &Url) -> Option<u32> {
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

/// Infers a total item count from a `per_page=1` probe response.
///
/// With one item per page, the last page number is the item count. When the
/// header carries no `last` relation the result set fit on a single page:
/// the count is 1 if the page held an item, 0 otherwise.
pub(crate) fn probed_count(links: &PageLinks, first_page_has_item: bool) -> i64 {
    match links.last.as_ref().and_then(page_number) {
        Some(last) => i64::from(last),
        None if first_page_has_item => 1,
        None => 0,
    }
}

/// Derives the URLs for every page after the first.
///
/// Pages run from `next` (lower bound) through `last` (upper bound)
/// inclusive. Each URL keeps all of the original query parameters except
/// `page`, which is overwritten.
pub(crate) fn page_urls(next: &Url, last: &Url) -> Vec<Url> {
    let first_page = page_number(next).unwrap_or(2);
    let last_page = page_number(last).unwrap_or(2);
    log::debug!("commit URL pages from {first_page} to {last_page}");

    (first_page..=last_page)
        .map(|page| with_page(next, page))
        .collect()
}

fn with_page(url: &Url, page: u32) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "page")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut out = url.clone();
    {
        let mut query = out.query_pairs_mut();
        query.clear();
        for (key, value) in &kept {
            query.append_pair(key, value);
        }
        query.append_pair("page", &page.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "<https://api.github.com/repositories/1/pulls?per_page=1&state=all&page=2>; rel=\"next\", <https://api.github.com/repositories/1/pulls?per_page=1&state=all&page=10>; rel=\"last\"";

    #[test]
    fn parses_next_and_last_relations() {
        let links = parse_links(Some(HEADER));
        assert_eq!(page_number(links.next.as_ref().unwrap()), Some(2));
        assert_eq!(page_number(links.last.as_ref().unwrap()), Some(10));
    }

    #[test]
    fn missing_header_has_no_relations() {
        let links = parse_links(None);
        assert!(links.next.is_none());
        assert!(links.last.is_none());
    }

    #[test]
    fn probe_reads_count_off_the_last_page() {
        let links = parse_links(Some(HEADER));
        assert_eq!(probed_count(&links, true), 10);
    }

    #[test]
    fn probe_without_last_link_counts_the_single_page() {
        assert_eq!(probed_count(&parse_links(None), true), 1);
        assert_eq!(probed_count(&parse_links(None), false), 0);
    }

    #[test]
    fn page_urls_cover_next_through_last_inclusive() {
        let next =
            Url::parse("https://api.github.com/repos/o/r/commits?per_page=100&since=2021-11-01T00:00:00Z&page=2")
                .unwrap();
        let last =
            Url::parse("https://api.github.com/repos/o/r/commits?per_page=100&since=2021-11-01T00:00:00Z&page=5")
                .unwrap();

        let urls = page_urls(&next, &last);
        // One request per remaining page: 2, 3, 4, 5.
        assert_eq!(urls.len(), 4);
        for (offset, url) in urls.iter().enumerate() {
            assert_eq!(page_number(url), Some(2 + offset as u32));
            let pairs: Vec<(String, String)> = url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            assert!(pairs.contains(&("per_page".into(), "100".into())));
            assert!(pairs.contains(&("since".into(), "2021-11-01T00:00:00Z".into())));
        }
    }
}
