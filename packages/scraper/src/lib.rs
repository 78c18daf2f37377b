#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Weekly-report link discovery.
//!
//! The city publishes its crime statistics page with a set of report links
//! rendered as `<a aria-label="...">` elements. The previous week's
//! selected-incident PDF is identified by its anchor text, not by a stable
//! URL; the href changes every week. This crate fetches the page, finds
//! the first labelled anchor whose text contains the configured label, and
//! resolves its href against the site base URL.
//!
//! A missing link is a fatal [`ScrapeError::LinkNotFound`]: it means the
//! page structure changed upstream, and downloading anything else would
//! produce a silently wrong report.

use scraper::{Html, Selector};

/// Errors that can occur while locating the report PDF.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The HTTP request for the statistics page failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No anchor with the expected label text was found on the page.
    #[error("no report link labelled '{label}' found on {url}")]
    LinkNotFound {
        /// The anchor text that was searched for.
        label: String,
        /// The page that was searched.
        url: String,
    },
}

/// Where and how to find the weekly report link.
pub struct ReportPage<'a> {
    /// URL of the statistics page listing the report links.
    pub url: &'a str,
    /// Site base URL used to resolve relative hrefs.
    pub base_url: &'a str,
    /// Anchor text identifying the report link (e.g.
    /// `"Previous Week Selected Incident Report (PDF)"`).
    pub link_label: &'a str,
}

/// Extracts the href of the first labelled anchor whose text contains
/// `label`.
///
/// Only anchors carrying an `aria-label` attribute are considered: that is
/// how the page marks up its report links, and it keeps navigation anchors
/// with coincidentally similar text out of the match.
#[must_use]
pub fn find_report_href(html: &str, label: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let anchor_sel = Selector::parse("a[aria-label]").unwrap_or_else(|_| unreachable!());

    for anchor in document.select(&anchor_sel) {
        let text: String = anchor.text().collect();
        if text.contains(label) {
            return anchor.value().attr("href").map(str::to_owned);
        }
    }

    None
}

/// Resolves an href from the statistics page against the site base URL.
///
/// The page links its PDFs with site-relative hrefs; absolute hrefs are
/// passed through untouched.
#[must_use]
pub fn resolve_report_url(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_owned()
    } else {
        format!("{}{href}", base_url.trim_end_matches('/'))
    }
}

/// Fetches the statistics page and returns the absolute URL of the weekly
/// report PDF.
///
/// # Errors
///
/// Returns [`ScrapeError::Http`] if the page fetch fails and
/// [`ScrapeError::LinkNotFound`] if no anchor carries the expected label
/// (the upstream page structure changed).
pub async fn locate_report_pdf(page: &ReportPage<'_>) -> Result<String, ScrapeError> {
    let client = reqwest::Client::builder()
        .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36")
        .timeout(std::time::Duration::from_secs(120))
        .connect_timeout(std::time::Duration::from_secs(30))
        .build()?;

    log::info!("fetching statistics page at {}", page.url);

    let response = client.get(page.url).send().await?.error_for_status()?;
    let body = response.text().await?;

    // Parse in a non-async block (Html is not Send).
    let href = find_report_href(&body, page.link_label);

    let Some(href) = href else {
        return Err(ScrapeError::LinkNotFound {
            label: page.link_label.to_owned(),
            url: page.url.to_owned(),
        });
    };

    let url = resolve_report_url(page.base_url, &href);
    log::info!("found report link: {url}");

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <a href="/About">About the Department</a>
          <a aria-label="Open crime dashboard" href="/Dashboard">Crime Dashboard</a>
          <a aria-label="Download report" href="/DocumentCenter/View/12345">
            Previous Week Selected Incident Report (PDF)
          </a>
          <a aria-label="Download report" href="/DocumentCenter/View/99999">
            Monthly Summary Report (PDF)
          </a>
        </body></html>
    "#;

    #[test]
    fn finds_anchor_by_label_text() {
        let href = find_report_href(PAGE, "Previous Week Selected Incident Report (PDF)");
        assert_eq!(href.as_deref(), Some("/DocumentCenter/View/12345"));
    }

    #[test]
    fn ignores_anchors_without_aria_label() {
        // "About the Department" contains "About" but has no aria-label.
        assert_eq!(find_report_href(PAGE, "About"), None);
    }

    #[test]
    fn missing_label_yields_none() {
        assert_eq!(find_report_href(PAGE, "Annual Report (PDF)"), None);
    }

    #[test]
    fn resolves_relative_hrefs_against_base() {
        assert_eq!(
            resolve_report_url("https://www.garlandtx.gov", "/DocumentCenter/View/12345"),
            "https://www.garlandtx.gov/DocumentCenter/View/12345"
        );
        assert_eq!(
            resolve_report_url("https://www.garlandtx.gov/", "/DocumentCenter/View/12345"),
            "https://www.garlandtx.gov/DocumentCenter/View/12345"
        );
    }

    #[test]
    fn absolute_hrefs_pass_through() {
        assert_eq!(
            resolve_report_url(
                "https://www.garlandtx.gov",
                "https://cdn.example.com/report.pdf"
            ),
            "https://cdn.example.com/report.pdf"
        );
    }
}
