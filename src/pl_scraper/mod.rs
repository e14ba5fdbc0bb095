pub(crate) mod browser;
pub(crate) mod events;
pub(crate) mod match_report;
mod selectors;
pub(crate) mod stats;

pub use browser::{BrowserPage, BrowserSource};
pub use selectors::PageSelectors;

use ::scraper::ElementRef;

use crate::error::Result;

/// A rendered match report page, addressed by XPath.
///
/// Every lookup fails with an error rather than returning a partial value;
/// the caller drops the page (and its browser session) on the first error.
pub trait MatchPage {
    /// Wait until the element exists and return its rendered text.
    fn wait_for_text(&self, xpath: &str) -> Result<String>;

    /// Rendered text of an element that is expected to exist already.
    fn text(&self, xpath: &str) -> Result<String>;

    /// Rendered text of each `div` child of a container, in document order.
    ///
    /// The container must exist; an empty container yields an empty list.
    fn child_texts(&self, container: &str) -> Result<Vec<String>>;

    /// Wait until the element exists, then click it.
    fn click(&self, xpath: &str) -> Result<()>;

    /// Wait until an element matching `xpath` exists.
    fn wait_for(&self, xpath: &str) -> Result<()>;

    /// Serialized HTML of the current document.
    fn content(&self) -> Result<String>;
}

/// Opens one isolated page session per match.
pub trait PageSource {
    type Page: MatchPage;

    /// Open a fresh session and navigate it to `url`.
    ///
    /// Dropping the returned page must release the session.
    fn open(&self, url: &str) -> Result<Self::Page>;
}

/// Whitespace-normalized text content of an element.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace(['\n', '\t'], "")
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::{MatchPage, PageSelectors, PageSource};
    use crate::error::{Result, ScrapeError};

    /// Rendered page after switching to the statistics tab.
    pub(crate) const STATS_PAGE: &str = r#"
        <html><body>
        <table><tr><td>Form guide</td></tr></table>
        <div class="mcStatsTab">
          <table>
            <thead><tr>
              <th><p>Liverpool</p></th><th></th><th><p>Norwich</p></th>
            </tr></thead>
            <tbody>
              <tr><td><p>65.3</p></td><td><p>Possession %</p></td><td><p>34.7</p></td></tr>
              <tr><td><p>7</p></td><td><p>Shots on target</p></td><td><p>5</p></td></tr>
              <tr><td><p>15</p></td><td><p>Shots</p></td><td><p>12</p></td></tr>
              <tr><td><p>1</p></td><td><p>Yellow cards</p></td><td><p>0</p></td></tr>
              <tr><td><p>1.84</p></td><td><p>Expected goals</p></td><td><p>0.45</p></td></tr>
            </tbody>
          </table>
        </div>
        </body></html>
    "#;

    /// In-memory page: XPath → text, container XPath → entry texts.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct FakePage {
        pub texts: HashMap<String, String>,
        pub children: HashMap<String, Vec<String>>,
        pub html: String,
        closed: Option<Arc<AtomicUsize>>,
    }

    impl FakePage {
        pub fn with_text(mut self, xpath: &str, text: &str) -> Self {
            self.texts.insert(xpath.to_string(), text.to_string());
            self
        }

        pub fn with_children(mut self, xpath: &str, entries: &[&str]) -> Self {
            self.children.insert(
                xpath.to_string(),
                entries.iter().map(|e| e.to_string()).collect(),
            );
            self
        }

        pub fn with_html(mut self, html: &str) -> Self {
            self.html = html.to_string();
            self
        }

        fn lookup(&self, xpath: &str) -> Result<String> {
            self.texts
                .get(xpath)
                .cloned()
                .ok_or(ScrapeError::ElementNotFound {
                    context: "fake page element",
                })
        }
    }

    impl Drop for FakePage {
        fn drop(&mut self) {
            if let Some(closed) = &self.closed {
                closed.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    impl MatchPage for FakePage {
        fn wait_for_text(&self, xpath: &str) -> Result<String> {
            self.lookup(xpath)
        }

        fn text(&self, xpath: &str) -> Result<String> {
            self.lookup(xpath)
        }

        fn child_texts(&self, container: &str) -> Result<Vec<String>> {
            self.children
                .get(container)
                .cloned()
                .ok_or(ScrapeError::ElementNotFound {
                    context: "fake event container",
                })
        }

        fn click(&self, xpath: &str) -> Result<()> {
            self.lookup(xpath).map(|_| ())
        }

        fn wait_for(&self, xpath: &str) -> Result<()> {
            self.lookup(xpath).map(|_| ())
        }

        fn content(&self) -> Result<String> {
            Ok(self.html.clone())
        }
    }

    /// Report page of Liverpool 4-1 Norwich (10 Aug 2019) addressed by `selectors`.
    pub(crate) fn liverpool_norwich(selectors: &PageSelectors) -> FakePage {
        FakePage::default()
            .with_text(&selectors.consent_banner, "Accept All Cookies")
            .with_text(&selectors.date, "Sat 10 Aug 2019")
            .with_text(&selectors.home_team, "Liverpool")
            .with_text(&selectors.away_team, "Norwich")
            .with_text(&selectors.full_time_score, "4-1")
            .with_text(&selectors.half_time_score, "Half Time: 4-0")
            .with_children(&selectors.home_events, &["Goal 7'", "Goal 45+2'"])
            .with_children(&selectors.away_events, &["Goal 64'", "Yellow card 80'"])
            .with_text(&selectors.stats_tab, "Stats")
            .with_text(&selectors.stats_table_rows, "")
            .with_html(STATS_PAGE)
    }

    /// Serves fake pages by URL and counts opened and closed sessions.
    #[derive(Debug, Default)]
    pub(crate) struct FakeSource {
        pub pages: HashMap<String, FakePage>,
        pub opened: Arc<AtomicUsize>,
        pub closed: Arc<AtomicUsize>,
    }

    impl FakeSource {
        pub fn with_page(mut self, url: &str, page: FakePage) -> Self {
            self.pages.insert(url.to_string(), page);
            self
        }

        pub fn opened(&self) -> usize {
            self.opened.load(Ordering::SeqCst)
        }

        pub fn closed(&self) -> usize {
            self.closed.load(Ordering::SeqCst)
        }
    }

    impl PageSource for FakeSource {
        type Page = FakePage;

        fn open(&self, url: &str) -> Result<FakePage> {
            let mut page = self
                .pages
                .get(url)
                .cloned()
                .ok_or(ScrapeError::ElementNotFound {
                    context: "fake page for url",
                })?;
            self.opened.fetch_add(1, Ordering::SeqCst);
            page.closed = Some(Arc::clone(&self.closed));
            Ok(page)
        }
    }
}
