use std::sync::Arc;
use std::time::Duration;

use headless_chrome::browser::tab::NoElementFound;
use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::{debug, instrument};

use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use crate::pl_scraper::{MatchPage, PageSelectors, PageSource};

/// Launches a dedicated headless Chrome process for every page.
#[derive(Debug, Clone)]
pub struct BrowserSource {
    headless: bool,
    window_size: (u32, u32),
    element_timeout: Duration,
}

impl BrowserSource {
    pub fn new(config: &ScrapeConfig) -> Self {
        Self {
            headless: config.headless,
            window_size: config.window_size,
            element_timeout: config.element_timeout,
        }
    }

    fn launch_options(&self) -> Result<LaunchOptions<'static>> {
        LaunchOptions::default_builder()
            .headless(self.headless)
            .sandbox(false)
            .window_size(Some(self.window_size))
            .build()
            .map_err(|e| ScrapeError::LaunchOptions(e.to_string()))
    }
}

impl PageSource for BrowserSource {
    type Page = BrowserPage;

    #[instrument(skip(self))]
    fn open(&self, url: &str) -> Result<BrowserPage> {
        let browser =
            Browser::new(self.launch_options()?).map_err(ScrapeError::browser("launch chrome"))?;
        let tab = browser
            .new_tab()
            .map_err(ScrapeError::browser("open a tab"))?;
        tab.set_default_timeout(self.element_timeout);

        tab.navigate_to(url)
            .map_err(ScrapeError::browser("navigate"))?
            .wait_until_navigated()
            .map_err(ScrapeError::browser("finish navigation"))?;
        debug!(url, "page loaded");

        Ok(BrowserPage {
            tab,
            _browser: browser,
        })
    }
}

/// A tab in its own browser process. Dropping it kills the process.
pub struct BrowserPage {
    tab: Arc<Tab>,
    _browser: Browser,
}

impl MatchPage for BrowserPage {
    fn wait_for_text(&self, xpath: &str) -> Result<String> {
        self.tab
            .wait_for_xpath(xpath)
            .map_err(ScrapeError::browser("wait for element"))?
            .get_inner_text()
            .map_err(ScrapeError::browser("read element text"))
    }

    fn text(&self, xpath: &str) -> Result<String> {
        self.tab
            .find_element_by_xpath(xpath)
            .map_err(ScrapeError::browser("find element"))?
            .get_inner_text()
            .map_err(ScrapeError::browser("read element text"))
    }

    fn child_texts(&self, container: &str) -> Result<Vec<String>> {
        self.tab
            .find_element_by_xpath(container)
            .map_err(ScrapeError::browser("find event container"))?;

        let entries = match self
            .tab
            .find_elements_by_xpath(&PageSelectors::event_entries(container))
        {
            Ok(entries) => entries,
            Err(e) if e.downcast_ref::<NoElementFound>().is_some() => return Ok(vec![]),
            Err(e) => return Err(ScrapeError::browser("find event entries")(e)),
        };

        entries
            .iter()
            .map(|entry| {
                entry
                    .get_inner_text()
                    .map_err(ScrapeError::browser("read event entry"))
            })
            .collect()
    }

    fn click(&self, xpath: &str) -> Result<()> {
        self.tab
            .wait_for_xpath(xpath)
            .map_err(ScrapeError::browser("wait for clickable element"))?
            .click()
            .map_err(ScrapeError::browser("click element"))?;
        Ok(())
    }

    fn wait_for(&self, xpath: &str) -> Result<()> {
        self.tab
            .wait_for_xpath(xpath)
            .map_err(ScrapeError::browser("wait for element"))?;
        Ok(())
    }

    fn content(&self) -> Result<String> {
        self.tab
            .get_content()
            .map_err(ScrapeError::browser("read page content"))
    }
}
