use anyhow::{Context, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .expect("Failed to build launch options");

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    /// Block until `selector` is present. Expiry is a readiness failure
    /// naming the selector, distinct from any later text mismatch.
    pub fn wait_for(&self, selector: &str, timeout: Duration) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .with_context(|| format!("timed out waiting for {selector} to appear"))?;
        Ok(())
    }

    /// Trimmed text content of the first element matching `selector`.
    pub fn inner_text(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text.trim().to_string())
    }

    pub fn title(&self) -> Result<String> {
        self.tab.get_title()
    }

    /// Activate the control (button or link) whose visible text is
    /// exactly `text`.
    pub fn click_by_text(&self, text: &str) -> Result<()> {
        let xpath = format!("//*[self::button or self::a][normalize-space(.)='{text}']");
        let element = self
            .tab
            .wait_for_xpath(&xpath)
            .with_context(|| format!("no control with visible text {text:?}"))?;
        element.click()?;
        Ok(())
    }

    /// Evaluate a script on the current page, discarding its value.
    pub fn eval(&self, js: &str) -> Result<()> {
        self.tab.evaluate(js, false)?;
        Ok(())
    }

    /// Best-effort localStorage write: evaluation failures are swallowed,
    /// seeding must never decide the scenario outcome by itself.
    pub fn seed_local_storage(&self, script: &str) {
        if let Err(e) = self.eval(script) {
            tracing::debug!("storage seeding failed, continuing: {e}");
        }
    }
}
