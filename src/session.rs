//! Headless Chromium session management.
//!
//! One browser per suite run; each scenario gets its own fresh page so no
//! state leaks between cases.

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::path::PathBuf;
use tracing::debug;

/// Find the Chromium binary path.
pub fn find_chromium() -> Option<PathBuf> {
    // 1. STOREFRONT_CHROMIUM_PATH env
    if let Ok(p) = std::env::var("STOREFRONT_CHROMIUM_PATH") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. ~/.storefront-e2e/chromium/
    if let Some(home) = dirs::home_dir() {
        let candidates = if cfg!(target_os = "macos") {
            vec![
                home.join(".storefront-e2e/chromium/chrome-mac-arm64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
                home.join(".storefront-e2e/chromium/chrome-mac-x64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
                home.join(".storefront-e2e/chromium/chrome"),
            ]
        } else {
            vec![
                home.join(".storefront-e2e/chromium/chrome-linux64/chrome"),
                home.join(".storefront-e2e/chromium/chrome"),
            ]
        };
        for c in candidates {
            if c.exists() {
                return Some(c);
            }
        }
    }

    // 3. System PATH
    for name in ["google-chrome", "chromium", "chromium-browser"] {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }

    // 4. Common macOS location
    if cfg!(target_os = "macos") {
        let common =
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if common.exists() {
            return Some(common);
        }
    }

    None
}

/// A headless browser shared across scenarios.
pub struct BrowserSession {
    browser: Browser,
}

impl BrowserSession {
    /// Launch a headless Chromium instance.
    pub async fn launch() -> Result<Self> {
        let chrome_path = find_chromium().context(
            "Chromium not found. Install Chrome or set STOREFRONT_CHROMIUM_PATH.",
        )?;
        debug!(path = %chrome_path.display(), "launching headless Chromium");

        let config = BrowserConfig::builder()
            .chrome_executable(chrome_path)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-background-networking")
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build browser config: {e}"))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch Chromium")?;

        // Drive the CDP message loop for the lifetime of the browser.
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        Ok(Self { browser })
    }

    /// Open a fresh blank page for one scenario.
    pub async fn new_page(&self) -> Result<Page> {
        self.browser
            .new_page("about:blank")
            .await
            .context("failed to create new page")
    }

    /// Close the browser process.
    pub async fn close(mut self) -> Result<()> {
        self.browser
            .close()
            .await
            .context("failed to close browser")?;
        let _ = self.browser.wait().await;
        Ok(())
    }
}
