// Copyright 2026 Storefront QA Contributors
// SPDX-License-Identifier: Apache-2.0

//! Page object for a storefront product page.
//!
//! Translates live DOM state into typed values and hides the selector
//! fallback chains. Every read goes against the current DOM; nothing is
//! cached between calls.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use tracing::debug;

use crate::price;
use crate::selectors;

/// How long to wait for the related-products container before giving up and
/// counting whatever is present.
pub const SECTION_WAIT: Duration = Duration::from_secs(10);

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Outcome of a visibility probe.
///
/// The boolean probes collapse `ProbeError` to "not visible", but callers
/// that need to tell infrastructure failure apart from a genuinely hidden
/// element can match on this directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
    ProbeError,
}

impl Visibility {
    /// Collapse to the boolean the business rules use.
    pub fn as_bool(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

const VISIBILITY_PROBE_JS: &str = r#"function() {
    const rect = this.getBoundingClientRect();
    const style = window.getComputedStyle(this);
    return rect.width > 0
        && rect.height > 0
        && style.display !== 'none'
        && style.visibility !== 'hidden';
}"#;

/// Page object wrapping one product page in a live browser session.
pub struct ProductPage {
    page: Page,
}

impl ProductPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// The underlying browser page handle.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Navigate to a product page and wait for the DOM to be parsed.
    ///
    /// Navigation errors propagate: they are infrastructure failures, not
    /// rule violations.
    pub async fn navigate_to_product(&self, url: &str) -> Result<()> {
        debug!(url, "navigating to product page");
        self.page
            .goto(url)
            .await
            .with_context(|| format!("navigation to {url} failed"))?;
        let _ = self.page.wait_for_navigation().await;
        Ok(())
    }

    /// Current page address.
    pub async fn current_url(&self) -> Result<String> {
        Ok(self
            .page
            .url()
            .await
            .context("failed to read page URL")?
            .unwrap_or_default())
    }

    /// Main product price. A missing element or unparsable text reads as
    /// `0.0` rather than failing; use [`price::parse_price`] directly when
    /// the distinction matters.
    pub async fn main_product_price(&self) -> f64 {
        let text = self.text_of_first(selectors::MAIN_PRICE).await;
        price::parse_price(&text).unwrap_or(0.0)
    }

    /// Trimmed category breadcrumb text, empty when absent.
    pub async fn main_product_category(&self) -> String {
        self.text_of_first(selectors::MAIN_CATEGORY)
            .await
            .trim()
            .to_string()
    }

    /// Number of related item cards.
    ///
    /// Waits up to [`SECTION_WAIT`] for the container to become visible; a
    /// timed-out wait is tolerated and the count read afterward still
    /// reflects whatever the DOM holds at that moment.
    pub async fn related_products_count(&self) -> usize {
        let waited =
            tokio::time::timeout(SECTION_WAIT, self.wait_for_section_visible()).await;
        if waited.is_err() {
            debug!(
                "related-products container not visible after {:?}, counting anyway",
                SECTION_WAIT
            );
        }
        self.related_items().await.len()
    }

    /// Price of the i-th related item, `0.0` when missing or unparsable.
    pub async fn related_product_price(&self, index: usize) -> f64 {
        let text = self.item_text(index, selectors::ITEM_PRICE).await;
        price::parse_price(&text).unwrap_or(0.0)
    }

    /// Trimmed category label of the i-th related item, empty when absent.
    pub async fn related_product_category(&self, index: usize) -> String {
        self.item_text(index, selectors::ITEM_CATEGORY)
            .await
            .trim()
            .to_string()
    }

    /// Click the i-th related item and wait for the resulting navigation.
    pub async fn click_related_product(&self, index: usize) -> Result<()> {
        let items = self.related_items().await;
        let Some(item) = items.get(index) else {
            bail!("no related item at index {index}");
        };
        item.click()
            .await
            .with_context(|| format!("click on related item {index} failed"))?;
        let _ = self.page.wait_for_navigation().await;
        Ok(())
    }

    /// Tri-state visibility of the related-products container.
    pub async fn section_visibility(&self) -> Visibility {
        match self.related_section().await {
            Some(section) => element_visibility(&section).await,
            None => Visibility::Hidden,
        }
    }

    /// Tri-state visibility of the fallback message inside the container.
    pub async fn fallback_visibility(&self) -> Visibility {
        let Some(section) = self.related_section().await else {
            return Visibility::Hidden;
        };
        for selector in selectors::FALLBACK_MESSAGE {
            if let Ok(element) = section.find_element(*selector).await {
                return element_visibility(&element).await;
            }
        }
        Visibility::Hidden
    }

    /// Whether the related-products section is visible. Probe errors read
    /// as not visible; this never fails.
    pub async fn is_related_products_section_visible(&self) -> bool {
        self.section_visibility().await.as_bool()
    }

    /// Whether the fallback message is visible. Probe errors read as not
    /// visible; this never fails.
    pub async fn is_fallback_message_visible(&self) -> bool {
        self.fallback_visibility().await.as_bool()
    }

    // ── element resolution ──

    /// First element matching an ordered selector chain.
    async fn first_match(&self, chain: &[&str]) -> Option<Element> {
        for selector in chain {
            if let Ok(element) = self.page.find_element(*selector).await {
                return Some(element);
            }
        }
        None
    }

    async fn related_section(&self) -> Option<Element> {
        self.first_match(selectors::RELATED_SECTION).await
    }

    /// All related item cards, resolved fresh on every call.
    async fn related_items(&self) -> Vec<Element> {
        let Some(section) = self.related_section().await else {
            return Vec::new();
        };
        for selector in selectors::RELATED_ITEM {
            if let Ok(items) = section.find_elements(*selector).await {
                if !items.is_empty() {
                    return items;
                }
            }
        }
        Vec::new()
    }

    async fn text_of_first(&self, chain: &[&str]) -> String {
        let Some(element) = self.first_match(chain).await else {
            return String::new();
        };
        element.inner_text().await.ok().flatten().unwrap_or_default()
    }

    async fn item_text(&self, index: usize, chain: &[&str]) -> String {
        let items = self.related_items().await;
        let Some(item) = items.get(index) else {
            return String::new();
        };
        for selector in chain {
            if let Ok(element) = item.find_element(*selector).await {
                if let Ok(Some(text)) = element.inner_text().await {
                    return text;
                }
            }
        }
        String::new()
    }

    async fn wait_for_section_visible(&self) {
        loop {
            if self.section_visibility().await == Visibility::Visible {
                return;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

/// Probe whether an element takes up layout space and is not styled away.
async fn element_visibility(element: &Element) -> Visibility {
    match element.call_js_fn(VISIBILITY_PROBE_JS, false).await {
        Ok(ret) => match ret.result.value.as_ref().and_then(|v| v.as_bool()) {
            Some(true) => Visibility::Visible,
            Some(false) => Visibility::Hidden,
            None => Visibility::ProbeError,
        },
        Err(e) => {
            debug!(error = %e, "visibility probe failed");
            Visibility::ProbeError
        }
    }
}
