// Copyright 2026 Storefront QA Contributors
// SPDX-License-Identifier: Apache-2.0

//! The static fixture dataset: which products to test and the rule
//! parameters applied to each.
//!
//! The dataset is a JSON document with a top-level `products` array, loaded
//! once per run. Record order matters only for scenario naming.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Path of the bundled dataset, relative to the crate root.
pub const DEFAULT_FIXTURE_PATH: &str = "fixtures/related_products.json";

/// Errors raised while loading the fixture dataset.
#[derive(thiserror::Error, Debug)]
pub enum FixtureError {
    #[error("fixture read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fixture parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level fixture document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureFile {
    pub products: Vec<ProductFixture>,
}

/// One product under test and its per-record rule parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFixture {
    /// Display name, used for scenario naming and failure messages.
    pub name: String,
    /// Product page address.
    pub url: String,
    /// Upper bound on related items shown for this product.
    pub max_related_products: u32,
    /// Allowed fractional price deviation, in `[0, 1]`.
    pub price_tolerance_percentage: f64,
    /// Marks the record driven through the API-failure scenario.
    #[serde(default)]
    pub test_fallback: bool,
}

impl FixtureFile {
    /// Load the fixture document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let raw = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The record flagged for the fallback scenario, if any.
    ///
    /// First flagged record wins when several carry the flag.
    pub fn fallback_record(&self) -> Option<&ProductFixture> {
        self.products.iter().find(|p| p.test_fallback)
    }
}
