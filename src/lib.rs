// Copyright 2026 Storefront QA Contributors
// SPDX-License-Identifier: Apache-2.0

//! End-to-end suite validating the storefront related-products rail.
//!
//! The library half holds the page object, selector fallback chains, price
//! math, fixture types, and request interception. The scenarios themselves
//! live in `tests/related_products.rs` and drive a headless Chromium
//! through [`session::BrowserSession`].

pub mod fixture;
pub mod intercept;
pub mod page;
pub mod price;
pub mod selectors;
pub mod session;

pub use fixture::{FixtureFile, ProductFixture};
pub use page::{ProductPage, Visibility};
pub use price::{parse_price, price_in_range, DEFAULT_PRICE_TOLERANCE};
pub use session::BrowserSession;
