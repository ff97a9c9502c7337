// Copyright 2026 Storefront QA Contributors
// SPDX-License-Identifier: Apache-2.0

//! Price parsing and tolerance math shared by the page object and the
//! scenarios. Pure functions, no browser involved.

/// Default allowed fractional deviation between a related item's price and
/// the main product's price.
pub const DEFAULT_PRICE_TOLERANCE: f64 = 0.2;

/// Extract a price from raw element text.
///
/// Strips every character that is not a digit, `.`, or `,`, then drops the
/// commas (thousands separators, never decimal marks) and parses the longest
/// leading numeric run of what remains — digits plus at most one decimal
/// point. Price text in the wild carries trailing punctuation and stray
/// dots, so the parse is a lenient prefix parse, not a strict whole-string
/// one. `None` means the text carried no number at all — distinct from a
/// genuine `0.0`, which callers collapse to only where the page-level
/// contract demands it.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in cleaned.char_indices() {
        match c {
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }
    cleaned[..end].parse::<f64>().ok()
}

/// Inclusive price-band check: `related` must lie within
/// `[main × (1 − tolerance), main × (1 + tolerance)]`.
pub fn price_in_range(main: f64, related: f64, tolerance: f64) -> bool {
    let lower = main * (1.0 - tolerance);
    let upper = main * (1.0 + tolerance);
    related >= lower && related <= upper
}
