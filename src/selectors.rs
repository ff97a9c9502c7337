//! Selector fallback chains for the storefront DOM.
//!
//! Markup varies between environments (structured test ids in staging,
//! legacy CSS classes and bare landmarks in production), so every logical
//! element is resolved through an ordered candidate list and the first
//! selector that matches wins.

/// Related-products container.
pub const RELATED_SECTION: &[&str] = &[
    r#"[data-testid="related-products"]"#,
    ".related-products",
    "#related-products",
];

/// Related item cards, scoped inside the container.
pub const RELATED_ITEM: &[&str] = &[
    ".item",
    r#"[data-testid="product-item"]"#,
    ".product-card",
];

/// Main product price.
pub const MAIN_PRICE: &[&str] = &[
    r#"[data-testid="price"]"#,
    ".price",
    ".x-price-primary",
];

/// Main product category breadcrumb.
pub const MAIN_CATEGORY: &[&str] = &[
    r#"[data-testid="category"]"#,
    ".breadcrumb",
    r#"nav[aria-label="breadcrumb"]"#,
];

/// Price inside a related item card.
pub const ITEM_PRICE: &[&str] = &[".price", r#"[data-testid="price"]"#];

/// Category label inside a related item card.
pub const ITEM_CATEGORY: &[&str] = &[".category", r#"[data-testid="category"]"#];

/// Fallback message, scoped inside the container.
pub const FALLBACK_MESSAGE: &[&str] = &[".fallback", r#"[data-testid="fallback-message"]"#];
