//! Related-products business-rule scenarios.
//!
//! One scenario iteration per fixture record plus three fixed scenarios.
//! Each case runs against a fresh page, so no state leaks between records;
//! a failing record does not stop its siblings.
//!
//! All of these need a Chromium install and a reachable storefront, so they
//! are `#[ignore]`d by default — run with `cargo test -- --ignored`.

use anyhow::{ensure, Context, Result};
use url::Url;

use storefront_e2e::fixture::FixtureFile;
use storefront_e2e::intercept;
use storefront_e2e::price::price_in_range;
use storefront_e2e::{BrowserSession, ProductFixture, ProductPage};

const FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/related_products.json"
);

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn load_fixture() -> FixtureFile {
    FixtureFile::load(FIXTURE_PATH).expect("fixture dataset must load")
}

/// The per-record scenario: count bound, then per-item price band.
async fn verify_related_products(page: &ProductPage, record: &ProductFixture) -> Result<()> {
    page.navigate_to_product(&record.url).await?;

    // The lower half of the count rule (0 <= count) is structural in usize.
    let count = page.related_products_count().await;
    ensure!(
        count <= record.max_related_products as usize,
        "{}: {count} related items shown, at most {} allowed",
        record.name,
        record.max_related_products
    );

    if count > 0 {
        let main_price = page.main_product_price().await;
        for index in 0..count {
            let related_price = page.related_product_price(index).await;
            ensure!(
                price_in_range(main_price, related_price, record.price_tolerance_percentage),
                "{}: related item {index} price {related_price} outside ±{:.0}% of {main_price}",
                record.name,
                record.price_tolerance_percentage * 100.0
            );
        }
    }

    Ok(())
}

#[tokio::test]
#[ignore] // Requires Chromium and a reachable storefront
async fn related_products_rules_hold_for_every_fixture_record() -> Result<()> {
    init_logging();
    let fixture = load_fixture();
    let session = BrowserSession::launch().await?;

    let mut failures = Vec::new();
    for record in &fixture.products {
        let page = ProductPage::new(session.new_page().await?);
        if let Err(err) = verify_related_products(&page, record).await {
            failures.push(format!("{err:#}"));
        }
    }

    session.close().await?;
    ensure!(
        failures.is_empty(),
        "{} record(s) failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
    Ok(())
}

#[tokio::test]
#[ignore] // Requires Chromium and a reachable storefront
async fn related_products_section_is_visible_on_first_record() -> Result<()> {
    init_logging();
    let fixture = load_fixture();
    let record = fixture.products.first().context("fixture has no products")?;

    let session = BrowserSession::launch().await?;
    let page = ProductPage::new(session.new_page().await?);
    page.navigate_to_product(&record.url).await?;

    ensure!(
        page.is_related_products_section_visible().await,
        "related-products section not visible on {}",
        record.name
    );
    session.close().await
}

#[tokio::test]
#[ignore] // Requires Chromium and a reachable storefront
async fn clicking_a_related_product_changes_the_address() -> Result<()> {
    init_logging();
    let fixture = load_fixture();
    let record = fixture.products.first().context("fixture has no products")?;

    let session = BrowserSession::launch().await?;
    let page = ProductPage::new(session.new_page().await?);
    page.navigate_to_product(&record.url).await?;

    if page.related_products_count().await == 0 {
        // Nothing to click in this environment.
        session.close().await?;
        return Ok(());
    }

    let before = Url::parse(&page.current_url().await?)?;
    page.click_related_product(0).await?;
    let after = Url::parse(&page.current_url().await?)?;

    ensure!(
        after != before,
        "click on related item 0 left the address at {before}"
    );
    session.close().await
}

#[tokio::test]
#[ignore] // Requires Chromium and a reachable storefront
async fn fallback_message_shows_when_related_api_is_down() -> Result<()> {
    init_logging();
    let fixture = load_fixture();
    let Some(record) = fixture.fallback_record() else {
        // No record flagged for this scenario.
        return Ok(());
    };

    let session = BrowserSession::launch().await?;
    let raw_page = session.new_page().await?;
    intercept::abort_requests_matching(&raw_page, intercept::RELATED_API_PATH).await?;

    let page = ProductPage::new(raw_page);
    page.navigate_to_product(&record.url).await?;

    ensure!(
        page.is_fallback_message_visible().await,
        "fallback message not visible for {} with the related-products API down",
        record.name
    );
    session.close().await
}
