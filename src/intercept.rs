//! CDP Fetch-domain interception used to simulate an upstream API outage.
//!
//! The fallback scenario needs the related-products backend to look dead
//! while the rest of the page loads normally, so matching requests are
//! failed at the browser and everything else is continued untouched.

use anyhow::{Context, Result};
use chromiumoxide::cdp::browser_protocol::fetch::{
    ContinueRequestParams, EnableParams, EventRequestPaused, FailRequestParams, RequestPattern,
    RequestStage,
};
use chromiumoxide::cdp::browser_protocol::network::ErrorReason;
use chromiumoxide::page::Page;
use futures::StreamExt;
use tracing::{debug, warn};

/// URL fragment identifying the related-products API.
pub const RELATED_API_PATH: &str = "/api/related-products";

/// Abort every outbound request whose URL contains `path_fragment` and let
/// everything else through.
///
/// Must be installed before navigating; stays active for the lifetime of
/// the page.
pub async fn abort_requests_matching(page: &Page, path_fragment: &str) -> Result<()> {
    let mut paused = page
        .event_listener::<EventRequestPaused>()
        .await
        .context("failed to listen for paused requests")?;

    page.execute(
        EnableParams::builder()
            .pattern(
                RequestPattern::builder()
                    .url_pattern("*")
                    .request_stage(RequestStage::Request)
                    .build(),
            )
            .build(),
    )
    .await
    .context("failed to enable fetch interception")?;

    let page = page.clone();
    let fragment = path_fragment.to_string();
    tokio::spawn(async move {
        while let Some(event) = paused.next().await {
            let request_id = event.request_id.clone();
            if event.request.url.contains(&fragment) {
                debug!(url = %event.request.url, "aborting intercepted request");
                match FailRequestParams::builder()
                    .request_id(request_id)
                    .error_reason(ErrorReason::Failed)
                    .build()
                {
                    Ok(params) => {
                        let _ = page.execute(params).await;
                    }
                    Err(e) => warn!("failed to build abort command: {e}"),
                }
            } else {
                let _ = page
                    .execute(ContinueRequestParams::new(request_id))
                    .await;
            }
        }
    });

    Ok(())
}
