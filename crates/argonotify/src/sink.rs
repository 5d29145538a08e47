use anyhow::{bail, Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

/// POST the encoded payload to the webhook endpoint. The provider
/// acknowledges this endpoint shape with 204 No Content; any other status,
/// 2xx included, is a delivery failure. One attempt, no retry.
pub async fn post_webhook(webhook_url: &str, body: Vec<u8>) -> Result<()> {
    let resp = reqwest::Client::new()
        .post(webhook_url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .with_context(|| "Sending webhook request")?;

    if resp.status() != StatusCode::NO_CONTENT {
        bail!("Webhook rejected the notification, status: {}", resp.status());
    }
    Ok(())
}
