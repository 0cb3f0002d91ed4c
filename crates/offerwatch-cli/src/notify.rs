//! Outbound webhook notification for the broadcast summary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook returned HTTP status {status}")]
    UnexpectedStatus { status: u16 },
}

/// Posts `text` as `{"text": ...}` to the webhook.
///
/// The text must already satisfy the broadcast channel's display-width
/// bound; no shortening happens here. Callers treat failures as
/// non-fatal.
///
/// # Errors
///
/// Returns [`NotifyError::Http`] on network failure and
/// [`NotifyError::UnexpectedStatus`] for any non-2xx response.
pub async fn send(webhook_url: &str, text: &str) -> Result<(), NotifyError> {
    let client = reqwest::Client::new();
    let response = client
        .post(webhook_url)
        .json(&serde_json::json!({ "text": text }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(NotifyError::UnexpectedStatus {
            status: status.as_u16(),
        });
    }
    Ok(())
}
