use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub catalog_url: String,
    pub catalog_referer: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    pub snapshot_path: PathBuf,
    /// Webhook that receives the broadcast summary. Notification is
    /// skipped when unset.
    pub notify_webhook_url: Option<String>,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("catalog_url", &self.catalog_url)
            .field("catalog_referer", &self.catalog_referer)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_secs", &self.retry_backoff_base_secs)
            .field("snapshot_path", &self.snapshot_path)
            // Webhook URLs carry bearer tokens in the path.
            .field(
                "notify_webhook_url",
                &self.notify_webhook_url.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .finish()
    }
}
