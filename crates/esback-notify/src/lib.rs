//! Best-effort chat webhook notifications
//!
//! Delivery failures are logged and swallowed; notifications never
//! influence the outcome or exit code of a backup run.

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const RUN_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Fire-and-forget webhook reporter.
///
/// Messages are posted as `{"text": "[<host>][<run timestamp>] <message>"}`.
/// The host and timestamp are fixed when the notifier is created so every
/// message of one run carries the same header.
pub struct Notifier {
    webhook_url: Option<String>,
    http: Option<reqwest::Client>,
    header: String,
}

impl Notifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        let host = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "unknown-host".to_string());

        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let stamp = now.format(RUN_STAMP).unwrap_or_default();

        let http = match reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
        {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!("webhook client unavailable, notifications disabled: {e}");
                None
            }
        };

        Self {
            webhook_url,
            http,
            header: format!("[{host}][{stamp}]"),
        }
    }

    /// A notifier that never sends anything.
    pub fn disabled() -> Self {
        Self {
            webhook_url: None,
            http: None,
            header: String::new(),
        }
    }

    /// Deliver one message. Never fails; a delivery problem is only
    /// worth a warning in the log.
    pub async fn notify(&self, message: &str) {
        let (Some(url), Some(http)) = (&self.webhook_url, &self.http) else {
            return;
        };

        let payload = serde_json::json!({
            "text": format!("{} {}", self.header, message),
        });

        if let Err(e) = http.post(url).json(&payload).send().await {
            tracing::warn!("webhook delivery failed: {e}");
        }
    }
}
