//! Outbound webhook notifications.
//!
//! Best-effort by contract: notification delivery must never affect trading
//! control flow, so every failure here is swallowed and logged.

use serde::Deserialize;
use serde_json::json;

/// Response envelope of the webhook service.
#[derive(Debug, Deserialize)]
struct WebhookResponse {
    errcode: i64,
    #[serde(default)]
    errmsg: String,
}

/// Webhook notifier for operator-facing messages (fills, fatal errors).
#[derive(Clone)]
pub struct Notifier {
    webhook_url: Option<String>,
    client: reqwest::Client,
}

impl Notifier {
    pub(crate) fn new(webhook_key: Option<String>, client: reqwest::Client) -> Self {
        let webhook_url = webhook_key.filter(|k| !k.is_empty()).map(|key| {
            format!(
                "https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key={}",
                key
            )
        });
        Self {
            webhook_url,
            client,
        }
    }

    /// Whether a webhook key was configured.
    pub fn is_enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Send `(title, body)` as a markdown message. Never fails: a missing
    /// key skips the send, and delivery errors are logged and swallowed.
    pub async fn send(&self, title: &str, body: &str) {
        let Some(url) = &self.webhook_url else {
            tracing::debug!(title, "no webhook key configured, skipping notification");
            return;
        };

        let payload = json!({
            "msgtype": "markdown",
            "markdown": { "content": format!("### {}\n{}", title, body) },
        });

        match self.client.post(url).json(&payload).send().await {
            Ok(resp) => match resp.json::<WebhookResponse>().await {
                Ok(ack) if ack.errcode == 0 => {
                    tracing::info!(title, "notification delivered");
                }
                Ok(ack) => {
                    tracing::warn!(
                        title,
                        errcode = ack.errcode,
                        errmsg = %ack.errmsg,
                        "webhook rejected notification"
                    );
                }
                Err(e) => {
                    tracing::warn!(title, error = %e, "unreadable webhook response");
                }
            },
            Err(e) => {
                tracing::warn!(title, error = %e, "notification delivery failed");
            }
        }
    }
}
