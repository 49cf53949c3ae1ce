//! Low-level HTTP client — `OkxHttp`.
//!
//! Owns the transport: request signing, the demo-trading header, the retry
//! loop, and envelope decoding. Every endpoint responds with
//! `{code, msg, data: [...]}`; the `code == "0"` sentinel is checked exactly
//! once, here, so the rest of the SDK only ever sees typed results.

use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::auth::Credentials;
use crate::error::{ApiError, HttpError, SdkError};
use crate::http::retry::{with_retry, RetryConfig, RetryPolicy};
use crate::network::SIMULATED_TRADING_HEADER;

/// The uniform response envelope every endpoint returns.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    code: String,
    #[serde(default)]
    msg: String,
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

/// Low-level HTTP client for the OKX v5 REST API.
pub struct OkxHttp {
    base_url: String,
    client: Client,
    credentials: Credentials,
    simulated: bool,
}

impl OkxHttp {
    pub(crate) fn new(
        base_url: &str,
        credentials: Credentials,
        timeout: Duration,
        simulated: bool,
    ) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
            simulated,
        })
    }

    /// A plain `reqwest::Client` sharing this transport's connection pool.
    pub(crate) fn raw_client(&self) -> Client {
        self.client.clone()
    }

    /// GET `path` and unwrap the envelope's `data` array.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        policy: RetryPolicy,
    ) -> Result<Vec<T>, SdkError> {
        let request_path = if query.is_empty() {
            path.to_string()
        } else {
            let qs = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("&");
            format!("{}?{}", path, qs)
        };
        self.request_with_retry(reqwest::Method::GET, path, &request_path, None, policy)
            .await
    }

    /// POST `body` to `path` and unwrap the envelope's `data` array.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        policy: RetryPolicy,
    ) -> Result<Vec<T>, SdkError> {
        let body = serde_json::to_string(body)?;
        self.request_with_retry(reqwest::Method::POST, path, path, Some(body), policy)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        request_path: &str,
        body: Option<String>,
        policy: RetryPolicy,
    ) -> Result<Vec<T>, SdkError> {
        let config = match policy {
            RetryPolicy::None => {
                return self
                    .do_request(&method, endpoint, request_path, body.as_deref())
                    .await;
            }
            RetryPolicy::Idempotent => RetryConfig::default(),
            RetryPolicy::Custom(c) => c,
        };

        with_retry(&config, endpoint, is_transport_retryable, || {
            self.do_request(&method, endpoint, request_path, body.as_deref())
        })
        .await
    }

    async fn do_request<T: DeserializeOwned>(
        &self,
        method: &reqwest::Method,
        endpoint: &str,
        request_path: &str,
        body: Option<&str>,
    ) -> Result<Vec<T>, SdkError> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let signature = self.credentials.sign(
            &timestamp,
            method.as_str(),
            request_path,
            body.unwrap_or(""),
        );

        let url = format!("{}{}", self.base_url, request_path);
        let mut req = self
            .client
            .request(method.clone(), &url)
            .header("OK-ACCESS-KEY", &self.credentials.api_key)
            .header("OK-ACCESS-SIGN", signature)
            .header("OK-ACCESS-TIMESTAMP", timestamp)
            .header("OK-ACCESS-PASSPHRASE", &self.credentials.passphrase)
            .header("Content-Type", "application/json");

        if self.simulated {
            req = req.header(SIMULATED_TRADING_HEADER, "1");
        }

        if let Some(b) = body {
            req = req.body(b.to_string());
        }

        let resp = req.send().await.map_err(HttpError::from)?;
        let status = resp.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let body_text = resp.text().await.unwrap_or_default();
            // Transport-level rejections (auth, rate limits, 5xx) never reach
            // envelope decoding. A 200 with a non-"0" code is handled below.
            return Err(match status_code {
                401 => HttpError::Unauthorized,
                429 => HttpError::RateLimited,
                400..=499 => HttpError::BadRequest(body_text),
                _ => HttpError::ServerError {
                    status: status_code,
                    body: body_text,
                },
            }
            .into());
        }

        let envelope = resp
            .json::<Envelope<T>>()
            .await
            .map_err(HttpError::from)?;

        if envelope.code != "0" {
            let err = ApiError {
                endpoint: endpoint.to_string(),
                code: envelope.code,
                message: envelope.msg,
            };
            tracing::error!(endpoint, code = %err.code, msg = %err.message, "exchange returned error");
            return Err(err.into());
        }

        Ok(envelope.data)
    }
}

/// Transport failures are worth another attempt; application errors are not.
fn is_transport_retryable(err: &SdkError) -> bool {
    match err {
        SdkError::Http(HttpError::Reqwest(e)) => e.is_connect() || e.is_timeout() || e.is_request(),
        SdkError::Http(HttpError::RateLimited) => true,
        SdkError::Http(HttpError::ServerError { status, .. }) => {
            matches!(status, 502 | 503 | 504)
        }
        _ => false,
    }
}

impl Clone for OkxHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            credentials: self.credentials.clone(),
            simulated: self.simulated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_error_codes_become_api_errors() {
        let raw = r#"{"code":"58350","msg":"Insufficient balance","data":[]}"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.code, "58350");
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn envelope_success_unwraps_data() {
        let raw = r#"{"code":"0","msg":"","data":[{"x":1},{"x":2}]}"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.code, "0");
        assert_eq!(envelope.data.len(), 2);
    }

    #[test]
    fn application_errors_are_not_retryable() {
        let err = SdkError::Api(ApiError {
            endpoint: "/api/v5/trade/order".to_string(),
            code: "51000".to_string(),
            message: "Parameter error".to_string(),
        });
        assert!(!is_transport_retryable(&err));
    }

    #[test]
    fn gateway_errors_are_retryable() {
        let err = SdkError::Http(HttpError::ServerError {
            status: 503,
            body: String::new(),
        });
        assert!(is_transport_retryable(&err));
        let err = SdkError::Http(HttpError::ServerError {
            status: 500,
            body: String::new(),
        });
        assert!(!is_transport_retryable(&err));
    }
}
