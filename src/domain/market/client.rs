//! Market sub-client — public market-data queries.

use chrono::Utc;

use crate::client::OkxClient;
use crate::domain::market::wire::{OrderBookData, ServerTimeData, TickerData};
use crate::domain::market::{BookLevel, Candle, OrderBook};
use crate::error::SdkError;
use crate::http::RetryPolicy;
use crate::shared::InstId;

pub struct Market<'a> {
    pub(crate) client: &'a OkxClient,
}

impl<'a> Market<'a> {
    /// All SPOT tickers. Also doubles as a cheap connectivity check at
    /// startup.
    pub async fn tickers(&self) -> Result<Vec<TickerData>, SdkError> {
        self.client
            .http
            .get(
                "/api/v5/market/tickers",
                &[("instType", "SPOT".to_string())],
                RetryPolicy::Idempotent,
            )
            .await
    }

    /// Ticker for a single instrument.
    pub async fn ticker(&self, inst_id: &InstId) -> Result<TickerData, SdkError> {
        let start = Utc::now();
        let mut data: Vec<TickerData> = self
            .client
            .http
            .get(
                "/api/v5/market/ticker",
                &[("instId", inst_id.to_string())],
                RetryPolicy::Idempotent,
            )
            .await?;
        let ticker = take_first(&mut data, "ticker")?;
        let latency = Utc::now() - start;
        tracing::debug!(
            inst_id = %inst_id,
            last = %ticker.last,
            latency_ms = latency.num_milliseconds(),
            "ticker fetched"
        );
        Ok(ticker)
    }

    /// Candlesticks for an instrument, newest first. `bar` uses the
    /// exchange's notation (`"1m"`, `"1H"`, `"1D"`, ...).
    pub async fn candles(
        &self,
        inst_id: &InstId,
        bar: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Candle>, SdkError> {
        let mut query = vec![
            ("instId", inst_id.to_string()),
            ("bar", bar.to_string()),
        ];
        if let Some(l) = limit {
            query.push(("limit", l.to_string()));
        }
        let rows: Vec<Vec<String>> = self
            .client
            .http
            .get("/api/v5/market/candles", &query, RetryPolicy::Idempotent)
            .await?;
        rows.into_iter().map(Candle::try_from).collect()
    }

    /// Order book snapshot with up to `depth` levels per side.
    pub async fn order_book(
        &self,
        inst_id: &InstId,
        depth: Option<u32>,
    ) -> Result<OrderBook, SdkError> {
        let mut query = vec![("instId", inst_id.to_string())];
        if let Some(d) = depth {
            query.push(("sz", d.to_string()));
        }
        let mut data: Vec<OrderBookData> = self
            .client
            .http
            .get("/api/v5/market/books", &query, RetryPolicy::Idempotent)
            .await?;
        let raw = take_first(&mut data, "order book")?;

        let parse_side = |side: Vec<Vec<String>>| -> Result<Vec<BookLevel>, SdkError> {
            side.iter().map(|row| BookLevel::try_from(row.as_slice())).collect()
        };

        Ok(OrderBook {
            asks: parse_side(raw.asks)?,
            bids: parse_side(raw.bids)?,
            ts: raw.ts,
        })
    }

    /// Current exchange server time.
    pub async fn server_time(&self) -> Result<chrono::DateTime<Utc>, SdkError> {
        let mut data: Vec<ServerTimeData> = self
            .client
            .http
            .get("/api/v5/public/time", &[], RetryPolicy::Idempotent)
            .await?;
        Ok(take_first(&mut data, "server time")?.ts)
    }

    /// Signed offset between the exchange clock and the local clock, in
    /// milliseconds. Positive means the server is ahead.
    pub async fn clock_skew_ms(&self) -> Result<i64, SdkError> {
        let server = self.server_time().await?;
        let skew = server - Utc::now();
        tracing::info!(skew_ms = skew.num_milliseconds(), "clock skew measured");
        Ok(skew.num_milliseconds())
    }
}

/// Pop the first element of a `data` array that must not be empty.
pub(crate) fn take_first<T>(data: &mut Vec<T>, what: &str) -> Result<T, SdkError> {
    if data.is_empty() {
        return Err(SdkError::Validation(format!("empty {} response", what)));
    }
    Ok(data.remove(0))
}
