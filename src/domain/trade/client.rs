//! Trade sub-client — order placement, cancellation and queries.

use crate::client::OkxClient;
use crate::domain::market::client::take_first;
use crate::domain::trade::wire::{CancelOrderRequest, OrderAck, OrderData, PlaceOrderRequest};
use crate::domain::trade::{OrderSide, OrderType};
use crate::error::{ApiError, SdkError};
use crate::http::RetryPolicy;
use crate::shared::format_amount;
use rust_decimal::Decimal;

pub struct Trade<'a> {
    pub(crate) client: &'a OkxClient,
}

impl<'a> Trade<'a> {
    /// Place a SPOT order on the configured instrument.
    ///
    /// `price` is required for limit orders and ignored for market orders.
    /// Amounts are formatted per the configured currency precision before
    /// leaving the SDK.
    pub async fn place_order(
        &self,
        side: OrderSide,
        ord_type: OrderType,
        size: Decimal,
        price: Option<Decimal>,
    ) -> Result<OrderAck, SdkError> {
        let config = &self.client.config;
        let px = match ord_type {
            OrderType::Market => None,
            OrderType::Limit => price.map(|p| {
                format_amount(p, config.amount_precision(&config.quote_ccy))
            }),
        };
        let request = PlaceOrderRequest {
            inst_id: config.inst_id.clone(),
            td_mode: "cash".to_string(),
            side,
            ord_type,
            sz: format_amount(size, config.amount_precision(&config.base_ccy)),
            px,
        };

        tracing::info!(
            inst_id = %request.inst_id,
            side = side.as_str(),
            sz = %request.sz,
            px = request.px.as_deref().unwrap_or("market"),
            "placing order"
        );

        let mut data: Vec<OrderAck> = self
            .client
            .http
            .post("/api/v5/trade/order", &request, RetryPolicy::None)
            .await?;
        let ack = take_first(&mut data, "order ack")?;
        check_ack(&ack, "/api/v5/trade/order")?;
        Ok(ack)
    }

    /// Cancel an order by id.
    pub async fn cancel_order(&self, ord_id: &str) -> Result<OrderAck, SdkError> {
        let request = CancelOrderRequest {
            inst_id: self.client.config.inst_id.clone(),
            ord_id: ord_id.to_string(),
        };
        let mut data: Vec<OrderAck> = self
            .client
            .http
            .post("/api/v5/trade/cancel-order", &request, RetryPolicy::None)
            .await?;
        let ack = take_first(&mut data, "cancel ack")?;
        check_ack(&ack, "/api/v5/trade/cancel-order")?;
        Ok(ack)
    }

    /// Fetch a single order by id.
    pub async fn order(&self, ord_id: &str) -> Result<OrderData, SdkError> {
        let mut data: Vec<OrderData> = self
            .client
            .http
            .get(
                "/api/v5/trade/order",
                &[
                    ("instId", self.client.config.inst_id.to_string()),
                    ("ordId", ord_id.to_string()),
                ],
                RetryPolicy::Idempotent,
            )
            .await?;
        take_first(&mut data, "order")
    }

    /// All open (unfilled) orders on the configured instrument.
    pub async fn pending_orders(&self) -> Result<Vec<OrderData>, SdkError> {
        self.client
            .http
            .get(
                "/api/v5/trade/orders-pending",
                &[("instId", self.client.config.inst_id.to_string())],
                RetryPolicy::Idempotent,
            )
            .await
    }

    /// Recent order history for the configured instrument.
    pub async fn order_history(&self, limit: Option<u32>) -> Result<Vec<OrderData>, SdkError> {
        let mut query = vec![
            ("instType", "SPOT".to_string()),
            ("instId", self.client.config.inst_id.to_string()),
        ];
        if let Some(l) = limit {
            query.push(("limit", l.to_string()));
        }
        self.client
            .http
            .get("/api/v5/trade/orders-history", &query, RetryPolicy::Idempotent)
            .await
    }
}

/// Order endpoints return HTTP 200 + envelope code "0" with a per-order
/// `sCode`; a non-"0" `sCode` is still a failed order.
fn check_ack(ack: &OrderAck, endpoint: &str) -> Result<(), SdkError> {
    if ack.s_code != "0" {
        return Err(ApiError {
            endpoint: endpoint.to_string(),
            code: ack.s_code.clone(),
            message: ack.s_msg.clone(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_order_ack_raises_with_its_code() {
        let ack = OrderAck {
            ord_id: String::new(),
            cl_ord_id: String::new(),
            s_code: "51008".to_string(),
            s_msg: "Order amount exceeds balance".to_string(),
        };
        let err = check_ack(&ack, "/api/v5/trade/order").unwrap_err();
        assert_eq!(err.api_code(), Some("51008"));
    }
}
