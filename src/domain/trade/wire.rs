//! Wire types for trade requests and responses.

use crate::domain::trade::{OrderSide, OrderState, OrderType};
use crate::shared::serde_util::empty_decimal_as_none;
use crate::shared::InstId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v5/trade/order`.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceOrderRequest {
    #[serde(rename = "instId")]
    pub inst_id: InstId,
    /// Always `"cash"` — SPOT trading on the trading account's own balance.
    #[serde(rename = "tdMode")]
    pub td_mode: String,
    pub side: OrderSide,
    #[serde(rename = "ordType")]
    pub ord_type: OrderType,
    /// Size, pre-formatted per currency precision.
    pub sz: String,
    /// Limit price; absent for market orders.
    #[serde(rename = "px", skip_serializing_if = "Option::is_none")]
    pub px: Option<String>,
}

/// Request body for `POST /api/v5/trade/cancel-order`.
#[derive(Debug, Clone, Serialize)]
pub struct CancelOrderRequest {
    #[serde(rename = "instId")]
    pub inst_id: InstId,
    #[serde(rename = "ordId")]
    pub ord_id: String,
}

/// Acknowledgement returned by order placement and cancellation.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderAck {
    #[serde(rename = "ordId")]
    pub ord_id: String,
    #[serde(rename = "clOrdId", default)]
    pub cl_ord_id: String,
    /// Per-order result code; `"0"` on success.
    #[serde(rename = "sCode")]
    pub s_code: String,
    #[serde(rename = "sMsg", default)]
    pub s_msg: String,
}

/// An order as reported by the order/pending/history endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderData {
    #[serde(rename = "instId")]
    pub inst_id: InstId,
    #[serde(rename = "ordId")]
    pub ord_id: String,
    pub side: OrderSide,
    #[serde(rename = "ordType")]
    pub ord_type: OrderType,
    pub state: OrderState,
    #[serde(default, with = "empty_decimal_as_none")]
    pub px: Option<Decimal>,
    pub sz: Decimal,
    /// Accumulated filled size; empty until the first fill.
    #[serde(rename = "accFillSz", default, with = "empty_decimal_as_none")]
    pub acc_fill_sz: Option<Decimal>,
    /// Average fill price; empty until the first fill.
    #[serde(rename = "avgPx", default, with = "empty_decimal_as_none")]
    pub avg_px: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_order_serializes_without_price() {
        let req = PlaceOrderRequest {
            inst_id: InstId::new("OKB-USDT"),
            td_mode: "cash".to_string(),
            side: OrderSide::Buy,
            ord_type: OrderType::Market,
            sz: "10.00".to_string(),
            px: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["tdMode"], "cash");
        assert_eq!(json["side"], "buy");
        assert!(json.get("px").is_none());
    }

    #[test]
    fn unfilled_order_has_empty_fill_fields() {
        let raw = r#"{
            "instId": "OKB-USDT",
            "ordId": "312269865356374016",
            "side": "sell",
            "ordType": "limit",
            "state": "live",
            "px": "3.80",
            "sz": "5",
            "accFillSz": "",
            "avgPx": ""
        }"#;
        let order: OrderData = serde_json::from_str(raw).unwrap();
        assert_eq!(order.state, OrderState::Live);
        assert_eq!(order.acc_fill_sz, None);
        assert_eq!(order.avg_px, None);
    }
}
