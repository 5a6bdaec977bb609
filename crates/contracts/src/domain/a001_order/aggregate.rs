use crate::domain::common::ImageAsset;
use crate::shared::serde_utils::{empty_string_as_none, lenient_f64};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Payment label shown when an order carries no payment type
pub const DEFAULT_PAYMENT_TYPE: &str = "COD";

/// Delivery progress of an order.
///
/// Serialized as the raw storefront value (`pending`, `on_the_way`, ...).
/// Values the dashboard does not know are kept verbatim in [`TrackingState::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrackingState {
    #[default]
    Pending,
    Preparing,
    OnTheWay,
    Delivered,
    Cancel,
    Other(String),
}

impl TrackingState {
    pub fn as_str(&self) -> &str {
        match self {
            TrackingState::Pending => "pending",
            TrackingState::Preparing => "preparing",
            TrackingState::OnTheWay => "on_the_way",
            TrackingState::Delivered => "delivered",
            TrackingState::Cancel => "cancel",
            TrackingState::Other(raw) => raw.as_str(),
        }
    }

    /// Text shown in the status pill
    pub fn label(&self) -> &str {
        match self {
            TrackingState::OnTheWay => "Shipping",
            other => other.as_str(),
        }
    }
}

impl From<String> for TrackingState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" | "pending" => TrackingState::Pending,
            "preparing" => TrackingState::Preparing,
            "on_the_way" => TrackingState::OnTheWay,
            "delivered" => TrackingState::Delivered,
            "cancel" => TrackingState::Cancel,
            _ => TrackingState::Other(value),
        }
    }
}

impl From<TrackingState> for String {
    fn from(value: TrackingState) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for TrackingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Product referenced by an order line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodOrigin {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Option<ImageAsset>,
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOrder {
    pub id: String,
    /// Kept as a float: legacy lines carry fractional or negative amounts
    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    /// Ordered product; may be gone if it was deleted after the order
    #[serde(default)]
    pub food_origin: Option<FoodOrigin>,
}

impl ProductOrder {
    pub fn product_name(&self) -> &str {
        self.food_origin
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("")
    }

    pub fn image_url(&self) -> Option<&str> {
        self.food_origin
            .as_ref()
            .and_then(|p| p.images.as_ref())
            .and_then(|img| img.url())
    }
}

/// Order as returned by the storefront API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    /// Customer name
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<ProductOrder>,
    /// ISO 8601 creation timestamp
    #[serde(default)]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_price: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    /// `None` when the storefront sent nothing or an empty string
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub tracking_state: Option<TrackingState>,
}

impl Order {
    pub fn payment_label(&self) -> &str {
        match self.payment_type.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => DEFAULT_PAYMENT_TYPE,
        }
    }

    /// Tracking state with a missing value read as pending
    pub fn tracking_state(&self) -> TrackingState {
        self.tracking_state.clone().unwrap_or_default()
    }

    /// Status pill text; empty when the order has no tracking state yet
    pub fn status_label(&self) -> &str {
        self.tracking_state.as_ref().map_or("", |state| state.label())
    }
}

/// Parses an ISO 8601 date or datetime into a calendar day in `tz`.
///
/// Timestamps carrying an offset are converted into `tz`; naive timestamps
/// and bare dates are taken as-is.
pub fn parse_iso_date<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(tz).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Page of orders returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub items: Vec<Order>,
    #[serde(default)]
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn order_json() -> &'static str {
        r#"{
            "id": "o-1",
            "user_id": "u-7",
            "name": "Jane Roe",
            "items": [
                {"id": "i-1", "quantity": 2, "price": 4.5,
                 "food_origin": {"name": "Pho", "images": {"url": "https://cdn/pho.png"}}},
                {"id": "i-2", "quantity": 1, "price": 3, "food_origin": null}
            ],
            "created_at": "2023-03-09T10:15:00.000Z",
            "total_price": 12,
            "type": "",
            "tracking_state": "on_the_way"
        }"#
    }

    #[test]
    fn test_order_wire_names() {
        let order: Order = serde_json::from_str(order_json()).unwrap();
        assert_eq!(order.user_id, "u-7");
        assert_eq!(order.payment_type.as_deref(), Some(""));
        assert_eq!(order.tracking_state(), TrackingState::OnTheWay);
        assert_eq!(order.items[0].product_name(), "Pho");
        assert_eq!(order.items[0].image_url(), Some("https://cdn/pho.png"));
        assert_eq!(order.items[1].product_name(), "");
        assert_eq!(order.items[1].image_url(), None);

        let back = serde_json::to_value(&order).unwrap();
        assert_eq!(back["type"], "");
        assert_eq!(back["tracking_state"], "on_the_way");
    }

    #[test]
    fn test_payment_label_falls_back_to_cod() {
        let mut order: Order = serde_json::from_str(order_json()).unwrap();
        assert_eq!(order.payment_label(), "COD");
        order.payment_type = None;
        assert_eq!(order.payment_label(), "COD");
        order.payment_type = Some("VNPAY".to_string());
        assert_eq!(order.payment_label(), "VNPAY");
    }

    #[test]
    fn test_tracking_state_labels() {
        assert_eq!(TrackingState::OnTheWay.label(), "Shipping");
        assert_eq!(TrackingState::Delivered.label(), "delivered");
        assert_eq!(TrackingState::from(String::new()), TrackingState::Pending);
        assert_eq!(
            TrackingState::from("refunded".to_string()),
            TrackingState::Other("refunded".to_string())
        );
        assert_eq!(TrackingState::Other("refunded".to_string()).label(), "refunded");
    }

    #[test]
    fn test_missing_tracking_state() {
        for json in [
            r#"{"id": "o-2", "tracking_state": null}"#,
            r#"{"id": "o-2", "tracking_state": ""}"#,
            r#"{"id": "o-2"}"#,
        ] {
            let order: Order = serde_json::from_str(json).unwrap();
            assert_eq!(order.tracking_state, None);
            assert_eq!(order.tracking_state(), TrackingState::Pending);
            assert_eq!(order.status_label(), "");
            assert!(order.items.is_empty());
        }

        let order: Order = serde_json::from_str(order_json()).unwrap();
        assert_eq!(order.status_label(), "Shipping");
    }

    #[test]
    fn test_odd_numbers_do_not_reject_the_list() {
        let page: OrderListResponse = serde_json::from_str(
            r#"{"items": [
                {"id": "o-1", "total_price": null,
                 "items": [{"id": "i-1", "quantity": -1, "price": "4.5"},
                           {"id": "i-2", "quantity": 1.5, "price": null}]},
                {"id": "o-2", "total_price": 7}
            ], "total": 2}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 2);
        let first = &page.items[0];
        assert_eq!(first.total_price, 0.0);
        assert_eq!(first.items[0].quantity, -1.0);
        assert_eq!(first.items[0].price, 4.5);
        assert_eq!(first.items[1].quantity, 1.5);
        assert_eq!(first.items[1].price, 0.0);
        assert_eq!(page.items[1].total_price, 7.0);
    }

    #[test]
    fn test_parse_iso_date() {
        let order: Order = serde_json::from_str(order_json()).unwrap();
        assert_eq!(
            parse_iso_date(&order.created_at, &Utc),
            NaiveDate::from_ymd_opt(2023, 3, 9)
        );

        let late = parse_iso_date("2023-03-09T22:30:00Z", &FixedOffset::east_opt(7 * 3600).unwrap());
        assert_eq!(late, NaiveDate::from_ymd_opt(2023, 3, 10));

        assert_eq!(
            parse_iso_date("2023-03-09", &Utc),
            NaiveDate::from_ymd_opt(2023, 3, 9)
        );
        assert_eq!(
            parse_iso_date("2023-03-09T08:00:00", &Utc),
            NaiveDate::from_ymd_opt(2023, 3, 9)
        );
        assert_eq!(parse_iso_date("yesterday", &Utc), None);
    }
}
