use crate::shared::api_utils::get_json;
use contracts::domain::a001_order::Order;

pub async fn fetch_order(id: &str) -> Result<Order, String> {
    get_json(&format!("/api/orders/{}", urlencoding::encode(id))).await
}
