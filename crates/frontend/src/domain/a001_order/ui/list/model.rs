use crate::shared::api_utils::{get_json, list_path};
use contracts::domain::a001_order::OrderListResponse;
use contracts::shared::pagination::PaginationParams;

pub async fn fetch_orders(params: &PaginationParams) -> Result<OrderListResponse, String> {
    let path = list_path("/api/orders", params)?;
    get_json(&path).await
}
