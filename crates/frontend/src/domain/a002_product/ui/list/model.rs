use crate::shared::api_utils::{delete, get_json, list_path};
use contracts::domain::a002_product::ProductListResponse;
use contracts::shared::pagination::PaginationParams;

pub async fn fetch_products(params: &PaginationParams) -> Result<ProductListResponse, String> {
    let path = list_path("/api/products", params)?;
    get_json(&path).await
}

pub async fn delete_product(id: &str) -> Result<(), String> {
    delete(&format!("/api/products/{}", urlencoding::encode(id))).await
}
