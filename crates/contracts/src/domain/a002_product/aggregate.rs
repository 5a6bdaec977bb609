use crate::domain::common::ImageAsset;
use crate::shared::serde_utils::lenient_f64;
use serde::{Deserialize, Serialize};

/// Product of the storefront catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    /// Units in stock
    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: f64,
    #[serde(default)]
    pub images: ImageAsset,
}

impl Product {
    /// Price with the shortest numeric rendering (`$12`, `$12.5`)
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    pub fn stock_label(&self) -> String {
        format!("{} In Stocks", self.quantity)
    }
}

/// Page of products returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub items: Vec<Product>,
    #[serde(default)]
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_storefront_json() {
        let product: Product = serde_json::from_str(
            r#"{"_id": "p-1", "name": "Banh mi", "price": 2.5, "quantity": 14,
                "images": {"url": "https://cdn/banh-mi.jpg"}}"#,
        )
        .unwrap();
        assert_eq!(product.id, "p-1");
        assert_eq!(product.description, "");
        assert_eq!(product.images.url(), Some("https://cdn/banh-mi.jpg"));

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["_id"], "p-1");
    }

    #[test]
    fn test_null_numbers_read_as_zero() {
        let page: ProductListResponse = serde_json::from_str(
            r#"{"items": [{"_id": "p-3", "price": null, "quantity": null},
                          {"_id": "p-4", "price": "9.5", "quantity": 2}]}"#,
        )
        .unwrap();
        assert_eq!(page.items[0].price, 0.0);
        assert_eq!(page.items[0].stock_label(), "0 In Stocks");
        assert_eq!(page.items[1].price_label(), "$9.5");
        assert_eq!(page.items[1].stock_label(), "2 In Stocks");
    }

    #[test]
    fn test_labels() {
        let mut product: Product = serde_json::from_str(r#"{"_id": "p-2"}"#).unwrap();
        product.price = 12.0;
        product.quantity = 3.0;
        assert_eq!(product.price_label(), "$12");
        assert_eq!(product.stock_label(), "3 In Stocks");

        product.price = 12.5;
        assert_eq!(product.price_label(), "$12.5");
    }
}
