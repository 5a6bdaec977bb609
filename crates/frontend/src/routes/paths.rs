//! Dashboard URLs. Ids are percent-encoded so they stay one path segment.

use urlencoding::encode;

pub const ORDERS: &str = "/orders";
pub const PRODUCTS: &str = "/products";

pub fn customer_path(user_id: &str) -> String {
    format!("/customers/{}", encode(user_id))
}

pub fn order_path(order_id: &str) -> String {
    format!("{}/{}", ORDERS, encode(order_id))
}

pub fn order_edit_path(order_id: &str) -> String {
    format!("{}/edit", order_path(order_id))
}

pub fn product_edit_path(product_id: &str) -> String {
    format!("{}/{}/edit", PRODUCTS, encode(product_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(customer_path("u-7"), "/customers/u-7");
        assert_eq!(order_path("64f1c2"), "/orders/64f1c2");
        assert_eq!(order_edit_path("64f1c2"), "/orders/64f1c2/edit");
        assert_eq!(product_edit_path("p-1"), "/products/p-1/edit");
    }

    #[test]
    fn test_ids_are_encoded() {
        assert_eq!(order_path("a/b c"), "/orders/a%2Fb%20c");
    }
}
