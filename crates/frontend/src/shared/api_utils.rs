//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use contracts::shared::pagination::PaginationParams;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Port the storefront API listens on
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`API_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    origin_url(&protocol, &hostname)
}

fn origin_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// ```rust,ignore
/// let url = api_url("/api/orders/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path with the list parameters appended as a query string
pub fn list_path(path: &str, params: &PaginationParams) -> Result<String, String> {
    let query = serde_qs::to_string(params).map_err(|e| format!("Failed to encode query: {}", e))?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query))
    }
}

/// GET `path` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = api_url(path);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {}: {}", path, e))?;
    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// DELETE `path`, ignoring the response body
pub async fn delete(path: &str) -> Result<(), String> {
    let url = api_url(path);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to delete {}: {}", path, e))?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("Server error: {}", response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_path() {
        let params = PaginationParams::first_page(50).with_sort(Some("createdAt-desc".to_string()));
        assert_eq!(
            list_path("/api/orders", &params).unwrap(),
            "/api/orders?page=1&limit=50&sort=createdAt-desc"
        );
        assert_eq!(
            list_path("/api/products", &PaginationParams::default()).unwrap(),
            "/api/products"
        );
    }

    #[test]
    fn test_origin_url() {
        assert_eq!(origin_url("https:", "admin.example.com"), "https://admin.example.com:3000");
        assert_eq!(origin_url("http:", "localhost"), "http://localhost:3000");
    }
}
