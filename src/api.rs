//! Catalog API Client
//!
//! Thin wrappers over the browser `fetch` API for the product endpoints.

use catalog_engine::{Product, ProductPayload};
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid response: {0}")]
    Decode(String),
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

// ========================
// Endpoints
// ========================

pub fn list_url(base: &str, limit: u32) -> String {
    format!("{}/products?offset=0&limit={}", base, limit)
}

pub fn create_url(base: &str) -> String {
    format!("{}/products/", base)
}

pub fn update_url(base: &str, id: u32) -> String {
    format!("{}/products/{}", base, id)
}

/// Product endpoints of one API root
#[derive(Debug, Clone, PartialEq)]
pub struct ProductApi {
    base_url: String,
    fetch_limit: u32,
}

impl ProductApi {
    pub fn new(base_url: impl Into<String>, fetch_limit: u32) -> Self {
        Self { base_url: base_url.into(), fetch_limit }
    }

    /// `GET /products?offset=0&limit=N`
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        send_json("GET", &list_url(&self.base_url, self.fetch_limit), None).await
    }

    /// `POST /products/`
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        send_json("POST", &create_url(&self.base_url), Some(body)).await
    }

    /// `PUT /products/{id}`
    pub async fn update_product(&self, id: u32, payload: &ProductPayload) -> Result<Product, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        send_json("PUT", &update_url(&self.base_url, id), Some(body)).await
    }
}

async fn send_json<T: DeserializeOwned>(method: &str, url: &str, body: Option<String>) -> Result<T, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(js_error)?;
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        log::warn!("[Api] {} {} -> {}", method, url, resp.status());
        return Err(ApiError::Http(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = text
        .as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))?;
    log::debug!("[Api] {} {} -> {} bytes", method, url, text.len());
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}
