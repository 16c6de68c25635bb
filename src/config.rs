//! Runtime Configuration
//!
//! Defaults can be overridden by defining `window.__CATALOG_CONFIG__`
//! before the app script loads, e.g.
//! `{ apiBaseUrl: "http://localhost:3000/api/v1", defaultPageSize: 20 }`.

use serde::Deserialize;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__CATALOG_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// API root, without trailing slash
    pub api_base_url: String,
    /// Page size of the initial product fetch
    pub fetch_limit: u32,
    pub default_page_size: usize,
    /// `log` level name: error, warn, info, debug, trace
    pub log_level: String,
    /// Lines kept in the console logger ring buffer
    pub log_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.escuelajs.co/api/v1".to_string(),
            fetch_limit: 250,
            default_page_size: catalog_engine::DEFAULT_PAGE_SIZE,
            log_level: "info".to_string(),
            log_capacity: 200,
        }
    }
}

impl CatalogConfig {
    /// Read overrides from the page, falling back to defaults
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value::<CatalogConfig>(raw) {
            Ok(config) => config.normalized(),
            Err(e) => {
                web_sys::console::warn_1(&format!("[Config] Ignoring {}: {}", CONFIG_GLOBAL, e).into());
                Self::default()
            }
        }
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim_end_matches('/').len();
        self.api_base_url.truncate(trimmed);
        if self.api_base_url.is_empty() {
            self.api_base_url = Self::default().api_base_url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: CatalogConfig =
            serde_json::from_str(r#"{"apiBaseUrl": "http://localhost:3000/api/v1/", "defaultPageSize": 20}"#)
                .unwrap();
        let config = config.normalized();
        assert_eq!(config.api_base_url, "http://localhost:3000/api/v1");
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.fetch_limit, 250);
        assert_eq!(config.log_capacity, 200);
    }

    #[test]
    fn test_empty_base_url_restored() {
        let config = CatalogConfig { api_base_url: "/".to_string(), ..Default::default() };
        assert_eq!(config.normalized().api_base_url, CatalogConfig::default().api_base_url);
    }

    #[test]
    fn test_log_filter() {
        let mut config = CatalogConfig::default();
        assert_eq!(config.log_filter(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_filter(), log::LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_filter(), log::LevelFilter::Info);
    }
}
