//! Product Model
//!
//! Records as returned by the remote catalog API, plus the payload sent back
//! on create and update.

use serde::{Deserialize, Serialize};

/// Shown when a product has no category
pub const NO_CATEGORY: &str = "N/A";

/// Shown in place of a missing description
pub const NO_DESCRIPTION: &str = "Không có mô tả";

/// Category reference embedded in a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
}

/// Product record (matches the API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Category name, or "N/A"
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(NO_CATEGORY)
    }

    pub fn category_id(&self) -> Option<u32> {
        self.category.as_ref().and_then(|c| c.id)
    }

    /// Description text, empty when absent
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Description for display, with a placeholder when absent or empty
    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => NO_DESCRIPTION,
        }
    }

    /// First image URL with quote characters removed.
    ///
    /// The API sometimes returns URLs wrapped in stray quotes; those are
    /// dropped. Returns `None` when there is no usable URL.
    pub fn display_image(&self) -> Option<String> {
        let first = self.images.first()?;
        let url: String = first.chars().filter(|c| *c != '"' && *c != '\'').collect();
        let url = url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url.to_string())
        }
    }

    /// Price formatted with two decimals
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// Body of `POST /products/` and `PUT /products/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub title: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u32>,
    pub images: Vec<String>,
}
