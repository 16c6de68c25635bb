//! Form Validation
//!
//! Raw form input is checked here before any network call is made.

use crate::error::ValidationError;
use crate::product::{Product, ProductPayload, NO_DESCRIPTION};

/// Input of the "create product" form, as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category_id: String,
    pub image_url: String,
}

impl NewProductForm {
    pub fn validate(&self) -> Result<ProductPayload, ValidationError> {
        let title = parse_title(&self.title)?;
        let price = parse_price(&self.price)?;
        let category_id = parse_category_id(&self.category_id)?;

        let image_url = self.image_url.trim();
        if image_url.is_empty() {
            return Err(ValidationError::MissingImage);
        }

        let description = self.description.trim();
        let description = if description.is_empty() { NO_DESCRIPTION } else { description };

        Ok(ProductPayload {
            title,
            price,
            description: Some(description.to_string()),
            category_id: Some(category_id),
            images: vec![image_url.to_string()],
        })
    }
}

/// Editable fields of the detail modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditProductForm {
    pub title: String,
    pub price: String,
}

impl EditProductForm {
    /// Form pre-filled with the saved values
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price_label(),
        }
    }

    /// Payload for updating `original`. Fields not on the form are carried over.
    pub fn validate(&self, original: &Product) -> Result<ProductPayload, ValidationError> {
        let title = parse_title(&self.title)?;
        let price = parse_price(&self.price)?;

        Ok(ProductPayload {
            title,
            price,
            description: original.description.clone(),
            category_id: original.category_id(),
            images: original.images.clone(),
        })
    }
}

fn parse_title(raw: &str) -> Result<String, ValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title.to_string())
}

fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(ValidationError::InvalidPrice),
    }
}

fn parse_category_id(raw: &str) -> Result<u32, ValidationError> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(ValidationError::InvalidCategory),
    }
}
