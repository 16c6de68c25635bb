//! CSV Export
//!
//! Serializes the current filtered and sorted product list.

use chrono::NaiveDateTime;

use crate::error::ExportError;
use crate::product::Product;

pub const CSV_HEADERS: [&str; 5] = ["ID", "Tên Sản Phẩm", "Giá", "Danh Mục", "Mô Tả"];

/// Descriptions are cut to this many characters
pub const DESCRIPTION_LIMIT: usize = 100;

/// Build CSV text for `products`, header first, one `\n`-terminated line each.
///
/// Headers, title, category and description are always quoted with inner
/// quotes doubled, even when they look numeric. Id and price stay bare.
pub fn products_to_csv(products: &[Product]) -> Result<String, ExportError> {
    if products.is_empty() {
        return Err(ExportError::Empty);
    }

    // Cells arrive pre-quoted, the writer only joins them.
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS.map(quote_text))?;
    for product in products {
        writer.write_record([
            product.id.to_string(),
            quote_text(&product.title),
            product.price_label(),
            quote_text(product.category_name()),
            quote_text(&truncate_chars(product.description_or_empty(), DESCRIPTION_LIMIT)),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))?;
    String::from_utf8(bytes).map_err(|_| ExportError::Encoding)
}

/// `products_<date>_<time>.csv`
pub fn export_filename(now: NaiveDateTime) -> String {
    format!("products_{}.csv", now.format("%Y-%m-%d_%H%M%S"))
}

fn quote_text(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
