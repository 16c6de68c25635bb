//! Engine Errors

use thiserror::Error;

/// Rejected form input. Messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Tên sản phẩm không được để trống!")]
    EmptyTitle,
    #[error("Giá phải là số dương!")]
    InvalidPrice,
    #[error("Danh mục ID phải là số dương!")]
    InvalidCategory,
    #[error("URL hình ảnh không được để trống!")]
    MissingImage,
}

/// View transitions that were refused; state is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unsupported page size {0}")]
    UnsupportedPageSize(usize),
    #[error("page {page} is outside 1..={total_pages}")]
    PageOutOfRange { page: usize, total_pages: usize },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Không có dữ liệu để export!")]
    Empty,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV output is not valid UTF-8")]
    Encoding,
}
