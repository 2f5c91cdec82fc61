//! Quote Printing Module
//!
//! - [`document`]: renderer-neutral quote layout built from offer totals
//! - [`pdf`]: PDF export of that layout

pub mod document;
pub mod format;
pub mod pdf;

pub use document::{CompanyInfo, DocumentRow, QuoteDocument, RowKind, SummaryKind, SummaryLine};
pub use format::{format_money, format_percent, format_quantity};
pub use pdf::{PdfRenderer, PrintError, PrintResult};

use shared::error::{AppError, ErrorCode};

impl From<PrintError> for AppError {
    fn from(err: PrintError) -> Self {
        match err {
            PrintError::FontNotFound { .. } => {
                AppError::with_message(ErrorCode::FontNotFound, err.to_string())
            }
            PrintError::Layout(_) | PrintError::Render(_) => AppError::print_failed(err.to_string()),
        }
    }
}
