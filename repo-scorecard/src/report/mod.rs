//! Report generation.
//!
//! Renders the record table as an HTML document and a Markdown document
//! with the fixed column order
//! `Name | Dependencies | License | Age (Years) | Stars | Issues | Last Commit`.

mod error;
mod renderer;
mod row;

pub use error::ReportError;
pub use renderer::ReportRenderer;
pub use row::ReportRow;
