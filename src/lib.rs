//! # Statement Mapper
//!
//! A library for mapping extracted financial-statement text to standardized
//! line items, resolving the numeric value for each mapped item, and
//! exporting a color-coded spreadsheet report.
//!
//! ## Core Concepts
//!
//! - **Extracted text**: plain text handed in by an upstream document
//!   extraction collaborator; one statement line per text line
//! - **Mapping**: a pair of original and standardized line-item names
//!   produced by an upstream classification collaborator
//! - **Resolution**: the outcome of searching the text for a label's value:
//!   a single unambiguous numeric string, `Missing`, or `Ambiguous`
//! - **Report**: one row per non-empty mapping, in input order, exported as
//!   an xlsx workbook whose value cells are filled by status
//!
//! ## Example
//!
//! ```rust,ignore
//! use statement_mapper::*;
//!
//! let request = ExportRequest {
//!     extracted_text: "Total net revenues: $1,234.56\nGoodwill: 300".to_string(),
//!     mappings: vec![
//!         Mapping::new("Total net revenues", "Revenue"),
//!         Mapping::new("Goodwill", "Goodwill"),
//!     ],
//! };
//!
//! let rows = build_report(&request.extracted_text, &request.mappings);
//! let workbook = export::build_report_workbook(&rows).unwrap();
//! ```

pub mod error;
pub mod export;
pub mod ingestion;
pub mod report;
pub mod resolver;
pub mod schema;

#[cfg(feature = "server")]
pub mod server;

pub use error::{Result, StatementMapperError};
pub use export::{build_parsed_workbook, build_report_workbook, write_report_file};
pub use ingestion::{StatementLine, StatementParser};
pub use report::assemble_report;
pub use resolver::{Resolution, ValueResolver};
pub use schema::{ExportRequest, ExportResponse, Mapping, ReportRow};

use log::{debug, info};

pub struct StatementProcessor;

impl StatementProcessor {
    /// Resolve every mapping against the extracted text and assemble the
    /// report rows.
    pub fn process(extracted_text: &str, mappings: &[Mapping]) -> Vec<ReportRow> {
        info!("Building mapping report for {} mappings", mappings.len());
        debug!(
            "Extracted text is {} characters over {} lines",
            extracted_text.len(),
            extracted_text.lines().count()
        );

        let resolver = ValueResolver::new();
        assemble_report(&resolver, extracted_text, mappings)
    }

    /// Resolve, assemble, and export in one step, returning xlsx bytes.
    pub fn process_to_workbook(extracted_text: &str, mappings: &[Mapping]) -> Result<Vec<u8>> {
        let rows = Self::process(extracted_text, mappings);
        build_report_workbook(&rows)
    }
}

pub fn build_report(extracted_text: &str, mappings: &[Mapping]) -> Vec<ReportRow> {
    StatementProcessor::process(extracted_text, mappings)
}

pub fn build_report_to_workbook(extracted_text: &str, mappings: &[Mapping]) -> Result<Vec<u8>> {
    StatementProcessor::process_to_workbook(extracted_text, mappings)
}
