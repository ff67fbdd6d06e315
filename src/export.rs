use crate::error::Result;
use crate::ingestion::StatementLine;
use crate::resolver::Resolution;
use crate::schema::ReportRow;
use log::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::path::Path;

const HEADER_FILL: Color = Color::RGB(0xE0E0E0);
const RESOLVED_FILL: Color = Color::RGB(0xCCFFCC);
const MISSING_FILL: Color = Color::RGB(0xFFCCCC);
const AMBIGUOUS_FILL: Color = Color::RGB(0xFFFFCC);

/// Build the three-column mapping report workbook and return it as xlsx bytes.
///
/// The value cell of each row is filled green, red, or yellow according to
/// whether the row resolved, came up missing, or was ambiguous.
pub fn build_report_workbook(rows: &[ReportRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Financial Mapping")?;

    sheet.set_column_width(0, 40)?;
    sheet.set_column_width(1, 40)?;
    sheet.set_column_width(2, 24)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(HEADER_FILL)
        .set_border(FormatBorder::Thin);

    sheet.write_string_with_format(0, 0, "Original Line Item", &header_format)?;
    sheet.write_string_with_format(0, 1, "Standard Line Item", &header_format)?;
    sheet.write_string_with_format(0, 2, "Value (if found)", &header_format)?;

    let text_format = Format::new().set_border(FormatBorder::Thin);

    for (i, report_row) in rows.iter().enumerate() {
        let row = (i + 1) as u32;

        sheet.write_string_with_format(row, 0, &report_row.original, &text_format)?;
        sheet.write_string_with_format(row, 1, &report_row.standard, &text_format)?;

        let value_format = Format::new()
            .set_border(FormatBorder::Thin)
            .set_background_color(status_fill(&report_row.resolution));
        sheet.write_string_with_format(row, 2, report_row.resolution.cell_text(), &value_format)?;
    }

    let buffer = workbook.save_to_buffer()?;
    Ok(buffer)
}

/// Write the mapping report workbook to `path`, creating missing parent
/// directories.
pub fn write_report_file(rows: &[ReportRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let buffer = build_report_workbook(rows)?;
    std::fs::write(path, &buffer)?;

    info!("Wrote mapping report ({} rows) to {}", rows.len(), path.display());
    Ok(())
}

/// Build a two-column workbook of parsed statement lines, with column widths
/// fitted to the content (capped at 50 characters).
pub fn build_parsed_workbook(lines: &[StatementLine]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Financial Data")?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(HEADER_FILL)
        .set_border(FormatBorder::Thin);

    sheet.write_string_with_format(0, 0, "Line Item", &header_format)?;
    sheet.write_string_with_format(0, 1, "Value", &header_format)?;

    for (i, line) in lines.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &line.line_item)?;
        sheet.write_string(row, 1, &line.value)?;
    }

    sheet.set_column_width(0, fitted_width("Line Item", lines.iter().map(|l| l.line_item.as_str())))?;
    sheet.set_column_width(1, fitted_width("Value", lines.iter().map(|l| l.value.as_str())))?;

    let buffer = workbook.save_to_buffer()?;
    Ok(buffer)
}

fn status_fill(resolution: &Resolution) -> Color {
    match resolution {
        Resolution::Resolved(_) => RESOLVED_FILL,
        Resolution::Missing => MISSING_FILL,
        Resolution::Ambiguous => AMBIGUOUS_FILL,
    }
}

fn fitted_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> f64 {
    let longest = values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0);

    ((longest + 2).min(50)) as f64
}
