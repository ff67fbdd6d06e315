use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::export::write_report_file;
use crate::ingestion::StatementLine;
use crate::report::assemble_report;
use crate::schema::{ExportResponse, Mapping};
use crate::server::SharedState;

/// Errors surfaced to HTTP clients. Bad requests carry a message naming the
/// offending field; internal failures are logged in full and reported with a
/// generic message only.
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            ApiError::Internal(message) => {
                error!("Export failed: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to generate Excel export." })),
                )
                    .into_response()
            }
        }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "Statement Mapper API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /api/export: resolve every mapping against the extracted text,
/// write the color-coded workbook under a per-request filename, and return
/// its download path.
pub async fn export_report(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> Result<Json<ExportResponse>, ApiError> {
    let extracted_text = require_extracted_text(&body)?;

    let raw_mappings = body.get("mappings").and_then(Value::as_array).ok_or_else(|| {
        ApiError::BadRequest("Request body must include 'mappings' as an array.".to_string())
    })?;

    let mappings: Vec<Mapping> = raw_mappings.iter().map(Mapping::from_json_value).collect();

    let rows = assemble_report(&state.resolver, extracted_text, &mappings);

    let filename = export_filename();
    let path = state.config.export_dir.join(&filename);

    write_report_file(&rows, &path).map_err(|e| ApiError::Internal(e.to_string()))?;

    info!("Exported {} report rows to {}", rows.len(), path.display());

    Ok(Json(ExportResponse {
        download_url: format!("/exports/{}", filename),
    }))
}

/// POST /api/extract: structure raw extracted text into line items without
/// a mapping pass.
pub async fn extract_lines(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> Result<Json<Vec<StatementLine>>, ApiError> {
    let extracted_text = require_extracted_text(&body)?;
    Ok(Json(state.parser.parse(extracted_text)))
}

fn require_extracted_text(body: &Value) -> Result<&str, ApiError> {
    body.get("extractedText")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest(
                "Request body must include 'extractedText' as a string.".to_string(),
            )
        })
}

/// Concurrent exports must never overwrite each other, so every request gets
/// its own timestamped filename.
fn export_filename() -> String {
    format!(
        "financial_output_{}_{}.xlsx",
        chrono::Utc::now().format("%Y%m%d%H%M%S"),
        uuid::Uuid::new_v4().simple()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_extracted_text() {
        assert!(require_extracted_text(&json!({"extractedText": "Revenue: 100"})).is_ok());
        assert!(require_extracted_text(&json!({"extractedText": ""})).is_err());
        assert!(require_extracted_text(&json!({"extractedText": 42})).is_err());
        assert!(require_extracted_text(&json!({})).is_err());
    }

    #[test]
    fn test_export_filenames_are_unique() {
        let a = export_filename();
        let b = export_filename();
        assert_ne!(a, b);
        assert!(a.starts_with("financial_output_"));
        assert!(a.ends_with(".xlsx"));
    }
}
