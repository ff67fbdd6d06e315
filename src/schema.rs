use crate::resolver::Resolution;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A correspondence between a line item as it appears in a source document
/// and its standardized name, produced by the upstream mapping collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Mapping {
    #[serde(default)]
    #[schemars(
        description = "The line item exactly as it appears in the source document (e.g., 'Total net revenues'). May be absent when only a standardized name is known."
    )]
    pub original: Option<String>,

    #[serde(default)]
    #[schemars(
        description = "The standardized line-item name (e.g., 'Revenue'). May be absent when no standard mapping was assigned."
    )]
    pub standard: Option<String>,
}

impl Mapping {
    pub fn new(original: impl Into<String>, standard: impl Into<String>) -> Self {
        Self {
            original: Some(original.into()),
            standard: Some(standard.into()),
        }
    }

    /// Lenient construction from arbitrary JSON: non-string or absent fields
    /// degrade to `None` instead of failing the whole request.
    pub fn from_json_value(value: &Value) -> Self {
        Self {
            original: value
                .get("original")
                .and_then(Value::as_str)
                .map(str::to_string),
            standard: value
                .get("standard")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    pub fn original_text(&self) -> &str {
        self.original.as_deref().unwrap_or("")
    }

    pub fn standard_text(&self) -> &str {
        self.standard.as_deref().unwrap_or("")
    }

    /// The label used for value resolution: the original name when present,
    /// otherwise the standardized name.
    pub fn search_label(&self) -> &str {
        if !self.original_text().is_empty() {
            self.original_text()
        } else {
            self.standard_text()
        }
    }

    /// Mappings with neither name produce no report row.
    pub fn is_empty(&self) -> bool {
        self.original_text().is_empty() && self.standard_text().is_empty()
    }
}

/// The request body accepted by the export endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[schemars(
        description = "Full text content extracted from the source document upstream. Lines may be separated by \\n or \\r\\n."
    )]
    pub extracted_text: String,

    #[schemars(description = "Ordered list of line-item mappings to resolve and report on")]
    pub mappings: Vec<Mapping>,
}

impl ExportRequest {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ExportRequest)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

/// The response body returned by the export endpoint on success.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    #[schemars(description = "Path under which the generated workbook can be downloaded")]
    pub download_url: String,
}

/// One row of the assembled mapping report, in input mapping order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReportRow {
    pub original: String,
    pub standard: String,
    pub resolution: Resolution,
}
