use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatementMapperError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StatementMapperError>;
