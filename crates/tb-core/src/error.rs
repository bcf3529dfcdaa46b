//! Error types for tb-core

use thiserror::Error;

/// Core error type for Tributary
#[derive(Error, Debug)]
pub enum CoreError {
    // Validation errors (V001-V009): the operation is rejected, state unchanged
    /// V001: A required field was left blank
    #[error("[V001] {entity} {field} is required")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// V002: A table with the same name already exists
    #[error("[V002] Table '{name}' already exists")]
    DuplicateTable { name: String },

    /// V003: A column with the same name already exists in the table
    #[error("[V003] Column '{column}' already exists in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    /// V004: A transformation with the same name already exists
    #[error("[V004] Transformation '{name}' already exists")]
    DuplicateTransformation { name: String },

    /// V005: A column reference is not of the form `table.column`
    #[error("[V005] Invalid column reference '{reference}': expected 'table.column'")]
    InvalidColumnRef { reference: String },

    /// V006: An enum-valued field holds an unknown value
    #[error("[V006] Unknown {kind} '{value}'; expected one of: {expected}")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },

    /// V007: A mapping endpoint lies outside the transformation's tables
    #[error("[V007] {side} table '{table}' is not an {role} of transformation '{transformation}'")]
    MappingOutsideTransformation {
        transformation: String,
        side: &'static str,
        role: &'static str,
        table: String,
    },

    // Lookup misses (L001-L004): the operation is a no-op, reported as a warning
    /// L001: Table not found
    #[error("[L001] Table '{name}' not found")]
    TableNotFound { name: String },

    /// L002: Column not found in table
    #[error("[L002] Column '{column}' not found in table '{table}'")]
    ColumnNotFound { table: String, column: String },

    /// L003: Transformation not found
    #[error("[L003] Transformation '{name}' not found")]
    TransformationNotFound { name: String },

    /// L004: Saved view not found
    #[error("[L004] View '{name}' not found")]
    ViewNotFound { name: String },

    // Persistence errors (P001-P004): reported, catalog left untouched
    /// P001: Catalog file not found
    #[error("[P001] File not found: {path}")]
    FileNotFound { path: String },

    /// P002: Catalog file is not a valid catalog document
    #[error("[P002] Invalid JSON file {path}: {source}")]
    InvalidDocument {
        path: String,
        source: serde_json::Error,
    },

    /// P003: IO error with file path context
    #[error("[P003] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// P004: JSON serialization error
    #[error("[P004] JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors (C001-C003)
    /// C001: Failed to parse configuration file
    #[error("[C001] Failed to parse config {path}: {source}")]
    ConfigParseError {
        path: String,
        source: serde_yaml::Error,
    },

    /// C002: Invalid configuration value
    #[error("[C002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C003: Configuration serialization error
    #[error("[C003] Config serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CoreError {
    /// True for referential lookup misses, which the front end reports as
    /// warnings rather than failures.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            CoreError::TableNotFound { .. }
                | CoreError::ColumnNotFound { .. }
                | CoreError::TransformationNotFound { .. }
                | CoreError::ViewNotFound { .. }
        )
    }

    /// True for input validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CoreError::MissingField { .. }
                | CoreError::DuplicateTable { .. }
                | CoreError::DuplicateColumn { .. }
                | CoreError::DuplicateTransformation { .. }
                | CoreError::InvalidColumnRef { .. }
                | CoreError::UnknownVariant { .. }
                | CoreError::MappingOutsideTransformation { .. }
        )
    }
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
