use friedrichdb_core::FieldError;
use thiserror::Error;

use crate::DocumentId;

/// Result type for database operations.
pub type Result<T> = core::result::Result<T, DbError>;

/// Errors produced by documents, journals, tables and databases.
#[derive(Debug, Error)]
pub enum DbError {
    /// No table with this name exists.
    #[error("table not found: {0}")]
    TableNotFound(String),
    /// A table with this name already exists.
    #[error("table already exists: {0}")]
    TableExists(String),
    /// The table has no document with this id.
    #[error("document {id} not found in table {table}")]
    DocumentNotFound {
        /// Table that was searched.
        table: String,
        /// Requested id.
        id: DocumentId,
    },
    /// A field operation failed.
    #[error(transparent)]
    Field(#[from] FieldError),
    /// JSON text could not be produced or parsed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    /// The journal could not write an entry.
    #[error("journal i/o: {0}")]
    Io(#[from] std::io::Error),
}
