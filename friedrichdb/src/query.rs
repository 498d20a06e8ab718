use serde::{Deserialize, Serialize};

use crate::Document;

/// Identifier of a document within its table.
pub type DocumentId = u64;

/// A request against a [`Database`](crate::Database).
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Query {
    /// Create an empty table.
    CreateTable {
        /// Table name.
        table: String,
    },
    /// Drop a table and every document in it.
    DropTable {
        /// Table name.
        table: String,
    },
    /// Store a document under a fresh id.
    Insert {
        /// Table name.
        table: String,
        /// Document to store.
        document: Document,
    },
    /// Fetch one document.
    Get {
        /// Table name.
        table: String,
        /// Document id.
        id: DocumentId,
    },
    /// Fetch every document of a table in id order.
    Scan {
        /// Table name.
        table: String,
    },
    /// Remove one document.
    Delete {
        /// Table name.
        table: String,
        /// Document id.
        id: DocumentId,
    },
}

impl Query {
    /// Short name of the operation, as used in the serialized form.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Query::CreateTable { .. } => "create_table",
            Query::DropTable { .. } => "drop_table",
            Query::Insert { .. } => "insert",
            Query::Get { .. } => "get",
            Query::Scan { .. } => "scan",
            Query::Delete { .. } => "delete",
        }
    }

    /// Table the query targets.
    #[must_use]
    pub fn table(&self) -> &str {
        match self {
            Query::CreateTable { table }
            | Query::DropTable { table }
            | Query::Insert { table, .. }
            | Query::Get { table, .. }
            | Query::Scan { table }
            | Query::Delete { table, .. } => table,
        }
    }

    /// Returns `true` for queries that change the database and are journaled.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Query::Get { .. } | Query::Scan { .. })
    }
}

/// Result of applying a [`Query`].
///
/// Reads borrow from the database; removed documents are handed back by value.
#[derive(Debug, PartialEq)]
pub enum QueryOutput<'a> {
    /// The table was created.
    Created,
    /// The table was dropped.
    Dropped,
    /// The document was stored under `id`.
    Inserted {
        /// Assigned id.
        id: DocumentId,
    },
    /// The requested document.
    Document(&'a Document),
    /// Every document of the table with its id, in id order.
    Documents(Vec<(DocumentId, &'a Document)>),
    /// The document that was removed.
    Deleted {
        /// Removed document.
        document: Document,
    },
}
