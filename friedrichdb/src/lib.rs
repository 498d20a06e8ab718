//! friedrichdb: an in-memory document database whose values are
//! [`Field`](friedrichdb_core::Field) trees.
//!
//! The pieces fit together like this:
//!
//! - [`Document`]: named fields in insertion order, addressable by key or position
//! - [`Journal`]: where every mutating [`Query`] is recorded before it runs
//! - [`Table`]: a collection of documents keyed by [`DocumentId`]
//! - [`Database`]: applies queries to named tables and returns a [`QueryOutput`]
//!
//! ```
//! use friedrichdb::{Database, Document, InMemoryDatabase, Query, QueryOutput};
//!
//! let mut db = InMemoryDatabase::new();
//! db.apply(Query::CreateTable { table: "users".into() }).unwrap();
//!
//! let mut alice = Document::new();
//! alice.emplace("name", "Alice");
//! let id = match db.apply(Query::Insert { table: "users".into(), document: alice }).unwrap() {
//!     QueryOutput::Inserted { id } => id,
//!     other => panic!("unexpected output {other:?}"),
//! };
//!
//! let QueryOutput::Document(doc) = db.apply(Query::Get { table: "users".into(), id }).unwrap() else {
//!     panic!("expected a document");
//! };
//! assert_eq!(doc.at("name").unwrap().as_str(), Some("Alice"));
//! ```

mod error;
pub use error::{DbError, Result};

mod serializable;
pub use serializable::Serializable;

mod document;
pub use document::Document;

mod journal;
pub use journal::{DummyJournal, ForwardingJournal, Journal, NullJournal};

mod query;
pub use query::{DocumentId, Query, QueryOutput};

mod table;
pub use table::{InMemoryTable, Table};

mod database;
pub use database::{Database, InMemoryDatabase};

mod config;
pub use config::{DatabaseConfig, JournalMode};

pub use friedrichdb_core::{Field, FieldError, FieldKind};
