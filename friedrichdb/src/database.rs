use std::collections::HashMap;

use tracing::debug;

use crate::{
    DatabaseConfig, DbError, DummyJournal, InMemoryTable, Journal, JournalMode, NullJournal, Query,
    QueryOutput, Result, Table,
};

/// Something that answers [`Query`]s.
pub trait Database {
    /// Runs `query` and returns its output.
    fn apply(&mut self, query: Query) -> Result<QueryOutput<'_>>;
}

/// A database holding all of its tables in memory.
///
/// Every mutating query is checked, then pushed to the journal, then applied, so the
/// journal only ever sees queries that are about to succeed.
pub struct InMemoryDatabase {
    tables: HashMap<String, Box<dyn Table>>,
    journal: Box<dyn Journal>,
}

impl InMemoryDatabase {
    /// An empty database that discards its journal.
    #[must_use]
    pub fn new() -> Self {
        Self::with_journal(NullJournal)
    }

    /// An empty database recording to `journal`.
    pub fn with_journal(journal: impl Journal + 'static) -> Self {
        Self {
            tables: HashMap::new(),
            journal: Box::new(journal),
        }
    }

    /// Builds a database as described by `config`, creating its tables up front.
    pub fn from_config(config: &DatabaseConfig) -> Result<Self> {
        let mut db = match config.journal {
            JournalMode::Null => Self::new(),
            JournalMode::Dummy => Self::with_journal(DummyJournal::stderr()),
        };
        for table in &config.tables {
            db.apply(Query::CreateTable {
                table: table.clone(),
            })?;
        }
        debug!(tables = db.tables.len(), journal = ?config.journal, "database ready");
        Ok(db)
    }

    /// Returns the table called `name`.
    pub fn table(&self, name: &str) -> Result<&dyn Table> {
        self.tables
            .get(name)
            .map(|table| &**table)
            .ok_or_else(|| DbError::TableNotFound(name.to_owned()))
    }

    fn table_mut(&mut self, name: &str) -> Result<&mut Box<dyn Table>> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| DbError::TableNotFound(name.to_owned()))
    }

    /// Names of all tables, sorted.
    #[must_use]
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn check(&self, query: &Query) -> Result<()> {
        match query {
            Query::CreateTable { table } if self.tables.contains_key(table) => {
                Err(DbError::TableExists(table.clone()))
            }
            Query::CreateTable { .. } => Ok(()),
            Query::Delete { table, id } => match self.table(table)?.get(*id) {
                Some(_) => Ok(()),
                None => Err(DbError::DocumentNotFound {
                    table: table.clone(),
                    id: *id,
                }),
            },
            other => self.table(other.table()).map(|_| ()),
        }
    }
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl Database for InMemoryDatabase {
    fn apply(&mut self, query: Query) -> Result<QueryOutput<'_>> {
        debug!(op = query.name(), table = query.table(), "apply");
        self.check(&query)?;
        if query.is_mutating() {
            self.journal.push(&query)?;
        }

        match query {
            Query::CreateTable { table } => {
                self.tables
                    .insert(table.clone(), Box::new(InMemoryTable::new(table)));
                Ok(QueryOutput::Created)
            }
            Query::DropTable { table } => {
                self.tables.remove(&table);
                Ok(QueryOutput::Dropped)
            }
            Query::Insert { table, document } => {
                let id = self.table_mut(&table)?.insert(document);
                Ok(QueryOutput::Inserted { id })
            }
            Query::Get { table, id } => self
                .table(&table)?
                .get(id)
                .map(QueryOutput::Document)
                .ok_or(DbError::DocumentNotFound { table, id }),
            Query::Scan { table } => Ok(QueryOutput::Documents(self.table(&table)?.scan().collect())),
            Query::Delete { table, id } => {
                let document = self
                    .table_mut(&table)?
                    .remove(id)
                    .ok_or(DbError::DocumentNotFound { table, id })?;
                Ok(QueryOutput::Deleted { document })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    fn users() -> InMemoryDatabase {
        let mut db = InMemoryDatabase::new();
        db.apply(Query::CreateTable {
            table: "users".into(),
        })
        .unwrap();
        db
    }

    #[test]
    fn create_twice_fails() {
        let mut db = users();
        assert!(matches!(
            db.apply(Query::CreateTable {
                table: "users".into()
            }),
            Err(DbError::TableExists(name)) if name == "users"
        ));
        assert_eq!(db.table_names(), ["users"]);
    }

    #[test]
    fn missing_table() {
        let mut db = InMemoryDatabase::new();
        assert!(matches!(
            db.apply(Query::Scan {
                table: "nope".into()
            }),
            Err(DbError::TableNotFound(_))
        ));
    }

    #[test]
    fn get_and_delete() {
        let mut db = users();
        let doc: Document = [("name", "Carol")].into_iter().collect();
        let id = match db
            .apply(Query::Insert {
                table: "users".into(),
                document: doc,
            })
            .unwrap()
        {
            QueryOutput::Inserted { id } => id,
            other => panic!("unexpected {other:?}"),
        };

        match db
            .apply(Query::Get {
                table: "users".into(),
                id,
            })
            .unwrap()
        {
            QueryOutput::Document(doc) => assert_eq!(doc["name"].as_str(), Some("Carol")),
            other => panic!("unexpected {other:?}"),
        }

        match db
            .apply(Query::Delete {
                table: "users".into(),
                id,
            })
            .unwrap()
        {
            QueryOutput::Deleted { document } => assert!(document.contains_key("name")),
            other => panic!("unexpected {other:?}"),
        }

        assert!(matches!(
            db.apply(Query::Get {
                table: "users".into(),
                id
            }),
            Err(DbError::DocumentNotFound { id: missing, .. }) if missing == id
        ));
    }

    #[test]
    fn drop_removes_table() {
        let mut db = users();
        assert_eq!(
            db.apply(Query::DropTable {
                table: "users".into()
            })
            .unwrap(),
            QueryOutput::Dropped
        );
        assert!(db.table("users").is_err());
        assert!(db.table_names().is_empty());
    }
}
