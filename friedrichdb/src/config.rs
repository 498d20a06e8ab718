use serde::{Deserialize, Serialize};

use crate::Result;

/// Which journal a database built from configuration records to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    /// Discard entries.
    #[default]
    Null,
    /// Print entries to standard error.
    Dummy,
}

/// Settings for [`InMemoryDatabase::from_config`](crate::InMemoryDatabase::from_config).
///
/// Every key is optional:
///
/// ```
/// use friedrichdb::{DatabaseConfig, JournalMode};
///
/// let config = DatabaseConfig::from_json_str(r#"{ "tables": ["users"] }"#).unwrap();
/// assert_eq!(config.journal, JournalMode::Null);
/// assert_eq!(config.tables, ["users"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Journal to record mutating queries to.
    pub journal: JournalMode,
    /// Tables created when the database is built.
    pub tables: Vec<String>,
}

impl DatabaseConfig {
    /// Parses a JSON configuration document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
