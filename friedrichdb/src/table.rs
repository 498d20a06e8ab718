use std::collections::BTreeMap;

use tracing::trace;

use crate::{Document, DocumentId};

/// A named collection of documents.
///
/// Implementations assign ids on insert and never reuse them within one table.
pub trait Table: Send {
    /// Table name.
    fn name(&self) -> &str;

    /// Stores `document` and returns its new id.
    fn insert(&mut self, document: Document) -> DocumentId;

    /// Returns the document stored under `id`.
    fn get(&self, id: DocumentId) -> Option<&Document>;

    /// Removes and returns the document stored under `id`.
    fn remove(&mut self, id: DocumentId) -> Option<Document>;

    /// Number of stored documents.
    fn len(&self) -> usize;

    /// Returns `true` if the table holds no documents.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over `(id, document)` pairs in id order.
    fn scan(&self) -> Box<dyn Iterator<Item = (DocumentId, &Document)> + '_>;
}

/// A table kept entirely in memory.
#[derive(Debug)]
pub struct InMemoryTable {
    name: String,
    next_id: DocumentId,
    documents: BTreeMap<DocumentId, Document>,
}

impl InMemoryTable {
    /// Creates an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            next_id: 0,
            documents: BTreeMap::new(),
        }
    }
}

impl Table for InMemoryTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn insert(&mut self, document: Document) -> DocumentId {
        let id = self.next_id;
        self.next_id += 1;
        trace!(table = %self.name, id, "insert");
        self.documents.insert(id, document);
        id
    }

    fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(&id)
    }

    fn remove(&mut self, id: DocumentId) -> Option<Document> {
        self.documents.remove(&id)
    }

    fn len(&self) -> usize {
        self.documents.len()
    }

    fn scan(&self) -> Box<dyn Iterator<Item = (DocumentId, &Document)> + '_> {
        Box::new(self.documents.iter().map(|(id, doc)| (*id, doc)))
    }
}
