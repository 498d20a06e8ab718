//! Journals record serialized entries as queries are applied.

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::{Result, Serializable};

/// A sink for serialized entries.
///
/// Journals are interchangeable: a database holds a `Box<dyn Journal>` and never
/// needs to know which implementation it got.
pub trait Journal: Send {
    /// Records one entry.
    fn push(&mut self, entry: &dyn Serializable) -> Result<()>;
}

/// Writes each entry's JSON form as one line to a writer (stderr by default).
///
/// Meant for diagnostics: nothing is ever read back.
#[derive(Debug)]
pub struct DummyJournal<W = io::Stderr> {
    writer: W,
}

impl DummyJournal {
    /// A journal printing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl Default for DummyJournal {
    fn default() -> Self {
        Self::stderr()
    }
}

impl<W: Write> DummyJournal<W> {
    /// A journal printing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Journal for DummyJournal<W> {
    fn push(&mut self, entry: &dyn Serializable) -> Result<()> {
        let line = entry.serialization_json()?;
        debug!(entry = %line, "journal push");
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Delegates every push to another journal it owns.
pub struct ForwardingJournal {
    inner: Box<dyn Journal>,
}

impl ForwardingJournal {
    /// Forwards to `journal`.
    pub fn new(journal: impl Journal + 'static) -> Self {
        Self::from_box(Box::new(journal))
    }

    /// Forwards to an already boxed journal.
    #[must_use]
    pub fn from_box(inner: Box<dyn Journal>) -> Self {
        Self { inner }
    }

    /// Returns the journal being forwarded to.
    #[must_use]
    pub fn into_inner(self) -> Box<dyn Journal> {
        self.inner
    }
}

impl Journal for ForwardingJournal {
    fn push(&mut self, entry: &dyn Serializable) -> Result<()> {
        self.inner.push(entry)
    }
}

/// Discards every entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullJournal;

impl Journal for NullJournal {
    fn push(&mut self, _entry: &dyn Serializable) -> Result<()> {
        trace!("journal entry discarded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use friedrichdb_core::Field;

    use super::*;
    use crate::{DbError, Document, Query};

    /// Writer whose bytes stay readable after it is boxed away.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn dummy_writes_one_line_per_entry() {
        let mut journal = DummyJournal::new(Vec::new());
        journal.push(&Field::from(1)).unwrap();
        journal
            .push(&Query::DropTable {
                table: "old".into(),
            })
            .unwrap();
        let text = String::from_utf8(journal.into_inner()).unwrap();
        assert_eq!(text, "1\n{\"op\":\"drop_table\",\"table\":\"old\"}\n");
    }

    #[test]
    fn forwarding_reaches_inner_journal() {
        let buf = SharedBuf::default();
        let mut journal = ForwardingJournal::new(ForwardingJournal::new(DummyJournal::new(
            buf.clone(),
        )));
        let doc: Document = [("k", "v")].into_iter().collect();
        journal.push(&doc).unwrap();
        assert_eq!(buf.contents(), "{\"k\":\"v\"}\n");
    }

    #[test]
    fn null_discards() {
        let mut journal: Box<dyn Journal> = Box::new(NullJournal);
        journal.push(&Field::from("ignored")).unwrap();
    }

    #[test]
    fn write_failures_surface_as_io_errors() {
        let mut journal = DummyJournal::new(BrokenWriter);
        assert!(matches!(
            journal.push(&Field::new()),
            Err(DbError::Io(_))
        ));
    }
}
