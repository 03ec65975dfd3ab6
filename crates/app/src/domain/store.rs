//! In-memory record store.

use tokio::sync::RwLock;

use crate::domain::records::Record;

/// Record Store
///
/// Append-only, insertion-ordered list of [`Record`]s held for the lifetime
/// of the process. Nothing is ever removed or edited once appended, and the
/// list is unbounded.
///
/// Every store owns its own lock, so two stores never contend with each
/// other. Appends take the write lock; reads take the read lock and clone
/// a snapshot.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<Vec<Record>>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` to the end of the store and hands it back unchanged.
    pub async fn append(&self, record: Record) -> Record {
        let (record, _len) = self.append_with_len(record).await;

        record
    }

    /// Like [`RecordStore::append`], also returning the store length as seen
    /// under the same write lock that performed the append.
    pub async fn append_with_len(&self, record: Record) -> (Record, usize) {
        let mut records = self.records.write().await;

        records.push(record.clone());

        (record, records.len())
    }

    /// Returns every record appended so far, oldest first.
    ///
    /// The returned list is a snapshot: later appends do not show up in it.
    pub async fn list_all(&self) -> Vec<Record> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
