//! redb-based local storage for the order history
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `local_storage` | `&str` | JSON bytes | Key/value store, like a page's localStorage |
//!
//! Only one key is used today: [`ORDERS_KEY`], a JSON array of
//! [`OrderRecord`]s in submission order.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::OrderRecord;
use shared::error::AppError;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Key/value table: key = storage key, value = JSON text as bytes
const LOCAL_STORAGE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("local_storage");

/// Key holding the order history array
pub const ORDERS_KEY: &str = "orders";

/// History storage errors
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<HistoryError> for AppError {
    fn from(err: HistoryError) -> Self {
        AppError::storage(err.to_string())
    }
}

pub type HistoryResult<T> = Result<T, HistoryError>;

/// Order history backed by redb
#[derive(Clone)]
pub struct OrderHistory {
    db: Arc<Database>,
}

impl std::fmt::Debug for OrderHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderHistory").finish_non_exhaustive()
    }
}

impl OrderHistory {
    /// Open or create the database at the given path
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> HistoryResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests, or hosts without a writable disk)
    pub fn open_in_memory() -> HistoryResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> HistoryResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Append one record; returns the history length afterwards
    pub fn append(&self, record: &OrderRecord) -> HistoryResult<usize> {
        let write_txn = self.db.begin_write()?;
        let len = {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            let mut orders: Vec<serde_json::Value> = match table.get(ORDERS_KEY)? {
                Some(guard) => serde_json::from_slice(guard.value())?,
                None => Vec::new(),
            };
            orders.push(serde_json::to_value(record)?);

            let bytes = serde_json::to_vec(&orders)?;
            table.insert(ORDERS_KEY, bytes.as_slice())?;
            orders.len()
        };
        write_txn.commit()?;

        tracing::debug!(order_id = record.id, history_len = len, "Order appended to history");
        Ok(len)
    }

    /// All stored records, oldest first
    pub fn load_all(&self) -> HistoryResult<Vec<OrderRecord>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;
        match table.get(ORDERS_KEY)? {
            Some(guard) => Ok(serde_json::from_slice(guard.value())?),
            None => Ok(Vec::new()),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> HistoryResult<usize> {
        Ok(self.load_all()?.len())
    }

    pub fn is_empty(&self) -> HistoryResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Overwrite the raw value stored under `key`
    #[cfg(test)]
    pub(crate) fn put_raw(&self, key: &str, json: &str) -> HistoryResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, json.as_bytes())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
