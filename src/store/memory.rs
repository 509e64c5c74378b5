//! In-memory store implementation
//!
//! A complete, self-contained [`StoreClient`] with the same observable
//! contract as a real cluster client: destructive table replacement,
//! family checks on writes, lexicographic scan order, last-writer-wins
//! cells, and an explicit closed state. Used by the test suite and the
//! demo binary; also handy as a local stand-in during development.
//!
//! ## Concurrency
//!
//! - `tables`: protected by a `parking_lot::RwLock` (many concurrent
//!   readers, exclusive writer)
//! - `closed`: atomic flag, checked by every operation
//!
//! Handles are `Arc` clones of the shared state, so a handle outliving
//! its scope never dangles; a table dropped between handle acquisition
//! and use surfaces as `TableNotFound` at use time, which is also how
//! real cluster clients behave.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{CellarError, Result};

use super::{CellMutation, ScannedRow, StoreClient, TableHandle};

/// row → family → qualifier → latest value
type RowMap = BTreeMap<String, BTreeMap<String, BTreeMap<String, Bytes>>>;

/// Per-table state: declared families plus row data
#[derive(Debug, Default)]
struct TableData {
    families: Vec<String>,
    rows: RowMap,
}

impl TableData {
    fn has_family(&self, family: &str) -> bool {
        self.families.iter().any(|f| f == family)
    }
}

/// Shared state behind every handle the store gives out
#[derive(Debug, Default)]
struct StoreInner {
    tables: RwLock<BTreeMap<String, TableData>>,
    closed: AtomicBool,
}

impl StoreInner {
    fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(CellarError::Connection(
                "connection is closed".to_string(),
            ));
        }
        Ok(())
    }
}

/// In-process column-family store
///
/// Cloning is cheap and shares the underlying state, mirroring how a
/// real client connection is shared across callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

impl MemoryStore {
    /// Create an empty store with no tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tables currently present (for tests and debugging)
    pub fn table_count(&self) -> usize {
        self.inner.tables.read().len()
    }
}

impl StoreClient for MemoryStore {
    type Table = MemoryTable;

    fn connect(config: &Config) -> Result<Self> {
        // Nothing to dial; the endpoint is logged so callers can see
        // which cluster a real client would have targeted.
        tracing::debug!(
            quorum = %config.quorum(),
            port = config.client_port,
            "memory store standing in for cluster connection"
        );
        Ok(Self::new())
    }

    fn create_table(&self, name: &str, families: &[&str]) -> Result<()> {
        self.inner.ensure_open()?;

        let mut tables = self.inner.tables.write();

        if tables.remove(name).is_some() {
            tracing::warn!(table = name, "dropping existing table and its data");
        }

        tables.insert(
            name.to_string(),
            TableData {
                families: families.iter().map(|f| (*f).to_string()).collect(),
                rows: RowMap::new(),
            },
        );

        Ok(())
    }

    fn table(&self, name: &str) -> Result<MemoryTable> {
        self.inner.ensure_open()?;

        let tables = self.inner.tables.read();
        if !tables.contains_key(name) {
            return Err(CellarError::TableNotFound(name.to_string()));
        }

        Ok(MemoryTable {
            inner: Arc::clone(&self.inner),
            name: name.to_string(),
        })
    }

    fn close(&self) -> Result<()> {
        self.inner.closed.store(true, Ordering::Release);
        tracing::debug!("memory store connection closed");
        Ok(())
    }
}

/// Handle to one table of a [`MemoryStore`], scoped to one operation
#[derive(Debug)]
pub struct MemoryTable {
    inner: Arc<StoreInner>,
    name: String,
}

impl TableHandle for MemoryTable {
    fn put(&self, row: &str, cells: &[CellMutation]) -> Result<()> {
        self.inner.ensure_open()?;

        if cells.is_empty() {
            return Ok(());
        }

        let mut tables = self.inner.tables.write();
        let table = tables
            .get_mut(&self.name)
            .ok_or_else(|| CellarError::TableNotFound(self.name.clone()))?;

        // Validate the whole batch before touching any cell, so a bad
        // family leaves the row unchanged.
        for cell in cells {
            if !table.has_family(&cell.family) {
                return Err(CellarError::UnknownFamily {
                    table: self.name.clone(),
                    family: cell.family.clone(),
                });
            }
        }

        let row_cells = table.rows.entry(row.to_string()).or_default();
        for cell in cells {
            row_cells
                .entry(cell.family.clone())
                .or_default()
                .insert(cell.qualifier.clone(), cell.value.clone());
        }

        Ok(())
    }

    fn scan(&self) -> Result<Vec<ScannedRow>> {
        self.inner.ensure_open()?;

        let tables = self.inner.tables.read();
        let table = tables
            .get(&self.name)
            .ok_or_else(|| CellarError::TableNotFound(self.name.clone()))?;

        // BTreeMap iteration gives row-key lexicographic order.
        let rows = table
            .rows
            .iter()
            .map(|(key, families)| ScannedRow {
                key: key.clone(),
                families: families.clone(),
            })
            .collect();

        Ok(rows)
    }

    fn delete_row(&self, row: &str) -> Result<()> {
        self.inner.ensure_open()?;

        let mut tables = self.inner.tables.write();
        let table = tables
            .get_mut(&self.name)
            .ok_or_else(|| CellarError::TableNotFound(self.name.clone()))?;

        // Absent rows delete silently, matching store-native behavior.
        table.rows.remove(row);

        Ok(())
    }
}
