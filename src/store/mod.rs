//! Store client abstraction
//!
//! The facade never names a concrete store client: it talks to the
//! wrapped column-family store through the [`StoreClient`] and
//! [`TableHandle`] traits. Production code plugs in a real cluster
//! client; tests and the demo binary use [`MemoryStore`], a complete
//! in-process implementation with the same observable contract.
//!
//! ## Resource Model
//!
//! - One [`StoreClient`] per facade, created from [`Config`] and
//!   explicitly closed on teardown.
//! - One [`TableHandle`] per data operation, acquired fresh each call.
//!   Handles release whatever they hold when dropped, so release is
//!   guaranteed on every exit path, error paths included.

mod memory;

pub use memory::MemoryStore;

use std::collections::BTreeMap;

use bytes::Bytes;

use crate::config::Config;
use crate::error::Result;

// =============================================================================
// Row/Mutation Types
// =============================================================================

/// A single cell write within a row mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMutation {
    pub family: String,
    pub qualifier: String,
    pub value: Bytes,
}

/// One row produced by a full table scan
///
/// Rows carry the latest value per `(family, qualifier)` coordinate;
/// version history stays inside the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedRow {
    /// The row key
    pub key: String,

    /// family → qualifier → latest value, both levels in sorted order
    pub families: BTreeMap<String, BTreeMap<String, Bytes>>,
}

impl ScannedRow {
    /// Latest value at `(family, qualifier)`, if the row has that cell
    pub fn latest(&self, family: &str, qualifier: &str) -> Option<&Bytes> {
        self.families.get(family)?.get(qualifier)
    }

    /// All values under `family` for this row, in qualifier order
    pub fn family_values(&self, family: &str) -> Vec<&Bytes> {
        self.families
            .get(family)
            .map(|qualifiers| qualifiers.values().collect())
            .unwrap_or_default()
    }
}

// =============================================================================
// Capability Traits
// =============================================================================

/// Connection-level capability interface over the external store
pub trait StoreClient: Send + Sync {
    /// The per-operation table handle type this client hands out
    type Table: TableHandle;

    /// Establish the connection described by `config`
    fn connect(config: &Config) -> Result<Self>
    where
        Self: Sized;

    /// Create `name` with the given column families
    ///
    /// Destructive: an existing table of the same name is disabled and
    /// dropped first, losing all data stored under it.
    fn create_table(&self, name: &str, families: &[&str]) -> Result<()>;

    /// Acquire a handle to `name`, scoped to a single operation
    fn table(&self, name: &str) -> Result<Self::Table>;

    /// Tear down the connection; later use is a connection error
    fn close(&self) -> Result<()>;
}

/// A table handle scoped to one data operation
///
/// Dropping the handle releases it.
pub trait TableHandle {
    /// Apply `cells` to `row` as one batched mutation
    ///
    /// The batch lands entirely or not at all; there is no partial
    /// application on failure.
    fn put(&self, row: &str, cells: &[CellMutation]) -> Result<()>;

    /// Full table scan, rows in the store's native (row-key
    /// lexicographic) order
    fn scan(&self) -> Result<Vec<ScannedRow>>;

    /// Delete every cell of `row` across all families
    ///
    /// Deleting a row that does not exist is a no-op.
    fn delete_row(&self, row: &str) -> Result<()>;
}
