//! Table Facade
//!
//! The single entry point of the crate: five logical operations
//! (create table, add record, scan column, modify cell, delete row)
//! translated into calls against a [`StoreClient`].
//!
//! ## Responsibilities
//! - Validate caller input locally (column references, table
//!   definitions) before anything reaches the store
//! - Acquire a fresh table handle per data operation, released on
//!   every exit path
//! - Propagate every store failure unchanged; no retries, no
//!   swallowed errors
//!
//! Every operation is one independent request/response; the facade
//! holds no session state beyond the connection itself.

use bytes::Bytes;

use crate::column::{ColumnRef, FieldRef};
use crate::config::Config;
use crate::error::{CellarError, Result};
use crate::store::{CellMutation, StoreClient, TableHandle};

/// Values collected by [`TableFacade::scan_column`]
///
/// The outer `Option` is the empty-result signal: `None` means the
/// scan collected zero values. The inner `Option` is the per-row
/// absent marker for fully qualified scans. The two are deliberately
/// decoupled so "no rows matched" and "a row lacks this cell" stay
/// distinguishable.
pub type ScanValues = Option<Vec<Option<String>>>;

/// Data-access facade over a column-family store
///
/// Owns its store connection for its lifetime; [`close`] tears it
/// down explicitly. Multiple facades, each with their own client, can
/// coexist in one process.
///
/// [`close`]: TableFacade::close
pub struct TableFacade<C: StoreClient> {
    client: C,
}

impl<C: StoreClient> TableFacade<C> {
    /// Connect to the store described by `config`
    pub fn connect(config: &Config) -> Result<Self> {
        Ok(Self {
            client: C::connect(config)?,
        })
    }

    /// Wrap an already-connected client
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    /// The underlying store client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Create table `name` with one column family per entry of
    /// `families`
    ///
    /// Destructive: an existing table of the same name is dropped
    /// first, and everything stored under it is irrecoverably lost.
    /// `name` and `families` must be non-empty; violations fail
    /// locally without a store call.
    pub fn create_table(&self, name: &str, families: &[&str]) -> Result<()> {
        if name.is_empty() {
            return Err(CellarError::TableDefinition(
                "table name must be non-empty".to_string(),
            ));
        }
        if families.is_empty() {
            return Err(CellarError::TableDefinition(format!(
                "table '{}' needs at least one column family",
                name
            )));
        }

        tracing::debug!(table = name, families = families.len(), "creating table");
        self.client.create_table(name, families)
    }

    /// Write cells to `row` of `table`
    ///
    /// `fields` entries must be fully qualified (`family:qualifier`)
    /// and pair positionally with `values`. Exactly
    /// `min(fields.len(), values.len())` cells are written; unpaired
    /// trailing entries of the longer slice are silently ignored (a
    /// warning is logged). The batch is submitted as one mutation:
    /// it lands entirely or the whole call fails.
    pub fn add_record(
        &self,
        table: &str,
        row: &str,
        fields: &[&str],
        values: &[&str],
    ) -> Result<()> {
        // Parse every field reference before acquiring the handle, so
        // format errors never cost a store round trip.
        let mut cells = Vec::with_capacity(fields.len().min(values.len()));
        for (field, value) in fields.iter().zip(values.iter()) {
            let FieldRef { family, qualifier } = FieldRef::parse(field)?;
            cells.push(CellMutation {
                family,
                qualifier,
                value: Bytes::copy_from_slice(value.as_bytes()),
            });
        }

        if fields.len() != values.len() {
            tracing::warn!(
                table,
                row,
                fields = fields.len(),
                values = values.len(),
                written = cells.len(),
                "field/value lengths differ; unpaired entries ignored"
            );
        }

        tracing::debug!(table, row, cells = cells.len(), "writing record");

        let handle = self.client.table(table)?;
        handle.put(row, &cells)
    }

    /// Scan one column or one whole column family across all rows of
    /// `table`
    ///
    /// `column` is `family` or `family:qualifier`; any other shape
    /// fails with [`CellarError::ColumnFormat`] before any store
    /// call. The scan is unfiltered and visits every row in the
    /// store's native order (row-key lexicographic).
    ///
    /// - Fully qualified: one entry per row, `Some(value)` or `None`
    ///   when the row lacks that cell, so the result length equals
    ///   the row count.
    /// - Family-only: every qualifier's value under the family for
    ///   every row, in row-major, qualifier-sorted order. Values from
    ///   different rows and qualifiers are interleaved with no
    ///   attribution, so the caller cannot tell which value came from
    ///   which row.
    ///
    /// Returns `Ok(None)` when zero values were collected; callers
    /// must branch on the outer `Option` before iterating.
    pub fn scan_column(&self, table: &str, column: &str) -> Result<ScanValues> {
        let column = ColumnRef::parse(column)?;

        let handle = self.client.table(table)?;
        let rows = handle.scan()?;

        tracing::trace!(table, rows = rows.len(), column = ?column, "scanning column");

        let mut collected: Vec<Option<String>> = Vec::new();
        match &column {
            ColumnRef::Qualified { family, qualifier } => {
                for row in &rows {
                    collected.push(row.latest(family, qualifier).map(decode_value));
                }
            }
            ColumnRef::Family(family) => {
                for row in &rows {
                    for value in row.family_values(family) {
                        collected.push(Some(decode_value(value)));
                    }
                }
            }
        }

        if collected.is_empty() {
            Ok(None)
        } else {
            Ok(Some(collected))
        }
    }

    /// Overwrite one cell of `row`
    ///
    /// Convenience for a single-cell [`add_record`]: no
    /// read-before-write, no concurrency check, last writer wins per
    /// the store's native semantics.
    ///
    /// [`add_record`]: TableFacade::add_record
    pub fn modify_data(&self, table: &str, row: &str, column: &str, value: &str) -> Result<()> {
        self.add_record(table, row, &[column], &[value])
    }

    /// Delete every cell of `row` across all families
    ///
    /// Deleting a row that does not exist is a silent no-op.
    pub fn delete_row(&self, table: &str, row: &str) -> Result<()> {
        tracing::debug!(table, row, "deleting row");

        let handle = self.client.table(table)?;
        handle.delete_row(row)
    }

    /// Tear down the facade and its store connection
    pub fn close(self) -> Result<()> {
        self.client.close()
    }
}

/// Cell bytes → string, replacing invalid UTF-8 rather than failing
fn decode_value(value: &Bytes) -> String {
    String::from_utf8_lossy(value).into_owned()
}
