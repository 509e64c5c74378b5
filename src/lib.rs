//! # Cellar
//!
//! A typed data-access facade over a distributed column-family store:
//! - Create tables (destructively replacing same-named ones)
//! - Insert/update records as batched cell mutations
//! - Scan a column or a whole column family
//! - Delete rows
//!
//! All real engineering (storage engine, region distribution,
//! consistency, compaction, wire protocol) lives in the wrapped store;
//! Cellar translates five logical operations into calls against it
//! through a capability interface, so the facade is testable against
//! an in-memory implementation without a live cluster.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Caller                                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ create_table / add_record / scan_column
//!                       │ modify_data / delete_row
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  TableFacade<C>                              │
//! │        (local validation, per-call table handles)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ StoreClient / TableHandle
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │ MemoryStore │          │ real cluster │
//!   │ (in-proc)   │          │ client       │
//!   └─────────────┘          └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod column;
pub mod store;
pub mod facade;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CellarError, Result};
pub use config::Config;
pub use column::{ColumnRef, FieldRef};
pub use store::{CellMutation, MemoryStore, ScannedRow, StoreClient, TableHandle};
pub use facade::{ScanValues, TableFacade};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Cellar
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
