//! Column reference parsing
//!
//! Columns are addressed as `family` (a whole column family) or
//! `family:qualifier` (a single column). Parsing happens locally,
//! before any call reaches the store, so malformed references fail
//! without a network round trip.

use crate::error::{CellarError, Result};

/// A parsed column reference, as accepted by scans
///
/// Scans accept either form; writes require the fully qualified one
/// (see [`FieldRef`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    /// A whole column family (`"info"`)
    Family(String),

    /// A single column within a family (`"info:id"`)
    Qualified { family: String, qualifier: String },
}

impl ColumnRef {
    /// Parse a raw column reference
    ///
    /// Accepts exactly one or two `:`-separated segments. An empty
    /// string or three-plus segments is a [`CellarError::ColumnFormat`]
    /// error.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(CellarError::ColumnFormat(raw.to_string()));
        }

        let segments: Vec<&str> = raw.split(':').collect();
        match segments.as_slice() {
            [family] => Ok(ColumnRef::Family((*family).to_string())),
            [family, qualifier] => Ok(ColumnRef::Qualified {
                family: (*family).to_string(),
                qualifier: (*qualifier).to_string(),
            }),
            _ => Err(CellarError::ColumnFormat(raw.to_string())),
        }
    }

    /// The family segment of the reference
    pub fn family(&self) -> &str {
        match self {
            ColumnRef::Family(family) => family,
            ColumnRef::Qualified { family, .. } => family,
        }
    }

    /// The qualifier segment, if the reference is fully qualified
    pub fn qualifier(&self) -> Option<&str> {
        match self {
            ColumnRef::Family(_) => None,
            ColumnRef::Qualified { qualifier, .. } => Some(qualifier),
        }
    }
}

/// A fully qualified `family:qualifier` field reference, as required
/// by writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    pub family: String,
    pub qualifier: String,
}

impl FieldRef {
    /// Parse a raw field reference, rejecting the family-only form
    pub fn parse(raw: &str) -> Result<Self> {
        match ColumnRef::parse(raw)? {
            ColumnRef::Qualified { family, qualifier } => Ok(Self { family, qualifier }),
            ColumnRef::Family(_) => Err(CellarError::ColumnFormat(raw.to_string())),
        }
    }
}
