//! Parser for Primavera P6 XER schedule exports.
//!
//! An XER file is a flat, tab-delimited dump of the scheduling
//! database: a sequence of tables, each announced by a `%T` line,
//! described by a `%F` field list and filled by `%R` data rows. This
//! crate turns that text into a typed, cross-referenced [`Model`]
//! holding projects, activities, WBS nodes, resources, precedence
//! relationships and resource assignments.
//!
//! Parsing is tolerant by construction: malformed lines are skipped,
//! unparsable scalars coerce to safe defaults and missing tables
//! yield empty collections. The worst case is a degraded model, never
//! an error.

pub mod domain;
mod model;
mod schema;
mod tokenizer;

pub use model::Model;
pub use schema::{schema_for, FieldKind, FieldValue, TableSchema, TypedRecord};
pub use tokenizer::{tokenize, RawRecord, RawTables};
