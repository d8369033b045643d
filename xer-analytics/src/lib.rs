//! Schedule-health analytics over a parsed XER [`xer_parse::Model`].
//!
//! Everything here is a pure function of the model plus explicit
//! parameters: critical-path filtering, summary statistics, resource
//! utilization, time-phased resource curves, a cycle-safe WBS
//! hierarchy and the DCMA 14-point schedule integrity assessment.
//! Nothing mutates the model, so concurrent queries against one model
//! are safe by construction.

pub mod analytics;
pub mod dcma;
pub mod export;

mod error;
mod settings;

pub use error::AnalyticsError;
pub use settings::{read_thresholds, Thresholds};
