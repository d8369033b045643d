//! Flattens analysis results for file export. JSON keeps full
//! fidelity (drill-down lists included); CSV expands to one row per
//! DCMA point or curve bucket. Writing targets any `io::Write`; the
//! caller owns file handling.

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::analytics::ResourceCurve;
use crate::dcma::Assessment;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// One CSV row of an assessment export.
#[derive(Debug, Serialize)]
struct AssessmentRow<'a> {
    point: u8,
    title: &'a str,
    status: String,
    applicable: bool,
    offender_count: usize,
    summary: &'a str,
}

/// Write an assessment as CSV, one row per point plus a trailing
/// score row.
pub fn write_assessment_csv<W: io::Write>(
    assessment: &Assessment,
    writer: W,
) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);

    for point in &assessment.points {
        csv.serialize(AssessmentRow {
            point: point.point,
            title: &point.title,
            status: point.status.to_string(),
            applicable: point.applicable,
            offender_count: point.offenders.len(),
            summary: &point.summary,
        })?;
    }
    csv.serialize(AssessmentRow {
        point: 0,
        title: "score",
        status: format!(
            "{} ({})",
            assessment.summary.score, assessment.summary.grade
        ),
        applicable: true,
        offender_count: 0,
        summary: "aggregate",
    })?;

    csv.flush()?;
    Ok(())
}

/// One CSV row of a resource-curve export.
#[derive(Debug, Serialize)]
struct CurveRow {
    bucket_start: String,
    bucket_end: String,
    weekly_target_qty: f64,
    weekly_actual_qty: f64,
    weekly_target_cost: f64,
    weekly_actual_cost: f64,
    active_activities: String,
}

/// Write a resource curve as CSV, one row per weekly bucket.
pub fn write_curve_csv<W: io::Write>(curve: &ResourceCurve, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);

    for bucket in &curve.time_based_data {
        csv.serialize(CurveRow {
            bucket_start: bucket.bucket_start.format("%Y-%m-%d %H:%M").to_string(),
            bucket_end: bucket.bucket_end.format("%Y-%m-%d %H:%M").to_string(),
            weekly_target_qty: bucket.weekly_target_qty,
            weekly_actual_qty: bucket.weekly_actual_qty,
            weekly_target_cost: bucket.weekly_target_cost,
            weekly_actual_cost: bucket.weekly_actual_cost,
            active_activities: bucket.active_activities.join(";"),
        })?;
    }

    csv.flush()?;
    Ok(())
}

/// Write any serializable result as pretty JSON.
pub fn write_json<T: Serialize, W: io::Write>(value: &T, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}
