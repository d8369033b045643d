//! DCMA 14-point schedule integrity assessment.
//!
//! Fourteen independent checks over the parsed model, each a pure
//! function of the model and the configured thresholds. No check
//! reads another's result, so the battery could run in any order.

mod checks;

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use strum::Display;
use xer_parse::domain::Activity;
use xer_parse::Model;

use crate::settings::Thresholds;

/// Cap on how many offending entities a check records for drill-down.
pub const MAX_OFFENDERS: usize = 25;

/// Outcome tier of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

/// Result of one of the fourteen checks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub point: u8,
    pub title: String,
    pub description: String,
    pub status: CheckStatus,
    /// Named numeric metrics backing the verdict.
    pub metrics: BTreeMap<String, f64>,
    /// Offending entity labels, capped at [`MAX_OFFENDERS`].
    pub offenders: Vec<String>,
    pub summary: String,
    /// False for the baseline points this engine cannot evaluate.
    pub applicable: bool,
}

/// Aggregate score over the whole battery.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    pub total_points: u8,
    pub passed_points: u8,
    pub failed_points: u8,
    pub warning_points: u8,
    /// `round(100 * passed / 14)`.
    pub score: u8,
    pub grade: char,
}

/// Full assessment: the fourteen point results plus the rollup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub points: Vec<CheckResult>,
    pub summary: AssessmentSummary,
}

/// Shared read-only inputs handed to every check.
pub(crate) struct CheckContext<'a> {
    pub model: &'a Model,
    pub activities: Vec<&'a Activity>,
    pub thresholds: &'a Thresholds,
    /// Ids of activities with at least one predecessor.
    pub has_predecessor: HashSet<&'a str>,
    /// Ids of activities with at least one successor.
    pub has_successor: HashSet<&'a str>,
}

impl<'a> CheckContext<'a> {
    fn new(model: &'a Model, project_id: &str, thresholds: &'a Thresholds) -> Self {
        let activities: Vec<&Activity> = model.activities_for(project_id).collect();
        let ids: HashSet<&str> = activities.iter().map(|a| a.id.as_str()).collect();

        let mut has_predecessor = HashSet::new();
        let mut has_successor = HashSet::new();
        for rel in &model.relationships {
            if let Some(id) = ids.get(rel.successor_id.as_str()) {
                has_predecessor.insert(*id);
            }
            if let Some(id) = ids.get(rel.predecessor_id.as_str()) {
                has_successor.insert(*id);
            }
        }

        Self {
            model,
            activities,
            thresholds,
            has_predecessor,
            has_successor,
        }
    }

    /// Share of `part` in `whole` as a percentage; an empty
    /// denominator counts as trivially satisfied (100%).
    pub fn coverage_pct(part: usize, whole: usize) -> f64 {
        if whole == 0 {
            100.0
        } else {
            part as f64 * 100.0 / whole as f64
        }
    }

    /// Offender share as a percentage; an empty denominator means
    /// nothing can offend (0%).
    pub fn offender_pct(part: usize, whole: usize) -> f64 {
        if whole == 0 {
            0.0
        } else {
            part as f64 * 100.0 / whole as f64
        }
    }
}

/// Run the whole battery for one project and aggregate the score.
pub fn run_assessment(model: &Model, project_id: &str, thresholds: &Thresholds) -> Assessment {
    let cx = CheckContext::new(model, project_id, thresholds);

    let points = vec![
        checks::logic(&cx),
        checks::leads(&cx),
        checks::lags(&cx),
        checks::relationship_types(&cx),
        checks::hard_constraints(&cx),
        checks::high_float(&cx),
        checks::negative_float(&cx),
        checks::high_duration(&cx),
        checks::invalid_dates(&cx),
        checks::resource_coverage(&cx),
        checks::stalled_active(&cx),
        checks::critical_path_ratio(&cx),
        checks::baseline_execution(&cx),
        checks::baseline_metrics(&cx),
    ];

    let passed = points
        .iter()
        .filter(|p| p.status == CheckStatus::Pass)
        .count() as u8;
    let failed = points
        .iter()
        .filter(|p| p.status == CheckStatus::Fail)
        .count() as u8;
    let warnings = points
        .iter()
        .filter(|p| p.status == CheckStatus::Warning)
        .count() as u8;
    let total = points.len() as u8;
    let score = (passed as f64 * 100.0 / total as f64).round() as u8;

    tracing::info!(passed, failed, warnings, score, "dcma assessment complete");

    Assessment {
        points,
        summary: AssessmentSummary {
            total_points: total,
            passed_points: passed,
            failed_points: failed,
            warning_points: warnings,
            score,
            grade: grade_for(score),
        },
    }
}

fn grade_for(score: u8) -> char {
    match score {
        90..=u8::MAX => 'A',
        80..=89 => 'B',
        70..=79 => 'C',
        60..=69 => 'D',
        _ => 'F',
    }
}
