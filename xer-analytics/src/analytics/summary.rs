use std::collections::BTreeMap;

use serde::Serialize;
use xer_parse::Model;

/// Aggregate duration statistics over activities with positive
/// duration. Milestones (zero duration) are excluded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationStats {
    pub sum_hours: f64,
    pub mean_hours: f64,
    pub min_hours: f64,
    pub max_hours: f64,
}

/// Headline counts and histograms for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub total_activities: usize,
    pub total_wbs_nodes: usize,
    pub total_resources: usize,
    pub total_relationships: usize,
    pub total_assignments: usize,
    pub status_histogram: BTreeMap<String, usize>,
    pub resource_kind_histogram: BTreeMap<String, usize>,
    pub duration: Option<DurationStats>,
}

pub fn schedule_summary(model: &Model, project_id: &str) -> ScheduleSummary {
    let mut status_histogram = BTreeMap::new();
    for activity in model.activities_for(project_id) {
        *status_histogram
            .entry(activity.status.to_string())
            .or_insert(0) += 1;
    }

    let mut resource_kind_histogram = BTreeMap::new();
    for resource in &model.resources {
        *resource_kind_histogram
            .entry(resource.kind.to_string())
            .or_insert(0) += 1;
    }

    let durations: Vec<f64> = model
        .activities_for(project_id)
        .map(|a| a.duration_hours)
        .filter(|&d| d > 0.0)
        .collect();
    let duration = (!durations.is_empty()).then(|| {
        let sum: f64 = durations.iter().sum();
        DurationStats {
            sum_hours: sum,
            mean_hours: sum / durations.len() as f64,
            min_hours: durations.iter().copied().fold(f64::INFINITY, f64::min),
            max_hours: durations.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    });

    ScheduleSummary {
        total_activities: model.activities_for(project_id).count(),
        total_wbs_nodes: model
            .wbs_nodes
            .iter()
            .filter(|w| w.project_id == project_id)
            .count(),
        total_resources: model.resources.len(),
        total_relationships: model.relationships.len(),
        total_assignments: model.assignments.len(),
        status_histogram,
        resource_kind_histogram,
        duration,
    }
}
