use serde::Serialize;
use xer_parse::domain::Activity;
use xer_parse::Model;

/// An activity is critical iff its total float is exactly zero or the
/// source marked it as driving the schedule end date. Float is
/// trusted as exported; negative float alone does not qualify.
pub fn is_critical(activity: &Activity) -> bool {
    activity.total_float_hours == 0.0 || activity.driving_path
}

/// Critical activities of one project, in file order.
pub fn critical_activities<'a>(model: &'a Model, project_id: &str) -> Vec<&'a Activity> {
    model
        .activities_for(project_id)
        .filter(|a| is_critical(a))
        .collect()
}

/// Headline critical-path numbers for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalPathSummary {
    pub total_activities: usize,
    pub critical_activities: usize,
    pub critical_pct: f64,
}

pub fn critical_path_summary(model: &Model, project_id: &str) -> CriticalPathSummary {
    let total = model.activities_for(project_id).count();
    let critical = model
        .activities_for(project_id)
        .filter(|a| is_critical(a))
        .count();
    let critical_pct = if total == 0 {
        0.0
    } else {
        critical as f64 * 100.0 / total as f64
    };

    CriticalPathSummary {
        total_activities: total,
        critical_activities: critical,
        critical_pct,
    }
}
