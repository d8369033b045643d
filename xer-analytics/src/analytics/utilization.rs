use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;
use xer_parse::domain::Assignment;
use xer_parse::Model;

/// Quantity and cost totals for one resource, summed over the
/// assignments that reference it within one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUtilization {
    pub resource_id: String,
    /// Resolved name, or "Unknown" for a dangling resource id.
    pub resource_name: String,
    pub target_qty: f64,
    pub target_cost: f64,
    pub actual_qty: f64,
    pub actual_cost: f64,
    pub remaining_qty: f64,
    pub remaining_cost: f64,
    pub assignments: Vec<Assignment>,
}

/// Utilization per resource for a project, one bucket per resource id
/// that actually appears on an assignment. This maps over the
/// project's assignments, so resources without assignments are absent
/// rather than zero-filled. Sorted by resource name, then id.
pub fn resource_utilization(model: &Model, project_id: &str) -> Vec<ResourceUtilization> {
    let mut buckets: HashMap<&str, ResourceUtilization> = HashMap::new();

    for assignment in &model.assignments {
        let in_project = model
            .activity(&assignment.activity_id)
            .is_some_and(|a| a.project_id == project_id);
        if !in_project {
            continue;
        }

        let bucket = buckets
            .entry(assignment.resource_id.as_str())
            .or_insert_with(|| ResourceUtilization {
                resource_id: assignment.resource_id.clone(),
                resource_name: model
                    .resource(&assignment.resource_id)
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                target_qty: 0.0,
                target_cost: 0.0,
                actual_qty: 0.0,
                actual_cost: 0.0,
                remaining_qty: 0.0,
                remaining_cost: 0.0,
                assignments: Vec::new(),
            });

        bucket.target_qty += assignment.target_qty;
        bucket.target_cost += assignment.target_cost;
        bucket.actual_qty += assignment.actual_qty();
        bucket.actual_cost += assignment.actual_cost();
        bucket.remaining_qty += assignment.remaining_qty;
        bucket.remaining_cost += assignment.remaining_cost;
        bucket.assignments.push(assignment.clone());
    }

    buckets
        .into_values()
        .sorted_by(|a, b| {
            a.resource_name
                .cmp(&b.resource_name)
                .then_with(|| a.resource_id.cmp(&b.resource_id))
        })
        .collect()
}
