use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use xer_parse::domain::Resource;
use xer_parse::Model;

use crate::error::AnalyticsError;

/// One 7-day bucket of a resource curve. `bucket_end` is always
/// exactly seven days after `bucket_start`, even when that reaches
/// past the overall window end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveBucket {
    pub bucket_start: NaiveDateTime,
    pub bucket_end: NaiveDateTime,
    pub weekly_target_qty: f64,
    pub weekly_actual_qty: f64,
    pub weekly_target_cost: f64,
    pub weekly_actual_cost: f64,
    /// Ids of activities with nonzero presence in this bucket.
    pub active_activities: Vec<String>,
}

/// Weekly time-phased quantity/cost series for one resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCurve {
    pub resource_id: String,
    /// `None` when assignments reference a resource id missing from
    /// the resource table.
    pub resource: Option<Resource>,
    pub time_based_data: Vec<CurveBucket>,
}

/// Distribute a resource's assigned quantities and costs across
/// weekly buckets, proportionally to each activity's temporal overlap
/// with the bucket.
///
/// Assignments whose activity lacks a usable start or end date are
/// skipped. The window is [min start, max end] over the surviving
/// activities, partitioned into 7-day buckets from the window start.
/// Over an activity's full span the overlap ratios sum to 1, so the
/// allocation conserves each assignment's totals up to rounding.
/// Milestones have no span to divide by; they book their full amounts
/// into the one bucket containing their date.
pub fn resource_curve(model: &Model, resource_id: &str) -> Result<ResourceCurve, AnalyticsError> {
    let resource = model.resource(resource_id).cloned();

    let pairs: Vec<_> = model
        .assignments_for_resource(resource_id)
        .filter_map(|assignment| {
            let activity = model.activity(&assignment.activity_id)?;
            let start = activity.planned_start()?;
            let end = activity.planned_end()?;
            (start <= end).then_some((assignment, activity, start, end))
        })
        .collect();

    if resource.is_none() && pairs.is_empty() {
        return Err(AnalyticsError::UnknownResource(resource_id.to_string()));
    }

    let Some(window_start) = pairs.iter().map(|(_, _, s, _)| *s).min() else {
        return Ok(ResourceCurve {
            resource_id: resource_id.to_string(),
            resource,
            time_based_data: Vec::new(),
        });
    };
    let window_end = pairs
        .iter()
        .map(|(_, _, _, e)| *e)
        .max()
        .unwrap_or(window_start);

    let mut buckets = Vec::new();
    let mut cursor = window_start;
    loop {
        let bucket_end = cursor + Duration::days(7);
        let is_final = bucket_end >= window_end;
        let mut bucket = CurveBucket {
            bucket_start: cursor,
            bucket_end,
            weekly_target_qty: 0.0,
            weekly_actual_qty: 0.0,
            weekly_target_cost: 0.0,
            weekly_actual_cost: 0.0,
            active_activities: Vec::new(),
        };

        for (assignment, activity, start, end) in &pairs {
            let ratio = overlap_ratio(*start, *end, cursor, bucket_end, is_final);
            if ratio <= 0.0 {
                continue;
            }
            bucket.weekly_target_qty += assignment.target_qty * ratio;
            bucket.weekly_actual_qty += assignment.actual_qty() * ratio;
            bucket.weekly_target_cost += assignment.target_cost * ratio;
            bucket.weekly_actual_cost += assignment.actual_cost() * ratio;
            if !bucket.active_activities.contains(&activity.id) {
                bucket.active_activities.push(activity.id.clone());
            }
        }

        buckets.push(bucket);
        cursor = bucket_end;
        if cursor >= window_end {
            break;
        }
    }

    Ok(ResourceCurve {
        resource_id: resource_id.to_string(),
        resource,
        time_based_data: buckets,
    })
}

/// Share of an activity's span falling inside one bucket.
///
/// A zero-length span (milestone) contributes 1 in the single bucket
/// containing its date and 0 elsewhere; the final bucket is closed on
/// the right so a milestone sitting exactly on the window end is not
/// lost to the half-open boundary.
fn overlap_ratio(
    start: NaiveDateTime,
    end: NaiveDateTime,
    bucket_start: NaiveDateTime,
    bucket_end: NaiveDateTime,
    is_final: bool,
) -> f64 {
    if start == end {
        let contained = start >= bucket_start && (start < bucket_end || (is_final && start == bucket_end));
        return if contained { 1.0 } else { 0.0 };
    }

    let overlap_start = start.max(bucket_start);
    let overlap_end = end.min(bucket_end);
    if overlap_end <= overlap_start {
        return 0.0;
    }

    let overlap = (overlap_end - overlap_start).num_seconds() as f64;
    let span = (end - start).num_seconds() as f64;
    overlap / span
}
