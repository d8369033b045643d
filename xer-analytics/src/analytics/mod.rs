//! Read-only analytics queries over the schedule model.

mod critical;
mod curve;
mod hierarchy;
mod summary;
mod utilization;

pub use critical::{critical_activities, critical_path_summary, is_critical, CriticalPathSummary};
pub use curve::{resource_curve, CurveBucket, ResourceCurve};
pub use hierarchy::{wbs_hierarchy, WbsTreeNode};
pub use summary::{schedule_summary, DurationStats, ScheduleSummary};
pub use utilization::{resource_utilization, ResourceUtilization};
