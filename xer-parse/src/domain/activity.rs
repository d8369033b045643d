use chrono::NaiveDateTime;
use serde::Serialize;
use strum::Display;

use crate::schema::TypedRecord;

/// Scheduling status of an activity, mapped from the XER `TK_*`
/// status codes. Unknown codes fall back to `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
pub enum ActivityStatus {
    #[strum(serialize = "Not Started")]
    NotStarted,
    Active,
    Complete,
}

impl ActivityStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "TK_Active" => ActivityStatus::Active,
            "TK_Complete" => ActivityStatus::Complete,
            _ => ActivityStatus::NotStarted,
        }
    }
}

/// One activity (task) row from the `TASK` table.
///
/// Float and dates are trusted as exported by the scheduling tool;
/// this crate never recomputes them. Invalid date strings have
/// already been coerced to `None` by the schema projector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub project_id: String,
    pub wbs_id: Option<String>,
    pub code: String,
    pub name: String,
    pub status: ActivityStatus,
    pub duration_hours: f64,
    pub percent_complete: f64,
    pub total_float_hours: f64,
    pub driving_path: bool,
    pub actual_start: Option<NaiveDateTime>,
    pub actual_end: Option<NaiveDateTime>,
    pub early_start: Option<NaiveDateTime>,
    pub early_end: Option<NaiveDateTime>,
    pub late_start: Option<NaiveDateTime>,
    pub late_end: Option<NaiveDateTime>,
    pub constraint_type: Option<String>,
    pub constraint_date: Option<NaiveDateTime>,
}

impl Activity {
    pub fn from_record(rec: &TypedRecord) -> Self {
        let wbs_id = rec.text("wbs_id");
        let constraint_type = rec.text("cstr_type");
        Self {
            id: rec.text("task_id"),
            project_id: rec.text("proj_id"),
            wbs_id: (!wbs_id.is_empty()).then_some(wbs_id),
            code: rec.text("task_code"),
            name: rec.text("task_name"),
            status: ActivityStatus::from_code(&rec.text("status_code")),
            duration_hours: rec.number("target_drtn_hr_cnt"),
            percent_complete: rec.number("phys_complete_pct"),
            total_float_hours: rec.number("total_float_hr_cnt"),
            driving_path: rec.flag("driving_path_flag"),
            actual_start: rec.date("act_start_date"),
            actual_end: rec.date("act_end_date"),
            early_start: rec.date("early_start_date"),
            early_end: rec.date("early_end_date"),
            late_start: rec.date("late_start_date"),
            late_end: rec.date("late_end_date"),
            constraint_type: (!constraint_type.is_empty()).then_some(constraint_type),
            constraint_date: rec.date("cstr_date"),
        }
    }

    /// Zero planned duration marks a milestone.
    pub fn is_milestone(&self) -> bool {
        self.duration_hours == 0.0
    }

    /// Start date used for time-phasing: actual when the activity has
    /// started, planned (early) otherwise.
    pub fn planned_start(&self) -> Option<NaiveDateTime> {
        self.actual_start.or(self.early_start)
    }

    /// End date used for time-phasing, actual-else-early.
    pub fn planned_end(&self) -> Option<NaiveDateTime> {
        self.actual_end.or(self.early_end)
    }
}
