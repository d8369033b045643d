use serde::Serialize;

use crate::schema::TypedRecord;

/// One resource-to-activity assignment from the `TASKRSRC` table,
/// carrying planned, actual and remaining quantity and cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub activity_id: String,
    pub resource_id: String,
    pub target_qty: f64,
    pub target_cost: f64,
    pub actual_regular_qty: f64,
    pub actual_overtime_qty: f64,
    pub actual_regular_cost: f64,
    pub actual_overtime_cost: f64,
    pub remaining_qty: f64,
    pub remaining_cost: f64,
}

impl Assignment {
    pub fn from_record(rec: &TypedRecord) -> Self {
        Self {
            activity_id: rec.text("task_id"),
            resource_id: rec.text("rsrc_id"),
            target_qty: rec.number("target_qty"),
            target_cost: rec.number("target_cost"),
            actual_regular_qty: rec.number("act_reg_qty"),
            actual_overtime_qty: rec.number("act_ot_qty"),
            actual_regular_cost: rec.number("act_reg_cost"),
            actual_overtime_cost: rec.number("act_ot_cost"),
            remaining_qty: rec.number("remain_qty"),
            remaining_cost: rec.number("remain_cost"),
        }
    }

    /// Total booked quantity, regular plus overtime.
    pub fn actual_qty(&self) -> f64 {
        self.actual_regular_qty + self.actual_overtime_qty
    }

    /// Total booked cost, regular plus overtime.
    pub fn actual_cost(&self) -> f64 {
        self.actual_regular_cost + self.actual_overtime_cost
    }
}
