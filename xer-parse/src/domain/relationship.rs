use serde::Serialize;
use strum::Display;

use crate::schema::TypedRecord;

/// Precedence relationship type, mapped from the XER `PR_*` codes.
/// Rows missing a type default to finish-to-start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum RelationshipKind {
    #[strum(serialize = "FS")]
    FinishToStart,
    #[strum(serialize = "SS")]
    StartToStart,
    #[strum(serialize = "FF")]
    FinishToFinish,
    #[strum(serialize = "SF")]
    StartToFinish,
}

impl RelationshipKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "PR_SS" => RelationshipKind::StartToStart,
            "PR_FF" => RelationshipKind::FinishToFinish,
            "PR_SF" => RelationshipKind::StartToFinish,
            _ => RelationshipKind::FinishToStart,
        }
    }
}

/// One precedence edge from the `TASKPRED` table. Either endpoint may
/// reference an activity missing from the file; consumers treat the
/// unknown side as "Unknown" rather than failing the lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub predecessor_id: String,
    pub successor_id: String,
    pub kind: RelationshipKind,
    /// Signed offset in hours; negative values are leads.
    pub lag_hours: f64,
}

impl Relationship {
    pub fn from_record(rec: &TypedRecord) -> Self {
        Self {
            predecessor_id: rec.text("pred_task_id"),
            successor_id: rec.text("task_id"),
            kind: RelationshipKind::from_code(&rec.text("pred_type")),
            lag_hours: rec.number("lag_hr_cnt"),
        }
    }

    pub fn is_lead(&self) -> bool {
        self.lag_hours < 0.0
    }

    pub fn has_lag(&self) -> bool {
        self.lag_hours > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_type_defaults_to_finish_to_start() {
        assert_eq!(RelationshipKind::from_code(""), RelationshipKind::FinishToStart);
        assert_eq!(
            RelationshipKind::from_code("PR_FS"),
            RelationshipKind::FinishToStart
        );
        assert_eq!(
            RelationshipKind::from_code("PR_FF1"),
            RelationshipKind::FinishToStart
        );
    }
}
