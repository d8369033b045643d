//! Schema-typed projection of raw records.
//!
//! Raw XER rows are all strings. Each known table carries a schema
//! declaring which fields are numbers, dates or flags; projecting a
//! row through its schema yields a [`TypedRecord`] of tagged
//! [`FieldValue`]s that downstream code can match on exhaustively.
//! Coercion is lossy on purpose: unparsable numbers become `0.0`,
//! unparsable dates become `None` and anything not `Y`/`true`/`1`
//! is a false flag. Fields a schema does not mention pass through as
//! text, so unmodeled columns survive round trips.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::tokenizer::RawRecord;

/// Declared kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Flag,
}

/// A typed scalar projected from a raw string value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(Option<NaiveDateTime>),
    Flag(bool),
}

/// One projected row: field name to typed value.
#[derive(Debug, Clone, Default)]
pub struct TypedRecord(HashMap<String, FieldValue>);

impl TypedRecord {
    /// Text value of a field, empty string when missing or non-text.
    pub fn text(&self, field: &str) -> String {
        match self.0.get(field) {
            Some(FieldValue::Text(s)) => s.clone(),
            _ => String::new(),
        }
    }

    /// Numeric value of a field, `0.0` when missing or non-numeric.
    pub fn number(&self, field: &str) -> f64 {
        match self.0.get(field) {
            Some(FieldValue::Number(n)) => *n,
            _ => 0.0,
        }
    }

    /// Date value of a field, `None` when missing or unparsable.
    pub fn date(&self, field: &str) -> Option<NaiveDateTime> {
        match self.0.get(field) {
            Some(FieldValue::Date(d)) => *d,
            _ => None,
        }
    }

    /// Flag value of a field, `false` when missing.
    pub fn flag(&self, field: &str) -> bool {
        matches!(self.0.get(field), Some(FieldValue::Flag(true)))
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }
}

/// Field kinds for one known table.
#[derive(Debug)]
pub struct TableSchema {
    pub table: &'static str,
    fields: &'static [(&'static str, FieldKind)],
}

impl TableSchema {
    /// Kind declared for a field; unmodeled fields default to text.
    pub fn kind_of(&self, field: &str) -> FieldKind {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, kind)| *kind)
            .unwrap_or(FieldKind::Text)
    }

    /// Project one raw record through this schema.
    pub fn project(&self, raw: &RawRecord) -> TypedRecord {
        let typed = raw
            .iter()
            .map(|(field, value)| (field.clone(), coerce(value, self.kind_of(field))))
            .collect();
        TypedRecord(typed)
    }
}

fn coerce(value: &str, kind: FieldKind) -> FieldValue {
    match kind {
        FieldKind::Text => FieldValue::Text(value.to_string()),
        FieldKind::Number => FieldValue::Number(value.trim().parse().unwrap_or(0.0)),
        FieldKind::Date => FieldValue::Date(parse_date(value)),
        FieldKind::Flag => {
            let v = value.trim();
            FieldValue::Flag(v == "Y" || v == "true" || v == "1")
        }
    }
}

/// XER dates come as `2024-03-18 08:00` (sometimes with seconds, or
/// date-only). Anything else is treated as absent, never as an
/// invalid-date sentinel.
fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

const PROJECT_SCHEMA: TableSchema = TableSchema {
    table: "PROJECT",
    fields: &[
        ("proj_id", FieldKind::Text),
        ("proj_short_name", FieldKind::Text),
        ("proj_name", FieldKind::Text),
        ("proj_mgr", FieldKind::Text),
        ("status_code", FieldKind::Text),
    ],
};

const TASK_SCHEMA: TableSchema = TableSchema {
    table: "TASK",
    fields: &[
        ("task_id", FieldKind::Text),
        ("proj_id", FieldKind::Text),
        ("wbs_id", FieldKind::Text),
        ("task_code", FieldKind::Text),
        ("task_name", FieldKind::Text),
        ("status_code", FieldKind::Text),
        ("target_drtn_hr_cnt", FieldKind::Number),
        ("phys_complete_pct", FieldKind::Number),
        ("total_float_hr_cnt", FieldKind::Number),
        ("driving_path_flag", FieldKind::Flag),
        ("act_start_date", FieldKind::Date),
        ("act_end_date", FieldKind::Date),
        ("early_start_date", FieldKind::Date),
        ("early_end_date", FieldKind::Date),
        ("late_start_date", FieldKind::Date),
        ("late_end_date", FieldKind::Date),
        ("cstr_type", FieldKind::Text),
        ("cstr_date", FieldKind::Date),
    ],
};

const PROJWBS_SCHEMA: TableSchema = TableSchema {
    table: "PROJWBS",
    fields: &[
        ("wbs_id", FieldKind::Text),
        ("proj_id", FieldKind::Text),
        ("wbs_name", FieldKind::Text),
        ("wbs_short_name", FieldKind::Text),
        ("parent_wbs_id", FieldKind::Text),
        ("seq_num", FieldKind::Number),
    ],
};

const RSRC_SCHEMA: TableSchema = TableSchema {
    table: "RSRC",
    fields: &[
        ("rsrc_id", FieldKind::Text),
        ("rsrc_name", FieldKind::Text),
        ("rsrc_type", FieldKind::Text),
    ],
};

const TASKPRED_SCHEMA: TableSchema = TableSchema {
    table: "TASKPRED",
    fields: &[
        ("task_pred_id", FieldKind::Text),
        ("task_id", FieldKind::Text),
        ("pred_task_id", FieldKind::Text),
        ("pred_type", FieldKind::Text),
        ("lag_hr_cnt", FieldKind::Number),
    ],
};

const TASKRSRC_SCHEMA: TableSchema = TableSchema {
    table: "TASKRSRC",
    fields: &[
        ("taskrsrc_id", FieldKind::Text),
        ("task_id", FieldKind::Text),
        ("rsrc_id", FieldKind::Text),
        ("target_qty", FieldKind::Number),
        ("target_cost", FieldKind::Number),
        ("act_reg_qty", FieldKind::Number),
        ("act_ot_qty", FieldKind::Number),
        ("act_reg_cost", FieldKind::Number),
        ("act_ot_cost", FieldKind::Number),
        ("remain_qty", FieldKind::Number),
        ("remain_cost", FieldKind::Number),
    ],
};

/// Schema of one of the six tables the engine models, if known.
pub fn schema_for(table: &str) -> Option<&'static TableSchema> {
    match table {
        "PROJECT" => Some(&PROJECT_SCHEMA),
        "TASK" => Some(&TASK_SCHEMA),
        "PROJWBS" => Some(&PROJWBS_SCHEMA),
        "RSRC" => Some(&RSRC_SCHEMA),
        "TASKPRED" => Some(&TASKPRED_SCHEMA),
        "TASKRSRC" => Some(&TASKRSRC_SCHEMA),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn numbers_coerce_to_zero_on_garbage() {
        let schema = schema_for("TASK").unwrap();
        let rec = schema.project(&raw(&[
            ("target_drtn_hr_cnt", ""),
            ("total_float_hr_cnt", "not a number"),
            ("phys_complete_pct", "42.5"),
        ]));

        assert_eq!(rec.number("target_drtn_hr_cnt"), 0.0);
        assert_eq!(rec.number("total_float_hr_cnt"), 0.0);
        assert_eq!(rec.number("phys_complete_pct"), 42.5);
    }

    #[test]
    fn dates_coerce_to_none_not_a_sentinel() {
        let schema = schema_for("TASK").unwrap();
        let rec = schema.project(&raw(&[
            ("act_start_date", "2024-03-18 08:00"),
            ("act_end_date", ""),
            ("early_start_date", "18/03/2024"),
            ("early_end_date", "2024-03-20"),
        ]));

        assert_eq!(
            rec.date("act_start_date"),
            NaiveDate::from_ymd_opt(2024, 3, 18).and_then(|d| d.and_hms_opt(8, 0, 0))
        );
        assert_eq!(rec.date("act_end_date"), None);
        assert_eq!(rec.date("early_start_date"), None);
        assert_eq!(
            rec.date("early_end_date"),
            NaiveDate::from_ymd_opt(2024, 3, 20).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
    }

    #[test]
    fn only_y_true_and_one_are_truthy_flags() {
        let schema = schema_for("TASK").unwrap();
        for (value, expected) in [
            ("Y", true),
            ("true", true),
            ("1", true),
            ("N", false),
            ("yes", false),
            ("TRUE", false),
            ("", false),
        ] {
            let rec = schema.project(&raw(&[("driving_path_flag", value)]));
            assert_eq!(rec.flag("driving_path_flag"), expected, "value {value:?}");
        }
    }

    #[test]
    fn unmodeled_fields_pass_through_as_text() {
        let schema = schema_for("TASK").unwrap();
        let rec = schema.project(&raw(&[("rsrc_calendar_id", "37")]));

        assert_eq!(
            rec.get("rsrc_calendar_id"),
            Some(&FieldValue::Text("37".to_string()))
        );
    }

    #[test]
    fn unknown_table_has_no_schema() {
        assert!(schema_for("CALENDAR").is_none());
    }
}
