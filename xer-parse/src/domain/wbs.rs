use serde::Serialize;

use crate::schema::TypedRecord;

/// One work-breakdown-structure node from the `PROJWBS` table.
/// `parent_id` forms a tree; the root node of a project has none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WbsNode {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub short_name: String,
    pub parent_id: Option<String>,
    pub sequence_number: f64,
}

impl WbsNode {
    pub fn from_record(rec: &TypedRecord) -> Self {
        let parent_id = rec.text("parent_wbs_id");
        Self {
            id: rec.text("wbs_id"),
            project_id: rec.text("proj_id"),
            name: rec.text("wbs_name"),
            short_name: rec.text("wbs_short_name"),
            parent_id: (!parent_id.is_empty()).then_some(parent_id),
            sequence_number: rec.number("seq_num"),
        }
    }
}
