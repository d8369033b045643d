use serde::Serialize;
use strum::Display;

use crate::schema::TypedRecord;

/// Resource category, mapped from the XER `RT_*` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
pub enum ResourceKind {
    Labor,
    Material,
    Equipment,
    Expense,
    Unknown,
}

impl ResourceKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "RT_Labor" => ResourceKind::Labor,
            "RT_Mat" => ResourceKind::Material,
            "RT_Equip" => ResourceKind::Equipment,
            "RT_Expense" => ResourceKind::Expense,
            _ => ResourceKind::Unknown,
        }
    }
}

/// One resource row from the `RSRC` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub kind: ResourceKind,
}

impl Resource {
    pub fn from_record(rec: &TypedRecord) -> Self {
        Self {
            id: rec.text("rsrc_id"),
            name: rec.text("rsrc_name"),
            kind: ResourceKind::from_code(&rec.text("rsrc_type")),
        }
    }
}
