use serde::Serialize;

use crate::schema::TypedRecord;

/// One project row from the `PROJECT` table. The engine works against
/// the first project in the file; additional rows stay addressable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub short_name: String,
    pub name: String,
    pub manager: String,
    pub status_code: String,
}

impl Project {
    pub fn from_record(rec: &TypedRecord) -> Self {
        Self {
            id: rec.text("proj_id"),
            short_name: rec.text("proj_short_name"),
            name: rec.text("proj_name"),
            manager: rec.text("proj_mgr"),
            status_code: rec.text("status_code"),
        }
    }

    /// Best display label: full name, else short name, else id.
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else if !self.short_name.is_empty() {
            &self.short_name
        } else {
            &self.id
        }
    }
}
