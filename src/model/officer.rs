use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Id, Phone};

/// A polling staff member linkable to assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Officer {
    pub id: Id,
    pub name: String,
    pub phone: Phone,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Officer {
    pub fn new(spec: OfficerSpec) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate('o'),
            name: spec.name,
            phone: spec.phone,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerSpec {
    pub name: String,
    pub phone: Phone,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfficerPatch {
    pub name: Option<String>,
    pub phone: Option<Phone>,
}
