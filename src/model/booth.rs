use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Id;

/// A polling location with derived assignment/completion counters.
/// The counters are maintained by the registry as a side effect of
/// assignment and vote-status mutations; clients never set them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booth {
    pub id: Id,
    pub location: String,
    pub time_window: String,
    pub assigned_count: u32,
    pub completed_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booth {
    pub fn new(spec: BoothSpec) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate('b'),
            location: spec.location,
            time_window: spec.time_window,
            assigned_count: 0,
            completed_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoothSpec {
    pub location: String,
    pub time_window: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoothPatch {
    pub location: Option<String>,
    pub time_window: Option<String>,
}
