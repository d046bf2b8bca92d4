use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Id;

/// A join record binding one voter, one booth, and one officer.
/// Deleted in cascade when any of the three referenced records goes away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: Id,
    pub voter_id: Id,
    pub booth_id: Id,
    pub officer_id: Id,
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    pub fn new(spec: AssignmentSpec) -> Self {
        Self {
            id: Id::generate('a'),
            voter_id: spec.voter_id,
            booth_id: spec.booth_id,
            officer_id: spec.officer_id,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSpec {
    pub voter_id: Id,
    pub booth_id: Id,
    pub officer_id: Id,
}
