use serde::{Deserialize, Serialize};

use crate::model::{Id, NationalId, Phone, Voter};

/// Which unique field collided. National-ID conflicts win the tie-break when
/// both fields collide.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicateField {
    NationalId,
    Phone,
}

/// Outcome of a duplicate scan across the voter collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheck {
    pub is_duplicate: bool,
    pub field: Option<DuplicateField>,
    pub conflicting_voter_id: Option<Id>,
    pub message: String,
}

impl DuplicateCheck {
    fn conflict(field: DuplicateField, voter: &Voter) -> Self {
        let what = match field {
            DuplicateField::NationalId => "national ID",
            DuplicateField::Phone => "phone",
        };
        Self {
            is_duplicate: true,
            field: Some(field),
            conflicting_voter_id: Some(voter.id.clone()),
            message: format!(
                "Duplicate {what}: already registered to {} ({})",
                voter.name, voter.id
            ),
        }
    }

    fn clear() -> Self {
        Self {
            is_duplicate: false,
            field: None,
            conflicting_voter_id: None,
            message: "No duplicates found".to_string(),
        }
    }
}

/// Scan `voters` for a national-ID or phone collision. A voter whose id
/// matches `exclude` is skipped, so an edit-in-place never conflicts with
/// itself. National IDs are checked before phones.
pub fn check(
    voters: &[Voter],
    national_id: &NationalId,
    phone: &Phone,
    exclude: Option<&Id>,
) -> DuplicateCheck {
    for voter in voters {
        if exclude == Some(&voter.id) {
            continue;
        }
        if voter.national_id == *national_id {
            return DuplicateCheck::conflict(DuplicateField::NationalId, voter);
        }
    }
    for voter in voters {
        if exclude == Some(&voter.id) {
            continue;
        }
        if voter.phone == *phone {
            return DuplicateCheck::conflict(DuplicateField::Phone, voter);
        }
    }
    DuplicateCheck::clear()
}
