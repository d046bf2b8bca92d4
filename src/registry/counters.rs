//! Booth counter maintenance.
//!
//! `assigned_count` and `completed_count` are derived state, adjusted by
//! exactly ±1 per triggering event as part of the mutation that caused it.
//! Because the counters are never recomputed on the hot path, a missed event
//! would skew them permanently; [`recompute`] is the reconciliation backstop
//! that restores them from the live records.

use std::collections::HashSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::{Assignment, Booth, Id, Voter, VoterStatus};

/// An assignment now references `booth_id`: bump its assigned count.
pub(crate) fn assignment_created(booths: &mut [Booth], booth_id: &Id) {
    if let Some(booth) = booths.iter_mut().find(|b| b.id == *booth_id) {
        booth.assigned_count += 1;
        booth.updated_at = Utc::now();
    }
}

/// An assignment referencing `booth_id` was removed: drop its assigned count,
/// floored at zero. The completed count is left untouched even when the
/// departing voter had already voted.
pub(crate) fn assignment_removed(booths: &mut [Booth], booth_id: &Id) {
    if let Some(booth) = booths.iter_mut().find(|b| b.id == *booth_id) {
        booth.assigned_count = booth.assigned_count.saturating_sub(1);
        booth.updated_at = Utc::now();
    }
}

/// A voter assigned to `booth_id` transitioned to voted.
pub(crate) fn voter_completed(booths: &mut [Booth], booth_id: &Id) {
    if let Some(booth) = booths.iter_mut().find(|b| b.id == *booth_id) {
        booth.completed_count += 1;
        booth.updated_at = Utc::now();
    }
}

/// Outcome of a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileReport {
    pub booths_checked: usize,
    pub booths_adjusted: usize,
}

/// Recompute both counters for every booth from the live assignment and
/// voter collections, correcting any drift. `assigned_count` becomes the
/// number of live assignments for the booth; `completed_count` the number of
/// distinct voted voters holding one of them.
pub fn recompute(
    booths: &mut [Booth],
    voters: &[Voter],
    assignments: &[Assignment],
) -> ReconcileReport {
    let mut adjusted = 0;
    for booth in booths.iter_mut() {
        let assigned = assignments
            .iter()
            .filter(|a| a.booth_id == booth.id)
            .count() as u32;
        let voter_ids: HashSet<&Id> = assignments
            .iter()
            .filter(|a| a.booth_id == booth.id)
            .map(|a| &a.voter_id)
            .collect();
        let completed = voters
            .iter()
            .filter(|v| v.status == VoterStatus::Voted && voter_ids.contains(&v.id))
            .count() as u32;

        if booth.assigned_count != assigned || booth.completed_count != completed {
            log::warn!(
                "Booth {} counters drifted: assigned {} -> {}, completed {} -> {}",
                booth.id,
                booth.assigned_count,
                assigned,
                booth.completed_count,
                completed
            );
            booth.assigned_count = assigned;
            booth.completed_count = completed;
            booth.updated_at = Utc::now();
            adjusted += 1;
        }
    }
    ReconcileReport {
        booths_checked: booths.len(),
        booths_adjusted: adjusted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AssignmentSpec, BoothSpec, OfficerSpec, VoterSpec};

    #[test]
    fn removal_floors_at_zero() {
        let mut booths = vec![Booth::new(BoothSpec::example1())];
        let id = booths[0].id.clone();
        assignment_removed(&mut booths, &id);
        assert_eq!(booths[0].assigned_count, 0);
    }

    #[test]
    fn unknown_booth_is_ignored() {
        let mut booths = vec![Booth::new(BoothSpec::example1())];
        assignment_created(&mut booths, &Id::from("b-missing"));
        assert_eq!(booths[0].assigned_count, 0);
    }

    #[test]
    fn recompute_corrects_drifted_counters() {
        let mut voter = Voter::new(VoterSpec::example1());
        voter.status = VoterStatus::Voted;
        let mut booth = Booth::new(BoothSpec::example1());
        let officer = crate::model::Officer::new(OfficerSpec::example1());
        let assignment = Assignment::new(AssignmentSpec {
            voter_id: voter.id.clone(),
            booth_id: booth.id.clone(),
            officer_id: officer.id.clone(),
        });

        // Skew both counters.
        booth.assigned_count = 7;
        booth.completed_count = 3;

        let mut booths = vec![booth];
        let report = recompute(&mut booths, &[voter], &[assignment]);
        assert_eq!(report.booths_checked, 1);
        assert_eq!(report.booths_adjusted, 1);
        assert_eq!(booths[0].assigned_count, 1);
        assert_eq!(booths[0].completed_count, 1);
    }

    #[test]
    fn recompute_leaves_consistent_booths_alone() {
        let mut booths = vec![Booth::new(BoothSpec::example1())];
        let report = recompute(&mut booths, &[], &[]);
        assert_eq!(report.booths_adjusted, 0);
    }
}
