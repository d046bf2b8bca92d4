//! The record store: owns the four collections and defines the semantics of
//! every mutation against them. Derived booth counters are adjusted in the
//! same call as the triggering write, so callers holding the registry's
//! write lock get each multi-step operation as one atomic unit.

use chrono::{NaiveDate, Utc};

use crate::error::{Error, Result};
use crate::model::{
    Assignment, AssignmentSpec, Booth, BoothPatch, BoothSpec, DashboardStats, Id, NationalId,
    Officer, OfficerPatch, OfficerSpec, Phone, Voter, VoterPatch, VoterSpec, VoterStatus,
};
use crate::registry::counters::{self, ReconcileReport};
use crate::registry::duplicate::{self, DuplicateCheck};
use crate::registry::eligibility::{self, EligibilityResult};

#[derive(Debug, Default)]
pub struct RecordStore {
    voters: Vec<Voter>,
    booths: Vec<Booth>,
    officers: Vec<Officer>,
    assignments: Vec<Assignment>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- voters ----

    pub fn voters(&self) -> &[Voter] {
        &self.voters
    }

    pub fn voter(&self, id: &Id) -> Result<&Voter> {
        self.voters
            .iter()
            .find(|v| v.id == *id)
            .ok_or_else(|| Error::not_found(format!("Voter {id}")))
    }

    pub fn create_voter(&mut self, spec: VoterSpec) -> Result<Voter> {
        if spec.name.trim().is_empty() {
            return Err(Error::validation("Voter name must not be empty"));
        }
        if spec.address.trim().is_empty() {
            return Err(Error::validation("Voter address must not be empty"));
        }
        let dup = duplicate::check(&self.voters, &spec.national_id, &spec.phone, None);
        if dup.is_duplicate {
            return Err(Error::conflict(dup.message));
        }
        let voter = Voter::new(spec);
        self.voters.push(voter.clone());
        Ok(voter)
    }

    pub fn update_voter(&mut self, id: &Id, patch: VoterPatch) -> Result<Voter> {
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(Error::validation("Voter name must not be empty"));
            }
        }
        if let Some(phone) = &patch.phone {
            if let Some(other) = self
                .voters
                .iter()
                .find(|v| v.phone == *phone && v.id != *id)
            {
                return Err(Error::conflict(format!(
                    "Phone already in use by {} ({})",
                    other.name, other.id
                )));
            }
        }
        let voter = self
            .voters
            .iter_mut()
            .find(|v| v.id == *id)
            .ok_or_else(|| Error::not_found(format!("Voter {id}")))?;
        if let Some(name) = patch.name {
            voter.name = name;
        }
        if let Some(phone) = patch.phone {
            voter.phone = phone;
        }
        if let Some(address) = patch.address {
            voter.address = address;
        }
        voter.updated_at = Utc::now();
        Ok(voter.clone())
    }

    pub fn delete_voter(&mut self, id: &Id) -> Result<()> {
        let index = self
            .voters
            .iter()
            .position(|v| v.id == *id)
            .ok_or_else(|| Error::not_found(format!("Voter {id}")))?;
        self.voters.remove(index);
        self.remove_assignments_with_decrement(|a| a.voter_id == *id);
        Ok(())
    }

    /// Transition a voter to voted. Marking an already-voted voter again is a
    /// success no-op, so the booth counter moves at most once per voter.
    pub fn mark_voted(&mut self, id: &Id) -> Result<Voter> {
        let voter = self
            .voters
            .iter_mut()
            .find(|v| v.id == *id)
            .ok_or_else(|| Error::not_found(format!("Voter {id}")))?;
        if voter.status == VoterStatus::Voted {
            return Ok(voter.clone());
        }
        voter.status = VoterStatus::Voted;
        voter.updated_at = Utc::now();
        let voter = voter.clone();

        // Credit the voter's first assignment's booth, if any.
        let booth_id = self
            .assignments
            .iter()
            .find(|a| a.voter_id == *id)
            .map(|a| a.booth_id.clone());
        if let Some(booth_id) = booth_id {
            counters::voter_completed(&mut self.booths, &booth_id);
        }
        Ok(voter)
    }

    // ---- booths ----

    pub fn booths(&self) -> &[Booth] {
        &self.booths
    }

    pub fn booth(&self, id: &Id) -> Result<&Booth> {
        self.booths
            .iter()
            .find(|b| b.id == *id)
            .ok_or_else(|| Error::not_found(format!("Booth {id}")))
    }

    pub fn create_booth(&mut self, spec: BoothSpec) -> Result<Booth> {
        if spec.location.trim().is_empty() {
            return Err(Error::validation("Booth location must not be empty"));
        }
        let booth = Booth::new(spec);
        self.booths.push(booth.clone());
        Ok(booth)
    }

    pub fn update_booth(&mut self, id: &Id, patch: BoothPatch) -> Result<Booth> {
        let booth = self
            .booths
            .iter_mut()
            .find(|b| b.id == *id)
            .ok_or_else(|| Error::not_found(format!("Booth {id}")))?;
        if let Some(location) = patch.location {
            booth.location = location;
        }
        if let Some(time_window) = patch.time_window {
            booth.time_window = time_window;
        }
        booth.updated_at = Utc::now();
        Ok(booth.clone())
    }

    pub fn delete_booth(&mut self, id: &Id) -> Result<()> {
        let index = self
            .booths
            .iter()
            .position(|b| b.id == *id)
            .ok_or_else(|| Error::not_found(format!("Booth {id}")))?;
        self.booths.remove(index);
        // Cascade without counter adjustment: the counted booth is gone.
        self.assignments.retain(|a| a.booth_id != *id);
        Ok(())
    }

    // ---- officers ----

    pub fn officers(&self) -> &[Officer] {
        &self.officers
    }

    pub fn officer(&self, id: &Id) -> Result<&Officer> {
        self.officers
            .iter()
            .find(|o| o.id == *id)
            .ok_or_else(|| Error::not_found(format!("Officer {id}")))
    }

    pub fn create_officer(&mut self, spec: OfficerSpec) -> Result<Officer> {
        if spec.name.trim().is_empty() {
            return Err(Error::validation("Officer name must not be empty"));
        }
        if let Some(other) = self.officers.iter().find(|o| o.phone == spec.phone) {
            return Err(Error::conflict(format!(
                "Phone already in use by officer {} ({})",
                other.name, other.id
            )));
        }
        let officer = Officer::new(spec);
        self.officers.push(officer.clone());
        Ok(officer)
    }

    pub fn update_officer(&mut self, id: &Id, patch: OfficerPatch) -> Result<Officer> {
        if let Some(phone) = &patch.phone {
            if let Some(other) = self
                .officers
                .iter()
                .find(|o| o.phone == *phone && o.id != *id)
            {
                return Err(Error::conflict(format!(
                    "Phone already in use by officer {} ({})",
                    other.name, other.id
                )));
            }
        }
        let officer = self
            .officers
            .iter_mut()
            .find(|o| o.id == *id)
            .ok_or_else(|| Error::not_found(format!("Officer {id}")))?;
        if let Some(name) = patch.name {
            officer.name = name;
        }
        if let Some(phone) = patch.phone {
            officer.phone = phone;
        }
        officer.updated_at = Utc::now();
        Ok(officer.clone())
    }

    pub fn delete_officer(&mut self, id: &Id) -> Result<()> {
        let index = self
            .officers
            .iter()
            .position(|o| o.id == *id)
            .ok_or_else(|| Error::not_found(format!("Officer {id}")))?;
        self.officers.remove(index);
        self.remove_assignments_with_decrement(|a| a.officer_id == *id);
        Ok(())
    }

    // ---- assignments ----

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignments_for_voter(&self, voter_id: &Id) -> Vec<Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.voter_id == *voter_id)
            .cloned()
            .collect()
    }

    pub fn assignments_for_booth(&self, booth_id: &Id) -> Vec<Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.booth_id == *booth_id)
            .cloned()
            .collect()
    }

    /// Create an assignment after verifying all three referenced records
    /// exist. A voter may hold more than one assignment; the data layer does
    /// not reject repeats.
    pub fn create_assignment(&mut self, spec: AssignmentSpec) -> Result<Assignment> {
        if !self.voters.iter().any(|v| v.id == spec.voter_id) {
            return Err(Error::validation(format!("Unknown voter {}", spec.voter_id)));
        }
        if !self.booths.iter().any(|b| b.id == spec.booth_id) {
            return Err(Error::validation(format!("Unknown booth {}", spec.booth_id)));
        }
        if !self.officers.iter().any(|o| o.id == spec.officer_id) {
            return Err(Error::validation(format!(
                "Unknown officer {}",
                spec.officer_id
            )));
        }
        let assignment = Assignment::new(spec);
        self.assignments.push(assignment.clone());
        counters::assignment_created(&mut self.booths, &assignment.booth_id);
        Ok(assignment)
    }

    /// Delete an assignment, decrementing its booth's assigned count.
    /// The completed count stays as-is even if the voter had already voted.
    pub fn delete_assignment(&mut self, id: &Id) -> Result<()> {
        let index = self
            .assignments
            .iter()
            .position(|a| a.id == *id)
            .ok_or_else(|| Error::not_found(format!("Assignment {id}")))?;
        let assignment = self.assignments.remove(index);
        counters::assignment_removed(&mut self.booths, &assignment.booth_id);
        Ok(())
    }

    // ---- derived queries ----

    pub fn check_eligibility(&self, id: &Id, today: NaiveDate) -> Result<EligibilityResult> {
        let voter = self.voter(id)?;
        Ok(eligibility::evaluate(voter, today))
    }

    pub fn check_duplicate(
        &self,
        national_id: &NationalId,
        phone: &Phone,
        exclude: Option<&Id>,
    ) -> DuplicateCheck {
        duplicate::check(&self.voters, national_id, phone, exclude)
    }

    pub fn stats(&self) -> DashboardStats {
        let total = self.voters.len();
        let voted = self
            .voters
            .iter()
            .filter(|v| v.status == VoterStatus::Voted)
            .count();
        let voting_percentage = if total > 0 {
            ((voted as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };
        DashboardStats {
            total_voters: total,
            registered_voters: total - voted,
            voted_voters: voted,
            total_booths: self.booths.len(),
            total_officers: self.officers.len(),
            total_assignments: self.assignments.len(),
            voting_percentage,
        }
    }

    pub fn reconcile_counters(&mut self) -> ReconcileReport {
        counters::recompute(&mut self.booths, &self.voters, &self.assignments)
    }

    /// Remove every assignment matching the predicate and run the counter
    /// decrement for each removed assignment's booth.
    fn remove_assignments_with_decrement<F>(&mut self, predicate: F)
    where
        F: Fn(&Assignment) -> bool,
    {
        let removed_booths: Vec<Id> = self
            .assignments
            .iter()
            .filter(|a| predicate(a))
            .map(|a| a.booth_id.clone())
            .collect();
        self.assignments.retain(|a| !predicate(a));
        for booth_id in removed_booths {
            counters::assignment_removed(&mut self.booths, &booth_id);
        }
    }
}
