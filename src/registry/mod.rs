//! The voter-registry consistency module: four record collections kept
//! mutually coherent (booth counters, vote-status transitions, cascades)
//! plus the eligibility and duplicate queries.

pub mod counters;
pub mod duplicate;
pub mod eligibility;
pub mod store;

use chrono::Utc;
use rocket::tokio::sync::RwLock;

use crate::error::Result;
use crate::model::{
    Assignment, AssignmentSpec, Booth, BoothPatch, BoothSpec, DashboardStats, Id, NationalId,
    Officer, OfficerPatch, OfficerSpec, Phone, Voter, VoterPatch, VoterSpec,
};
pub use counters::ReconcileReport;
pub use duplicate::{DuplicateCheck, DuplicateField};
pub use eligibility::EligibilityResult;
use store::RecordStore;

/// Sole owner of the record store. Every mutation takes the write lock for
/// its whole duration, so each multi-step operation (e.g. insert assignment
/// plus counter increment) is one atomic unit and concurrent counter updates
/// are serialised. Lives in Rocket managed state.
#[derive(Debug, Default)]
pub struct Registry {
    store: RwLock<RecordStore>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- voters ----

    pub async fn voters(&self) -> Vec<Voter> {
        self.store.read().await.voters().to_vec()
    }

    pub async fn voter(&self, id: &Id) -> Result<Voter> {
        self.store.read().await.voter(id).cloned()
    }

    pub async fn create_voter(&self, spec: VoterSpec) -> Result<Voter> {
        self.store.write().await.create_voter(spec)
    }

    pub async fn update_voter(&self, id: &Id, patch: VoterPatch) -> Result<Voter> {
        self.store.write().await.update_voter(id, patch)
    }

    pub async fn delete_voter(&self, id: &Id) -> Result<()> {
        self.store.write().await.delete_voter(id)
    }

    pub async fn mark_voted(&self, id: &Id) -> Result<Voter> {
        self.store.write().await.mark_voted(id)
    }

    // ---- booths ----

    pub async fn booths(&self) -> Vec<Booth> {
        self.store.read().await.booths().to_vec()
    }

    pub async fn booth(&self, id: &Id) -> Result<Booth> {
        self.store.read().await.booth(id).cloned()
    }

    pub async fn create_booth(&self, spec: BoothSpec) -> Result<Booth> {
        self.store.write().await.create_booth(spec)
    }

    pub async fn update_booth(&self, id: &Id, patch: BoothPatch) -> Result<Booth> {
        self.store.write().await.update_booth(id, patch)
    }

    pub async fn delete_booth(&self, id: &Id) -> Result<()> {
        self.store.write().await.delete_booth(id)
    }

    // ---- officers ----

    pub async fn officers(&self) -> Vec<Officer> {
        self.store.read().await.officers().to_vec()
    }

    pub async fn officer(&self, id: &Id) -> Result<Officer> {
        self.store.read().await.officer(id).cloned()
    }

    pub async fn create_officer(&self, spec: OfficerSpec) -> Result<Officer> {
        self.store.write().await.create_officer(spec)
    }

    pub async fn update_officer(&self, id: &Id, patch: OfficerPatch) -> Result<Officer> {
        self.store.write().await.update_officer(id, patch)
    }

    pub async fn delete_officer(&self, id: &Id) -> Result<()> {
        self.store.write().await.delete_officer(id)
    }

    // ---- assignments ----

    pub async fn assignments(&self) -> Vec<Assignment> {
        self.store.read().await.assignments().to_vec()
    }

    pub async fn assignments_for_voter(&self, voter_id: &Id) -> Vec<Assignment> {
        self.store.read().await.assignments_for_voter(voter_id)
    }

    pub async fn assignments_for_booth(&self, booth_id: &Id) -> Vec<Assignment> {
        self.store.read().await.assignments_for_booth(booth_id)
    }

    pub async fn create_assignment(&self, spec: AssignmentSpec) -> Result<Assignment> {
        self.store.write().await.create_assignment(spec)
    }

    pub async fn delete_assignment(&self, id: &Id) -> Result<()> {
        self.store.write().await.delete_assignment(id)
    }

    // ---- derived queries ----

    pub async fn check_eligibility(&self, id: &Id) -> Result<EligibilityResult> {
        let today = Utc::now().date_naive();
        self.store.read().await.check_eligibility(id, today)
    }

    pub async fn check_duplicate(
        &self,
        national_id: &NationalId,
        phone: &Phone,
        exclude: Option<&Id>,
    ) -> DuplicateCheck {
        self.store
            .read()
            .await
            .check_duplicate(national_id, phone, exclude)
    }

    pub async fn stats(&self) -> DashboardStats {
        self.store.read().await.stats()
    }

    pub async fn reconcile_counters(&self) -> ReconcileReport {
        self.store.write().await.reconcile_counters()
    }
}
