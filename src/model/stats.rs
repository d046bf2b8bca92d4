use serde::{Deserialize, Serialize};

/// Aggregate figures for the admin dashboard, derived on demand from the
/// live collections rather than maintained incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_voters: usize,
    pub registered_voters: usize,
    pub voted_voters: usize,
    pub total_booths: usize,
    pub total_officers: usize,
    pub total_assignments: usize,
    /// Share of voters who have voted, as a whole percentage (rounded).
    pub voting_percentage: u32,
}
