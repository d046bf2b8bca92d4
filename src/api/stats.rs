use std::sync::Arc;

use rocket::{serde::json::Json, Route, State};

use crate::model::DashboardStats;
use crate::registry::{ReconcileReport, Registry};

pub fn routes() -> Vec<Route> {
    routes![get_stats, reconcile_counters]
}

#[get("/stats")]
async fn get_stats(registry: &State<Arc<Registry>>) -> Json<DashboardStats> {
    Json(registry.stats().await)
}

/// On-demand counter reconciliation; the periodic background pass covers the
/// rest of the time.
#[post("/counters/reconcile")]
async fn reconcile_counters(registry: &State<Arc<Registry>>) -> Json<ReconcileReport> {
    Json(registry.reconcile_counters().await)
}
