use std::sync::Arc;

use rocket::{response::status::Created, serde::json::Json, Route, State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Id, NationalId, Phone, Voter, VoterPatch, VoterSpec};
use crate::registry::{DuplicateCheck, EligibilityResult, Registry};

pub fn routes() -> Vec<Route> {
    routes![
        get_voters,
        get_voter,
        create_voter,
        update_voter,
        delete_voter,
        mark_voted,
        check_eligibility,
        check_duplicate,
    ]
}

#[get("/voters")]
async fn get_voters(registry: &State<Arc<Registry>>) -> Json<Vec<Voter>> {
    Json(registry.voters().await)
}

#[get("/voters/<id>")]
async fn get_voter(id: Id, registry: &State<Arc<Registry>>) -> Result<Json<Voter>> {
    Ok(Json(registry.voter(&id).await?))
}

#[post("/voters", data = "<spec>", format = "json")]
async fn create_voter(
    spec: Json<VoterSpec>,
    registry: &State<Arc<Registry>>,
) -> Result<Created<Json<Voter>>> {
    let voter = registry.create_voter(spec.0).await?;
    let location = format!("/api/voters/{}", voter.id);
    Ok(Created::new(location).body(Json(voter)))
}

#[put("/voters/<id>", data = "<patch>", format = "json")]
async fn update_voter(
    id: Id,
    patch: Json<VoterPatch>,
    registry: &State<Arc<Registry>>,
) -> Result<Json<Voter>> {
    Ok(Json(registry.update_voter(&id, patch.0).await?))
}

#[delete("/voters/<id>")]
async fn delete_voter(id: Id, registry: &State<Arc<Registry>>) -> Result<()> {
    registry.delete_voter(&id).await
}

#[post("/voters/<id>/voted")]
async fn mark_voted(id: Id, registry: &State<Arc<Registry>>) -> Result<Json<Voter>> {
    Ok(Json(registry.mark_voted(&id).await?))
}

#[get("/voters/<id>/eligibility")]
async fn check_eligibility(
    id: Id,
    registry: &State<Arc<Registry>>,
) -> Result<Json<EligibilityResult>> {
    Ok(Json(registry.check_eligibility(&id).await?))
}

/// Fields to probe for collisions. `exclude_id` lets an edit-in-place skip
/// the voter being edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateQuery {
    pub national_id: NationalId,
    pub phone: Phone,
    #[serde(default)]
    pub exclude_id: Option<Id>,
}

#[post("/voters/duplicate-check", data = "<query>", format = "json")]
async fn check_duplicate(
    query: Json<DuplicateQuery>,
    registry: &State<Arc<Registry>>,
) -> Json<DuplicateCheck> {
    let result = registry
        .check_duplicate(&query.national_id, &query.phone, query.exclude_id.as_ref())
        .await;
    Json(result)
}
