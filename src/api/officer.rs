use std::sync::Arc;

use rocket::{response::status::Created, serde::json::Json, Route, State};

use crate::error::Result;
use crate::model::{Id, Officer, OfficerPatch, OfficerSpec};
use crate::registry::Registry;

pub fn routes() -> Vec<Route> {
    routes![
        get_officers,
        get_officer,
        create_officer,
        update_officer,
        delete_officer,
    ]
}

#[get("/officers")]
async fn get_officers(registry: &State<Arc<Registry>>) -> Json<Vec<Officer>> {
    Json(registry.officers().await)
}

#[get("/officers/<id>")]
async fn get_officer(id: Id, registry: &State<Arc<Registry>>) -> Result<Json<Officer>> {
    Ok(Json(registry.officer(&id).await?))
}

#[post("/officers", data = "<spec>", format = "json")]
async fn create_officer(
    spec: Json<OfficerSpec>,
    registry: &State<Arc<Registry>>,
) -> Result<Created<Json<Officer>>> {
    let officer = registry.create_officer(spec.0).await?;
    let location = format!("/api/officers/{}", officer.id);
    Ok(Created::new(location).body(Json(officer)))
}

#[put("/officers/<id>", data = "<patch>", format = "json")]
async fn update_officer(
    id: Id,
    patch: Json<OfficerPatch>,
    registry: &State<Arc<Registry>>,
) -> Result<Json<Officer>> {
    Ok(Json(registry.update_officer(&id, patch.0).await?))
}

#[delete("/officers/<id>")]
async fn delete_officer(id: Id, registry: &State<Arc<Registry>>) -> Result<()> {
    registry.delete_officer(&id).await
}
