use std::sync::Arc;

use rocket::{response::status::Created, serde::json::Json, Route, State};

use crate::error::Result;
use crate::model::{Booth, BoothPatch, BoothSpec, Id};
use crate::registry::Registry;

pub fn routes() -> Vec<Route> {
    routes![get_booths, get_booth, create_booth, update_booth, delete_booth]
}

#[get("/booths")]
async fn get_booths(registry: &State<Arc<Registry>>) -> Json<Vec<Booth>> {
    Json(registry.booths().await)
}

#[get("/booths/<id>")]
async fn get_booth(id: Id, registry: &State<Arc<Registry>>) -> Result<Json<Booth>> {
    Ok(Json(registry.booth(&id).await?))
}

#[post("/booths", data = "<spec>", format = "json")]
async fn create_booth(
    spec: Json<BoothSpec>,
    registry: &State<Arc<Registry>>,
) -> Result<Created<Json<Booth>>> {
    let booth = registry.create_booth(spec.0).await?;
    let location = format!("/api/booths/{}", booth.id);
    Ok(Created::new(location).body(Json(booth)))
}

#[put("/booths/<id>", data = "<patch>", format = "json")]
async fn update_booth(
    id: Id,
    patch: Json<BoothPatch>,
    registry: &State<Arc<Registry>>,
) -> Result<Json<Booth>> {
    Ok(Json(registry.update_booth(&id, patch.0).await?))
}

#[delete("/booths/<id>")]
async fn delete_booth(id: Id, registry: &State<Arc<Registry>>) -> Result<()> {
    registry.delete_booth(&id).await
}
