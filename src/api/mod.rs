use rocket::Route;

mod assignment;
mod booth;
mod officer;
mod stats;
mod voter;

/// All resource routes, mounted under `/api`.
pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(voter::routes());
    routes.extend(booth::routes());
    routes.extend(officer::routes());
    routes.extend(assignment::routes());
    routes.extend(stats::routes());
    routes
}

/// Health check, mounted at the root.
#[get("/")]
pub fn health() -> &'static str {
    "Voter registry backend is running"
}
