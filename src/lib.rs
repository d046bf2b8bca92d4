#[macro_use]
extern crate rocket;

use rocket::{Build, Rocket};

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod reconciler;
pub mod registry;

pub use config::Config;

/// Assemble the server: routes under `/api`, the health check at the root,
/// and the config, registry, and logging fairings.
pub fn build() -> Rocket<Build> {
    rocket::build()
        .mount("/api", api::routes())
        .mount("/", routes![api::health])
        .attach(config::ConfigFairing)
        .attach(config::RegistryFairing)
        .attach(logging::LoggerFairing)
}

#[cfg(test)]
pub(crate) async fn test_client() -> rocket::local::asynchronous::Client {
    rocket::local::asynchronous::Client::tracked(build())
        .await
        .unwrap()
}
