use std::sync::Arc;

use log::{error, info};
use rocket::{
    fairing::{Fairing, Info, Kind},
    tokio::time::Duration,
    Build, Orbit, Rocket,
};
use serde::Deserialize;

use crate::{reconciler, registry::Registry};

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_reconcile_interval")]
    reconcile_interval: u64,
}

impl Config {
    /// Seconds between background counter reconciliation passes.
    /// Configured via `RECONCILE_INTERVAL`.
    pub fn reconcile_interval(&self) -> Duration {
        Duration::from_secs(self.reconcile_interval)
    }
}

fn default_reconcile_interval() -> u64 {
    300
}

/// A fairing that loads the application config and puts it in managed state.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };
        Ok(rocket.manage(config))
    }
}

/// A fairing that creates the registry, places it in managed state, and
/// spawns the counter reconciler at liftoff.
pub struct RegistryFairing;

#[rocket::async_trait]
impl Fairing for RegistryFairing {
    fn info(&self) -> Info {
        Info {
            name: "Registry",
            kind: Kind::Ignite | Kind::Liftoff,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let registry = Arc::new(Registry::new());
        info!("Registry online");
        Ok(rocket.manage(registry))
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        // Both are managed at ignite, before liftoff can run.
        let registry = rocket
            .state::<Arc<Registry>>()
            .expect("registry managed at ignite")
            .clone();
        let interval = rocket
            .state::<Config>()
            .expect("config managed at ignite")
            .reconcile_interval();
        reconciler::spawn(registry, interval);
        info!("Counter reconciler scheduled every {interval:?}");
    }
}
