//! Background counter reconciliation.
//!
//! Booth counters move event-by-event, so a missed or double-applied event
//! skews them until something recomputes from the live records. This task is
//! that backstop: it runs a full recompute at a fixed interval and logs any
//! drift it corrects.

use std::sync::Arc;

use log::{debug, warn};
use rocket::tokio::{
    self,
    task::JoinHandle,
    time::{interval, Duration, MissedTickBehavior},
};

use crate::registry::Registry;

/// Spawn the periodic reconciliation task. The first pass runs one full
/// interval after liftoff; the task runs until the server shuts down.
pub fn spawn(registry: Arc<Registry>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The initial tick of `interval` fires immediately; skip it so the
        // first pass happens after one full interval.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let report = registry.reconcile_counters().await;
            if report.booths_adjusted > 0 {
                warn!(
                    "Counter reconciliation adjusted {} of {} booths",
                    report.booths_adjusted, report.booths_checked
                );
            } else {
                debug!(
                    "Counter reconciliation clean ({} booths checked)",
                    report.booths_checked
                );
            }
        }
    })
}
