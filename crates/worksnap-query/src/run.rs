//! Single-shot snapshot run
//!
//! The hosting shell calls [`run_snapshot`] once per invocation and presents
//! the outcome to the user; every error variant renders a human-readable
//! message through `Display`.

use crate::config::SnapshotConfig;
use crate::gate::PlatformSession;
use crate::logger::DebugLogger;
use crate::orchestrator::QueryOrchestrator;
use crate::pump::CallbackPump;
use crate::snapshot::{JsonSnapshotWriter, SnapshotWriter};
use std::path::PathBuf;
use std::sync::Arc;
use worksnap_core::platform::WorkshopPlatform;
use worksnap_core::Result;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct SnapshotReport {
    pub record_count: usize,
    pub snapshot_path: PathBuf,
}

/// Run one full snapshot pass: open the session, start the pump, query the
/// top items, persist the snapshot, shut down.
///
/// The pump is stopped only after the orchestrator has returned, so a query
/// is never left outstanding without callback delivery.
pub async fn run_snapshot(
    platform: Arc<dyn WorkshopPlatform>,
    config: &SnapshotConfig,
) -> Result<SnapshotReport> {
    let logger = Arc::new(DebugLogger::new(&config.debug_log_path));

    let session = PlatformSession::open(platform.clone(), &logger)?;
    logger.log(&format!(
        "Signed in as: {}",
        platform.current_user_display_name()
    ));

    let pump = CallbackPump::start(platform.clone(), config.pump_interval());
    let orchestrator = QueryOrchestrator::new(
        platform.clone(),
        logger.clone(),
        config.completion_timeout(),
    );

    logger.log("Starting workshop catalog query...");
    let query_result = orchestrator.run_top_items_query(config.app_id).await;
    pump.stop().await;

    let outcome = match query_result {
        Ok(records) => {
            let writer = JsonSnapshotWriter::new(&config.snapshot_path);
            writer.write(&records).await.map(|()| {
                logger.log(&format!(
                    "Snapshot of {} records written to {}",
                    records.len(),
                    config.snapshot_path.display()
                ));
                SnapshotReport {
                    record_count: records.len(),
                    snapshot_path: config.snapshot_path.clone(),
                }
            })
        }
        Err(e) => {
            logger.log(&format!("Query did not produce a snapshot: {e}"));
            Err(e)
        }
    };

    session.close(&logger);
    outcome
}
