//! Worksnap query pipeline
//!
//! Queries the platform's workshop catalog for an application's top-trending
//! items and persists them as a JSON snapshot. The flow is a single pass:
//! open the platform session, start the callback pump, run one catalog query
//! through the one-shot completion bridge, extract a bounded page of records,
//! write the snapshot, shut everything down.

pub mod config;
pub mod gate;
pub mod logger;
pub mod orchestrator;
pub mod pump;
pub mod run;
pub mod snapshot;

mod extract;

pub use config::SnapshotConfig;
pub use gate::PlatformSession;
pub use logger::DebugLogger;
pub use orchestrator::QueryOrchestrator;
pub use pump::CallbackPump;
pub use run::{run_snapshot, SnapshotReport};
pub use snapshot::{JsonSnapshotWriter, SnapshotWriter};
