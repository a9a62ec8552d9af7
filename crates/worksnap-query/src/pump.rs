//! Callback pump
//!
//! The SDK only delivers asynchronous completions while `pump_callbacks` is
//! being invoked, so the host must keep a fixed-cadence tick running for the
//! full lifetime of any outstanding query. The pump is an explicit handle the
//! host starts and stops; it is never hidden behind a detached thread.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use worksnap_core::platform::WorkshopPlatform;

/// Default tick cadence, roughly 30 Hz
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(33);

pub struct CallbackPump {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl CallbackPump {
    /// Begin ticking `pump_callbacks` at the given cadence. Stopping the pump
    /// while a query is outstanding leaves that query permanently pending, so
    /// callers stop it only after the orchestrator has returned.
    pub fn start(platform: Arc<dyn WorkshopPlatform>, interval: Duration) -> Self {
        let (shutdown, mut stopped) = watch::channel(false);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => platform.pump_callbacks(),
                    _ = stopped.changed() => break,
                }
            }
        });
        Self { shutdown, task }
    }

    /// Stop ticking and wait for the pump task to wind down.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use worksnap_core::platform::{
        AppId, CallHandle, CompletionHandler, ContentFilter, DetailRecord, OwnerId, QueryOptions,
        RankingMode, RequestHandle,
    };

    #[derive(Default)]
    struct TickCounter {
        ticks: AtomicU32,
    }

    impl WorkshopPlatform for TickCounter {
        fn session_open(&self) -> bool {
            true
        }
        fn session_close(&self) {}
        fn current_user_display_name(&self) -> String {
            String::new()
        }
        fn create_catalog_query(
            &self,
            _: RankingMode,
            _: ContentFilter,
            _: AppId,
            _: AppId,
            _: u32,
        ) -> RequestHandle {
            RequestHandle::INVALID
        }
        fn set_query_options(&self, _: RequestHandle, _: &QueryOptions) {}
        fn submit_query(&self, _: RequestHandle) -> CallHandle {
            CallHandle::INVALID
        }
        fn register_completion(&self, _: CallHandle, _: CompletionHandler) {}
        fn fetch_result_by_index(&self, _: RequestHandle, _: u32) -> Option<DetailRecord> {
            None
        }
        fn release_query(&self, _: RequestHandle) {}
        fn resolve_owner_display_name(&self, _: OwnerId) -> String {
            String::new()
        }
        fn pump_callbacks(&self) {
            self.ticks.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn ticks_until_stopped() {
        let platform = Arc::new(TickCounter::default());
        let pump = CallbackPump::start(platform.clone(), Duration::from_millis(1));

        tokio::time::sleep(Duration::from_millis(20)).await;
        pump.stop().await;
        let ticks = platform.ticks.load(Ordering::SeqCst);
        assert!(ticks > 0, "pump never ticked");

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(platform.ticks.load(Ordering::SeqCst), ticks, "ticked after stop");
    }
}
