//! Query orchestrator
//!
//! Runs one top-items catalog query end to end: build the request with the
//! fixed option set, submit it, bridge the SDK's one-shot completion callback
//! into an awaitable, extract the bounded result page, and release the
//! request handle on every exit path. One attempt per invocation, no retries.

use crate::extract::extract_records;
use crate::logger::DebugLogger;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use worksnap_core::platform::{
    AppId, ContentFilter, QueryCompletion, QueryOptions, RankingMode, WorkshopPlatform,
};
use worksnap_core::{Error, Result, WorkshopRecord};

/// The query targets the first page only
const FIRST_PAGE: u32 = 1;

/// Hard clamp on how many results one query extracts, regardless of how many
/// the platform reports
pub const MAX_PAGE_RESULTS: u32 = 50;

pub struct QueryOrchestrator {
    platform: Arc<dyn WorkshopPlatform>,
    logger: Arc<DebugLogger>,
    completion_timeout: Option<Duration>,
}

impl QueryOrchestrator {
    pub fn new(
        platform: Arc<dyn WorkshopPlatform>,
        logger: Arc<DebugLogger>,
        completion_timeout: Option<Duration>,
    ) -> Self {
        Self {
            platform,
            logger,
            completion_timeout,
        }
    }

    /// Query the application's top-trending catalog items.
    ///
    /// Suspends until the callback pump delivers the completion, then returns
    /// at most [`MAX_PAGE_RESULTS`] normalized records. An empty list is a
    /// valid success. The caller must keep the pump running until this
    /// returns; the configured timeout converts a dead pump into
    /// [`Error::CompletionTimeout`] instead of an indefinite hang.
    pub async fn run_top_items_query(&self, app_id: AppId) -> Result<Vec<WorkshopRecord>> {
        self.logger.log("Creating catalog query...");
        let request = self.platform.create_catalog_query(
            RankingMode::Trend,
            ContentFilter::ReadyToUse,
            app_id,
            app_id,
            FIRST_PAGE,
        );
        self.logger.log(&format!("Query handle: {}", request.0));

        if !request.is_valid() {
            self.logger.log("Catalog query creation was rejected");
            return Err(Error::RequestCreation);
        }

        self.platform
            .set_query_options(request, &QueryOptions::default());

        self.logger.log("Submitting catalog query...");
        let call = self.platform.submit_query(request);
        self.logger.log(&format!("Call handle: {}", call.0));

        if !call.is_valid() {
            self.logger.log("Query submission was rejected");
            self.logger.log("Releasing query request handle");
            self.platform.release_query(request);
            return Err(Error::Submission);
        }

        // One-shot bridge: the handler fires exactly once, from inside a pump
        // tick, and resolves the awaited channel with the completion payload.
        let (completed_tx, completed_rx) = oneshot::channel();
        self.platform.register_completion(
            call,
            Box::new(move |completion| {
                let _ = completed_tx.send(completion);
            }),
        );

        self.logger.log("Waiting for query completion...");
        let completion = match self.await_completion(completed_rx).await {
            Ok(completion) => completion,
            Err(e) => {
                self.logger.log("Releasing query request handle");
                self.platform.release_query(request);
                return Err(e);
            }
        };

        self.logger.log(&format!(
            "Completion received - transport failure: {}, status: {}",
            completion.transport_failed, completion.status
        ));

        let outcome = if completion.transport_failed || !completion.status.is_ok() {
            self.logger.log(&format!(
                "Query failed - transport failure: {}, status: {}",
                completion.transport_failed, completion.status
            ));
            Err(Error::QueryFailed {
                status: completion.status,
                transport_failed: completion.transport_failed,
            })
        } else {
            self.logger.log(&format!(
                "Query succeeded, results reported: {}",
                completion.results_returned
            ));
            let records = extract_records(
                self.platform.as_ref(),
                request,
                completion.results_returned,
                &self.logger,
            );
            self.logger
                .log(&format!("Extracted {} workshop records", records.len()));
            Ok(records)
        };

        self.logger.log("Releasing query request handle");
        self.platform.release_query(request);
        outcome
    }

    async fn await_completion(
        &self,
        completed: oneshot::Receiver<QueryCompletion>,
    ) -> Result<QueryCompletion> {
        match self.completion_timeout {
            Some(limit) => match tokio::time::timeout(limit, completed).await {
                Ok(Ok(completion)) => Ok(completion),
                Ok(Err(_)) => Err(Error::CompletionLost),
                Err(_) => Err(Error::CompletionTimeout(limit)),
            },
            None => completed.await.map_err(|_| Error::CompletionLost),
        }
    }
}
