//! End-to-end tests for Worksnap
//!
//! This crate provides [`FakePlatform`], a scripted stand-in for the workshop
//! SDK. It delivers the registered completion only from inside
//! `pump_callbacks`, mirroring how the real SDK delivers callbacks, and it
//! records every handle-lifecycle interaction so tests can assert the
//! release-exactly-once and fetch-ordering contracts.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use worksnap_core::platform::{
    AppId, CallHandle, CompletionHandler, ContentFilter, DetailRecord, OwnerId, QueryCompletion,
    QueryOptions, RankingMode, RequestHandle, StatusCode, WorkshopPlatform,
};

pub struct FakePlatform {
    session_ok: bool,
    request_handle: RequestHandle,
    call_handle: CallHandle,
    completion: QueryCompletion,
    deliver_completion: bool,
    failing_indices: HashSet<u32>,

    pending: Mutex<Option<CompletionHandler>>,

    pub open_calls: AtomicU32,
    pub close_calls: AtomicU32,
    pub create_calls: AtomicU32,
    pub submit_calls: AtomicU32,
    pub release_calls: AtomicU32,
    pub fetch_order: Mutex<Vec<u32>>,
    pub options_seen: Mutex<Option<QueryOptions>>,
    pub created_with: Mutex<Option<(RankingMode, ContentFilter, AppId, AppId, u32)>>,
}

impl FakePlatform {
    /// A platform with a working session and a successful completion
    /// reporting `reported_results` first-page results.
    pub fn new(reported_results: u32) -> Self {
        Self {
            session_ok: true,
            request_handle: RequestHandle(0x10),
            call_handle: CallHandle(0x20),
            completion: QueryCompletion {
                status: StatusCode::OK,
                transport_failed: false,
                results_returned: reported_results,
            },
            deliver_completion: true,
            failing_indices: HashSet::new(),
            pending: Mutex::new(None),
            open_calls: AtomicU32::new(0),
            close_calls: AtomicU32::new(0),
            create_calls: AtomicU32::new(0),
            submit_calls: AtomicU32::new(0),
            release_calls: AtomicU32::new(0),
            fetch_order: Mutex::new(Vec::new()),
            options_seen: Mutex::new(None),
            created_with: Mutex::new(None),
        }
    }

    pub fn with_session_failure(mut self) -> Self {
        self.session_ok = false;
        self
    }

    pub fn with_invalid_request_handle(mut self) -> Self {
        self.request_handle = RequestHandle::INVALID;
        self
    }

    pub fn with_invalid_call_handle(mut self) -> Self {
        self.call_handle = CallHandle::INVALID;
        self
    }

    pub fn with_failure_status(mut self, status: StatusCode) -> Self {
        self.completion.status = status;
        self
    }

    pub fn with_transport_failure(mut self) -> Self {
        self.completion.transport_failed = true;
        self
    }

    /// Never deliver the completion, even when the pump ticks
    pub fn without_completion_delivery(mut self) -> Self {
        self.deliver_completion = false;
        self
    }

    pub fn with_failing_index(mut self, index: u32) -> Self {
        self.failing_indices.insert(index);
        self
    }

    pub fn detail_for_index(index: u32) -> DetailRecord {
        DetailRecord {
            published_id: 9_000_000_000 + index as u64,
            title: format!("Workshop Item {index}"),
            description: format!("Description of item {index}"),
            score: 1.0 - index as f32 / 100.0,
            preview_url: format!("https://cdn.example.com/previews/{index}.jpg"),
            owner_id: OwnerId(500 + index as u64),
            time_created: 1_650_000_000 + index as i64,
            time_updated: 1_650_100_000 + index as i64,
        }
    }
}

impl WorkshopPlatform for FakePlatform {
    fn session_open(&self) -> bool {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        self.session_ok
    }

    fn session_close(&self) {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn current_user_display_name(&self) -> String {
        "Test User".to_string()
    }

    fn create_catalog_query(
        &self,
        ranking: RankingMode,
        filter: ContentFilter,
        creator_app: AppId,
        consumer_app: AppId,
        page: u32,
    ) -> RequestHandle {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        *self.created_with.lock().unwrap() = Some((ranking, filter, creator_app, consumer_app, page));
        self.request_handle
    }

    fn set_query_options(&self, _request: RequestHandle, options: &QueryOptions) {
        *self.options_seen.lock().unwrap() = Some(options.clone());
    }

    fn submit_query(&self, _request: RequestHandle) -> CallHandle {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        self.call_handle
    }

    fn register_completion(&self, _call: CallHandle, handler: CompletionHandler) {
        *self.pending.lock().unwrap() = Some(handler);
    }

    fn fetch_result_by_index(&self, _request: RequestHandle, index: u32) -> Option<DetailRecord> {
        self.fetch_order.lock().unwrap().push(index);
        if self.failing_indices.contains(&index) {
            return None;
        }
        Some(Self::detail_for_index(index))
    }

    fn release_query(&self, _request: RequestHandle) {
        self.release_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn resolve_owner_display_name(&self, owner: OwnerId) -> String {
        format!("Author {}", owner.0)
    }

    fn pump_callbacks(&self) {
        if !self.deliver_completion {
            return;
        }
        let handler = self.pending.lock().unwrap().take();
        if let Some(handler) = handler {
            handler(self.completion);
        }
    }
}
