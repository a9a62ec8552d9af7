//! Platform capability surface
//!
//! The workshop/catalog SDK is an external collaborator with its own session
//! lifecycle, transport and callback pump. The orchestrator only consumes the
//! narrow capability surface defined here, which keeps the whole query flow
//! testable against a scripted fake.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target application identifier on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub u32);

/// Identifier of a catalog item's owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(pub u64);

/// Opaque token for an in-progress query configuration.
///
/// The SDK signals rejection by returning the invalid sentinel rather than an
/// error value, so validity is a property of the handle itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestHandle(pub u64);

impl RequestHandle {
    pub const INVALID: RequestHandle = RequestHandle(u64::MAX);

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// Opaque token for a submitted asynchronous call awaiting completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallHandle(pub u64);

impl CallHandle {
    pub const INVALID: CallHandle = CallHandle(0);

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// Catalog ranking mode for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingMode {
    /// Trending items over a configurable day window
    Trend,
    Vote,
    PublicationDate,
}

/// Readiness filter applied to returned items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFilter {
    ReadyToUse,
    All,
}

/// Result-shaping options applied to a query request before submission.
///
/// `Default` yields the one fixed option set this system ever uses; the
/// options are not caller inputs because the system targets exactly one
/// application's catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub total_only: bool,
    pub long_description: bool,
    pub metadata: bool,
    pub children: bool,
    pub additional_previews: bool,
    pub key_value_tags: bool,
    pub ranked_by_trend_days: u32,
    pub match_any_tag: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            total_only: false,
            long_description: true,
            metadata: true,
            children: false,
            additional_previews: false,
            key_value_tags: true,
            ranked_by_trend_days: 7,
            match_any_tag: true,
        }
    }
}

/// Platform result status, as delivered with a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode(pub i32);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(1);

    pub fn is_ok(self) -> bool {
        self == Self::OK
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload delivered to a completion handler, exactly once per submitted call
#[derive(Debug, Clone, Copy)]
pub struct QueryCompletion {
    pub status: StatusCode,
    /// True when the call failed at the transport layer before producing a
    /// result; `status` is meaningless in that case
    pub transport_failed: bool,
    /// Number of results the platform reports for the first page
    pub results_returned: u32,
}

/// Raw per-item detail structure fetched by index from a completed query
#[derive(Debug, Clone)]
pub struct DetailRecord {
    pub published_id: u64,
    pub title: String,
    pub description: String,
    pub score: f32,
    pub preview_url: String,
    pub owner_id: OwnerId,
    /// Unix epoch seconds
    pub time_created: i64,
    /// Unix epoch seconds
    pub time_updated: i64,
}

/// Handler invoked when a submitted call completes; fires exactly once, and
/// only from inside a `pump_callbacks` tick
pub type CompletionHandler = Box<dyn FnOnce(QueryCompletion) + Send>;

/// The narrow slice of the platform SDK this system consumes.
///
/// All methods are synchronous: the SDK delivers asynchronous completions
/// solely through `pump_callbacks`, which the host must invoke on a recurring
/// cadence for the lifetime of any outstanding call.
pub trait WorkshopPlatform: Send + Sync {
    /// Establish the platform session. Returns false when the host
    /// environment has no usable session.
    fn session_open(&self) -> bool;

    /// Release the platform session. Must follow a successful `session_open`.
    fn session_close(&self);

    /// Display name of the signed-in account
    fn current_user_display_name(&self) -> String;

    /// Create a catalog query for the given application and page. Returns
    /// `RequestHandle::INVALID` on rejection.
    fn create_catalog_query(
        &self,
        ranking: RankingMode,
        filter: ContentFilter,
        creator_app: AppId,
        consumer_app: AppId,
        page: u32,
    ) -> RequestHandle;

    /// Apply result-shaping options to a pending request
    fn set_query_options(&self, request: RequestHandle, options: &QueryOptions);

    /// Submit a configured request. Returns `CallHandle::INVALID` on
    /// rejection; the request handle stays live and must still be released.
    fn submit_query(&self, request: RequestHandle) -> CallHandle;

    /// Register the one-shot completion handler for a submitted call
    fn register_completion(&self, call: CallHandle, handler: CompletionHandler);

    /// Fetch one result's detail structure by zero-based index. `None` when
    /// the platform cannot produce details for that index.
    fn fetch_result_by_index(&self, request: RequestHandle, index: u32) -> Option<DetailRecord>;

    /// Release a query request handle. Every created handle is released
    /// exactly once.
    fn release_query(&self, request: RequestHandle);

    /// Resolve an owner identifier to a display name; empty string when
    /// resolution fails
    fn resolve_owner_display_name(&self, owner: OwnerId) -> String;

    /// Deliver pending asynchronous completions. Completions are only
    /// observable from inside a call to this method.
    fn pump_callbacks(&self);
}
