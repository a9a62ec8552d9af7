//! Best-effort extraction of the result page
//!
//! Each entry is fetched individually by index. A fetch that fails is logged
//! and skipped; it never aborts the batch.

use crate::logger::DebugLogger;
use crate::orchestrator::MAX_PAGE_RESULTS;
use chrono::DateTime;
use worksnap_core::platform::{DetailRecord, RequestHandle, WorkshopPlatform};
use worksnap_core::WorkshopRecord;

/// Walk indices `0..min(reported, MAX_PAGE_RESULTS)` in ascending order,
/// accumulating every record whose details could be fetched.
pub(crate) fn extract_records(
    platform: &dyn WorkshopPlatform,
    request: RequestHandle,
    reported: u32,
    logger: &DebugLogger,
) -> Vec<WorkshopRecord> {
    let count = reported.min(MAX_PAGE_RESULTS);
    let mut records = Vec::with_capacity(count as usize);

    for index in 0..count {
        match platform.fetch_result_by_index(request, index) {
            Some(details) => {
                logger.log(&format!(
                    "Processing result {} of {}: {}",
                    index + 1,
                    count,
                    details.title
                ));
                records.push(normalize(platform, details));
            }
            None => {
                logger.log(&format!("Could not fetch result details at index {index}"));
            }
        }
    }

    records
}

fn normalize(platform: &dyn WorkshopPlatform, details: DetailRecord) -> WorkshopRecord {
    WorkshopRecord {
        id: details.published_id,
        title: details.title,
        description: details.description,
        // Not retrievable with the current query option set
        subscription_count: 0,
        score: details.score,
        preview_url: details.preview_url,
        author: platform.resolve_owner_display_name(details.owner_id),
        created_at: DateTime::from_timestamp(details.time_created, 0).unwrap_or_default(),
        updated_at: DateTime::from_timestamp(details.time_updated, 0).unwrap_or_default(),
    }
}
