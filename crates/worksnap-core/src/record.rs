//! Normalized workshop record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One normalized catalog entry, as persisted in the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopRecord {
    /// Opaque identifier assigned by the platform, unique per catalog entry
    pub id: u64,

    /// Item title; may be empty but never absent
    pub title: String,

    /// Long-form description; may be empty but never absent
    pub description: String,

    /// Always 0: the current query option set does not return subscription
    /// counts. Documented limitation, kept rather than silently "fixed".
    pub subscription_count: u32,

    /// Ranking score as reported by the platform, no local bounds
    pub score: f32,

    /// Preview image URL; empty if the platform omits a preview
    pub preview_url: String,

    /// Owner display name; empty if resolution failed
    pub author: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}
