//! NodePing API request and response models.
//!
//! Wire shapes follow the NodePing v1 API. List endpoints return JSON
//! objects keyed by resource id rather than arrays, and several fields are
//! loosely typed on the wire; those decode permissively here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Check types
// ============================================================================

/// A configured monitor ("check") as returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Check {
    /// Unique check identifier assigned by the service.
    #[serde(rename = "_id")]
    pub id: String,
    /// Document revision.
    #[serde(rename = "_rev", default)]
    pub rev: String,
    /// Owning customer account.
    #[serde(default)]
    pub customer_id: String,
    /// Human-readable label.
    #[serde(default)]
    pub label: String,
    /// Probe interval in minutes.
    #[serde(default)]
    pub interval: i64,
    /// Notification routing rules.
    #[serde(default)]
    pub notifications: Vec<CheckNotification>,
    /// Check type (e.g. "HTTP", "PING").
    #[serde(rename = "type", default)]
    pub check_type: String,
    /// Assignment status reported by the service.
    #[serde(default)]
    pub status: String,
    /// Last modification time, epoch milliseconds.
    #[serde(default)]
    pub modified: i64,
    /// "active" or "inactive".
    #[serde(default)]
    pub enable: String,
    /// Whether results are publicly visible.
    #[serde(default)]
    pub public: bool,
    /// Probe parameters.
    #[serde(default)]
    pub parameters: CheckParameters,
    /// Creation time, epoch milliseconds.
    #[serde(default)]
    pub created: i64,
    /// Probe queue assignment.
    #[serde(default)]
    pub queue: Option<Queue>,
    /// Stable UUID for the check.
    #[serde(default)]
    pub uuid: String,
    /// Current pass/fail state flag.
    #[serde(default)]
    pub state: i64,
    /// Start of the current outage, epoch milliseconds; 0 when up.
    #[serde(default)]
    pub firstdown: i64,
}

/// Probe parameters nested inside a [`Check`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckParameters {
    /// Probe target (URL or host).
    #[serde(default)]
    pub target: String,
    /// Timeout threshold in seconds.
    #[serde(default)]
    pub threshold: i64,
    /// Rechecks before a state change ("sensitivity").
    #[serde(default)]
    pub sens: i64,
}

/// Probe queue assignment for a check.
///
/// The wire value is normally the queue identifier as a string, but the
/// service sends a bare boolean when no queue is assigned. Both shapes
/// decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Queue {
    /// Identifier of the probe queue handling the check.
    Id(String),
    /// Boolean marker (`false`) meaning no queue is assigned.
    Unassigned(bool),
}

/// Notification routing for a check: contact identifier to delivery window.
///
/// The key set is open; contact identifiers are assigned by the service.
pub type CheckNotification = BTreeMap<String, NotificationSchedule>;

/// Delivery window for one notification target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationSchedule {
    /// Minutes to wait before notifying.
    #[serde(default)]
    pub delay: i64,
    /// Schedule name (e.g. "All", "Days").
    #[serde(default)]
    pub schedule: String,
}

/// Payload for defining a check.
///
/// The service treats missing and zero-value fields identically, so every
/// field serializes; fill only what the check type needs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckRequest {
    /// Check identifier; empty when creating.
    pub id: String,
    /// Check type (e.g. "HTTP", "PING").
    #[serde(rename = "type")]
    pub check_type: String,
    /// Probe target (URL or host).
    pub target: String,
    /// Human-readable label.
    pub label: String,
    /// Probe interval in minutes.
    pub interval: i64,
    /// "active" or "inactive".
    pub enabled: String,
    /// "true" to make results publicly visible.
    pub public: String,
    /// Probe location codes to run from.
    pub runlocations: Vec<String>,
    /// Run from the check's home location only.
    pub homeloc: bool,
    /// Timeout threshold in seconds.
    pub threshold: i64,
    /// Rechecks before a state change.
    pub sens: i64,
    /// Notification routing rules.
    pub notifications: Vec<CheckNotification>,
    /// Id of the check this one depends on.
    pub dep: String,
    /// Content match for HTTP content checks.
    pub contentstring: String,
    /// Follow HTTP redirects.
    pub follow: bool,
    /// POST data for HTTP checks.
    pub data: String,
    /// HTTP method override.
    pub method: String,
    /// Expected HTTP status code.
    pub statuscode: String,
    /// Resolve the target over IPv6.
    pub ipv6: bool,
}

// ============================================================================
// Uptime types
// ============================================================================

/// Aggregated uptime for one period.
///
/// Periods are keyed on the wire by a label: `"YYYY-MM"` for calendar
/// months or `"total"` for the whole requested range.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UptimeRecord {
    /// Milliseconds the check was enabled during the period.
    #[serde(default)]
    pub enabled: i64,
    /// Milliseconds of downtime during the period.
    #[serde(default)]
    pub down: i64,
    /// Percentage uptime for the period.
    #[serde(default)]
    pub uptime: f64,
}

// ============================================================================
// Contact group types
// ============================================================================

/// A named collection of notification targets.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactGroup {
    /// Resource type; "group" for contact groups.
    #[serde(rename = "type", default)]
    pub group_type: String,
    /// Owning customer account.
    #[serde(default)]
    pub customer_id: String,
    /// Group name.
    #[serde(default)]
    pub name: String,
    /// Member contact identifiers; entries are heterogeneous on the wire.
    #[serde(default)]
    pub members: Vec<Value>,
}

// ============================================================================
// Error envelope
// ============================================================================

/// Error envelope embedded in failure response bodies.
///
/// A non-empty `error` means the call failed at the application level even
/// when the HTTP exchange itself succeeded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceError {
    /// Message text; empty or absent when the call succeeded.
    #[serde(default)]
    pub error: String,
}
