//! Structured logging field name constants.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation can query by the same names across subsystems.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Storage failure surfaced as a 500, SDK call failure |
//! | WARN  | Recoverable issue (bad config value, invalid CORS origin) |
//! | INFO  | Lifecycle events (startup, pool established), note mutations |
//! | DEBUG | Reads, decision points, config choices |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID propagated from the `x-request-id` header.
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "api", "database", "client"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "pool", "notes", "notes_service"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "insert", "fetch", "list", "update", "delete"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Note id being operated on.
pub const NOTE_ID: &str = "note_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of records returned by a query.
pub const RESULT_COUNT: &str = "result_count";

// ─── Database fields ───────────────────────────────────────────────────────

/// Number of active connections in the pool.
pub const POOL_SIZE: &str = "pool_size";

/// Number of idle connections in the pool.
pub const POOL_IDLE: &str = "pool_idle";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// HTTP status code of a failed SDK call.
pub const STATUS: &str = "status";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Every shared field name above. Log sites spell these as literals;
/// tests check emitted events against this list.
pub const FIELD_NAMES: &[&str] = &[
    REQUEST_ID,
    SUBSYSTEM,
    COMPONENT,
    OPERATION,
    NOTE_ID,
    DURATION_MS,
    RESULT_COUNT,
    POOL_SIZE,
    POOL_IDLE,
    STATUS,
    ERROR_MSG,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_unique() {
        let unique: HashSet<&str> = FIELD_NAMES.iter().copied().collect();
        assert_eq!(unique.len(), FIELD_NAMES.len());
    }

    #[test]
    fn test_field_names_are_snake_case() {
        for field in FIELD_NAMES {
            assert!(
                field.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "{} is not snake_case",
                field
            );
        }
    }
}
