//! Timestamp stamping rules shared by every store implementation.
//!
//! PostgreSQL `timestamptz` keeps microseconds, so stamps are truncated to
//! microseconds before they are stored. That way the record returned from an
//! insert compares equal to the one read back later.

use chrono::{DateTime, Duration, DurationRound, Utc};

/// Smallest representable step between two stored timestamps.
pub fn resolution() -> Duration {
    Duration::microseconds(1)
}

/// Current time truncated to storage resolution.
pub fn now_utc() -> DateTime<Utc> {
    truncate(Utc::now())
}

/// Truncate a timestamp to storage resolution.
pub fn truncate(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.duration_trunc(resolution()).unwrap_or(ts)
}

/// The `updated_at` value for an update happening at `now`.
///
/// Always strictly later than `previous`, even if the clock went backwards
/// or two updates land in the same microsecond.
pub fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let floor = previous + resolution();
    truncate(now).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_truncate_drops_nanoseconds() {
        let ts = Utc
            .with_ymd_and_hms(2026, 5, 1, 12, 0, 0)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        assert_eq!(truncate(ts).nanosecond(), 123_456_000);
    }

    #[test]
    fn test_now_utc_has_microsecond_resolution() {
        assert_eq!(now_utc().nanosecond() % 1_000, 0);
    }

    #[test]
    fn test_next_updated_at_uses_now_when_later() {
        let prev = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let now = prev + Duration::seconds(5);
        assert_eq!(next_updated_at(prev, now), now);
    }

    #[test]
    fn test_next_updated_at_same_instant_is_strictly_later() {
        let prev = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let next = next_updated_at(prev, prev);
        assert!(next > prev);
        assert_eq!(next - prev, resolution());
    }

    #[test]
    fn test_next_updated_at_clock_went_backwards() {
        let prev = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let now = prev - Duration::seconds(30);
        assert_eq!(next_updated_at(prev, now), prev + resolution());
    }
}
