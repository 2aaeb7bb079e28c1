//! Clock collaborator and timestamp formatting
//!
//! The clock is injected at logger construction so tests and demos can pin
//! time. There is no process-wide default clock.

use chrono::{DateTime, Utc};

/// Zero-argument source of the current UTC instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
///
/// # Examples
///
/// ```
/// use ecs_logger_core::core::timestamp::{Clock, FixedClock};
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2020, 5, 11, 15, 1, 1).single().expect("valid datetime");
/// let clock = FixedClock(instant);
/// assert_eq!(clock.now(), instant);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// ISO 8601, UTC, millisecond precision: `2020-05-11T15:01:01.000Z`.
#[must_use]
pub fn format_timestamp(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 5, 11, 15, 1, 1)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_format_millisecond_precision() {
        assert_eq!(
            format_timestamp(&fixed_datetime()),
            "2020-05-11T15:01:01.000Z"
        );
    }

    #[test]
    fn test_format_nonzero_millis() {
        let datetime = fixed_datetime() + chrono::Duration::milliseconds(123);
        assert_eq!(format_timestamp(&datetime), "2020-05-11T15:01:01.123Z");
    }

    #[test]
    fn test_format_truncates_micros() {
        let datetime = fixed_datetime() + chrono::Duration::microseconds(123456);
        assert_eq!(format_timestamp(&datetime), "2020-05-11T15:01:01.123Z");
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock(fixed_datetime());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_is_utc() {
        let now = SystemClock.now();
        assert!(format_timestamp(&now).ends_with('Z'));
    }
}
