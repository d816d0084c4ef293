//! Wall-clock distance between "now" and a freshness timestamp.

use std::time::SystemTime;

/// Seconds from `ts` to `now`, with sub-second precision.
///
/// A timestamp later than `now` (clock skew, mtime set forward) yields a
/// negative value. It is not clamped.
pub fn elapsed_seconds(now: SystemTime, ts: SystemTime) -> f64 {
    match now.duration_since(ts) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    }
}

/// [`elapsed_seconds`] against the current wall clock.
pub fn elapsed_since(ts: SystemTime) -> f64 {
    elapsed_seconds(SystemTime::now(), ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn past_timestamp_is_positive() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let ts = now - Duration::from_millis(2_500);
        assert_eq!(elapsed_seconds(now, ts), 2.5);
    }

    #[test]
    fn future_timestamp_is_negative() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let ts = now + Duration::from_millis(750);
        assert_eq!(elapsed_seconds(now, ts), -0.75);
    }

    #[test]
    fn same_instant_is_zero() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(42);
        assert_eq!(elapsed_seconds(now, now), 0.0);
    }
}
