//! Time utilities

use chrono::{DateTime, Utc};

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a millisecond timestamp as a UTC calendar day ("YYYY-MM-DD").
///
/// Out-of-range timestamps collapse to the epoch day rather than panic;
/// they can only come from corrupted records.
pub fn millis_to_day(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_to_day_formats_utc() {
        // 2025-03-15 23:59:59.999 UTC
        assert_eq!(millis_to_day(1_742_083_199_999), "2025-03-15");
        // One millisecond later rolls the day
        assert_eq!(millis_to_day(1_742_083_200_000), "2025-03-16");
    }

    #[test]
    fn millis_to_day_survives_garbage() {
        assert_eq!(millis_to_day(i64::MAX), "1970-01-01");
    }
}
