//! Human-readable trace timestamps.

use std::fmt::Write;

const NS_PER_MS: u64 = 1_000_000;
const NS_PER_SEC: u64 = 1_000 * NS_PER_MS;
const NS_PER_MIN: u64 = 60 * NS_PER_SEC;
const NS_PER_HOUR: u64 = 60 * NS_PER_MIN;
const NS_PER_DAY: u64 = 24 * NS_PER_HOUR;

/// Format a nanosecond timestamp as `1d2h3m4s5ms6ns`, skipping zero units.
pub fn format_timestamp(timestamp_ns: i64) -> String {
    if timestamp_ns == 0 {
        return "0ns".to_string();
    }

    let mut out = String::new();
    if timestamp_ns < 0 {
        out.push('-');
    }

    let mut remaining = timestamp_ns.unsigned_abs();
    for (size, unit) in [
        (NS_PER_DAY, "d"),
        (NS_PER_HOUR, "h"),
        (NS_PER_MIN, "m"),
        (NS_PER_SEC, "s"),
        (NS_PER_MS, "ms"),
        (1, "ns"),
    ] {
        let count = remaining / size;
        remaining %= size;
        if count > 0 {
            let _ = write!(out, "{}{}", count, unit);
        }
    }
    out
}
