//! Duration text and wire helpers.
//!
//! Durations are written as unit-suffixed runs (`1h30m`, `250ms`, `-1.5h`)
//! and persisted as signed integer nanoseconds.

use chrono::Duration;

const NANOS_PER_MICRO: i128 = 1_000;
const NANOS_PER_MILLI: i128 = 1_000_000;
const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;

/// Parses duration text such as `10h`, `1h30m15s`, `1.5s`, `-250ms` or `0`.
///
/// Accepted units: `ns`, `us`, `µs`, `μs`, `ms`, `s`, `m`, `h`.
/// Returns `None` for malformed input or values outside the `i64` nanosecond
/// range.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let (negative, mut rest) = match input.as_bytes().first()? {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };
    if rest == "0" {
        return Some(Duration::zero());
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: i128 = 0;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_len);

        let scale = unit_scale(unit)?;
        total = total.checked_add(scaled_component(number, scale)?)?;
        rest = next;
    }

    if negative {
        total = -total;
    }
    i64::try_from(total).ok().map(Duration::nanoseconds)
}

fn unit_scale(unit: &str) -> Option<i128> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

fn scaled_component(number: &str, scale: i128) -> Option<i128> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.contains('.') {
        return None;
    }

    let whole: i128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos = whole.checked_mul(scale)?;
    if !fraction.is_empty() {
        let fraction: f64 = format!("0.{fraction}").parse().ok()?;
        nanos = nanos.checked_add((fraction * scale as f64) as i128)?;
    }
    Some(nanos)
}

/// Renders a duration the way `parse_duration` reads it, e.g. `10h0m0s`.
pub fn format_duration(duration: Duration) -> String {
    let total = i128::from(duration.num_seconds()) * NANOS_PER_SECOND
        + i128::from(duration.subsec_nanos());
    if total == 0 {
        return "0s".to_string();
    }

    let mut out = String::new();
    if total < 0 {
        out.push('-');
    }
    let mut remaining = total.abs();

    if remaining < NANOS_PER_SECOND {
        let (scale, unit) = if remaining < NANOS_PER_MICRO {
            (1, "ns")
        } else if remaining < NANOS_PER_MILLI {
            (NANOS_PER_MICRO, "\u{b5}s")
        } else {
            (NANOS_PER_MILLI, "ms")
        };
        out.push_str(&decimal(remaining, scale));
        out.push_str(unit);
        return out;
    }

    let hours = remaining / NANOS_PER_HOUR;
    remaining %= NANOS_PER_HOUR;
    let minutes = remaining / NANOS_PER_MINUTE;
    remaining %= NANOS_PER_MINUTE;

    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&decimal(remaining, NANOS_PER_SECOND));
    out.push('s');
    out
}

fn decimal(value: i128, scale: i128) -> String {
    let whole = value / scale;
    let fraction = value % scale;
    if fraction == 0 {
        return whole.to_string();
    }
    let width = scale.ilog10() as usize;
    let digits = format!("{fraction:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

/// Serde adapter storing a `chrono::Duration` as signed nanoseconds.
pub mod nanos {
    use chrono::Duration;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let nanos = duration
            .num_nanoseconds()
            .ok_or_else(|| S::Error::custom("duration exceeds i64 nanoseconds"))?;
        serializer.serialize_i64(nanos)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        i64::deserialize(deserializer).map(Duration::nanoseconds)
    }
}
