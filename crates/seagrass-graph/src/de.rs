//! Lenient serde helpers for layout option structs.
//!
//! Option keys that hold counts accept any JSON number: negative values clamp to zero and
//! fractional values truncate. `null` reads as `None`, which the option structs turn into the
//! field's default. Wrong types (strings, objects) are still deserialization errors.

use serde::{Deserialize, Deserializer};

pub fn count<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map(clamp_count))
}

/// Any JSON number is a valid seed: it is truncated and wrapped into `u32`.
pub fn seed<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.and_then(wrap_seed))
}

pub fn wrap_seed(raw: f64) -> Option<u32> {
    if !raw.is_finite() {
        return None;
    }
    Some(raw.trunc().rem_euclid(4_294_967_296.0) as u32)
}

pub fn clamp_count(raw: f64) -> usize {
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    // `as` saturates for values beyond `usize::MAX`.
    raw.trunc() as usize
}

/// Replaces non-finite values with `default` and clamps the rest to `>= 0`.
pub fn non_negative(value: f64, default: f64) -> f64 {
    if !value.is_finite() {
        return default;
    }
    value.max(0.0)
}

pub fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() { value } else { default }
}

/// Like [`non_negative`], but clamps into `[0, 1]`.
pub fn unit_interval(value: f64, default: f64) -> f64 {
    non_negative(value, default).min(1.0)
}
