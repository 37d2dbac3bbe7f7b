//! Lenient decoders for optional snapshot fields.
//!
//! Rows arrive from a loosely typed remote table. A malformed optional
//! field decodes as absent instead of failing the whole snapshot.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::Episode;

/// Empty, blank, or non-string values become `None`.
pub fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Accepts a non-negative integer, an integral float, or a string holding
/// one. Anything else becomes `None`.
pub fn episode<'de, D>(deserializer: D) -> Result<Option<Episode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(episode_from_value(&raw))
}

pub(crate) fn episode_from_value(raw: &Value) -> Option<Episode> {
    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_u64() {
                u32::try_from(i).ok().map(Episode)
            } else {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64)
                    .map(|f| Episode(f as u32))
            }
        }
        Value::String(s) => s.trim().parse::<u32>().ok().map(Episode),
        _ => None,
    }
}
