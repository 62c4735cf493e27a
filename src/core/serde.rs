/*!
 * Serde Helpers
 * Wire-format adapters shared by the flat records handed to renderers
 */

/// Skip serializing if value is zero
pub fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}

/// Serialize `Option<u32>` as a plain integer, `-1` when absent
///
/// Renderers read unset timing fields and the idle CPU as `-1`.
pub mod sentinel {
    use crate::core::types::UNSET;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_i64(i64::from(*v)),
            None => serializer.serialize_i64(UNSET),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        if raw < 0 {
            return Ok(None);
        }
        u32::try_from(raw)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
