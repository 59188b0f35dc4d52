use serde::{Deserialize, Deserializer};

/// Deserialize a field that the platform may send as `null`.
///
/// `null` and a missing field (with `#[serde(default)]`) both end up as
/// `T::default()`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
