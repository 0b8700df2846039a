//! Environment snapshots.
//!
//! Detection never reads `std::env` directly; it operates on an owned
//! [`EnvSnapshot`] captured once by the caller. Tests build snapshots from
//! literal pairs and stay deterministic regardless of the host environment.

use std::collections::BTreeMap;

/// An immutable snapshot of string key/value environment state.
///
/// # Example
///
/// ```
/// use cimeta::env::EnvSnapshot;
///
/// let env: EnvSnapshot = [("TRAVIS", "true")].into_iter().collect();
/// assert!(env.is_set("TRAVIS"));
/// assert_eq!(env.get("TRAVIS_BRANCH"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// BTreeMap for deterministic ordering in debug output.
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    pub fn from_process() -> Self {
        std::env::vars().collect()
    }

    /// Look up a variable. Returns `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Whether a variable is present with a non-empty value.
    ///
    /// CI marker variables count as set only when non-empty; a vendor
    /// exporting `TRAVIS=""` is not a Travis build.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_empty())
    }

    /// Number of variables in the snapshot.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot contains no variables at all.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
