//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of one catalog fetch.
///
/// Ids are issued in increasing order by the state that owns them, so a
/// transition stays deterministic. A completion carrying any id other than the
/// one currently in flight is stale.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The id issued after this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl core::fmt::Display for RequestId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "req-{}", self.0)
    }
}
