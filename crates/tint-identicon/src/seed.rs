// SPDX-License-Identifier: MIT

//! Seed derivation: arbitrary bytes → four 32-bit words.
//!
//! Bytes are dealt round-robin into four buckets, each folded with the
//! rolling hash `word = word * 31 + byte` (written `(word << 5) - word +
//! byte` in the classic form). Arithmetic wraps at 32 bits. The result is
//! order-dependent, and the empty input yields the all-zero seed.

use serde::Serialize;

use crate::error::Result;

/// The four-word state that seeds an identicon's random stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Seed(pub [u32; 4]);

impl Seed {
    /// The seed of the empty input.
    pub const ZERO: Self = Self([0; 4]);

    /// Derive a seed from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut words = [0u32; 4];
        for (i, &byte) in bytes.iter().enumerate() {
            let word = &mut words[i % 4];
            *word = (*word << 5).wrapping_sub(*word).wrapping_add(u32::from(byte));
        }
        Self(words)
    }

    /// Derive a seed from any serializable payload via [`encode_payload`].
    ///
    /// # Errors
    ///
    /// Propagates the payload's serialization error.
    pub fn from_payload<T: Serialize + ?Sized>(payload: &T) -> Result<Self> {
        Ok(Self::from_bytes(&encode_payload(payload)?))
    }

    /// The four seed words.
    #[must_use]
    pub const fn words(self) -> [u32; 4] {
        self.0
    }
}

/// Encode a payload to bytes deterministically (compact JSON).
///
/// Equal logical payloads always encode identically, so they always map to
/// the same identicon. Map-typed payloads should use ordered maps
/// (`BTreeMap`) for this to hold.
///
/// # Errors
///
/// Returns [`IdenticonError::Encode`](crate::IdenticonError::Encode) if the
/// payload cannot be represented as JSON (e.g. a map with non-string keys).
pub fn encode_payload<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(payload)?)
}
