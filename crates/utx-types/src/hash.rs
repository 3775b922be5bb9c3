use std::fmt;

use utx_wire::{Transcodable, Transcoder, WireError};

/// A fixed 32-byte digest with value semantics.
///
/// Used for block linkage everywhere a chain hash appears: parent hash,
/// merkle root, commitment root, block ids. Transcodes as exactly 32 raw
/// bytes in every scope.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    /// Digest length in bytes.
    pub const LEN: usize = 32;

    /// The all-zero digest, used for genesis parent links.
    pub const ZERO: Self = Self([0u8; 32]);

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Restore the default all-zero value.
    pub fn reset(&mut self) {
        self.0 = [0u8; 32];
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", hex::encode(self.0))
    }
}

impl Transcodable for Hash256 {
    fn transcode(&mut self, t: &mut Transcoder<'_>) -> Result<(), WireError> {
        t.bind(&mut self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utx_wire::{Scope, decode_from_slice, encode_to_vec};

    #[test]
    fn default_is_zero() {
        let h = Hash256::default();
        assert!(h.is_zero());
        assert_eq!(h, Hash256::ZERO);
    }

    #[test]
    fn reset_zeroes() {
        let mut h = Hash256::from_bytes([0xAB; 32]);
        assert!(!h.is_zero());
        h.reset();
        assert!(h.is_zero());
    }

    #[test]
    fn transcodes_as_exactly_32_bytes() {
        let mut h = Hash256::from_bytes([0x11; 32]);
        let bytes = encode_to_vec(&mut h, Scope::NETWORK).unwrap();
        assert_eq!(bytes, vec![0x11; 32]);

        let (decoded, consumed) = decode_from_slice::<Hash256>(&bytes, Scope::NETWORK).unwrap();
        assert_eq!(decoded, h);
        assert_eq!(consumed, 32);
    }

    #[test]
    fn hex_roundtrip() {
        let h = Hash256::from_bytes([0x0F; 32]);
        let parsed = Hash256::from_hex(&h.to_string()).unwrap();
        assert_eq!(parsed, h);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(Hash256::from_hex("abcd").is_err());
    }
}
