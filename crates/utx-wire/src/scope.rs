use std::fmt;
use std::ops::BitOr;

/// Purpose tag carried by every [`DataStream`](crate::DataStream).
///
/// A scope says what the bytes being produced or consumed are *for*. A
/// field list may test the active scope to include, exclude, or reshape a
/// field per purpose — e.g. a relay flag that exists on the wire but has
/// no place in a hash preimage.
///
/// Bit layout:
///   bit 0 = network wire
///   bit 1 = persistent storage
///   bit 2 = hash preimage
///
/// The tag is bitmask-capable: a value may belong to more than one scope,
/// and [`Scope::contains`] tests for overlap. A stream's scope is fixed at
/// construction and immutable for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scope(u8);

impl Scope {
    /// Bytes bound for the peer-to-peer wire.
    pub const NETWORK: Self = Self(0b0000_0001);

    /// Bytes bound for the embedded key-value store.
    pub const STORAGE: Self = Self(0b0000_0010);

    /// Bytes assembled as a hash preimage.
    pub const HASH: Self = Self(0b0000_0100);

    /// Every scope at once.
    pub const ALL: Self = Self(0b0000_0111);

    /// Create a scope from a raw bitmask.
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Get the underlying bitmask.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// True if this scope overlaps `other` in at least one bit.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_network(self) -> bool {
        self.contains(Self::NETWORK)
    }

    pub const fn is_storage(self) -> bool {
        self.contains(Self::STORAGE)
    }

    pub const fn is_hash(self) -> bool {
        self.contains(Self::HASH)
    }
}

impl BitOr for Scope {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.is_network() {
            parts.push("network");
        }
        if self.is_storage() {
            parts.push("storage");
        }
        if self.is_hash() {
            parts.push("hash");
        }
        if parts.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", parts.join("|"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_overlap() {
        assert!(Scope::NETWORK.contains(Scope::NETWORK));
        assert!(!Scope::NETWORK.contains(Scope::STORAGE));
        assert!(Scope::ALL.contains(Scope::HASH));
    }

    #[test]
    fn bitor_composes() {
        let s = Scope::NETWORK | Scope::HASH;
        assert!(s.is_network());
        assert!(s.is_hash());
        assert!(!s.is_storage());
    }

    #[test]
    fn display_names_members() {
        assert_eq!(Scope::STORAGE.to_string(), "storage");
        assert_eq!((Scope::NETWORK | Scope::HASH).to_string(), "network|hash");
        assert_eq!(Scope::from_raw(0).to_string(), "none");
    }
}
