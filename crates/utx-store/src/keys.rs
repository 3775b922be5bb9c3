//! Key schema for the embedded store.
//!
//! All records live under prefixed binary keys so related entries group
//! together in the ordered keyspace.

use utx_types::Hash256;

/// Key prefixes for the record families.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyPrefix {
    /// Schema version record: `0x00` (singleton).
    SchemaVersion = 0x00,
    /// Block header by hash: `0x01 || block_hash`.
    HeaderByHash = 0x01,
    /// Block hash by height: `0x02 || height BE`.
    HashByHeight = 0x02,
}

/// The singleton key of the schema version record.
pub fn schema_version_key() -> Vec<u8> {
    vec![KeyPrefix::SchemaVersion as u8]
}

/// Key of a block header record.
pub fn header_key(hash: &Hash256) -> Vec<u8> {
    let mut key = Vec::with_capacity(1 + Hash256::LEN);
    key.push(KeyPrefix::HeaderByHash as u8);
    key.extend_from_slice(hash.as_bytes());
    key
}

/// Key of a height-to-hash index entry.
///
/// Height is big-endian so the ordered keyspace sorts by height.
pub fn height_key(height: u64) -> Vec<u8> {
    let mut key = Vec::with_capacity(9);
    key.push(KeyPrefix::HashByHeight as u8);
    key.extend_from_slice(&height.to_be_bytes());
    key
}
