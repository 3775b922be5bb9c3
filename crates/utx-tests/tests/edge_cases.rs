//! Hostile-input suites for the decoder paths.
//!
//! Everything here feeds deliberately malformed bytes to the decoders
//! and asserts the failure is the right closed-taxonomy error, reported
//! before any unbounded work happens:
//!
//! - **Truncation**: every strict prefix of a valid encoding fails with
//!   `ReadBeyondData`, never a panic or an out-of-bounds read.
//! - **Canonicality**: widened CompactSize forms are rejected even when
//!   the value itself is in range.
//! - **Allocation bounds**: a length field larger than the remaining
//!   payload fails before the decoder reserves memory for it.
//! - **Schema guard**: stored schema newer than the binary is fatal.

use utx_tests::{sample_header, sample_version};
use utx_types::{BlockHeader, VersionMessage};
use utx_wire::compact::MAX_SERIALIZED_COMPACT_SIZE;
use utx_wire::{DataStream, Scope, Transcodable, WireError, decode_from_slice, encode_to_vec};

// ── Truncation sweeps ─────────────────────────────────────────────────────────

fn assert_all_prefixes_fail<T>(bytes: &[u8])
where
    T: Transcodable + Default,
{
    for n in 0..bytes.len() {
        let result = decode_from_slice::<T>(&bytes[..n], Scope::NETWORK);
        assert!(
            matches!(result, Err(WireError::ReadBeyondData { .. })),
            "prefix of {n}/{} bytes did not fail with ReadBeyondData",
            bytes.len()
        );
    }
}

#[test]
fn truncated_header_fails_at_every_prefix() {
    let bytes = encode_to_vec(&mut sample_header(), Scope::NETWORK).unwrap();
    assert_all_prefixes_fail::<BlockHeader>(&bytes);
}

#[test]
fn truncated_version_message_fails_at_every_prefix() {
    let bytes = encode_to_vec(&mut sample_version(), Scope::NETWORK).unwrap();
    assert_all_prefixes_fail::<VersionMessage>(&bytes);
}

// ── CompactSize canonicality and bounds ───────────────────────────────────────

#[test]
fn widened_solution_length_is_rejected() {
    // A valid header with an empty solution, then the 1-byte CompactSize
    // replaced by a non-canonical 3-byte form of the same value.
    let mut header = sample_header();
    header.solution.clear();
    let mut bytes = encode_to_vec(&mut header, Scope::NETWORK).unwrap();
    assert_eq!(*bytes.last().unwrap(), 0x00);
    bytes.pop();
    bytes.extend_from_slice(&[0xFD, 0x00, 0x00]);

    let result = decode_from_slice::<BlockHeader>(&bytes, Scope::NETWORK);
    assert!(matches!(
        result,
        Err(WireError::NonCanonicalCompactSize { value: 0 })
    ));
}

#[test]
fn oversized_solution_length_is_rejected() {
    let mut header = sample_header();
    header.solution.clear();
    let mut bytes = encode_to_vec(&mut header, Scope::NETWORK).unwrap();
    bytes.pop();
    // Claim a solution longer than MAX_SERIALIZED_COMPACT_SIZE
    bytes.push(0xFE);
    bytes.extend_from_slice(&u32::try_from(MAX_SERIALIZED_COMPACT_SIZE + 1).unwrap().to_le_bytes());

    let result = decode_from_slice::<BlockHeader>(&bytes, Scope::NETWORK);
    assert!(matches!(result, Err(WireError::CompactSizeTooBig { .. })));
}

#[test]
fn hostile_length_fails_before_allocation() {
    // Header prefix claiming a 32 MiB solution with zero bytes behind it
    let mut header = sample_header();
    header.solution.clear();
    let mut bytes = encode_to_vec(&mut header, Scope::NETWORK).unwrap();
    bytes.pop();
    bytes.push(0xFE);
    bytes.extend_from_slice(&u32::try_from(MAX_SERIALIZED_COMPACT_SIZE).unwrap().to_le_bytes());

    let result = decode_from_slice::<BlockHeader>(&bytes, Scope::NETWORK);
    assert!(matches!(result, Err(WireError::ReadBeyondData { .. })));
}

#[test]
fn invalid_utf8_user_agent_is_rejected() {
    let mut msg = sample_version();
    msg.user_agent = "ua".to_string();
    let mut bytes = encode_to_vec(&mut msg, Scope::NETWORK).unwrap();

    // The user agent sits after version(4) + services(8) + timestamp(8)
    // + two addresses(26 each) + nonce(8); corrupt its two bytes.
    let offset = 4 + 8 + 8 + 26 + 26 + 8 + 1;
    bytes[offset] = 0xFF;
    bytes[offset + 1] = 0xFE;

    let result = decode_from_slice::<VersionMessage>(&bytes, Scope::NETWORK);
    assert!(matches!(result, Err(WireError::InvalidString)));
}

// ── First-failure-wins propagation ────────────────────────────────────────────

#[test]
fn decode_failure_leaves_no_partial_success() {
    // Truncate mid-way through the merkle root: the error must surface
    // from the failing field and abort the rest of the field list.
    let bytes = encode_to_vec(&mut sample_header(), Scope::NETWORK).unwrap();
    let mut stream = DataStream::from_bytes(Scope::NETWORK, bytes[..40].to_vec());
    let mut header = BlockHeader::default();
    let err = header.deserialize(&mut stream).unwrap_err();
    assert!(matches!(err, WireError::ReadBeyondData { .. }));
}

// ── Schema guard ──────────────────────────────────────────────────────────────

#[test]
fn schema_downgrade_is_fatal() {
    use utx_store::{CURRENT_SCHEMA, KvStore, MemoryStore, SchemaVersion, StoreError, check_schema};
    use utx_store::keys::schema_version_key;
    use utx_wire::encode_to_vec;

    let mut store = MemoryStore::new();
    let mut future = SchemaVersion {
        major: CURRENT_SCHEMA.major,
        minor: CURRENT_SCHEMA.minor + 1,
        patch: 0,
    };
    store.put(
        schema_version_key(),
        encode_to_vec(&mut future, Scope::STORAGE).unwrap(),
    );

    let err = check_schema(&mut store).unwrap_err();
    assert!(matches!(err, StoreError::SchemaDowngrade { .. }));
}

#[test]
fn schema_upgrade_is_monotonic() {
    use utx_store::{CURRENT_SCHEMA, KvStore, MemoryStore, SchemaVersion, check_schema};
    use utx_store::keys::schema_version_key;
    use utx_wire::encode_to_vec;

    let mut store = MemoryStore::new();
    let mut old = SchemaVersion {
        major: 0,
        minor: 1,
        patch: 0,
    };
    store.put(
        schema_version_key(),
        encode_to_vec(&mut old, Scope::STORAGE).unwrap(),
    );

    assert_eq!(check_schema(&mut store).unwrap(), old);
    assert_eq!(check_schema(&mut store).unwrap(), CURRENT_SCHEMA);
}
