use std::fmt;

use utx_wire::{Scope, Transcodable, Transcoder, WireError, decode_from_slice, encode_to_vec};

use crate::error::StoreError;
use crate::keys::schema_version_key;
use crate::kv::KvStore;

/// The schema version this binary writes.
pub const CURRENT_SCHEMA: SchemaVersion = SchemaVersion {
    major: 1,
    minor: 0,
    patch: 0,
};

/// The on-disk format version record, read and written once at startup.
///
/// Ordering is lexicographic over (major, minor, patch), which is what
/// the derived ordering on field order gives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Transcodable for SchemaVersion {
    fn transcode(&mut self, t: &mut Transcoder<'_>) -> Result<(), WireError> {
        t.bind(&mut self.major)?;
        t.bind(&mut self.minor)?;
        t.bind(&mut self.patch)?;
        Ok(())
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Check the stored schema version against [`CURRENT_SCHEMA`] and bring
/// it up to date. Returns the version that was stored before the check.
///
/// - No record: a fresh database; the current version is written.
/// - Stored older than current: monotonic upgrade, record rewritten.
/// - Stored newer than current: fatal [`StoreError::SchemaDowngrade`].
///
/// # Errors
///
/// [`StoreError::Wire`] if the stored record is corrupt, or
/// [`StoreError::SchemaDowngrade`] as above.
pub fn check_schema(store: &mut impl KvStore) -> Result<SchemaVersion, StoreError> {
    let key = schema_version_key();

    let Some(bytes) = store.get(&key) else {
        let mut current = CURRENT_SCHEMA;
        store.put(key, encode_to_vec(&mut current, Scope::STORAGE)?);
        return Ok(CURRENT_SCHEMA);
    };

    let (stored, _) = decode_from_slice::<SchemaVersion>(&bytes, Scope::STORAGE)?;

    if stored > CURRENT_SCHEMA {
        return Err(StoreError::SchemaDowngrade {
            stored,
            supported: CURRENT_SCHEMA,
        });
    }

    if stored < CURRENT_SCHEMA {
        let mut current = CURRENT_SCHEMA;
        store.put(key, encode_to_vec(&mut current, Scope::STORAGE)?);
    }

    Ok(stored)
}
