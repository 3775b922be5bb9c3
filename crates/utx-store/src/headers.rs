use utx_types::{BlockHeader, Hash256};
use utx_wire::{DataStream, Scope, Transcodable};

use crate::error::StoreError;
use crate::keys::{header_key, height_key};
use crate::kv::KvStore;

/// Block header persistence over any [`KvStore`] backend.
///
/// Headers are serialized under `Scope::STORAGE` and keyed by their
/// block id; an auxiliary height index maps heights to ids.
#[derive(Debug)]
pub struct HeaderStore<S> {
    store: S,
}

impl<S: KvStore> HeaderStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store, e.g. for the schema check.
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Persist a header under its block id; returns the id.
    ///
    /// # Errors
    ///
    /// [`StoreError::Wire`] if the header fails to serialize.
    pub fn put_header(&mut self, header: &BlockHeader) -> Result<Hash256, StoreError> {
        let id = header.id()?;
        let mut stream = DataStream::new(Scope::STORAGE);
        header.clone().serialize(&mut stream)?;
        self.store.put(header_key(&id), stream.into_bytes());
        Ok(id)
    }

    /// Record the height-to-id index entry for a header.
    pub fn put_height_index(&mut self, height: u64, id: &Hash256) {
        self.store.put(height_key(height), id.as_bytes().to_vec());
    }

    /// Load a header by block id.
    ///
    /// # Errors
    ///
    /// [`StoreError::Wire`] if the stored bytes fail to decode, or
    /// [`StoreError::CorruptRecord`] if they decode with bytes left over.
    pub fn get_header(&self, id: &Hash256) -> Result<Option<BlockHeader>, StoreError> {
        let Some(bytes) = self.store.get(&header_key(id)) else {
            return Ok(None);
        };

        let mut stream = DataStream::from_bytes(Scope::STORAGE, bytes);
        let mut header = BlockHeader::default();
        header.deserialize(&mut stream)?;
        if !stream.is_exhausted() {
            return Err(StoreError::CorruptRecord {
                key_hex: id.to_string(),
                extra: stream.remaining(),
            });
        }
        Ok(Some(header))
    }

    /// Look up the block id stored at a height.
    pub fn get_hash_at_height(&self, height: u64) -> Option<Hash256> {
        let bytes = self.store.get(&height_key(height))?;
        let array: [u8; 32] = bytes.try_into().ok()?;
        Some(Hash256::from_bytes(array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn sample_header() -> BlockHeader {
        BlockHeader {
            version: 4,
            parent_hash: Hash256::from_bytes([0x01; 32]),
            merkle_root: Hash256::from_bytes([0x02; 32]),
            commitment_root: Hash256::ZERO,
            time: 1_756_000_000,
            bits: 0x1D00_FFFF,
            nonce: Hash256::from_bytes([0x03; 32]),
            solution: vec![0x07; 16],
        }
    }

    #[test]
    fn put_then_get_roundtrips() {
        let mut headers = HeaderStore::new(MemoryStore::new());
        let header = sample_header();
        let id = headers.put_header(&header).unwrap();
        assert_eq!(headers.get_header(&id).unwrap(), Some(header));
    }

    #[test]
    fn missing_header_is_none() {
        let headers = HeaderStore::new(MemoryStore::new());
        assert_eq!(headers.get_header(&Hash256::ZERO).unwrap(), None);
    }

    #[test]
    fn height_index_roundtrips() {
        let mut headers = HeaderStore::new(MemoryStore::new());
        let id = headers.put_header(&sample_header()).unwrap();
        headers.put_height_index(42, &id);
        assert_eq!(headers.get_hash_at_height(42), Some(id));
        assert_eq!(headers.get_hash_at_height(43), None);
    }

    #[test]
    fn trailing_bytes_are_corrupt() {
        let mut headers = HeaderStore::new(MemoryStore::new());
        let header = sample_header();
        let id = headers.put_header(&header).unwrap();

        // Append garbage to the stored record
        let key = header_key(&id);
        let mut bytes = headers.backend_mut().get(&key).unwrap();
        bytes.push(0xFF);
        headers.backend_mut().put(key, bytes);

        let err = headers.get_header(&id).unwrap_err();
        assert!(matches!(err, StoreError::CorruptRecord { extra: 1, .. }));
    }
}
