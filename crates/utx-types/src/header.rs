use utx_wire::{DataStream, Scope, Transcodable, Transcoder, WireError};

use crate::hash::Hash256;
use crate::hashing::double_sha256;

/// A block header.
///
/// Wire layout: a fixed 140-byte prefix followed by the variable-length
/// solution.
///
/// ```text
/// ┌────────┬──────────┬────────────────────────────────────┐
/// │ Offset │ Size     │ Field                              │
/// ├────────┼──────────┼────────────────────────────────────┤
/// │ 0      │ 4 bytes  │ version (i32 LE)                   │
/// │ 4      │ 32 bytes │ parent block hash                  │
/// │ 36     │ 32 bytes │ merkle root                        │
/// │ 68     │ 32 bytes │ commitment root                    │
/// │ 100    │ 4 bytes  │ time (u32 LE)                      │
/// │ 104    │ 4 bytes  │ difficulty bits (u32 LE)           │
/// │ 108    │ 32 bytes │ nonce (256-bit)                    │
/// │ 140    │ var      │ solution (CompactSize + bytes)     │
/// └────────┴──────────┴────────────────────────────────────┘
/// ```
///
/// The block id is the double-SHA256 of the header's `Scope::HASH`
/// serialization, which includes the solution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockHeader {
    /// Header format version.
    pub version: i32,

    /// Hash of the parent block header; zero for genesis.
    pub parent_hash: Hash256,

    /// Merkle root over the block's transaction ids.
    pub merkle_root: Hash256,

    /// Auxiliary commitment root.
    pub commitment_root: Hash256,

    /// Unix timestamp in seconds.
    pub time: u32,

    /// Compact difficulty target.
    pub bits: u32,

    /// 256-bit proof-of-work nonce.
    pub nonce: Hash256,

    /// Equihash-style solution bytes.
    pub solution: Vec<u8>,
}

impl BlockHeader {
    /// Serialized width of everything before the solution field.
    ///
    /// 4 + 32 + 32 + 32 + 4 + 4 + 32. Any reimplementation of this wire
    /// format must reproduce this constant exactly.
    pub const FIXED_PREFIX_SIZE: usize = 140;

    /// Compute the block id: double-SHA256 over the hash-scope
    /// serialization of this header.
    ///
    /// # Errors
    ///
    /// Returns the first [`WireError`] the serialize pass reports.
    pub fn id(&self) -> Result<Hash256, WireError> {
        let mut stream = DataStream::new(Scope::HASH);
        self.clone().serialize(&mut stream)?;
        Ok(double_sha256(stream.as_bytes()))
    }
}

impl Transcodable for BlockHeader {
    fn transcode(&mut self, t: &mut Transcoder<'_>) -> Result<(), WireError> {
        t.bind(&mut self.version)?;
        t.bind(&mut self.parent_hash)?;
        t.bind(&mut self.merkle_root)?;
        t.bind(&mut self.commitment_root)?;
        t.bind(&mut self.time)?;
        t.bind(&mut self.bits)?;
        t.bind(&mut self.nonce)?;
        t.bind(&mut self.solution)?;
        Ok(())
    }
}
