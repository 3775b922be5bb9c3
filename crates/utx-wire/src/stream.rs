use crate::error::WireError;
use crate::scope::Scope;

/// An owned byte buffer with a read cursor and an attached [`Scope`].
///
/// A stream backs exactly one transcoding pass at a time: the networking
/// layer creates one per inbound/outbound message, the storage layer one
/// per record, the hashing layer one per preimage. It can be reused
/// across passes via [`reset`](Self::reset).
///
/// Writes append at the end of the buffer; reads advance a cursor that
/// never exceeds the buffer length. There is no unchecked access in this
/// API — any attempt to read past the end fails with
/// [`WireError::ReadBeyondData`] instead of touching out-of-bounds memory.
#[derive(Debug, Clone)]
pub struct DataStream {
    buf: Vec<u8>,
    cursor: usize,
    scope: Scope,
}

impl DataStream {
    /// Create an empty stream with the given scope.
    pub fn new(scope: Scope) -> Self {
        Self {
            buf: Vec::new(),
            cursor: 0,
            scope,
        }
    }

    /// Create a stream over existing bytes, cursor at the start.
    pub fn from_bytes(scope: Scope, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            buf: bytes.into(),
            cursor: 0,
            scope,
        }
    }

    /// The immutable purpose tag this stream was created with.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Append bytes at the end of the buffer.
    pub fn write(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Read the next `n` bytes and advance the cursor.
    ///
    /// # Errors
    ///
    /// [`WireError::ReadBeyondData`] if fewer than `n` bytes remain.
    pub fn read(&mut self, n: usize) -> Result<&[u8], WireError> {
        let end = self.cursor.checked_add(n).filter(|&end| end <= self.buf.len());
        let Some(end) = end else {
            return Err(WireError::ReadBeyondData {
                offset: self.cursor,
                wanted: n,
                available: self.buf.len() - self.cursor,
            });
        };
        let bytes = &self.buf[self.cursor..end];
        self.cursor = end;
        Ok(bytes)
    }

    /// Read exactly `N` bytes into a fixed array.
    ///
    /// # Errors
    ///
    /// [`WireError::ReadBeyondData`] if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read(N)?);
        Ok(out)
    }

    /// Look at the next `n` bytes without advancing the cursor.
    ///
    /// # Errors
    ///
    /// [`WireError::ReadBeyondData`] if fewer than `n` bytes remain.
    pub fn peek(&self, n: usize) -> Result<&[u8], WireError> {
        self.cursor
            .checked_add(n)
            .and_then(|end| self.buf.get(self.cursor..end))
            .ok_or(WireError::ReadBeyondData {
                offset: self.cursor,
                wanted: n,
                available: self.buf.len() - self.cursor,
            })
    }

    /// Advance the cursor by `n` bytes without materializing them.
    ///
    /// # Errors
    ///
    /// [`WireError::ReadBeyondData`] if fewer than `n` bytes remain.
    pub fn skip(&mut self, n: usize) -> Result<(), WireError> {
        self.read(n).map(|_| ())
    }

    /// Total buffer length in bytes.
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// Unread bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.cursor
    }

    /// True once the cursor has consumed the whole buffer.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Rewind the cursor to the start, keeping the buffer content.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Rewind the cursor and clear the buffer for reuse.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.buf.clear();
    }

    /// The full buffer content, independent of the cursor.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the stream, yielding its buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
