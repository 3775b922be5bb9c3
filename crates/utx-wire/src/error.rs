/// Errors that can occur while transcoding bytes.
///
/// This is a closed taxonomy: every failure a transcoding pass can hit is
/// one of these variants, all of them recoverable. Deserialization runs
/// against untrusted peer input, so each variant corresponds to a class
/// of malformed input, never to a local programming error — all lengths
/// are bounds-checked before use.
///
/// Callers on the network path must treat any of these on inbound data as
/// a protocol violation by the originating peer: disconnect and penalize,
/// never crash.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A read asked for more bytes than remain in the stream.
    ///
    /// `offset` is the cursor position where the read started, `wanted`
    /// the requested byte count, `available` what was actually left.
    #[error("read of {wanted} bytes at offset {offset} exceeds remaining data ({available} bytes left)")]
    ReadBeyondData {
        offset: usize,
        wanted: usize,
        available: usize,
    },

    /// A CompactSize used a wider encoding than its value requires.
    ///
    /// Canonical form is mandatory: non-minimal encodings are a classic
    /// malleability and DoS vector, so the decoder rejects them outright.
    #[error("non-canonical compact size: value {value} encoded wider than necessary")]
    NonCanonicalCompactSize { value: u64 },

    /// A decoded CompactSize exceeds the configured maximum.
    ///
    /// Guards against unbounded-allocation attacks: a hostile peer cannot
    /// make the decoder reserve more than `max` bytes with a length field.
    #[error("compact size {value} exceeds maximum {max}")]
    CompactSizeTooBig { value: u64, max: u64 },

    /// A string field contained bytes that are not valid UTF-8.
    #[error("string field contains invalid UTF-8")]
    InvalidString,
}
