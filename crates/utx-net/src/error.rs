use utx_wire::WireError;

/// Errors raised at the networking boundary.
///
/// Most variants describe malformed or hostile peer input; see
/// [`is_peer_fault`](Self::is_peer_fault) for the disconnect policy.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// Payload transcoding failed.
    #[error("wire error: {0}")]
    Wire(#[from] WireError),

    /// Envelope did not start with the network magic.
    #[error("invalid network magic: expected {expected:02X?}, found {found:02X?}")]
    InvalidMagic { expected: [u8; 4], found: [u8; 4] },

    /// Envelope checksum did not match the payload digest.
    #[error("checksum mismatch: expected {expected:02X?}, found {found:02X?}")]
    ChecksumMismatch { expected: [u8; 4], found: [u8; 4] },

    /// Declared payload length exceeds the protocol maximum.
    #[error("payload of {size} bytes exceeds maximum {max}")]
    OversizedPayload { size: usize, max: usize },

    /// Envelope carried a command this node does not know.
    #[error("unknown command {command:?}")]
    UnknownCommand { command: String },

    /// A message payload decoded with bytes left over.
    #[error("message payload has {extra} trailing bytes")]
    TrailingBytes { extra: usize },

    /// Peer speaks a protocol version older than we accept.
    #[error("incompatible peer version {peer} (minimum {min})")]
    IncompatibleVersion { peer: i32, min: i32 },

    /// Peer echoed our own connection nonce back: we connected to
    /// ourselves.
    #[error("self connection detected")]
    SelfConnection,

    /// A message arrived that the handshake state does not allow.
    #[error("unexpected {found} message in state {state}")]
    UnexpectedMessage {
        found: &'static str,
        state: &'static str,
    },

    /// Transport-level I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl NetError {
    /// Whether this failure is attributable to the remote peer.
    ///
    /// Peer-fault errors must result in disconnecting and penalizing the
    /// originating connection; everything else is local trouble.
    pub fn is_peer_fault(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
