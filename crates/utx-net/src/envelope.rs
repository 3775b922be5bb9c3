//! Message envelope framing.
//!
//! Every message on a peer connection travels inside a 24-byte envelope
//! header followed by its payload:
//!
//! ```text
//! ┌────────┬──────────┬──────────────────────────────────────┐
//! │ Offset │ Size     │ Field                                │
//! ├────────┼──────────┼──────────────────────────────────────┤
//! │ 0      │ 4 bytes  │ network magic "UTX\0"                │
//! │ 4      │ 12 bytes │ command, ASCII, zero-padded          │
//! │ 16     │ 4 bytes  │ payload length (u32 LE, bounded)     │
//! │ 20     │ 4 bytes  │ checksum: double-SHA256[..4]         │
//! │ 24     │ var      │ payload                              │
//! └────────┴──────────┴──────────────────────────────────────┘
//! ```
//!
//! [`MessageCodec`] implements `tokio_util`'s `Decoder`/`Encoder` so the
//! transport layer can wrap a socket in a `Framed` and speak whole
//! envelopes.

use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use utx_types::hashing::double_sha256;

use crate::error::NetError;

/// Network magic: ASCII "UTX\0".
pub const NETWORK_MAGIC: [u8; 4] = [0x55, 0x54, 0x58, 0x00];

/// Envelope header size: magic + command + length + checksum.
pub const ENVELOPE_HEADER_SIZE: usize = 24;

/// Command field width.
const COMMAND_LEN: usize = 12;

/// Largest payload an envelope may declare.
pub const MAX_PAYLOAD_SIZE: usize = 4 * 1024 * 1024;

/// The closed set of message commands this node speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Version,
    Verack,
    Ping,
    Pong,
}

impl Command {
    /// The ASCII name as it appears in the command field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Verack => "verack",
            Self::Ping => "ping",
            Self::Pong => "pong",
        }
    }

    /// Encode into the fixed-width, zero-padded command field.
    pub fn to_wire(self) -> [u8; COMMAND_LEN] {
        let mut field = [0u8; COMMAND_LEN];
        field[..self.name().len()].copy_from_slice(self.name().as_bytes());
        field
    }

    /// Parse a command field.
    ///
    /// # Errors
    ///
    /// [`NetError::UnknownCommand`] for anything outside the closed set;
    /// with a fixed message vocabulary, skipping unknown commands would
    /// only mask peer misbehaviour.
    pub fn from_wire(field: &[u8; COMMAND_LEN]) -> Result<Self, NetError> {
        let end = field.iter().position(|&b| b == 0).unwrap_or(COMMAND_LEN);
        match &field[..end] {
            b"version" => Ok(Self::Version),
            b"verack" => Ok(Self::Verack),
            b"ping" => Ok(Self::Ping),
            b"pong" => Ok(Self::Pong),
            other => Err(NetError::UnknownCommand {
                command: String::from_utf8_lossy(other).into_owned(),
            }),
        }
    }
}

/// One framed message: a command plus its raw payload bytes.
///
/// The payload is opaque at this layer; [`Message`](crate::Message)
/// gives it a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    pub command: Command,
    pub payload: Vec<u8>,
}

/// First four bytes of the payload's double-SHA256.
fn checksum(payload: &[u8]) -> [u8; 4] {
    let digest = double_sha256(payload);
    let mut out = [0u8; 4];
    out.copy_from_slice(&digest.as_bytes()[..4]);
    out
}

/// Envelope framing codec for `tokio_util::codec::Framed`.
#[derive(Debug, Default)]
pub struct MessageCodec {
    /// Header of the envelope currently being assembled, if the payload
    /// has not fully arrived yet.
    pending: Option<(Command, usize, [u8; 4])>,
}

impl MessageCodec {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decoder for MessageCodec {
    type Item = Envelope;
    type Error = NetError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Envelope>, NetError> {
        if self.pending.is_none() {
            if src.len() < ENVELOPE_HEADER_SIZE {
                return Ok(None);
            }

            let mut magic = [0u8; 4];
            magic.copy_from_slice(&src[0..4]);
            if magic != NETWORK_MAGIC {
                return Err(NetError::InvalidMagic {
                    expected: NETWORK_MAGIC,
                    found: magic,
                });
            }

            let mut command_field = [0u8; COMMAND_LEN];
            command_field.copy_from_slice(&src[4..16]);
            let command = Command::from_wire(&command_field)?;

            let mut length_bytes = [0u8; 4];
            length_bytes.copy_from_slice(&src[16..20]);
            let length = u32::from_le_bytes(length_bytes) as usize;
            if length > MAX_PAYLOAD_SIZE {
                return Err(NetError::OversizedPayload {
                    size: length,
                    max: MAX_PAYLOAD_SIZE,
                });
            }

            let mut expected_checksum = [0u8; 4];
            expected_checksum.copy_from_slice(&src[20..24]);

            self.pending = Some((command, length, expected_checksum));
        }

        let Some((command, length, expected_checksum)) = self.pending else {
            return Ok(None);
        };

        if src.len() < ENVELOPE_HEADER_SIZE + length {
            src.reserve(ENVELOPE_HEADER_SIZE + length - src.len());
            return Ok(None);
        }

        src.advance(ENVELOPE_HEADER_SIZE);
        let payload = src.split_to(length).to_vec();
        self.pending = None;

        let found = checksum(&payload);
        if found != expected_checksum {
            tracing::warn!(command = command.name(), "envelope checksum mismatch");
            return Err(NetError::ChecksumMismatch {
                expected: expected_checksum,
                found,
            });
        }

        Ok(Some(Envelope { command, payload }))
    }
}

impl Encoder<Envelope> for MessageCodec {
    type Error = NetError;

    fn encode(&mut self, envelope: Envelope, dst: &mut BytesMut) -> Result<(), NetError> {
        let length = envelope.payload.len();
        if length > MAX_PAYLOAD_SIZE {
            return Err(NetError::OversizedPayload {
                size: length,
                max: MAX_PAYLOAD_SIZE,
            });
        }

        dst.reserve(ENVELOPE_HEADER_SIZE + length);
        dst.put_slice(&NETWORK_MAGIC);
        dst.put_slice(&envelope.command.to_wire());
        dst.put_u32_le(length as u32);
        dst.put_slice(&checksum(&envelope.payload));
        dst.put_slice(&envelope.payload);

        Ok(())
    }
}
