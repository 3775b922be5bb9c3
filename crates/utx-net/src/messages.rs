use utx_types::VersionMessage;
use utx_wire::{DataStream, Scope, Transcodable};

use crate::envelope::{Command, Envelope};
use crate::error::NetError;

/// The typed message set of the protocol.
///
/// Payloads transcode through `utx-wire` under `Scope::NETWORK`; the
/// envelope layer below carries them as opaque bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// Handshake opener carrying the sender's identity and chain state.
    Version(VersionMessage),
    /// Handshake acknowledgement; empty payload.
    Verack,
    /// Keepalive probe with an echo nonce.
    Ping(u64),
    /// Keepalive reply echoing the probe nonce.
    Pong(u64),
}

impl Message {
    /// The envelope command this message travels under.
    pub fn command(&self) -> Command {
        match self {
            Self::Version(_) => Command::Version,
            Self::Verack => Command::Verack,
            Self::Ping(_) => Command::Ping,
            Self::Pong(_) => Command::Pong,
        }
    }

    /// Serialize into an envelope ready for the wire.
    ///
    /// # Errors
    ///
    /// [`NetError::Wire`] if payload serialization fails.
    pub fn to_envelope(&self) -> Result<Envelope, NetError> {
        let mut stream = DataStream::new(Scope::NETWORK);
        match self.clone() {
            Self::Version(mut msg) => msg.serialize(&mut stream)?,
            Self::Verack => {}
            Self::Ping(mut nonce) | Self::Pong(mut nonce) => nonce.serialize(&mut stream)?,
        }
        Ok(Envelope {
            command: self.command(),
            payload: stream.into_bytes(),
        })
    }

    /// Decode a received envelope into a typed message.
    ///
    /// The payload must be consumed exactly; leftover bytes are a
    /// protocol violation.
    ///
    /// # Errors
    ///
    /// [`NetError::Wire`] on payload transcoding failure, or
    /// [`NetError::TrailingBytes`] if the payload over-delivers.
    pub fn from_envelope(envelope: &Envelope) -> Result<Self, NetError> {
        let mut stream = DataStream::from_bytes(Scope::NETWORK, envelope.payload.clone());
        let message = match envelope.command {
            Command::Version => {
                let mut msg = VersionMessage::default();
                msg.deserialize(&mut stream)?;
                Self::Version(msg)
            }
            Command::Verack => Self::Verack,
            Command::Ping => {
                let mut nonce = 0u64;
                nonce.deserialize(&mut stream)?;
                Self::Ping(nonce)
            }
            Command::Pong => {
                let mut nonce = 0u64;
                nonce.deserialize(&mut stream)?;
                Self::Pong(nonce)
            }
        };

        if !stream.is_exhausted() {
            return Err(NetError::TrailingBytes {
                extra: stream.remaining(),
            });
        }

        Ok(message)
    }
}
