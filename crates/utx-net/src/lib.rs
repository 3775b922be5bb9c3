#![warn(clippy::pedantic)]

//! The networking collaborator boundary.
//!
//! This crate owns what travels on a peer connection and in what order:
//! the 24-byte message envelope ([`envelope`]), the typed message set
//! ([`messages`]), and the version handshake state machine
//! ([`handshake`]). The socket accept/connect loops themselves live
//! outside the workspace; they feed raw bytes through the
//! [`MessageCodec`] and hand decoded messages to the handshake.
//!
//! Any [`NetError`] raised while decoding inbound bytes is a protocol
//! violation by the peer (see [`NetError::is_peer_fault`]): the owning
//! connection must be dropped and penalized, never the process crashed.

pub mod envelope;
pub mod error;
pub mod handshake;
pub mod messages;

pub use envelope::{Command, Envelope, MessageCodec, MAX_PAYLOAD_SIZE, NETWORK_MAGIC};
pub use error::NetError;
pub use handshake::{Handshake, HandshakeConfig, HandshakeState, PeerInfo};
pub use messages::Message;
