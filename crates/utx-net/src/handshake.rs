//! Version handshake state machine.
//!
//! The handshake protocol:
//! 1. Both sides send a `version` message after connecting.
//! 2. On receiving a valid `version`, a side replies with `verack`.
//! 3. The connection is established once a side has both sent and
//!    received `verack`.
//!
//! The machine here is transport-agnostic: the connection loop feeds it
//! decoded messages and sends whatever replies it returns.

use std::time::{SystemTime, UNIX_EPOCH};

use utx_types::version::{MIN_PROTOCOL_VERSION, PROTOCOL_VERSION};
use utx_types::{NetAddress, VersionMessage};

use crate::error::NetError;
use crate::messages::Message;

/// Local parameters of a handshake.
#[derive(Clone, Debug)]
pub struct HandshakeConfig {
    /// Protocol version we advertise.
    pub protocol_version: i32,
    /// Oldest peer version we accept.
    pub min_peer_version: i32,
    /// Service bits we advertise.
    pub services: u64,
    /// Client identification string.
    pub user_agent: String,
    /// Our best chain height.
    pub start_height: i32,
    /// Per-connection random nonce, used to detect self-connections.
    pub nonce: u64,
    /// Whether we want transaction relay from this peer.
    pub relay: bool,
}

impl HandshakeConfig {
    pub fn new(user_agent: impl Into<String>, start_height: i32, nonce: u64) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            min_peer_version: MIN_PROTOCOL_VERSION,
            services: 1,
            user_agent: user_agent.into(),
            start_height,
            nonce,
            relay: true,
        }
    }
}

/// What we learned about the peer from its `version` message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeerInfo {
    pub version: i32,
    pub services: u64,
    pub user_agent: String,
    pub start_height: i32,
    pub relay: bool,
}

impl From<VersionMessage> for PeerInfo {
    fn from(msg: VersionMessage) -> Self {
        Self {
            version: msg.version,
            services: msg.services,
            user_agent: msg.user_agent,
            start_height: msg.start_height,
            relay: msg.relay,
        }
    }
}

/// Handshake progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandshakeState {
    /// Nothing sent yet.
    Initial,
    /// Our `version` is out, peer's has not arrived.
    VersionSent,
    /// Peer's `version` validated and our `verack` sent; waiting for
    /// the peer's `verack`.
    AwaitingAck(PeerInfo),
    /// Both sides acknowledged.
    Complete(PeerInfo),
}

impl HandshakeState {
    fn name(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::VersionSent => "version-sent",
            Self::AwaitingAck(_) => "awaiting-ack",
            Self::Complete(_) => "complete",
        }
    }
}

/// Driver for one connection's handshake.
pub struct Handshake {
    config: HandshakeConfig,
    state: HandshakeState,
    version_received: bool,
    verack_received: bool,
}

impl Handshake {
    pub fn new(config: HandshakeConfig) -> Self {
        Self {
            config,
            state: HandshakeState::Initial,
            version_received: false,
            verack_received: false,
        }
    }

    pub fn state(&self) -> &HandshakeState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, HandshakeState::Complete(_))
    }

    /// The peer's details once its `version` has been accepted.
    pub fn peer(&self) -> Option<&PeerInfo> {
        match &self.state {
            HandshakeState::AwaitingAck(peer) | HandshakeState::Complete(peer) => Some(peer),
            _ => None,
        }
    }

    /// Build our opening `version` message and advance to `VersionSent`.
    pub fn start(&mut self, addr_recv: NetAddress, addr_from: NetAddress) -> Message {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        let msg = VersionMessage {
            version: self.config.protocol_version,
            services: self.config.services,
            timestamp,
            addr_recv,
            addr_from,
            nonce: self.config.nonce,
            user_agent: self.config.user_agent.clone(),
            start_height: self.config.start_height,
            relay: self.config.relay,
        };

        if matches!(self.state, HandshakeState::Initial) {
            self.state = HandshakeState::VersionSent;
        }
        tracing::debug!(version = msg.version, "handshake version sent");
        Message::Version(msg)
    }

    /// Validate a peer `version` message against local policy.
    ///
    /// # Errors
    ///
    /// [`NetError::IncompatibleVersion`] if the peer is too old, or
    /// [`NetError::SelfConnection`] if the nonce is our own.
    pub fn validate_version(&self, msg: &VersionMessage) -> Result<(), NetError> {
        if msg.version < self.config.min_peer_version {
            return Err(NetError::IncompatibleVersion {
                peer: msg.version,
                min: self.config.min_peer_version,
            });
        }
        if msg.nonce == self.config.nonce {
            return Err(NetError::SelfConnection);
        }
        Ok(())
    }

    /// Handle the peer's `version`; returns the `verack` to send back.
    ///
    /// # Errors
    ///
    /// Validation failures as in [`validate_version`](Self::validate_version),
    /// or [`NetError::UnexpectedMessage`] on a duplicate `version`.
    pub fn on_version(&mut self, msg: VersionMessage) -> Result<Message, NetError> {
        if self.version_received {
            return Err(NetError::UnexpectedMessage {
                found: "version",
                state: self.state.name(),
            });
        }
        self.validate_version(&msg)?;
        self.version_received = true;

        let peer = PeerInfo::from(msg);
        tracing::debug!(
            peer_version = peer.version,
            user_agent = %peer.user_agent,
            "handshake version accepted"
        );

        self.state = if self.verack_received {
            HandshakeState::Complete(peer)
        } else {
            HandshakeState::AwaitingAck(peer)
        };
        Ok(Message::Verack)
    }

    /// Handle the peer's `verack`.
    ///
    /// # Errors
    ///
    /// [`NetError::UnexpectedMessage`] before our `version` went out or
    /// on a duplicate `verack`.
    pub fn on_verack(&mut self) -> Result<(), NetError> {
        if matches!(self.state, HandshakeState::Initial) || self.verack_received {
            return Err(NetError::UnexpectedMessage {
                found: "verack",
                state: self.state.name(),
            });
        }
        self.verack_received = true;

        if let HandshakeState::AwaitingAck(peer) = &self.state {
            let peer = peer.clone();
            tracing::debug!(user_agent = %peer.user_agent, "handshake complete");
            self.state = HandshakeState::Complete(peer);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer_version(version: i32, nonce: u64) -> VersionMessage {
        VersionMessage {
            version,
            services: 1,
            timestamp: 1_756_000_000,
            addr_recv: NetAddress::default(),
            addr_from: NetAddress::default(),
            nonce,
            user_agent: "/peer:1.0/".to_string(),
            start_height: 10,
            relay: true,
        }
    }

    fn handshake() -> Handshake {
        Handshake::new(HandshakeConfig::new("/utx:0.1.0/", 0, 0xAAAA))
    }

    #[test]
    fn happy_path_version_then_verack() {
        let mut hs = handshake();
        let opener = hs.start(NetAddress::default(), NetAddress::default());
        assert!(matches!(opener, Message::Version(_)));
        assert_eq!(hs.state(), &HandshakeState::VersionSent);

        let reply = hs.on_version(peer_version(PROTOCOL_VERSION, 0xBBBB)).unwrap();
        assert_eq!(reply, Message::Verack);
        assert!(!hs.is_complete());

        hs.on_verack().unwrap();
        assert!(hs.is_complete());
        assert_eq!(hs.peer().unwrap().user_agent, "/peer:1.0/");
    }

    #[test]
    fn verack_may_arrive_before_version() {
        let mut hs = handshake();
        hs.start(NetAddress::default(), NetAddress::default());
        hs.on_verack().unwrap();
        assert!(!hs.is_complete());

        hs.on_version(peer_version(PROTOCOL_VERSION, 0xBBBB)).unwrap();
        assert!(hs.is_complete());
    }

    #[test]
    fn old_peer_rejected() {
        let mut hs = handshake();
        hs.start(NetAddress::default(), NetAddress::default());
        let err = hs
            .on_version(peer_version(MIN_PROTOCOL_VERSION - 1, 0xBBBB))
            .unwrap_err();
        assert!(matches!(err, NetError::IncompatibleVersion { .. }));
    }

    #[test]
    fn self_connection_rejected() {
        let mut hs = handshake();
        hs.start(NetAddress::default(), NetAddress::default());
        let err = hs.on_version(peer_version(PROTOCOL_VERSION, 0xAAAA)).unwrap_err();
        assert!(matches!(err, NetError::SelfConnection));
    }

    #[test]
    fn duplicate_version_rejected() {
        let mut hs = handshake();
        hs.start(NetAddress::default(), NetAddress::default());
        hs.on_version(peer_version(PROTOCOL_VERSION, 0xBBBB)).unwrap();
        let err = hs.on_version(peer_version(PROTOCOL_VERSION, 0xBBBB)).unwrap_err();
        assert!(matches!(err, NetError::UnexpectedMessage { found: "version", .. }));
    }

    #[test]
    fn early_verack_rejected() {
        let mut hs = handshake();
        let err = hs.on_verack().unwrap_err();
        assert!(matches!(err, NetError::UnexpectedMessage { found: "verack", .. }));
    }
}
