use utx_wire::{Scope, Transcodable, Transcoder, WireError};

use crate::address::NetAddress;

/// Current protocol version advertised in handshakes.
pub const PROTOCOL_VERSION: i32 = 70_001;

/// Oldest peer protocol version this node will talk to.
pub const MIN_PROTOCOL_VERSION: i32 = 70_000;

/// The handshake `version` message, first thing either side of a new
/// connection sends.
///
/// This is the canonical entity exercising every primitive shape the
/// transcoding core supports: fixed integers, nested address records, a
/// variable-length string, and a scope-conditional boolean.
///
/// Field order on the wire is fixed and matches declaration order below.
/// The `relay` flag participates only when the stream scope contains
/// `NETWORK`: it is connection-local state with no meaning on disk or in
/// a hash preimage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionMessage {
    /// Protocol version the sender speaks.
    pub version: i32,

    /// Service bits the sender advertises.
    pub services: u64,

    /// Sender's unix timestamp in seconds.
    pub timestamp: i64,

    /// The address the sender believes it is talking to.
    pub addr_recv: NetAddress,

    /// The sender's own address.
    pub addr_from: NetAddress,

    /// Random per-connection nonce, used to detect self-connections.
    pub nonce: u64,

    /// Free-form client identification string.
    pub user_agent: String,

    /// Height of the sender's best chain tip.
    pub start_height: i32,

    /// Whether the sender wants transaction relay. Network scope only.
    pub relay: bool,
}

impl Transcodable for VersionMessage {
    fn transcode(&mut self, t: &mut Transcoder<'_>) -> Result<(), WireError> {
        t.bind(&mut self.version)?;
        t.bind(&mut self.services)?;
        t.bind(&mut self.timestamp)?;
        t.bind(&mut self.addr_recv)?;
        t.bind(&mut self.addr_from)?;
        t.bind(&mut self.nonce)?;
        t.bind(&mut self.user_agent)?;
        t.bind(&mut self.start_height)?;
        if t.scope().contains(Scope::NETWORK) {
            t.bind(&mut self.relay)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utx_wire::{DataStream, decode_from_slice, encode_to_vec};

    fn sample() -> VersionMessage {
        VersionMessage {
            version: PROTOCOL_VERSION,
            services: 1,
            timestamp: 1_756_000_000,
            addr_recv: NetAddress::from_socket_addr(1, "203.0.113.5:8333".parse().unwrap()),
            addr_from: NetAddress::from_socket_addr(1, "198.51.100.7:8333".parse().unwrap()),
            nonce: 0x0123_4567_89AB_CDEF,
            user_agent: "/utx:0.1.0/".to_string(),
            start_height: 812_345,
            relay: true,
        }
    }

    #[test]
    fn roundtrip_network_scope() {
        let mut msg = sample();
        let bytes = encode_to_vec(&mut msg, Scope::NETWORK).unwrap();
        let (decoded, consumed) =
            decode_from_slice::<VersionMessage>(&bytes, Scope::NETWORK).unwrap();
        assert_eq!(decoded, msg);
        assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn version_field_is_first_and_little_endian() {
        let mut msg = sample();
        msg.version = 0x0001_1171; // 70001
        let bytes = encode_to_vec(&mut msg, Scope::NETWORK).unwrap();
        assert_eq!(&bytes[0..4], &[0x71, 0x11, 0x01, 0x00]);
    }

    #[test]
    fn relay_flag_absent_outside_network_scope() {
        let mut msg = sample();
        let mut net = DataStream::new(Scope::NETWORK);
        let mut hash = DataStream::new(Scope::HASH);
        let net_size = msg.serialized_size(&mut net).unwrap();
        let hash_size = msg.serialized_size(&mut hash).unwrap();
        assert_eq!(net_size, hash_size + 1);
    }

    #[test]
    fn size_agreement_all_scopes() {
        let mut msg = sample();
        for scope in [Scope::NETWORK, Scope::STORAGE, Scope::HASH] {
            let mut stream = DataStream::new(scope);
            let size = msg.serialized_size(&mut stream).unwrap();
            msg.serialize(&mut stream).unwrap();
            assert_eq!(size, stream.size());
        }
    }
}
