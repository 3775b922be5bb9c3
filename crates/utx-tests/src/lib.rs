//! Shared fixtures for the integration suites and benches.

use utx_types::{BlockHeader, Hash256, NetAddress, VersionMessage};
use utx_types::version::PROTOCOL_VERSION;

/// A fully-populated block header with a realistic solution size.
pub fn sample_header() -> BlockHeader {
    BlockHeader {
        version: 4,
        parent_hash: Hash256::from_bytes([0x11; 32]),
        merkle_root: Hash256::from_bytes([0x22; 32]),
        commitment_root: Hash256::from_bytes([0x33; 32]),
        time: 1_756_000_000,
        bits: 0x1D00_FFFF,
        nonce: Hash256::from_bytes([0x44; 32]),
        solution: vec![0xAB; 1344],
    }
}

/// A fully-populated handshake version message.
pub fn sample_version() -> VersionMessage {
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
