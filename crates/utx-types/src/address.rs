use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use utx_wire::{Transcodable, Transcoder, WireError};

/// A peer network address record as carried inside handshake messages.
///
/// Wire layout (26 bytes):
///
/// ```text
/// ┌────────┬──────────┬────────────────────────────────┐
/// │ Offset │ Size     │ Field                          │
/// ├────────┼──────────┼────────────────────────────────┤
/// │ 0      │ 8 bytes  │ services bitfield (u64 LE)     │
/// │ 8      │ 16 bytes │ IP (IPv6, v4 as v4-mapped)     │
/// │ 24     │ 2 bytes  │ port (u16 LE)                  │
/// └────────┴──────────┴────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetAddress {
    /// Service bits the peer advertises.
    pub services: u64,

    /// IPv6 address bytes; IPv4 addresses are stored v4-mapped.
    pub ip: [u8; 16],

    /// TCP port.
    pub port: u16,
}

impl NetAddress {
    /// Serialized width: 8 + 16 + 2.
    pub const ENCODED_LEN: usize = 26;

    /// Build a record from a socket address, mapping IPv4 into IPv6.
    pub fn from_socket_addr(services: u64, addr: SocketAddr) -> Self {
        let ip = match addr.ip() {
            IpAddr::V4(v4) => v4.to_ipv6_mapped().octets(),
            IpAddr::V6(v6) => v6.octets(),
        };
        Self {
            services,
            ip,
            port: addr.port(),
        }
    }

    /// Recover the socket address, un-mapping v4-mapped IPv6.
    pub fn socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.ip);
        match v6.to_ipv4_mapped() {
            Some(v4) => SocketAddr::new(IpAddr::V4(v4), self.port),
            None => SocketAddr::new(IpAddr::V6(v6), self.port),
        }
    }
}

impl Transcodable for NetAddress {
    fn transcode(&mut self, t: &mut Transcoder<'_>) -> Result<(), WireError> {
        t.bind(&mut self.services)?;
        t.bind(&mut self.ip)?;
        t.bind(&mut self.port)?;
        Ok(())
    }
}
