#![warn(clippy::pedantic)]

//! Domain types of the node, each a plain data aggregate that declares
//! its wire layout once through `utx-wire`'s [`Transcodable`] contract.
//!
//! The two representative entities here exercise every field shape the
//! core supports: [`VersionMessage`] covers fixed integers, nested
//! address records, a variable-length string, and a scope-conditional
//! flag; [`BlockHeader`] covers fixed digests and a variable-length
//! solution blob.
//!
//! [`Transcodable`]: utx_wire::Transcodable

pub mod address;
pub mod hash;
pub mod hashing;
pub mod header;
pub mod version;

pub use address::NetAddress;
pub use hash::Hash256;
pub use hashing::{HasherPool, double_sha256};
pub use header::BlockHeader;
pub use version::VersionMessage;
