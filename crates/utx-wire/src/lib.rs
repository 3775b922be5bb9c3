#![warn(clippy::pedantic)]

//! The unified transcoding core.
//!
//! Every on-wire and on-disk structure in the node is moved through one
//! declarative traversal: a type declares its fields once (see
//! [`Transcodable`]) and that single routine serves three passes —
//! measuring, writing, and reading — selected by an [`Action`]. The byte
//! buffer behind each pass is a [`DataStream`] tagged with a [`Scope`]
//! that says what the bytes are for (network wire, persistent storage,
//! or a hash preimage), which lets a field list include or exclude
//! fields per purpose without scattering branches across the codebase.

pub mod action;
pub mod compact;
pub mod error;
pub mod scope;
pub mod stream;
pub mod transcode;

pub use action::Action;
pub use error::WireError;
pub use scope::Scope;
pub use stream::DataStream;
pub use transcode::{Transcodable, Transcoder, decode_from_slice, encode_to_vec};
