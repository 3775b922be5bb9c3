#![warn(clippy::pedantic)]

//! The storage collaborator boundary.
//!
//! The node persists records by serializing them under `Scope::STORAGE`
//! and writing the bytes into an embedded ordered key-value store. The
//! store itself is external to this workspace; [`KvStore`] is the
//! boundary it must satisfy, and [`MemoryStore`] is the in-memory
//! implementation used by tests and tooling.
//!
//! A schema-version record guards format compatibility at startup:
//! upgrades are monotonic, and opening a database written by a newer
//! schema than this binary supports is fatal.

pub mod error;
pub mod headers;
pub mod keys;
pub mod kv;
pub mod schema;

pub use error::StoreError;
pub use headers::HeaderStore;
pub use kv::{KvStore, MemoryStore};
pub use schema::{CURRENT_SCHEMA, SchemaVersion, check_schema};
