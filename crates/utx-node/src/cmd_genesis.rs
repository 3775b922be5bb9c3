//! Implementation of `utx genesis`.
//!
//! Builds the deterministic genesis header, runs it through the storage
//! path (schema check plus header store) as a self-check, and prints the
//! header's wire hex and block id.
use anyhow::{Context, Result};
use utx_store::{HeaderStore, MemoryStore, check_schema};
use utx_types::{BlockHeader, Hash256};
use utx_wire::{Scope, encode_to_vec};

/// The fixed genesis header of the network.
fn genesis_header() -> BlockHeader {
    BlockHeader {
        version: 4,
        parent_hash: Hash256::ZERO,
        merkle_root: Hash256::ZERO,
        commitment_root: Hash256::ZERO,
        time: 1_756_000_000,
        bits: 0x1F07_FFFF,
        nonce: Hash256::ZERO,
        solution: Vec::new(),
    }
}

pub fn run() -> Result<()> {
    let mut headers = HeaderStore::new(MemoryStore::new());
    let schema = check_schema(headers.backend_mut()).context("schema check failed")?;
    tracing::debug!(%schema, "storage schema verified");

    let header = genesis_header();
    let id = headers
        .put_header(&header)
        .context("failed to store genesis header")?;
    headers.put_height_index(0, &id);

    let wire = encode_to_vec(&mut header.clone(), Scope::NETWORK)
        .context("failed to serialize genesis header")?;

    println!("genesis header: {}", hex::encode(wire));
    println!("block id:       {id}");
    Ok(())
}
