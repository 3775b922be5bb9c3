//! Implementation of `utx inspect`.
//!
//! Decodes the given hex string as a network-scope block header and
//! prints each field. With `--json`, emits a single JSON object instead.
//!
//! # Output format
//!
//! ```text
//! version:         4
//! parent hash:     0101…0101
//! merkle root:     0202…0202
//! commitment root: 0303…0303
//! time:            1756000000
//! bits:            0x1d00ffff
//! nonce:           0404…0404
//! solution:        100 bytes
//! block id:        9f2c…71aa
//! ```
use anyhow::{Context, Result, bail};
use utx_types::BlockHeader;
use utx_wire::{Scope, decode_from_slice};

use crate::InspectArgs;

pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = hex::decode(args.hex.trim()).context("argument is not valid hex")?;

    let (header, consumed) = decode_from_slice::<BlockHeader>(&bytes, Scope::NETWORK)
        .context("failed to decode block header")?;
    if consumed != bytes.len() {
        bail!("{} trailing bytes after the header", bytes.len() - consumed);
    }

    let id = header.id().context("failed to hash header")?;

    if args.json {
        let value = serde_json::json!({
            "version": header.version,
            "parent_hash": header.parent_hash.to_string(),
            "merkle_root": header.merkle_root.to_string(),
            "commitment_root": header.commitment_root.to_string(),
            "time": header.time,
            "bits": header.bits,
            "nonce": header.nonce.to_string(),
            "solution_len": header.solution.len(),
            "block_id": id.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("version:         {}", header.version);
    println!("parent hash:     {}", header.parent_hash);
    println!("merkle root:     {}", header.merkle_root);
    println!("commitment root: {}", header.commitment_root);
    println!("time:            {}", header.time);
    println!("bits:            {:#010x}", header.bits);
    println!("nonce:           {}", header.nonce);
    println!("solution:        {} bytes", header.solution.len());
    println!("block id:        {id}");

    Ok(())
}
