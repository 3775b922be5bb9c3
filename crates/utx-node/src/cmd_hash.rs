//! Implementation of `utx hash`.
//!
//! Decodes a hex-encoded block header and prints its block id — the
//! double-SHA256 of the header's hash-scope serialization.
use anyhow::{Context, Result, bail};
use utx_types::BlockHeader;
use utx_wire::{Scope, decode_from_slice};

use crate::HashArgs;

pub fn run(args: &HashArgs) -> Result<()> {
    let bytes = hex::decode(args.hex.trim()).context("argument is not valid hex")?;

    let (header, consumed) = decode_from_slice::<BlockHeader>(&bytes, Scope::NETWORK)
        .context("failed to decode block header")?;
    if consumed != bytes.len() {
        bail!("{} trailing bytes after the header", bytes.len() - consumed);
    }

    println!("{}", header.id().context("failed to hash header")?);
    Ok(())
}
