#![no_main]

use libfuzzer_sys::fuzz_target;
use utx_types::BlockHeader;
use utx_wire::{decode_from_slice, Scope};

// Fuzz target: BlockHeader decoding with arbitrary bytes.
//
// Catches bugs in:
// - Fixed-prefix field reads
// - Solution length validation before allocation
// - Truncation handling at every field boundary
fuzz_target!(|data: &[u8]| {
    let _ = decode_from_slice::<BlockHeader>(data, Scope::NETWORK);
});
