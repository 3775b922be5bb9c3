#![no_main]

use libfuzzer_sys::fuzz_target;
use utx_types::VersionMessage;
use utx_wire::{decode_from_slice, Scope};

// Fuzz target: VersionMessage decoding with arbitrary bytes.
//
// Catches bugs in:
// - Nested address record reads
// - User agent length and UTF-8 validation
// - The scope-conditional relay flag
fuzz_target!(|data: &[u8]| {
    let _ = decode_from_slice::<VersionMessage>(data, Scope::NETWORK);
    let _ = decode_from_slice::<VersionMessage>(data, Scope::STORAGE);
});
