#![no_main]

use libfuzzer_sys::fuzz_target;
use utx_wire::compact::read_compact_size;
use utx_wire::{DataStream, Scope};

// Fuzz target: CompactSize decoding with arbitrary bytes.
//
// Catches bugs in:
// - Marker byte dispatch
// - Canonical-form enforcement
// - Maximum-value bounding
// - Truncated multi-byte forms
fuzz_target!(|data: &[u8]| {
    let mut stream = DataStream::from_bytes(Scope::NETWORK, data);
    let _ = read_compact_size(&mut stream);
});
