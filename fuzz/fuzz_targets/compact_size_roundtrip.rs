#![no_main]

use libfuzzer_sys::fuzz_target;
use utx_wire::compact::{
    compact_size_len, read_compact_size, write_compact_size, MAX_SERIALIZED_COMPACT_SIZE,
};
use utx_wire::{DataStream, Scope};

// Fuzz target: CompactSize encode->decode roundtrip.
//
// Takes 8 bytes of fuzz input, interprets as a u64 clamped to the
// decodable range, encodes it, then decodes it and asserts the value,
// width, and exhaustion all match.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let value =
        u64::from_le_bytes(data[..8].try_into().unwrap()) % (MAX_SERIALIZED_COMPACT_SIZE + 1);

    let mut stream = DataStream::new(Scope::NETWORK);
    write_compact_size(&mut stream, value);
    assert_eq!(stream.size(), compact_size_len(value));

    let decoded = read_compact_size(&mut stream).unwrap();
    assert_eq!(decoded, value);
    assert!(stream.is_exhausted());
});
