#![no_main]

use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use tokio_util::codec::Decoder;
use utx_net::MessageCodec;

// Fuzz target: envelope framing with arbitrary bytes.
//
// Catches bugs in:
// - Magic and command field validation
// - Payload length bounding
// - Checksum verification
// - Split-delivery buffering state
fuzz_target!(|data: &[u8]| {
    let mut codec = MessageCodec::new();
    let mut buf = BytesMut::from(data);
    while let Ok(Some(_)) = codec.decode(&mut buf) {}
});
