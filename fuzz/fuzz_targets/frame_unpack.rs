#![no_main]
use libfuzzer_sys::fuzz_target;

use lifx_proto::Message;
use lifx_proto::RawMessage;
use lifx_proto::HEADER_SIZE;

// Arbitrary datagrams must never panic the decoder.
fuzz_target!(|data: &[u8]| {
    match RawMessage::unpack(data) {
        Ok(raw) => {
            assert!(data.len() >= HEADER_SIZE);
            assert_eq!(raw.payload.len(), data.len() - HEADER_SIZE);
            let _ = Message::from_raw(&raw);
        }
        Err(_) => assert!(data.len() < HEADER_SIZE),
    }
});
