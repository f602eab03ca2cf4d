#![no_main]
use libfuzzer_sys::fuzz_target;

use lifx_proto::BuildOptions;
use lifx_proto::Message;
use lifx_proto::RawMessage;
use lifx_proto::Service;

fn assert_message_eq(left: &Message, right: &Message) {
    match (left, right) {
        // Unknown(1) reads back as Udp
        (
            Message::StateService { service, port },
            Message::StateService {
                service: service2,
                port: port2,
            },
        ) => {
            assert_eq!(u8::from(*service), u8::from(*service2));
            assert_eq!(port, port2);
            if let Service::Unknown(_) = service2 {
                assert_ne!(u8::from(*service2), 1);
            }
        }
        (a, b) => assert_eq!(a, b),
    }
}

fuzz_target!(|input: (Message, u64, u8, u32)| {
    let (data, target, sequence, source) = input;
    let opts = BuildOptions {
        target: Some(target),
        sequence,
        source,
        ..Default::default()
    };

    let orig = data.clone();
    let raw = RawMessage::build(&opts, data).unwrap();
    let bytes = raw.pack().unwrap();
    assert_eq!(bytes.len(), raw.frame.size as usize);

    let unpacked = RawMessage::unpack(&bytes).unwrap();
    assert_eq!(unpacked, raw);
    assert_eq!(unpacked.frame_addr.target, target);
    assert_eq!(unpacked.frame_addr.sequence, sequence);
    assert_eq!(unpacked.frame.source, source);

    let parsed_msg = Message::from_raw(&unpacked).unwrap();
    assert_message_eq(&orig, &parsed_msg);
});
