use oscsend_core::{Framing, encode_tokens};

fn encode_compat(address: &str, tokens: &[&str]) -> Vec<u8> {
    encode_tokens(address, tokens, Framing::Compat).expect("encode")
}

#[test]
fn golden_empty_args() {
    let bytes = encode_compat("/test", &[]);
    assert_eq!(bytes, b"/test\x00\x00\x00,\x00\x00\x00");
}

#[test]
fn golden_single_float() {
    let bytes = encode_compat("/vol", &["0.5"]);
    let mut expected: Vec<u8> = Vec::new();
    expected.extend_from_slice(b"/vol"); // aligned, no terminator in compat
    expected.extend_from_slice(b",f\x00\x00");
    expected.extend_from_slice(&[0x3F, 0x00, 0x00, 0x00]);
    assert_eq!(bytes, expected);
}

#[test]
fn golden_single_string() {
    let bytes = encode_compat("/say", &["hello"]);
    let mut expected: Vec<u8> = Vec::new();
    expected.extend_from_slice(b"/say");
    expected.extend_from_slice(b",s\x00\x00");
    expected.extend_from_slice(b"hello\x00\x00\x00");
    assert_eq!(bytes, expected);
}

#[test]
fn golden_mixed_args() {
    let bytes = encode_compat("/mix", &["-1.5", "bar"]);
    let mut expected: Vec<u8> = Vec::new();
    expected.extend_from_slice(b"/mix");
    expected.extend_from_slice(b",fs\x00");
    expected.extend_from_slice(&(-1.5f32).to_be_bytes());
    expected.extend_from_slice(b"bar\x00");
    assert_eq!(bytes, expected);
}

#[test]
fn golden_strict_terminates_aligned_segments() {
    let bytes = encode_tokens("/vol", &["0.5"], Framing::Strict).expect("encode");
    let mut expected: Vec<u8> = Vec::new();
    expected.extend_from_slice(b"/vol\x00\x00\x00\x00");
    expected.extend_from_slice(b",f\x00\x00");
    expected.extend_from_slice(&[0x3F, 0x00, 0x00, 0x00]);
    assert_eq!(bytes, expected);
}

#[test]
fn segments_stay_aligned_for_unaligned_addresses() {
    for address in ["/a", "/ab", "/abc", "/abcde"] {
        let bytes = encode_compat(address, &[]);
        assert_eq!(bytes.len() % 4, 0, "address {address}");
        assert!(bytes.starts_with(address.as_bytes()), "address {address}");
    }
}
