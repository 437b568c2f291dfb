//! Concrete end-to-end scenarios covering the chain's documented behaviors.
use kat_chain::{Chain, ChainError, Query};
use rstest::rstest;

#[rstest]
#[case("kat", "kat", 3)]
#[case("", "", 0)]
#[case("hello world", "hello world", 11)]
fn append_then_to_string(#[case] input: &str, #[case] expected: &str, #[case] len: usize) {
    let mut chain = Chain::new();
    chain.append_str(input).unwrap();
    assert_eq!(&*chain.to_string_lossy(), expected);
    assert_eq!(chain.len(), len);
}

#[test]
fn index_of_substring_in_hello() {
    let mut chain = Chain::new();
    chain.append_str("hello").unwrap();
    assert_eq!(chain.index_of_str("ll", 0), Some(2));
}

#[test]
fn utf8_decode_of_raw_bytes() {
    let chain = Chain::wrap(vec![0xE4, 0xB8, 0xAD]);
    assert_eq!(&*chain.to_string_lossy(), "中");
}

#[rstest]
#[case("-12345", 10, -12345)]
#[case("-12345", 37, 0)]
fn signed_integer_parse_with_radix(#[case] input: &str, #[case] radix: u32, #[case] expected: i32) {
    let mut chain = Chain::new();
    chain.append_str(input).unwrap();
    assert_eq!(chain.to_int_radix(0, radix), expected);
}

#[test]
fn query_assembly_percent_encodes_space() {
    let mut query = Query::new();
    query.set("k").unwrap();
    query.add_str("a b").unwrap();
    query.set("n").unwrap();
    query.add_str("5").unwrap();
    assert_eq!(query.to_url(), "?k=a+b&n=5");
}

#[test]
fn query_decode_recovers_map() {
    let query = Query::wrap(b"?a=1&b=c+d".to_vec());
    let map = query.to_map();
    assert_eq!(map.get("a").map(String::as_str), Some("1"));
    assert_eq!(map.get("b").map(String::as_str), Some("c d"));
}

#[test]
fn double_parse_with_exponent() {
    let mut chain = Chain::new();
    chain.append_str("1.5e2").unwrap();
    assert!((chain.to_double(0.0) - 150.0).abs() < f64::EPSILON);
}

#[test]
fn lone_high_surrogate_becomes_replacement_char() {
    let mut chain = Chain::new();
    chain.append_utf16_unit(0xD83D).unwrap();
    assert_eq!(&*chain.to_string_lossy(), "?");
}

#[test]
fn surrogate_pair_emits_four_byte_astral_sequence() {
    let mut chain = Chain::new();
    chain.append_utf16(&[0xD83D, 0xDE00]).unwrap();
    assert_eq!(chain.as_bytes(), &[0xF0, 0x9F, 0x98, 0x80]);
}

#[test]
fn fixed_chain_rejects_concat() {
    let mut chain = Chain::fixed(b"x".to_vec());
    assert_eq!(chain.append_char('y'), Err(ChainError::illegal_state(1)));
}
