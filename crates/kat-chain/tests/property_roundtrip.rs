//! Property tests over the chain buffer's UTF-8 encoder and growth policy.
use kat_chain::Chain;
use quickcheck_macros::quickcheck;

/// Any Rust `char` appended via `append_char` decodes back to the same
/// `char` through `to_string_lossy`, since Rust's `char` is always a valid
/// scalar value and can never hit the lone-surrogate `'?'` path.
#[quickcheck]
fn append_char_round_trips(chars: Vec<char>) -> bool {
    let mut chain = Chain::new();
    for &c in &chars {
        chain.append_char(c).unwrap();
    }
    let expected: String = chars.into_iter().collect();
    &*chain.to_string_lossy() == expected
}

/// `append_str` followed by `to_string_lossy` returns exactly the input
/// (no information lost going through bytes, since the input was already
/// valid UTF-8).
#[quickcheck]
fn append_str_round_trips(text: String) -> bool {
    let mut chain = Chain::new();
    chain.append_str(&text).unwrap();
    &*chain.to_string_lossy() == text
}

/// Repeated single-byte appends always leave the chain's logical content
/// equal to the sequence of bytes appended, regardless of how many
/// internal reallocations that required.
#[quickcheck]
fn byte_append_preserves_content(bytes: Vec<u8>) -> bool {
    let mut chain = Chain::new();
    for &b in &bytes {
        chain.append_byte(b).unwrap();
    }
    chain.as_bytes() == bytes.as_slice()
}

/// The chain's capacity never falls below its logical length, no matter
/// the growth history.
#[quickcheck]
fn capacity_never_trails_length(bytes: Vec<u8>) -> bool {
    let mut chain = Chain::new();
    chain.append_bytes(&bytes).unwrap();
    chain.capacity() >= chain.len()
}

/// A chain's hash is a pure function of its current bytes: two chains
/// built from the same bytes via different append sequences hash equal.
#[quickcheck]
fn hash_depends_only_on_content(a: Vec<u8>, b: Vec<u8>) -> bool {
    let mut whole = Chain::new();
    whole.append_bytes(&a).unwrap();
    whole.append_bytes(&b).unwrap();

    let mut joined = Vec::new();
    joined.extend_from_slice(&a);
    joined.extend_from_slice(&b);
    let other = Chain::wrap(joined);

    whole.hash_code() == other.hash_code()
}
