#![no_main]
use arbitrary::Arbitrary;
use kat_chain::Chain;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    units: Vec<u16>,
}

/// Feeds arbitrary UTF-16 code unit sequences (including lone and
/// mismatched surrogate halves) through `Chain::append_utf16` and checks
/// that it never panics and always produces valid UTF-8.
fn run(input: Input) {
    let mut chain = Chain::new();
    if chain.append_utf16(&input.units).is_err() {
        return;
    }
    assert!(core::str::from_utf8(chain.as_bytes()).is_ok());
    assert!(chain.len() <= input.units.len() * 4);
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);
    if let Ok(input) = Input::arbitrary(&mut u) {
        run(input);
    }
});
