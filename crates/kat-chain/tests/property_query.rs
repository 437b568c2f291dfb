//! Property tests over `Query`'s percent-encoding round trip.
use kat_chain::Query;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Every byte a `Query` appends via `add_str` is recoverable from
/// `to_map` after a `set`/`add_str` pair, for any UTF-8 key/value that
/// doesn't itself contain the `=`/`&` separators (which would make the
/// pair ambiguous to decode, same as any `application/x-www-form-urlencoded`
/// producer).
#[quickcheck]
fn set_add_round_trips_through_to_map(key: String, value: String) -> TestResult {
    if key.is_empty() || key.contains(['=', '&']) || value.contains(['=', '&']) {
        return TestResult::discard();
    }
    let mut query = Query::new();
    query.set(&key).unwrap();
    query.add_str(&value).unwrap();

    let map = query.to_map();
    TestResult::from_bool(map.get(&key).map(String::as_str) == Some(value.as_str()))
}

/// The assembled query string is always valid UTF-8, for any sequence of
/// key/value pairs.
#[quickcheck]
fn assembled_query_is_valid_utf8(pairs: Vec<(String, String)>) -> bool {
    let mut query = Query::new();
    for (k, v) in &pairs {
        if k.is_empty() {
            continue;
        }
        query.set(k).unwrap();
        query.add_str(v).unwrap();
    }
    core::str::from_utf8(query.as_bytes()).is_ok()
}
