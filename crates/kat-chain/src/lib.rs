//! Byte-oriented chain buffer and UTF-8-aware text core for the KAT
//! serialization framework.
//!
//! A [`Chain`] is a growable byte buffer used uniformly as parse token,
//! emission buffer, and decoded value by the higher layers of a KAT-style
//! encoder/decoder: every parser token, every encoded output, every
//! URL/Query assembly, and every primitive-to-text conversion flows through
//! one. This crate implements that core and nothing above it — the
//! reflection/metadata layer that maps object fields to codecs, the
//! document-tree builders, and the format-specific parser state machines
//! are external collaborators that consume a [`Chain`] only through the
//! operations documented here.
//!
//! # Layout
//!
//! - [`chain`] — the chain buffer itself: growth, UTF-8 encode/decode,
//!   search, hashing, numeric projections and emission, sink export.
//! - [`reader`] — a single-pass, closable cursor over a chain's bytes.
//! - [`query`] — a `Chain` extension that percent-encodes URL key/value
//!   pairs and decodes them back to a map.
//! - [`bucket`] — the pluggable buffer-pool capability chains use to
//!   amortize growth.
//! - [`convert`] — numeric/boolean/char parsing and formatting over raw
//!   byte ranges, used internally by `Chain` and exposed for standalone use.
//! - [`binary`] — hex digit/byte formatting and the Latin-1 fast-path view.
//! - [`error`] — the crate's typed failure modes.
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod binary;
pub mod bucket;
pub mod chain;
pub mod convert;
pub mod error;
pub mod query;
pub mod reader;

pub use bucket::{Bucket, PoolConfig, VecPool};
pub use chain::{Chain, Role};
pub use error::ChainError;
pub use query::Query;
pub use reader::Reader;
