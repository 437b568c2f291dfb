//! The chain buffer: a growable byte container used uniformly as parse
//! token, emission buffer, and decoded value.
//!
//! See the crate-level documentation for how a [`Chain`] sits between the
//! format solvers and the bytes they read and write. This module is the
//! majority of the crate: capacity and growth, UTF-8 encode/decode, search,
//! hashing/equality, numeric projections, numeric/boolean emission, and
//! boundary copy/sink helpers all live here.
//!
//! # UTF-16 code units vs. `char`
//!
//! This crate's text model accepts Java-style 16-bit `char` values,
//! including lone surrogate halves (written out as `'?'`) and
//! surrogate pairs (combined into one astral code point). Rust's `char` is
//! a Unicode *scalar* value and cannot represent a lone surrogate at all, so
//! there is no direct translation of `concat(char)` taking a Rust `char`.
//! Instead, the surrogate-aware encoder here is [`Chain::append_utf16`],
//! which takes `&[u16]` — literal UTF-16 code units, exactly like Java's
//! `char[]`. [`Chain::append_char`] is a convenience wrapper for ordinary
//! Rust `char`/`&str` input; it always takes the "happy path" through the
//! same encoder, because `char::encode_utf16` never produces a lone
//! surrogate.
use alloc::{rc::Rc, string::String, vec::Vec};
use core::{
    cell::{Cell, RefCell},
    cmp::Ordering,
    fmt,
};

use num_bigint::BigInt;

use crate::{
    binary::Latin1Str,
    bucket::Bucket,
    convert::{self, BigDecimalValue, Number},
    error::{ChainError, Result},
};

/// Role tag distinguishing value tokens and name tokens from an otherwise
/// identical chain, without a separate subclass per role.
///
/// `Value` and `Alias` add no storage and (mostly) no semantics beyond this
/// tag; role-specific behavior lives in small free functions (here,
/// private hooks on `Chain`) that read or write the base fields rather
/// than in a subclass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// No role-specific behavior.
    #[default]
    Generic,
    /// A literal payload parse token.
    Value,
    /// A name token. Alias chains automatically strip a single trailing
    /// NUL byte left over from a terminator-delimited read, so a name
    /// token never carries its delimiter into comparisons or hashing.
    Alias,
}

/// A growable byte buffer: parse token, emission buffer, and decoded value
/// all at once.
///
/// See the module documentation for the invariants this type upholds. In
/// short: `count` bytes are logically present out of a buffer whose
/// capacity is always at least `count`; mutation is refused once the chain
/// is [`fixed`](Chain::is_fixed); and the cached hash/string projections are
/// invalidated by every mutator via [`Chain::touch`].
pub struct Chain {
    value: Vec<u8>,
    count: usize,
    hash: Cell<Option<u32>>,
    string_cache: RefCell<Option<Rc<str>>>,
    fixed: bool,
    bucket: Option<Rc<dyn Bucket>>,
    role: Role,
}

impl Chain {
    /// An empty, mutable, role-less chain with no attached bucket.
    #[must_use]
    pub fn new() -> Self {
        Self::with_role(Role::Generic)
    }

    /// An empty, mutable chain tagged with `role`.
    #[must_use]
    pub fn with_role(role: Role) -> Self {
        Self {
            value: Vec::new(),
            count: 0,
            hash: Cell::new(None),
            string_cache: RefCell::new(None),
            fixed: false,
            bucket: None,
            role,
        }
    }

    /// An empty, mutable chain that draws its growth buffers from `bucket`.
    #[must_use]
    pub fn with_bucket(bucket: Rc<dyn Bucket>) -> Self {
        Self {
            bucket: Some(bucket),
            ..Self::new()
        }
    }

    /// Wrap an existing byte array as a chain's initial content.
    #[must_use]
    pub fn wrap(bytes: Vec<u8>) -> Self {
        let count = bytes.len();
        Self {
            value: bytes,
            count,
            ..Self::new()
        }
    }

    /// A permanently-immutable chain over `bytes`: every mutator will
    /// return [`ChainError::IllegalState`].
    #[must_use]
    pub fn fixed(bytes: Vec<u8>) -> Self {
        let mut chain = Self::wrap(bytes);
        chain.fixed = true;
        chain
    }

    /// An independent, mutable copy of `other`'s `[0, count)` bytes. The
    /// copy does not inherit `other`'s fixed flag, bucket, or role.
    #[must_use]
    pub fn copy_of(other: &Self) -> Self {
        Self::wrap(other.as_bytes().to_vec())
    }

    /// Logical length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the chain holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current backing capacity; always `>= len()`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.value.capacity()
    }

    /// Whether the chain is permanently immutable.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// The chain's role tag.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// The logical bytes `[0, count)`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        debug_assert_eq!(self.value.len(), self.count);
        &self.value[..self.count]
    }

    // ---- capacity & growth ------------------------------------------

    fn ensure_mutable(&self) -> Result<()> {
        if self.fixed {
            Err(ChainError::illegal_state(self.count))
        } else {
            Ok(())
        }
    }

    /// Ensure the backing buffer has capacity for at least `min_capacity`
    /// bytes, growing it if necessary.
    ///
    /// With no bucket attached, growth is geometric: the new capacity is
    /// `max(min_capacity, old_capacity + old_capacity / 2)`. With a bucket
    /// attached, growth is delegated to it entirely.
    pub fn grow(&mut self, min_capacity: usize) {
        if self.value.capacity() >= min_capacity {
            return;
        }
        if let Some(bucket) = self.bucket.clone() {
            let old = core::mem::take(&mut self.value);
            self.value = bucket.resize(old, self.count, min_capacity);
        } else {
            let new_capacity =
                core::cmp::max(min_capacity, self.value.capacity() + self.value.capacity() / 2);
            let mut replacement = Vec::with_capacity(new_capacity);
            replacement.extend_from_slice(&self.value[..self.count]);
            self.value = replacement;
        }
        debug_assert!(self.value.capacity() >= min_capacity);
    }

    /// Clear the cached hash and string projection. Called by every
    /// mutator whenever `[0, count)` changes.
    fn touch(&mut self) {
        self.hash.set(None);
        *self.string_cache.get_mut() = None;
    }

    /// `Alias` chains drop a single trailing NUL left over from a
    /// terminator-delimited read, so it never leaks into comparisons,
    /// hashing, or the decoded string.
    fn apply_role_hook(&mut self) {
        if self.role == Role::Alias && self.value.last() == Some(&0) {
            self.value.pop();
            self.count -= 1;
        }
    }

    fn push_byte_unchecked(&mut self, byte: u8) {
        self.grow(self.count + 1);
        self.value.push(byte);
        self.count += 1;
    }

    fn push_bytes_unchecked(&mut self, bytes: &[u8]) {
        self.grow(self.count + bytes.len());
        self.value.extend_from_slice(bytes);
        self.count += bytes.len();
    }

    fn check_bounds(&self, index: usize, length: usize) -> Result<()> {
        if index > self.count || length > self.count - index {
            Err(ChainError::bounds(index, length, self.count))
        } else {
            Ok(())
        }
    }

    // ---- mutators: append -------------------------------------------

    /// Append a single byte.
    pub fn append_byte(&mut self, byte: u8) -> Result<()> {
        self.ensure_mutable()?;
        self.push_byte_unchecked(byte);
        self.touch();
        self.apply_role_hook();
        Ok(())
    }

    /// Append a byte slice.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_mutable()?;
        self.push_bytes_unchecked(bytes);
        self.touch();
        self.apply_role_hook();
        Ok(())
    }

    /// Append another chain's logical bytes.
    pub fn append_chain(&mut self, other: &Self) -> Result<()> {
        self.append_bytes(other.as_bytes())
    }

    /// Read from `reader` until EOF (or, if `Some`, `max_len` bytes have
    /// been read) and append the bytes read.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error unchanged, or
    /// [`ChainError::IllegalState`] if the chain is fixed.
    #[cfg(feature = "std")]
    pub fn append_stream(
        &mut self,
        reader: &mut dyn std::io::Read,
        max_len: Option<usize>,
    ) -> std::io::Result<usize> {
        self.ensure_mutable()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut scratch = [0_u8; 4096];
        let mut total = 0_usize;
        loop {
            let want = max_len.map_or(scratch.len(), |max| {
                core::cmp::min(scratch.len(), max - total)
            });
            if want == 0 {
                break;
            }
            let read = reader.read(&mut scratch[..want])?;
            if read == 0 {
                break;
            }
            self.push_bytes_unchecked(&scratch[..read]);
            total += read;
        }
        self.touch();
        self.apply_role_hook();
        Ok(total)
    }

    /// Append the decimal representation of a signed integer.
    pub fn append_int(&mut self, value: i32) -> Result<()> {
        self.append_long(i64::from(value))
    }

    /// Append the decimal representation of a signed 64-bit integer,
    /// reusing [`convert::write_signed_decimal`]'s `i64::MIN`-safe digit
    /// emission rather than duplicating it against the chain's own buffer.
    pub fn append_long(&mut self, value: i64) -> Result<()> {
        let mut scratch = Vec::new();
        convert::write_signed_decimal(&mut scratch, value);
        self.append_bytes(&scratch)
    }

    /// Append `"true"` or `"false"`.
    pub fn append_bool(&mut self, value: bool) -> Result<()> {
        self.append_bytes(if value { b"true" } else { b"false" })
    }

    /// Append the platform's canonical `f32` decimal representation.
    pub fn append_f32(&mut self, value: f32) -> Result<()> {
        self.append_bytes(formatted_float(value).as_bytes())
    }

    /// Append the platform's canonical `f64` decimal representation.
    pub fn append_f64(&mut self, value: f64) -> Result<()> {
        self.append_bytes(formatted_float(value).as_bytes())
    }

    /// Append one UTF-16 code unit through the surrogate-aware encoder.
    ///
    /// A lone surrogate half is written as the single byte `'?'`. Because a
    /// single code unit can never itself start and complete a surrogate
    /// pair, use [`Chain::append_utf16`] to encode text that may contain
    /// astral characters.
    pub fn append_utf16_unit(&mut self, unit: u16) -> Result<()> {
        self.append_utf16(&[unit])
    }

    /// Append a UTF-16 code unit sequence.
    ///
    /// Scans for high/low surrogate pairs and combines them into one
    /// 4-byte UTF-8 sequence; an unpaired surrogate half (a high surrogate
    /// not followed by a low one, or any low surrogate not preceded by a
    /// high one) is written as `'?'`.
    pub fn append_utf16(&mut self, units: &[u16]) -> Result<()> {
        self.ensure_mutable()?;
        let mut i = 0;
        while i < units.len() {
            let unit = units[i];
            match unit {
                0xD800..=0xDBFF => {
                    let paired = units
                        .get(i + 1)
                        .is_some_and(|&next| (0xDC00..=0xDFFF).contains(&next));
                    if paired {
                        let low = units[i + 1];
                        // Equivalent to `(hi << 10) + lo - 0x35FDC00`; written
                        // as the standard subtract-then-add-0x10000 form for
                        // clarity.
                        let code_point = 0x10000
                            + ((u32::from(unit) - 0xD800) << 10)
                            + (u32::from(low) - 0xDC00);
                        self.encode_scalar_unchecked(code_point);
                        i += 2;
                    } else {
                        self.push_byte_unchecked(b'?');
                        i += 1;
                    }
                }
                0xDC00..=0xDFFF => {
                    self.push_byte_unchecked(b'?');
                    i += 1;
                }
                _ => {
                    self.encode_scalar_unchecked(u32::from(unit));
                    i += 1;
                }
            }
        }
        self.touch();
        self.apply_role_hook();
        Ok(())
    }

    /// Append a single Rust `char`. Always takes the matched-pair path
    /// through [`Chain::append_utf16`]: `char::encode_utf16` never produces
    /// a lone surrogate, so this never emits `'?'`.
    pub fn append_char(&mut self, ch: char) -> Result<()> {
        let mut buf = [0_u16; 2];
        let units = ch.encode_utf16(&mut buf);
        self.append_utf16(units)
    }

    /// Append a `&str`. Equivalent to encoding its bytes directly (Rust
    /// strings are always valid UTF-8), provided as the `CharSequence`
    /// counterpart to [`Chain::append_char`].
    pub fn append_str(&mut self, text: &str) -> Result<()> {
        self.append_bytes(text.as_bytes())
    }

    fn encode_scalar_unchecked(&mut self, code_point: u32) {
        if code_point < 0x80 {
            self.push_byte_unchecked(code_point as u8);
        } else if code_point < 0x800 {
            self.push_byte_unchecked(0xC0 | (code_point >> 6) as u8);
            self.push_byte_unchecked(0x80 | (code_point & 0x3F) as u8);
        } else if code_point < 0x10000 {
            self.push_byte_unchecked(0xE0 | (code_point >> 12) as u8);
            self.push_byte_unchecked(0x80 | ((code_point >> 6) & 0x3F) as u8);
            self.push_byte_unchecked(0x80 | (code_point & 0x3F) as u8);
        } else {
            self.push_byte_unchecked(0xF0 | (code_point >> 18) as u8);
            self.push_byte_unchecked(0x80 | ((code_point >> 12) & 0x3F) as u8);
            self.push_byte_unchecked(0x80 | ((code_point >> 6) & 0x3F) as u8);
            self.push_byte_unchecked(0x80 | (code_point & 0x3F) as u8);
        }
    }

    // ---- UTF-8 / Latin-1 predicates -----------------------------------

    /// The byte at `index` treated as an unsigned 16-bit code unit (the
    /// "Latin-1 fast path"), or `None` if `index >= len()`.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<u16> {
        (index < self.count).then(|| u16::from(self.value[index]))
    }

    /// Whether the chain's bytes, read unsigned, equal `units`
    /// code-unit-for-byte (the Latin-1 fast path).
    #[must_use]
    pub fn eq_latin1_units(&self, units: &[u16]) -> bool {
        Latin1Str::new(self.as_bytes()).eq_code_units(units)
    }

    /// Unsigned byte-vs-code-unit ordering against `units`, length
    /// tiebreak last (the Latin-1 fast path).
    #[must_use]
    pub fn cmp_latin1_units(&self, units: &[u16]) -> Ordering {
        Latin1Str::new(self.as_bytes()).cmp_code_units(units)
    }

    /// Lenient iterator over the chain's bytes decoded as UTF-8 scalar
    /// values. Never panics: a malformed sequence simply ends iteration
    /// early.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        core::str::from_utf8(self.as_bytes())
            .unwrap_or("")
            .chars()
    }

    /// Whether the chain, decoded as UTF-8, has `ch` at logical character
    /// index `index`.
    #[must_use]
    pub fn is_char_at(&self, index: usize, ch: char) -> bool {
        self.chars().nth(index) == Some(ch)
    }

    /// Whether the chain, decoded as UTF-8, exactly equals `s`.
    ///
    /// Rejects early if the size relation `r <= l <= 3r` fails, where `r`
    /// is `s`'s UTF-16 code unit count and `l` is the chain's byte length.
    /// Because a Rust `&str` is already guaranteed valid UTF-8, the
    /// remaining comparison reduces to a byte-for-byte check.
    #[must_use]
    pub fn is_str(&self, s: &str) -> bool {
        let units = s.encode_utf16().count();
        let len = self.count;
        if units == 0 {
            return len == 0;
        }
        if len < units || len > 3 * units {
            return false;
        }
        self.as_bytes() == s.as_bytes()
    }

    // ---- searching & predicates ----------------------------------------

    /// First index at or after `from` holding `byte`, if any.
    #[must_use]
    pub fn index_of_byte(&self, byte: u8, from: usize) -> Option<usize> {
        let hay = self.as_bytes();
        (from..hay.len()).find(|&i| hay[i] == byte)
    }

    /// Last index at or before `from` holding `byte`, if any.
    #[must_use]
    pub fn last_index_of_byte(&self, byte: u8, from: usize) -> Option<usize> {
        let hay = self.as_bytes();
        let Some(max_index) = hay.len().checked_sub(1) else {
            return None;
        };
        let last = core::cmp::min(from, max_index);
        (0..=last).rev().find(|&i| hay[i] == byte)
    }

    /// First index at or after `from` where `needle`, compared Latin-1
    /// style, occurs. Returns `None` immediately if `needle`'s first UTF-16
    /// code unit exceeds `0xFF` (not representable on the fast path).
    #[must_use]
    pub fn index_of_str(&self, needle: &str, from: usize) -> Option<usize> {
        let units: Vec<u16> = needle.encode_utf16().collect();
        if units.first().is_some_and(|&u| u > 0xFF) {
            return None;
        }
        let hay = self.as_bytes();
        if units.is_empty() {
            return Some(core::cmp::min(from, hay.len()));
        }
        if from > hay.len() || units.len() > hay.len() {
            return None;
        }
        'outer: for start in from..=(hay.len() - units.len()) {
            for (i, &u) in units.iter().enumerate() {
                if u16::from(hay[start + i]) != u {
                    continue 'outer;
                }
            }
            return Some(start);
        }
        None
    }

    /// Last index at or before `from` where `needle`, compared Latin-1
    /// style, occurs. See [`Chain::index_of_str`] for the representability
    /// rule.
    #[must_use]
    pub fn last_index_of_str(&self, needle: &str, from: usize) -> Option<usize> {
        let units: Vec<u16> = needle.encode_utf16().collect();
        if units.first().is_some_and(|&u| u > 0xFF) {
            return None;
        }
        let hay = self.as_bytes();
        if units.is_empty() {
            return Some(core::cmp::min(from, hay.len()));
        }
        if units.len() > hay.len() {
            return None;
        }
        let last_start = core::cmp::min(from, hay.len() - units.len());
        (0..=last_start).rev().find(|&start| {
            units
                .iter()
                .enumerate()
                .all(|(i, &u)| u16::from(hay[start + i]) == u)
        })
    }

    /// Whether the chain starts with `needle` (Latin-1 comparison).
    #[must_use]
    pub fn starts_with(&self, needle: &str) -> bool {
        self.index_of_str(needle, 0) == Some(0)
    }

    /// Whether the chain ends with `needle` (Latin-1 comparison).
    #[must_use]
    pub fn ends_with(&self, needle: &str) -> bool {
        let units: Vec<u16> = needle.encode_utf16().collect();
        if units.len() > self.count {
            return units.is_empty();
        }
        self.last_index_of_str(needle, self.count) == Some(self.count - units.len())
    }

    /// Whether the chain contains `needle` anywhere (Latin-1 comparison).
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.index_of_str(needle, 0).is_some()
    }

    /// Whitespace predicate over code points `9..=13` and `28..=32`,
    /// applied byte-wise. An empty chain is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.as_bytes()
            .iter()
            .all(|&b| (9..=13).contains(&b) || (28..=32).contains(&b))
    }

    /// Whether every byte is an ASCII digit and the chain is non-empty.
    #[must_use]
    pub fn is_digit(&self) -> bool {
        !self.is_empty() && self.as_bytes().iter().all(u8::is_ascii_digit)
    }

    // ---- hashing & equality ---------------------------------------------

    /// The cached polynomial hash `h = 31*h + byte` over `[0, count)`.
    #[must_use]
    pub fn hash_code(&self) -> u32 {
        if let Some(h) = self.hash.get() {
            return h;
        }
        let mut h: u32 = 0;
        for &b in self.as_bytes() {
            h = h.wrapping_mul(31).wrapping_add(u32::from(b));
        }
        self.hash.set(Some(h));
        h
    }

    // ---- numeric projections ---------------------------------------------

    /// Parse the chain as a base-10 signed 32-bit integer.
    #[must_use]
    pub fn to_int(&self, default: i32) -> i32 {
        self.to_int_radix(default, 10)
    }

    /// Parse the chain as a signed 32-bit integer in `radix` (`2..=36`).
    #[must_use]
    pub fn to_int_radix(&self, default: i32, radix: u32) -> i32 {
        convert::parse_i32(self.as_bytes(), radix, default)
    }

    /// Parse the chain as a base-10 signed 64-bit integer.
    #[must_use]
    pub fn to_long(&self, default: i64) -> i64 {
        self.to_long_radix(default, 10)
    }

    /// Parse the chain as a signed 64-bit integer in `radix` (`2..=36`).
    #[must_use]
    pub fn to_long_radix(&self, default: i64, radix: u32) -> i64 {
        convert::parse_i64(self.as_bytes(), radix, default)
    }

    /// Parse the chain as an `f32`.
    #[must_use]
    pub fn to_float(&self, default: f32) -> f32 {
        convert::parse_f32(self.as_bytes(), default)
    }

    /// Parse the chain as an `f64`.
    #[must_use]
    pub fn to_double(&self, default: f64) -> f64 {
        convert::parse_f64(self.as_bytes(), default)
    }

    /// Parse the chain as a boolean (`true`/`false`, case-insensitive, or
    /// `0`/`1`).
    #[must_use]
    pub fn to_bool(&self, default: bool) -> bool {
        convert::parse_bool(self.as_bytes(), default)
    }

    /// Parse the chain as the narrowest fitting [`Number`].
    #[must_use]
    pub fn to_number(&self, default: Number) -> Number {
        convert::parse_number(self.as_bytes(), default)
    }

    /// Decode the full chain as a single UTF-8 scalar value.
    #[must_use]
    pub fn to_char(&self, default: char) -> char {
        convert::parse_char(self.as_bytes(), default)
    }

    /// Parse the chain as an arbitrary-precision integer.
    #[must_use]
    pub fn to_bigint(&self, default: BigInt) -> BigInt {
        convert::parse_bigint(self.as_bytes(), default)
    }

    /// Parse the chain as an arbitrary-precision decimal.
    #[must_use]
    pub fn to_bigdecimal(&self, default: BigDecimalValue) -> BigDecimalValue {
        convert::parse_bigdecimal(self.as_bytes(), default)
    }

    // ---- boundary copy / sink helpers ------------------------------------

    /// A defensive copy of the whole chain.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// A defensive copy of `[start, start + length)`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Bounds`] if the range does not fit in
    /// `[0, count)`.
    pub fn to_bytes_range(&self, start: usize, length: usize) -> Result<Vec<u8>> {
        self.check_bounds(start, length)?;
        Ok(self.value[start..start + length].to_vec())
    }

    /// The whole chain decoded as UTF-16 code units (lossy: malformed
    /// sequences are replaced with U+FFFD, matching `String::from_utf8_lossy`).
    #[must_use]
    pub fn to_utf16(&self) -> Vec<u16> {
        String::from_utf8_lossy(self.as_bytes())
            .encode_utf16()
            .collect()
    }

    /// `[start, start + length)` decoded as UTF-16 code units (lossy).
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Bounds`] if the range does not fit in
    /// `[0, count)`.
    pub fn to_utf16_range(&self, start: usize, length: usize) -> Result<Vec<u16>> {
        self.check_bounds(start, length)?;
        Ok(String::from_utf8_lossy(&self.value[start..start + length])
            .encode_utf16()
            .collect())
    }

    /// The chain decoded as a UTF-8 string, cached when the whole chain is
    /// requested. Malformed sequences are replaced with U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> Rc<str> {
        if let Some(cached) = self.string_cache.borrow().clone() {
            return cached;
        }
        let decoded: Rc<str> = Rc::from(String::from_utf8_lossy(self.as_bytes()).into_owned());
        *self.string_cache.borrow_mut() = Some(Rc::clone(&decoded));
        decoded
    }

    /// A (never cached) decoded view of `[start, start + length)`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Bounds`] if the range does not fit in
    /// `[0, count)`.
    pub fn to_string_range(&self, start: usize, length: usize) -> Result<String> {
        self.check_bounds(start, length)?;
        Ok(String::from_utf8_lossy(&self.value[start..start + length]).into_owned())
    }

    /// Forward `[offset, offset + length)` to an external sink — a
    /// message digest, MAC, or cipher update — without retaining the
    /// buffer past the call.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Bounds`] if the range does not fit in
    /// `[0, count)`.
    pub fn update<S: digest::Update>(&self, sink: &mut S, offset: usize, length: usize) -> Result<()> {
        self.check_bounds(offset, length)?;
        sink.update(&self.value[offset..offset + length]);
        Ok(())
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("bytes", &bstr::BStr::new(self.as_bytes()))
            .field("count", &self.count)
            .field("capacity", &self.value.capacity())
            .field("fixed", &self.fixed)
            .field("role", &self.role)
            .field("has_bucket", &self.bucket.is_some())
            .finish()
    }
}

impl PartialEq for Chain {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Chain {}

fn formatted_float<T: core::fmt::Display>(value: T) -> String {
    use core::fmt::Write;
    let mut out = String::new();
    write!(out, "{value}").expect("writing to a String never fails");
    out
}
