//! Random text primitives.

use rand::Rng;

/// Character pool for generated text chunks: letters, digits, space, newline.
///
/// Every character in the pool is single-byte in UTF-8, so a chunk of N
/// characters always encodes to exactly N bytes. The byte-exact file size
/// invariant in fixture-textfile depends on this.
const TEXT_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 \n";

/// Character pool for tail chunks: letters, digits, space. No newline, so a
/// generated file never ends mid-line on a dangling `\n`.
const TAIL_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 ";

/// Character pool for alphanumeric strings: ASCII letters and digits.
const ALPHANUMERIC_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random ASCII alphanumeric string of exactly `len` characters.
pub fn random_alphanumeric<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHANUMERIC_CHARS[rng.gen_range(0..ALPHANUMERIC_CHARS.len())] as char)
        .collect()
}

/// Title-case a string: first character uppercased, the rest lowercased.
///
/// Only alphabetic characters are affected. Title-casing a random
/// alphanumeric string that starts with a digit leaves that digit in place
/// ("7kq2xb" stays "7kq2xb") — this matches the behavior expected by the
/// CSV name fields and is intentional.
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(s.len());
            result.push(first.to_ascii_uppercase());
            result.push_str(&chars.as_str().to_ascii_lowercase());
            result
        }
        None => String::new(),
    }
}

/// Generate a random text chunk of exactly `len` characters.
///
/// The pool is restricted to single-byte characters, so the returned string
/// is exactly `len` bytes long.
pub fn random_text_chunk<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| TEXT_CHARS[rng.gen_range(0..TEXT_CHARS.len())] as char)
        .collect()
}

/// Generate a random tail chunk of exactly `len` characters, drawn from
/// letters, digits, and space only.
///
/// Same single-byte guarantee as [`random_text_chunk`], without the newline
/// in the pool.
pub fn random_text_tail<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| TAIL_CHARS[rng.gen_range(0..TAIL_CHARS.len())] as char)
        .collect()
}
