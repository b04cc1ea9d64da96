//! Password generation.

use super::charset;
use crate::rand::RandomSource;

/// Generate a single password of exactly `length` characters.
///
/// Every position is an independent uniform draw from the pool built by
/// [`charset::build`]; repeats are allowed. The caller owns the length
/// domain, so any value is honoured and `0` yields an empty string.
pub fn generate<R: RandomSource + ?Sized>(
    length: usize,
    digits: bool,
    symbols: bool,
    rng: &mut R,
) -> String {
    let chars = charset::build(digits, symbols);
    let buf: Vec<u8> = (0..length).map(|_| chars[rng.below(chars.len())]).collect();
    // Safety: charset is all ASCII
    unsafe { String::from_utf8_unchecked(buf) }
}

/// Password entropy in bits for a uniformly sampled password.
pub fn entropy_bits(length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// Entropy strength description.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
