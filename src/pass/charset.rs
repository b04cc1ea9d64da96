//! Character set building for password generation.

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+[]{}|;:,.<>?";

/// Build the character pool: letters, then digits, then symbols.
pub fn build(digits: bool, symbols: bool) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(digits, symbols));

    chars.extend_from_slice(LETTERS);

    if digits {
        chars.extend_from_slice(DIGITS);
    }

    if symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    chars
}

/// Size of the pool `build` would return (for entropy calculation).
pub fn size(digits: bool, symbols: bool) -> usize {
    let mut size = LETTERS.len();
    if digits {
        size += DIGITS.len();
    }
    if symbols {
        size += SYMBOLS.len();
    }
    size
}

/// Whether `c` belongs to the pool selected by the flags.
pub fn contains(c: char, digits: bool, symbols: bool) -> bool {
    if !c.is_ascii() {
        return false;
    }
    let b = c as u8;
    LETTERS.contains(&b) || (digits && DIGITS.contains(&b)) || (symbols && SYMBOLS.contains(&b))
}
