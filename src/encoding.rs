//! Text encodings accepted next to UTF-8.
//!
//! Latin-1 text is a byte slice where every byte is the codepoint of the same
//! value. "Unicode" text is a slice of 16-bit units; properly paired
//! surrogates are combined, and lone surrogates decode to U+FFFD.

/// Iterates the codepoints of Latin-1 encoded text.
pub fn latin1_chars(text: &[u8]) -> impl Iterator<Item = char> + Clone + '_ {
    text.iter().map(|&b| char::from(b))
}

/// Iterates the codepoints of 16-bit Unicode text.
pub fn unicode_chars(text: &[u16]) -> impl Iterator<Item = char> + Clone + '_ {
    char::decode_utf16(text.iter().copied()).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
}

pub fn latin1_to_string(text: &[u8]) -> String {
    latin1_chars(text).collect()
}

pub fn unicode_to_string(text: &[u16]) -> String {
    unicode_chars(text).collect()
}
