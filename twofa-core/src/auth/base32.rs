//! RFC 4648 Base32 encoding and decoding
//!
//! Decoding is lenient about presentation and strict about content:
//! 1. Remove all whitespace and `=` padding
//! 2. Uppercase (authenticator apps display secrets in either case)
//! 3. Reject any character outside `A-Z2-7`
//! 4. Emit complete bytes, discarding trailing bits that do not fill one

use crate::error::OtpError;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

const PAD: char = '=';

/// Strip whitespace and padding and uppercase the rest
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != PAD)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn value_of(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A'),
        '2'..='7' => Some(c as u8 - b'2' + 26),
        _ => None,
    }
}

/// Decode a Base32 string to bytes
///
/// # Errors
///
/// Returns `OtpError::InvalidCharacter` on the first character outside the
/// alphabet; `position` indexes the normalized input. No partial output is
/// returned.
pub fn decode(input: &str) -> Result<Vec<u8>, OtpError> {
    let normalized = normalize(input);
    let mut output = Vec::with_capacity(normalized.len() * 5 / 8);

    let mut buffer: u32 = 0;
    let mut bits = 0;

    for (position, character) in normalized.chars().enumerate() {
        let value = value_of(character).ok_or(OtpError::InvalidCharacter {
            character,
            position,
        })?;

        buffer = (buffer << 5) | u32::from(value);
        bits += 5;

        if bits >= 8 {
            bits -= 8;
            output.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    Ok(output)
}

/// Encode bytes as uppercase Base32 padded to a multiple of 8 characters
pub fn encode(data: &[u8]) -> String {
    let mut output = encode_unpadded(data);
    while output.len() % 8 != 0 {
        output.push(PAD);
    }
    output
}

/// Encode bytes as uppercase Base32 without `=` padding
///
/// This is the form authenticator apps and `otpauth://` URIs expect.
pub fn encode_unpadded(data: &[u8]) -> String {
    let mut output = String::with_capacity(data.len().div_ceil(5) * 8);

    let mut buffer: u32 = 0;
    let mut bits = 0;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            output.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        output.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }

    output
}
