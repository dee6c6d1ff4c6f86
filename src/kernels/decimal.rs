//! This module contains the pure, stateless kernels for writing and reading run
//! counts as plain ASCII decimal digits.
//!
//! A count is written with no zero-padding and no upper bound; reading consumes
//! every consecutive ASCII digit at the cursor. It is fully panic-free.

use std::io::Cursor;

use crate::error::TambakError;

/// Enough digits for `u64::MAX` (20 digits).
const MAX_U64_DIGITS: usize = 20;

//==================================================================================
// 1. Public API for Single-Value Operations
//==================================================================================

/// Encodes a single count as decimal ASCII, appending to a buffer.
pub fn encode_count(count: u64, buffer: &mut Vec<u8>) {
    let mut digits = [0u8; MAX_U64_DIGITS];
    let mut pos = MAX_U64_DIGITS;
    let mut remaining = count;

    loop {
        pos -= 1;
        digits[pos] = b'0' + (remaining % 10) as u8;
        remaining /= 10;
        if remaining == 0 {
            break;
        }
    }

    buffer.extend_from_slice(&digits[pos..]);
}

/// Decodes a count from the digits at the cursor position, advancing past them.
///
/// Returns `Ok(None)` when the cursor does not sit on a digit, leaving it
/// untouched. Digit strings that do not fit in a `u64` fail with `CountOverflow`.
pub fn decode_count(cursor: &mut Cursor<&[u8]>) -> Result<Option<u64>, TambakError> {
    let bytes = *cursor.get_ref();
    let start = cursor.position() as usize;

    let digit_len = bytes
        .get(start..)
        .unwrap_or_default()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digit_len == 0 {
        return Ok(None);
    }

    let end = start + digit_len;
    let mut value: u64 = 0;
    for &b in &bytes[start..end] {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .ok_or_else(|| {
                TambakError::CountOverflow(format!(
                    "{}-digit count at offset {} exceeds u64",
                    digit_len, start
                ))
            })?;
    }

    cursor.set_position(end as u64);
    Ok(Some(value))
}
