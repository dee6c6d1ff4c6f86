//! This module contains the pure, stateless kernels for performing Run-Length
//! Encoding (RLE) and decoding over raw bytes.
//!
//! The on-disk format is a flat sequence of tokens, each one the raw symbol byte
//! followed by its run length in decimal ASCII (`b"a3b1"`). There is no header,
//! delimiter or checksum. A decoder separates the symbol from the count by
//! position alone: the first byte of a token is always the symbol, even when it
//! is itself a digit.
//!
//! This module is PURE RUST, panic-free, and does no I/O or logging.

use std::io::Cursor;

use super::decimal;
use crate::error::TambakError;

//==================================================================================
// 1. Token Model
//==================================================================================

/// A single decoded token. `count` is `None` when the symbol had no digits after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub symbol: u8,
    pub count: Option<u64>,
}

/// Iterator over the tokens of an encoded buffer. Stops after the first error.
pub struct Tokens<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token, TambakError>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = *self.cursor.get_ref();
        let pos = self.cursor.position() as usize;
        let symbol = *bytes.get(pos)?;
        self.cursor.set_position((pos + 1) as u64);

        match decimal::decode_count(&mut self.cursor) {
            Ok(count) => Some(Ok(Token { symbol, count })),
            Err(e) => {
                self.cursor.set_position(bytes.len() as u64);
                Some(Err(e))
            }
        }
    }
}

/// Returns an iterator over the tokens in `input_bytes`.
pub fn tokens(input_bytes: &[u8]) -> Tokens<'_> {
    Tokens {
        cursor: Cursor::new(input_bytes),
    }
}

/// Summary of a decode pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Tokens read, including dropped ones.
    pub tokens: usize,
    /// Tokens whose symbol had no count digits and so produced no output.
    pub dropped_tokens: usize,
    pub decoded_len: usize,
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Encodes `input_slice` into `output_buf`, replacing its contents.
///
/// Every maximal run becomes one token. A run of one still emits `"1"`.
pub fn encode(input_slice: &[u8], output_buf: &mut Vec<u8>) {
    output_buf.clear();

    let Some((&first, rest)) = input_slice.split_first() else {
        return;
    };

    let mut current_val = first;
    let mut run_count: u64 = 1;

    for &val in rest {
        if val == current_val {
            run_count += 1;
        } else {
            output_buf.push(current_val);
            decimal::encode_count(run_count, output_buf);
            current_val = val;
            run_count = 1;
        }
    }

    output_buf.push(current_val);
    decimal::encode_count(run_count, output_buf);
}

/// Convenience wrapper over [`encode`] that allocates its own buffer.
pub fn encode_to_vec(input_slice: &[u8]) -> Vec<u8> {
    let mut output_buf = Vec::new();
    encode(input_slice, &mut output_buf);
    output_buf
}

/// Decodes `input_bytes` into `output_buf`, replacing its contents.
///
/// A symbol with no digits after it contributes nothing and is counted in
/// `DecodeReport::dropped_tokens`; this is not an error. The only failure is a
/// count too large to represent.
pub fn decode(input_bytes: &[u8], output_buf: &mut Vec<u8>) -> Result<DecodeReport, TambakError> {
    output_buf.clear();
    let mut report = DecodeReport::default();

    for token in tokens(input_bytes) {
        let token = token?;
        report.tokens += 1;

        let Some(count) = token.count else {
            report.dropped_tokens += 1;
            continue;
        };

        // `try_reserve` rejects lengths past `isize::MAX` that `resize` would panic on.
        let run_len = usize::try_from(count)
            .ok()
            .filter(|&run_len| output_buf.try_reserve(run_len).is_ok())
            .ok_or_else(|| {
                TambakError::CountOverflow(format!(
                    "run of {} x {:#04x} does not fit in memory",
                    count, token.symbol
                ))
            })?;
        let new_len = output_buf.len() + run_len;
        output_buf.resize(new_len, token.symbol);
    }

    report.decoded_len = output_buf.len();
    Ok(report)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
