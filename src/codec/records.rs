//! Fixed-width binary records for roll multisets and expression token
//! sequences.
//!
//! A roll record is 4 bytes: one 4-bit count per face, faces 1-8 packed two
//! per byte with the lower face in the high nibble. An expression record
//! packs two 4-bit token codes per byte (digits as themselves, operators as
//! 10-13); an odd token count pads the final low nibble with the sentinel
//! 14, which the decoder drops.

use crate::codec::errors::CodecError;
use crate::rolls::{RollSet, FACES};

/// Byte length of every roll record.
pub const ROLL_RECORD_LEN: usize = 4;

const CODE_ADD: u8 = 10;
const CODE_SUB: u8 = 11;
const CODE_MUL: u8 = 12;
const CODE_DIV: u8 = 13;
const CODE_PAD: u8 = 14;

/// Byte length of the expression record paired with a roll record of
/// `roll_count` rolls: such an expression has `2n - 1` tokens, which pack
/// into exactly `n` bytes.
pub fn expression_record_len(roll_count: usize) -> usize {
    roll_count
}

/// Pack a roll multiset into its 4-byte record.
///
/// # Errors
///
/// Returns [`CodecError::FaceCountOverflow`] when any face appears more
/// than 15 times; such sets cannot be represented in this record format.
pub fn encode_rolls(rolls: &RollSet) -> Result<[u8; ROLL_RECORD_LEN], CodecError> {
    let mut bytes = [0u8; ROLL_RECORD_LEN];
    for face in 1..=FACES as u8 {
        let count = rolls.count(face);
        if count > 15 {
            return Err(CodecError::FaceCountOverflow { face, count });
        }
        let slot = usize::from(face - 1) / 2;
        if face % 2 == 1 {
            bytes[slot] = count << 4;
        } else {
            bytes[slot] |= count;
        }
    }
    Ok(bytes)
}

/// Unpack a 4-byte roll record.
pub fn decode_rolls(bytes: [u8; ROLL_RECORD_LEN]) -> RollSet {
    let mut rolls = RollSet::new();
    for (i, &byte) in bytes.iter().enumerate() {
        let odd_face = i as u8 * 2 + 1;
        let high = (byte & 0xf0) >> 4;
        let low = byte & 0x0f;
        if high > 0 {
            rolls.add(odd_face, high);
        }
        if low > 0 {
            rolls.add(odd_face + 1, low);
        }
    }
    rolls
}

fn token_to_code(token: char) -> Result<u8, CodecError> {
    match token {
        '0'..='9' => Ok(token as u8 - b'0'),
        '+' => Ok(CODE_ADD),
        '-' => Ok(CODE_SUB),
        '*' => Ok(CODE_MUL),
        '/' => Ok(CODE_DIV),
        _ => Err(CodecError::UnencodableToken(token)),
    }
}

fn code_to_token(code: u8) -> Result<Option<char>, CodecError> {
    match code {
        0..=9 => Ok(Some(char::from(b'0' + code))),
        CODE_ADD => Ok(Some('+')),
        CODE_SUB => Ok(Some('-')),
        CODE_MUL => Ok(Some('*')),
        CODE_DIV => Ok(Some('/')),
        CODE_PAD => Ok(None),
        _ => Err(CodecError::InvalidNibble(code)),
    }
}

/// Pack a token sequence into nibbles, `ceil(len / 2)` bytes.
///
/// # Errors
///
/// Returns [`CodecError::UnencodableToken`] for a character outside the
/// 14-symbol alphabet.
pub fn encode_expression(tokens: &str) -> Result<Vec<u8>, CodecError> {
    let mut bytes = vec![0u8; tokens.len().div_ceil(2)];
    for (i, token) in tokens.chars().enumerate() {
        let code = token_to_code(token)?;
        if i % 2 == 0 {
            bytes[i / 2] = code << 4;
        } else {
            bytes[i / 2] |= code;
        }
    }
    if tokens.len() % 2 == 1 {
        bytes[tokens.len() / 2] |= CODE_PAD;
    }
    Ok(bytes)
}

/// Unpack nibble-coded bytes back into a token sequence, dropping the pad
/// sentinel from the final nibble.
///
/// # Errors
///
/// Returns [`CodecError::InvalidNibble`] for a nibble outside the alphabet
/// or for a pad sentinel anywhere but the final nibble.
pub fn decode_expression(bytes: &[u8]) -> Result<String, CodecError> {
    let mut tokens = String::with_capacity(bytes.len() * 2);
    let nibble_count = bytes.len() * 2;
    let nibbles = bytes.iter().flat_map(|&byte| [(byte & 0xf0) >> 4, byte & 0x0f]);
    for (i, code) in nibbles.enumerate() {
        match code_to_token(code)? {
            Some(token) => tokens.push(token),
            None if i + 1 == nibble_count => {}
            None => return Err(CodecError::InvalidNibble(code)),
        }
    }
    Ok(tokens)
}
