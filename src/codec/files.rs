//! Persisted table files: a flat concatenation of (roll record, expression
//! record) pairs with no delimiters. The expression record length is
//! inferred from the roll record's total count, so a truncated file is
//! detected as soon as a record runs short.

use std::fs;
use std::path::Path;

use log::debug;

use crate::codec::errors::CodecError;
use crate::codec::records::{
    decode_expression, decode_rolls, encode_expression, encode_rolls, expression_record_len,
    ROLL_RECORD_LEN,
};
use crate::expression::PostfixExpression;
use crate::rolls::RollSet;

/// Write a bucket's solution entries.
///
/// # Errors
///
/// Fails on an unencodable entry or an I/O error.
pub fn write_table_file(
    path: &Path,
    entries: &[(RollSet, PostfixExpression)],
) -> Result<(), CodecError> {
    let mut bytes = Vec::new();
    for (rolls, expression) in entries {
        bytes.extend_from_slice(&encode_rolls(rolls)?);
        bytes.extend_from_slice(&encode_expression(expression.tokens())?);
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// Read a bucket's solution entries, in file order.
///
/// # Errors
///
/// Returns [`CodecError::CorruptTableFile`] when the file ends mid-record
/// or a roll record claims zero rolls, and propagates decode failures for
/// expression records that do not parse back to a valid expression.
pub fn read_table_file(path: &Path) -> Result<Vec<(RollSet, PostfixExpression)>, CodecError> {
    let bytes = fs::read(path)?;
    let mut entries = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() {
        let roll_bytes: [u8; ROLL_RECORD_LEN] = bytes
            .get(offset..offset + ROLL_RECORD_LEN)
            .and_then(|slice| slice.try_into().ok())
            .ok_or(CodecError::CorruptTableFile)?;
        offset += ROLL_RECORD_LEN;
        let rolls = decode_rolls(roll_bytes);
        if rolls.is_empty() {
            return Err(CodecError::CorruptTableFile);
        }

        let expression_len = expression_record_len(rolls.len());
        let expression_bytes = bytes
            .get(offset..offset + expression_len)
            .ok_or(CodecError::CorruptTableFile)?;
        offset += expression_len;

        let tokens = decode_expression(expression_bytes)?;
        let expression = PostfixExpression::parse(&tokens)?;
        entries.push((rolls, expression));
    }

    debug!("Read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Write a bucket's known-unsolvable roll sets.
///
/// # Errors
///
/// Fails on an unencodable roll set or an I/O error.
pub fn write_failure_file(path: &Path, sets: &[RollSet]) -> Result<(), CodecError> {
    let mut bytes = Vec::with_capacity(sets.len() * ROLL_RECORD_LEN);
    for rolls in sets {
        bytes.extend_from_slice(&encode_rolls(rolls)?);
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// Read a bucket's known-unsolvable roll sets.
///
/// # Errors
///
/// Returns [`CodecError::CorruptTableFile`] when the file length is not a
/// multiple of the roll record size.
pub fn read_failure_file(path: &Path) -> Result<Vec<RollSet>, CodecError> {
    let bytes = fs::read(path)?;
    if bytes.len() % ROLL_RECORD_LEN != 0 {
        return Err(CodecError::CorruptTableFile);
    }

    let mut sets = Vec::with_capacity(bytes.len() / ROLL_RECORD_LEN);
    for chunk in bytes.chunks_exact(ROLL_RECORD_LEN) {
        let roll_bytes: [u8; ROLL_RECORD_LEN] =
            chunk.try_into().map_err(|_| CodecError::CorruptTableFile)?;
        sets.push(decode_rolls(roll_bytes));
    }

    debug!("Read {} failure entries from {}", sets.len(), path.display());
    Ok(sets)
}
