//! Compact binary persistence for roll multisets and expressions.

mod errors;
mod files;
mod records;

pub use errors::CodecError;
pub use files::{read_failure_file, read_table_file, write_failure_file, write_table_file};
pub use records::{
    decode_expression, decode_rolls, encode_expression, encode_rolls, expression_record_len,
    ROLL_RECORD_LEN,
};
