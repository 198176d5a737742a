use thiserror::Error;

use crate::expression::ExpressionError;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("roll sets with more than 15 of a single roll are not supported (face {face} appears {count} times)")]
    FaceCountOverflow { face: u8, count: u8 },
    #[error("'{0}' is not an encodable expression token")]
    UnencodableToken(char),
    #[error("{0:#x} is not a valid expression nibble")]
    InvalidNibble(u8),
    #[error("table file is truncated or undersized")]
    CorruptTableFile,
    #[error("persisted expression is invalid: {0}")]
    BadExpression(#[from] ExpressionError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
