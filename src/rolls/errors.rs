use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("{0} is not a valid dice roll (1-8)")]
    InvalidRoll(u8),
    #[error("'{0}' is not a valid dice roll (1-8)")]
    InvalidRollToken(char),
    #[error("the number of rolls must be between 2 and 20, got {0}")]
    RollCountOutOfRange(usize),
}
