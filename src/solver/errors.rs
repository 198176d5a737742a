use thiserror::Error;

use crate::rolls::RollError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("roll set error: {0}")]
    Rolls(#[from] RollError),
    #[error("{0} is not a valid spell level (0-9)")]
    InvalidLevel(u8),
}
