//! Roll multisets: per-face count vectors for die faces 1-8.

mod errors;
mod set;

pub use errors::RollError;
pub use set::{RollSet, FACES, MAX_ROLLS, MIN_ROLLS};

#[cfg(test)]
mod tests;
