//! Combinatorial backtracking search for witness expressions.

mod core;
mod errors;

pub use core::SearchEngine;
pub use errors::SolverError;

#[cfg(test)]
mod tests;
