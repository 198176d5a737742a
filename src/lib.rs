//! Sacred Geometry - find dice-roll expressions that hit spell-level targets
//!
//! Given a multiset of dice rolls (faces 1-8) and a spell level, this
//! library searches for a postfix expression that uses every roll exactly
//! once, combines them with `+ - * /` (divisions must be exact), and
//! evaluates to one of the level's three prime target numbers. Queries are
//! answered from a precomputed lookup table when possible and by a
//! backtracking search otherwise.

pub mod codec;
pub mod expression;
pub mod rolls;
pub mod solver;
pub mod table;
pub mod target;

// Re-export the main public API
pub use expression::{evaluate, postfix_to_infix, ExpressionError, Op, PostfixExpression};
pub use rolls::{RollError, RollSet};
pub use solver::{SearchEngine, SolverError};
pub use table::LookupTable;
pub use target::Target;

/// Solve a roll string against a spell level.
///
/// This is a convenience wrapper that parses the rolls, resolves the target
/// bucket and runs a default engine against `table`.
///
/// # Arguments
///
/// * `rolls` - A string of roll digits, each 1-8, 2 to 20 of them
/// * `level` - A spell level, 1-9 (0 addresses the internal zero bucket)
/// * `table` - Precomputed lookup table; use [`LookupTable::empty`] to
///   force a full search
///
/// # Returns
///
/// * `Ok(Some(expression))` - A witness whose value is in the level's
///   target set
/// * `Ok(None)` - No qualifying expression exists; a normal outcome, not an
///   error
/// * `Err(SolverError)` - The input rolls or level were invalid
///
/// # Errors
///
/// Fails when the roll string holds a character outside `1-8`, the roll
/// count is outside 2-20, or the level is above 9.
///
/// # Examples
///
/// ```
/// use sacred_geometry::{solve_rolls, LookupTable};
///
/// let witness = solve_rolls("34", 1, &LookupTable::empty()).unwrap().unwrap();
/// assert_eq!(witness.value(), 7);
/// assert_eq!(format!("{}", witness), "3 + 4");
/// ```
pub fn solve_rolls(
    rolls: &str,
    level: u8,
    table: &LookupTable,
) -> Result<Option<PostfixExpression>, SolverError> {
    let roll_set = RollSet::parse(rolls)?;
    let target = Target::from_level(level).ok_or(SolverError::InvalidLevel(level))?;
    SearchEngine::new().solve(&roll_set, target, table)
}
