use crate::codec::{write_failure_file, write_table_file};
use crate::expression::{evaluate, PostfixExpression};
use crate::rolls::{RollError, RollSet};
use crate::solver::{SearchEngine, SolverError};
use crate::table::LookupTable;
use crate::target::Target;

fn solve(rolls: &str, target: Target) -> Option<PostfixExpression> {
    let rolls = RollSet::parse(rolls).unwrap();
    SearchEngine::new()
        .solve(&rolls, target, &LookupTable::empty())
        .unwrap()
}

/// The multiset of digit tokens in a witness must equal the input rolls.
fn assert_uses_all_rolls(expression: &PostfixExpression, rolls: &str) {
    let mut digits: Vec<char> = expression
        .tokens()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.sort_unstable();
    let mut expected: Vec<char> = rolls.chars().collect();
    expected.sort_unstable();
    assert_eq!(digits, expected);
}

#[test]
fn test_two_rolls_reach_level_one() {
    let expression = solve("34", Target::One).unwrap();
    assert_eq!(expression.value(), 7);
    assert_eq!(expression.tokens(), "34+");
    assert_uses_all_rolls(&expression, "34");
}

#[test]
fn test_three_rolls_reach_level_one() {
    let expression = solve("223", Target::One).unwrap();
    assert!(Target::One.values().contains(&expression.value()));
    assert_uses_all_rolls(&expression, "223");
    assert_eq!(evaluate(expression.tokens()), Ok(expression.value()));
}

#[test]
fn test_subtraction_witness() {
    let expression = solve("63", Target::One).unwrap();
    assert_eq!(expression.value(), 3);
    assert_uses_all_rolls(&expression, "63");
}

#[test]
fn test_unreachable_target_is_not_found() {
    // Two 2's cannot reach 11, 13 or 17 with the four operators.
    assert_eq!(solve("22", Target::Two), None);
}

#[test]
fn test_all_ones() {
    let expression = solve("1111", Target::One).unwrap();
    assert!(Target::One.values().contains(&expression.value()));
    assert_uses_all_rolls(&expression, "1111");
}

#[test]
fn test_duplicate_heavy_rolls() {
    // Value-multiset memoization keeps highly repetitive inputs tractable.
    let expression = solve("22222222", Target::One).unwrap();
    assert!(Target::One.values().contains(&expression.value()));
    assert_uses_all_rolls(&expression, "22222222");
}

#[test]
fn test_level_two_witness() {
    // 8 * 4 - 6 = 26, 26 / 2 = 13 is one known witness.
    let expression = solve("2468", Target::Two).unwrap();
    assert!(Target::Two.values().contains(&expression.value()));
    assert_uses_all_rolls(&expression, "2468");
}

#[test]
fn test_divisions_inside_witness_are_exact() {
    // Re-evaluating from raw tokens rejects any inexact division, so a
    // successful evaluation proves the invariant.
    for rolls in ["2468", "3366", "1248"] {
        if let Some(expression) = solve(rolls, Target::One) {
            assert_eq!(evaluate(expression.tokens()), Ok(expression.value()));
        }
    }
}

#[test]
fn test_solve_is_deterministic() {
    let first = solve("2468", Target::Two).unwrap();
    let second = solve("2468", Target::Two).unwrap();
    assert_eq!(first.tokens(), second.tokens());
}

#[test]
fn test_roll_count_bounds() {
    let engine = SearchEngine::new();
    let table = LookupTable::empty();

    let one = RollSet::parse("5").unwrap();
    assert!(matches!(
        engine.solve(&one, Target::One, &table),
        Err(SolverError::Rolls(RollError::RollCountOutOfRange(1)))
    ));

    let too_many = RollSet::parse("111111111111111111111").unwrap();
    assert!(matches!(
        engine.solve(&too_many, Target::One, &table),
        Err(SolverError::Rolls(RollError::RollCountOutOfRange(21)))
    ));

    // A roll string long enough to saturate a face count still lands on
    // the size check rather than wrapping into an accepted set.
    let absurd = RollSet::parse(&"8".repeat(258)).unwrap();
    assert!(matches!(
        engine.solve(&absurd, Target::One, &table),
        Err(SolverError::Rolls(RollError::RollCountOutOfRange(_)))
    ));
}

#[test]
fn test_table_hit_bypasses_search() {
    let dir = tempfile::tempdir().unwrap();
    let entries = vec![(
        RollSet::parse("34").unwrap(),
        PostfixExpression::parse("43+").unwrap(),
    )];
    write_table_file(&dir.path().join(Target::One.file_name()), &entries).unwrap();

    let table = LookupTable::load(dir.path());
    let result = SearchEngine::new()
        .solve(&RollSet::parse("34").unwrap(), Target::One, &table)
        .unwrap()
        .unwrap();
    // The table's witness is returned verbatim, not the search's "34+".
    assert_eq!(result.tokens(), "43+");
}

#[test]
fn test_recorded_failure_bypasses_search() {
    let dir = tempfile::tempdir().unwrap();
    let sets = vec![RollSet::parse("34").unwrap()];
    write_failure_file(&dir.path().join(Target::One.failure_file_name()), &sets).unwrap();

    let table = LookupTable::load(dir.path());
    // {3, 4} is solvable, but the failure record wins over full search.
    let result = SearchEngine::new()
        .solve(&RollSet::parse("34").unwrap(), Target::One, &table)
        .unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_zero_bucket_single_survivor() {
    // The final-expression check is parity-agnostic, so the zero bucket
    // works too: 2 - 2 = 0.
    let expression = solve("22", Target::Zero).unwrap();
    assert_eq!(expression.value(), 0);
    assert_uses_all_rolls(&expression, "22");
}
