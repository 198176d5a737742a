use std::collections::HashSet;

use log::{debug, info};

use crate::expression::{Op, PostfixExpression};
use crate::rolls::{RollError, RollSet, MAX_ROLLS, MIN_ROLLS};
use crate::solver::errors::SolverError;
use crate::table::LookupTable;
use crate::target::Target;

/// Backtracking solver over a working multiset of expressions.
///
/// Each step picks two expressions, combines them with one of the four
/// operators (exact divisions only) and recurses on the shrunken set, so
/// recursion depth is bounded by the roll count. Combinations are tried in
/// an order that favors reaching an odd value early, since every non-zero
/// target is an odd prime:
///
/// 1. parity-crossing pairs with `+` and `-` (both orientations),
/// 2. same-parity exact divisions, which can also flip parity,
/// 3. everything else, skipped entirely when only two expressions remain
///    and every target is odd, because no such final combination can still
///    produce a target value.
///
/// The first non-failing branch wins; there is no notion of a best or
/// shortest witness.
pub struct SearchEngine {}

impl SearchEngine {
    pub fn new() -> SearchEngine {
        SearchEngine {}
    }

    /// Find an expression using every roll exactly once whose value lands in
    /// the target bucket.
    ///
    /// Consults `table` first: a precomputed hit answers immediately, and a
    /// recorded failure short-circuits to `None`. `None` is the normal
    /// negative outcome for many roll/target combinations, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::RollCountOutOfRange`] (wrapped) when the roll
    /// count is outside 2-20.
    pub fn solve(
        &self,
        rolls: &RollSet,
        target: Target,
        table: &LookupTable,
    ) -> Result<Option<PostfixExpression>, SolverError> {
        let count = rolls.len();
        if !(MIN_ROLLS..=MAX_ROLLS).contains(&count) {
            return Err(RollError::RollCountOutOfRange(count).into());
        }

        if let Some(expression) = table.lookup(rolls, target) {
            info!("Table lookup answered {} for {:?}", rolls, target);
            return Ok(Some(expression));
        }
        if table.known_unsolvable(rolls, target) {
            info!("{} is recorded as unsolvable for {:?}", rolls, target);
            return Ok(None);
        }

        info!("Searching {} for {:?}", rolls, target);
        let work: Vec<PostfixExpression> = rolls.iter().map(PostfixExpression::literal).collect();
        let mut visited = HashSet::new();
        let result = self.search(&mut visited, &work, target.values());
        match &result {
            Some(expression) => debug!("Found {} = {}", expression.tokens(), expression.value()),
            None => debug!("No expression found for {}", rolls),
        }
        Ok(result)
    }

    fn search(
        &self,
        visited: &mut HashSet<Vec<i64>>,
        work: &[PostfixExpression],
        targets: &[i64],
    ) -> Option<PostfixExpression> {
        // Two working sets with identical value multisets reach identical
        // final values, so revisiting one is wasted work.
        let mut values: Vec<i64> = work.iter().map(PostfixExpression::value).collect();
        values.sort_unstable();
        if !visited.insert(values) {
            return None;
        }

        if work.len() <= 1 {
            return work
                .first()
                .filter(|expression| targets.contains(&expression.value()))
                .cloned();
        }

        let odds: Vec<usize> = (0..work.len()).filter(|&i| !work[i].is_even()).collect();
        let evens: Vec<usize> = (0..work.len()).filter(|&i| work[i].is_even()).collect();

        // Parity-crossing addition and subtraction: the fastest route to an
        // odd value. Within one pass, expressions with equal values are
        // interchangeable, so only one representative per value is tried.
        let mut seen_left = HashSet::new();
        for &i in &odds {
            if !seen_left.insert(work[i].value()) {
                continue;
            }
            let mut seen_right = HashSet::new();
            for &j in &evens {
                if !seen_right.insert(work[j].value()) {
                    continue;
                }
                for op in [Op::Add, Op::Sub] {
                    if let Some(found) = self.try_branch(visited, work, i, j, op, targets) {
                        return Some(found);
                    }
                }
                if let Some(found) = self.try_branch(visited, work, j, i, Op::Sub, targets) {
                    return Some(found);
                }
            }
        }

        // Same-parity exact division can also flip to the needed parity.
        for group in [&odds, &evens] {
            let mut seen_left = HashSet::new();
            for &i in group {
                if !seen_left.insert(work[i].value()) {
                    continue;
                }
                let mut seen_right = HashSet::new();
                for &j in group {
                    if j == i {
                        // A single instance cannot be combined with itself.
                        continue;
                    }
                    if !seen_right.insert(work[j].value()) {
                        continue;
                    }
                    if let Some(found) = self.try_branch(visited, work, i, j, Op::Div, targets) {
                        return Some(found);
                    }
                }
            }
        }

        // With two expressions left and only odd targets, none of the
        // remaining combinations can still succeed: they yield even values,
        // except odd * odd, whose prime products always have a factor of 1
        // and were already reachable through division.
        if work.len() == 2 && targets.iter().all(|&value| value % 2 != 0) {
            return None;
        }

        // Parity-crossing multiplication, and even / odd division. Odd
        // divided by even is never exact.
        let mut seen_left = HashSet::new();
        for &i in &odds {
            if !seen_left.insert(work[i].value()) {
                continue;
            }
            let mut seen_right = HashSet::new();
            for &j in &evens {
                if !seen_right.insert(work[j].value()) {
                    continue;
                }
                if let Some(found) = self.try_branch(visited, work, i, j, Op::Mul, targets) {
                    return Some(found);
                }
                if let Some(found) = self.try_branch(visited, work, j, i, Op::Div, targets) {
                    return Some(found);
                }
            }
        }

        // Same-parity addition, subtraction and multiplication.
        for group in [&odds, &evens] {
            let mut seen_left = HashSet::new();
            for &i in group {
                if !seen_left.insert(work[i].value()) {
                    continue;
                }
                let mut seen_right = HashSet::new();
                for &j in group {
                    if j == i {
                        continue;
                    }
                    if !seen_right.insert(work[j].value()) {
                        continue;
                    }
                    for op in [Op::Add, Op::Sub, Op::Mul] {
                        if let Some(found) = self.try_branch(visited, work, i, j, op, targets) {
                            return Some(found);
                        }
                    }
                }
            }
        }

        None
    }

    /// Combine `work[left]` and `work[right]`, recurse on the reduced set.
    /// An inexact division is consumed here and simply prunes the branch.
    fn try_branch(
        &self,
        visited: &mut HashSet<Vec<i64>>,
        work: &[PostfixExpression],
        left: usize,
        right: usize,
        op: Op,
        targets: &[i64],
    ) -> Option<PostfixExpression> {
        let combined = match PostfixExpression::combine(&work[left], &work[right], op) {
            Ok(expression) => expression,
            Err(_) => return None,
        };

        let mut next = Vec::with_capacity(work.len() - 1);
        for (index, expression) in work.iter().enumerate() {
            if index != left && index != right {
                next.push(expression.clone());
            }
        }
        next.push(combined);

        self.search(visited, &next, targets)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
