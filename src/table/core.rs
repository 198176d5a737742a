use std::collections::HashSet;
use std::path::Path;

use log::{debug, warn};

use crate::codec::{read_failure_file, read_table_file};
use crate::expression::{Op, PostfixExpression};
use crate::rolls::RollSet;
use crate::target::Target;

#[derive(Debug, Default)]
struct Bucket {
    entries: Vec<(RollSet, PostfixExpression)>,
    failures: HashSet<RollSet>,
}

/// Process-wide, read-only index of precomputed roll-subset to expression
/// mappings, one bucket per target.
///
/// Built once at startup and shared by reference afterwards; `lookup` takes
/// `&self` and allocates nothing beyond the returned expression, so
/// independent queries need no synchronization.
#[derive(Debug, Default)]
pub struct LookupTable {
    buckets: [Bucket; 10],
}

impl LookupTable {
    /// A table with no entries; every query falls through to full search.
    pub fn empty() -> LookupTable {
        LookupTable::default()
    }

    /// Load every bucket's solution file (`sg0`-`sg9`) and optional failure
    /// file (`sg0f`-`sg9f`) from `dir`.
    ///
    /// A missing or corrupt file degrades that bucket to empty rather than
    /// failing the load; the affected queries simply fall back to full
    /// search.
    pub fn load(dir: &Path) -> LookupTable {
        let mut table = LookupTable::empty();
        for target in Target::ALL {
            let bucket = &mut table.buckets[target.index()];

            let path = dir.join(target.file_name());
            match read_table_file(&path) {
                Ok(entries) => {
                    debug!("Loaded {} entries for {:?}", entries.len(), target);
                    bucket.entries = entries;
                }
                Err(err) => {
                    warn!(
                        "Could not load table {} ({}); bucket {:?} degraded to empty",
                        path.display(),
                        err,
                        target
                    );
                }
            }

            let failure_path = dir.join(target.failure_file_name());
            if failure_path.exists() {
                match read_failure_file(&failure_path) {
                    Ok(sets) => {
                        debug!("Loaded {} failure entries for {:?}", sets.len(), target);
                        bucket.failures = sets.into_iter().collect();
                    }
                    Err(err) => {
                        warn!(
                            "Could not load failure file {} ({}); ignoring it",
                            failure_path.display(),
                            err
                        );
                    }
                }
            }
        }
        table
    }

    /// Number of solution entries for `target`.
    pub fn entry_count(&self, target: Target) -> usize {
        self.buckets[target.index()].entries.len()
    }

    /// True when `rolls` is recorded as unsolvable for `target`.
    pub fn known_unsolvable(&self, rolls: &RollSet, target: Target) -> bool {
        self.buckets[target.index()].failures.contains(rolls)
    }

    /// Answer a query from precomputed entries, if possible.
    ///
    /// Scans the bucket for an entry whose roll subset is covered by the
    /// query. An exact match answers directly; a partial match is completed
    /// by covering part of the remainder with a zero-valued expression from
    /// the zero bucket and multiplying any rolls still left over into it,
    /// which keeps the composite's value equal to the matched entry's. A
    /// return of `None` just means no shortcut; it never rules a query out.
    pub fn lookup(&self, rolls: &RollSet, target: Target) -> Option<PostfixExpression> {
        let bucket = &self.buckets[target.index()];

        for (subset, expression) in &bucket.entries {
            if !rolls.is_superset_of(subset) {
                continue;
            }
            if subset == rolls {
                debug!("Exact table hit for {}", rolls);
                return Some(expression.clone());
            }

            let remainder = rolls.difference(subset);
            for (zero_subset, zero_expression) in &self.buckets[Target::Zero.index()].entries {
                if !remainder.is_superset_of(zero_subset) {
                    continue;
                }
                let leftovers = remainder.difference(zero_subset);
                if let Some(composite) = compose(expression, zero_expression, &leftovers) {
                    debug!("Composite table hit for {}", rolls);
                    return Some(composite);
                }
            }
        }
        None
    }
}

/// Append the zero-valued branch, multiplied by every leftover roll, to the
/// matched expression. The product stays zero, so the addition leaves the
/// matched value intact while consuming every remaining roll.
fn compose(
    expression: &PostfixExpression,
    zero_expression: &PostfixExpression,
    leftovers: &RollSet,
) -> Option<PostfixExpression> {
    let mut absorbed = zero_expression.clone();
    for roll in leftovers.iter() {
        absorbed = PostfixExpression::combine(&absorbed, &PostfixExpression::literal(roll), Op::Mul)
            .ok()?;
    }
    PostfixExpression::combine(expression, &absorbed, Op::Add).ok()
}
