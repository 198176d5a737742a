use std::fmt;

use log::debug;

use crate::rolls::errors::RollError;

/// Number of distinct die faces.
pub const FACES: usize = 8;
/// Smallest roll set accepted at the solve boundary.
pub const MIN_ROLLS: usize = 2;
/// Largest roll set accepted at the solve boundary.
pub const MAX_ROLLS: usize = 20;

/// An unordered multiset of die-face values 1-8.
///
/// Stored as per-face counts, so equality and hashing are by counts and
/// independent of insertion order. Construction validates face values; the
/// 2-20 size bound is enforced at the solve boundary, not here, since table
/// entries legitimately hold smaller subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RollSet {
    counts: [u8; FACES],
}

impl RollSet {
    pub fn new() -> RollSet {
        RollSet::default()
    }

    /// Parse a string of roll digits, e.g. `"2835"`.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::InvalidRollToken`] for any character outside
    /// `1-8`.
    pub fn parse(rolls: &str) -> Result<RollSet, RollError> {
        debug!("Parsing roll string '{}'", rolls);
        let mut set = RollSet::new();
        for c in rolls.chars() {
            match c.to_digit(10) {
                Some(face @ 1..=8) => set.add(face as u8, 1),
                _ => return Err(RollError::InvalidRollToken(c)),
            }
        }
        Ok(set)
    }

    /// Build a roll set from numeric face values.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::InvalidRoll`] for a value outside 1-8.
    pub fn from_rolls(rolls: &[u8]) -> Result<RollSet, RollError> {
        let mut set = RollSet::new();
        for &roll in rolls {
            if !(1..=8).contains(&roll) {
                return Err(RollError::InvalidRoll(roll));
            }
            set.add(roll, 1);
        }
        Ok(set)
    }

    /// Add `copies` occurrences of `face`. Callers must pass a face in 1-8.
    /// Counts saturate at 255, far beyond the solve-boundary maximum, so an
    /// absurdly long roll string still fails the size check instead of
    /// wrapping around.
    pub fn add(&mut self, face: u8, copies: u8) {
        debug_assert!((1..=FACES as u8).contains(&face));
        let slot = &mut self.counts[usize::from(face) - 1];
        *slot = slot.saturating_add(copies);
    }

    /// Occurrences of `face`, zero for anything outside 1-8.
    pub fn count(&self, face: u8) -> u8 {
        if (1..=FACES as u8).contains(&face) {
            self.counts[usize::from(face) - 1]
        } else {
            0
        }
    }

    /// Total number of rolls.
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// True when every face count in `other` is covered by this set.
    pub fn is_superset_of(&self, other: &RollSet) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(mine, theirs)| mine >= theirs)
    }

    /// The rolls in this set not matched by `other`, per face and
    /// saturating at zero.
    pub fn difference(&self, other: &RollSet) -> RollSet {
        let mut counts = [0u8; FACES];
        for (i, slot) in counts.iter_mut().enumerate() {
            *slot = self.counts[i].saturating_sub(other.counts[i]);
        }
        RollSet { counts }
    }

    /// Iterate `(face, count)` pairs for faces present in the set, in face
    /// order.
    pub fn faces(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(i, &count)| (i as u8 + 1, count))
    }

    /// Iterate every roll individually, in ascending face order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.faces()
            .flat_map(|(face, count)| std::iter::repeat(face).take(usize::from(count)))
    }
}

impl fmt::Display for RollSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, roll) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", roll)?;
        }
        write!(f, "]")
    }
}
