//! Target buckets: one set of acceptable values per spell level, plus the
//! zero bucket used internally by the lookup table's composition step.

/// A spell level's set of target values.
///
/// Levels 1-9 each map to three small primes; `Zero` is the auxiliary bucket
/// whose only member is 0, used to absorb leftover rolls during table
/// lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Target {
    pub const ALL: [Target; 10] = [
        Target::Zero,
        Target::One,
        Target::Two,
        Target::Three,
        Target::Four,
        Target::Five,
        Target::Six,
        Target::Seven,
        Target::Eight,
        Target::Nine,
    ];

    /// The values that count as a hit for this bucket.
    pub fn values(self) -> &'static [i64] {
        match self {
            Target::Zero => &[0],
            Target::One => &[3, 5, 7],
            Target::Two => &[11, 13, 17],
            Target::Three => &[19, 23, 29],
            Target::Four => &[31, 37, 41],
            Target::Five => &[43, 47, 53],
            Target::Six => &[59, 61, 67],
            Target::Seven => &[71, 73, 79],
            Target::Eight => &[83, 89, 97],
            Target::Nine => &[101, 103, 107],
        }
    }

    /// Bucket for a numeric spell level, 0-9.
    pub fn from_level(level: u8) -> Option<Target> {
        Target::ALL.get(level as usize).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Target::Zero => 0,
            Target::One => 1,
            Target::Two => 2,
            Target::Three => 3,
            Target::Four => 4,
            Target::Five => 5,
            Target::Six => 6,
            Target::Seven => 7,
            Target::Eight => 8,
            Target::Nine => 9,
        }
    }

    /// Name of this bucket's persisted solution file.
    pub fn file_name(self) -> String {
        format!("sg{}", self.index())
    }

    /// Name of this bucket's persisted known-unsolvable file.
    pub fn failure_file_name(self) -> String {
        format!("sg{}f", self.index())
    }
}
