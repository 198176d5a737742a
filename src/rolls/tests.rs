use std::collections::HashSet;

use crate::rolls::errors::RollError;
use crate::rolls::set::RollSet;

#[test]
fn test_parse() {
    let set = RollSet::parse("2835").unwrap();
    assert_eq!(set.len(), 4);
    assert_eq!(set.count(2), 1);
    assert_eq!(set.count(8), 1);
    assert_eq!(set.count(4), 0);
}

#[test]
fn test_parse_rejects_invalid_tokens() {
    assert_eq!(RollSet::parse("239"), Err(RollError::InvalidRollToken('9')));
    assert_eq!(RollSet::parse("2a3"), Err(RollError::InvalidRollToken('a')));
    assert_eq!(RollSet::parse("203"), Err(RollError::InvalidRollToken('0')));
}

#[test]
fn test_from_rolls_rejects_out_of_range_values() {
    assert_eq!(RollSet::from_rolls(&[1, 9]), Err(RollError::InvalidRoll(9)));
    assert_eq!(RollSet::from_rolls(&[0]), Err(RollError::InvalidRoll(0)));
    assert!(RollSet::from_rolls(&[1, 8, 8]).is_ok());
}

#[test]
fn test_counts_saturate_instead_of_wrapping() {
    let set = RollSet::parse(&"8".repeat(258)).unwrap();
    assert_eq!(set.count(8), 255);
    assert_eq!(set.len(), 255);

    let mut set = RollSet::new();
    set.add(3, 200);
    set.add(3, 200);
    assert_eq!(set.count(3), 255);
}

#[test]
fn test_equality_ignores_order() {
    let a = RollSet::parse("1234").unwrap();
    let b = RollSet::parse("4321").unwrap();
    assert_eq!(a, b);

    let mut seen = HashSet::new();
    seen.insert(a);
    assert!(seen.contains(&b));
}

#[test]
fn test_superset_and_difference() {
    let full = RollSet::parse("22345").unwrap();
    let sub = RollSet::parse("234").unwrap();
    assert!(full.is_superset_of(&sub));
    assert!(!sub.is_superset_of(&full));

    let rest = full.difference(&sub);
    assert_eq!(rest, RollSet::parse("25").unwrap());

    // Difference saturates per face.
    let other = RollSet::parse("2224").unwrap();
    let rest = full.difference(&other);
    assert_eq!(rest, RollSet::parse("35").unwrap());
}

#[test]
fn test_iter_is_sorted() {
    let set = RollSet::parse("8212").unwrap();
    let rolls: Vec<u8> = set.iter().collect();
    assert_eq!(rolls, vec![1, 2, 2, 8]);
}

#[test]
fn test_display() {
    let set = RollSet::parse("8212").unwrap();
    assert_eq!(format!("{}", set), "[1, 2, 2, 8]");
    assert_eq!(format!("{}", RollSet::new()), "[]");
}
