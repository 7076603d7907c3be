#![cfg(test)]

use super::*;

#[test]
fn test_finds_first_positive() {
    let data = [-1, -3, -5, 8, 15, -1];
    assert_eq!(
        good::first_positive(&data),
        Some(3),
        "The first positive value sits at index 3."
    );
    assert_eq!(
        bad::first_positive(&data),
        3,
        "The raw loop agrees whenever a match exists."
    );
}

#[test]
fn test_match_at_index_zero() {
    let data = [9, -1];
    assert_eq!(good::first_positive(&data), Some(0));
    assert_eq!(bad::first_positive(&data), 0);
}

#[test]
fn test_absence() {
    let all_negative = [-1, -2, -3];
    assert_eq!(
        good::first_positive(&all_negative),
        None,
        "Absence should be representable."
    );
    assert_eq!(
        bad::first_positive(&all_negative),
        bad::first_positive(&[9, -1]),
        "The sentinel can't tell \"nothing matched\" apart from \"matched at index 0\"."
    );
}
