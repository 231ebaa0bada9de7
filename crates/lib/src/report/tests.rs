use proptest::prelude::*;

use super::{first_violation, is_safe, Violation};

#[test]
fn test_trivially_safe() {
    assert!(is_safe([]));
    assert!(is_safe([5]));
}

#[test]
fn test_monotonic() {
    assert!(is_safe([1, 2, 3, 4, 5]));
    assert!(is_safe([5, 4, 3, 2, 1]));
    assert!(is_safe([1, 3, 6, 7, 9]));
    assert!(is_safe([-3, -1, 2]));
}

#[test]
fn test_violations() {
    assert_eq!(first_violation([1, 2, 2, 3]), Some((1, Violation::Flat)));
    assert_eq!(first_violation([1, 5, 2]), Some((0, Violation::Step(4))));
    assert_eq!(first_violation([1, 3, 2, 4]), Some((1, Violation::Reversal)));
    assert_eq!(first_violation([9, 7, 6, 2, 1]), Some((2, Violation::Step(4))));
    assert_eq!(first_violation([8, 6, 4, 4, 1]), Some((2, Violation::Flat)));
    assert_eq!(first_violation([1, 2, 7, 8, 9]), Some((1, Violation::Step(5))));
}

#[test]
fn test_example() {
    let reports: [&[i64]; 6] = [
        &[7, 6, 4, 2, 1],
        &[1, 2, 7, 8, 9],
        &[9, 7, 6, 2, 1],
        &[1, 3, 2, 4, 5],
        &[8, 6, 4, 4, 1],
        &[1, 3, 6, 7, 9],
    ];

    let safe = reports
        .iter()
        .filter(|levels| is_safe(levels.iter().copied()))
        .count();

    assert_eq!(safe, 2);
}

#[test]
fn test_extreme_levels() {
    assert!(!is_safe([i64::MIN, i64::MAX]));
    assert!(is_safe([i64::MAX - 3, i64::MAX]));
}

proptest! {
    #[test]
    fn reversal_preserves_verdict(levels in proptest::collection::vec(-10i64..10, 0..12)) {
        let forward = is_safe(levels.iter().copied());
        let backward = is_safe(levels.iter().rev().copied());
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn bounded_steps_are_safe(start in -100i64..100, steps in proptest::collection::vec(1i64..=3, 0..12), up in any::<bool>()) {
        let sign = if up { 1 } else { -1 };

        let levels = steps.iter().scan(start, |level, step| {
            *level += sign * step;
            Some(*level)
        });

        prop_assert!(is_safe([start].into_iter().chain(levels)));
    }
}
