//! Validation of reactor reports.
//!
//! A report is a sequence of levels. It is safe if the levels are strictly
//! increasing or strictly decreasing, with every step between adjacent levels
//! being at most [MAX_STEP].

use core::cmp::Ordering;
use core::fmt;
use std::iter::from_fn;

#[cfg(test)]
mod tests;

/// The largest allowed difference between two adjacent levels.
pub const MAX_STEP: u64 = 3;

/// Why a pair of adjacent levels makes a report unsafe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Two adjacent levels are equal.
    Flat,
    /// The step between two adjacent levels exceeds [MAX_STEP].
    Step(u64),
    /// The pair goes in the opposite direction of the first pair.
    Reversal,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Flat => write!(f, "no change"),
            Violation::Step(step) => write!(f, "step of {step} exceeds {MAX_STEP}"),
            Violation::Reversal => write!(f, "direction reversed"),
        }
    }
}

/// Test if the given report is safe.
///
/// # Examples
///
/// ```
/// use lib::report;
///
/// assert!(report::is_safe([7, 6, 4, 2, 1]));
/// assert!(!report::is_safe([1, 2, 7, 8, 9]));
/// assert!(report::is_safe([]));
/// ```
#[inline]
pub fn is_safe<I>(levels: I) -> bool
where
    I: IntoIterator<Item = i64>,
{
    first_violation(levels).is_none()
}

/// Find the first adjacent pair which makes the report unsafe.
///
/// Returns the index of the first level in the offending pair together with
/// the rule it violates. Scanning stops at the first violation.
pub fn first_violation<I>(levels: I) -> Option<(usize, Violation)>
where
    I: IntoIterator<Item = i64>,
{
    let mut direction = None;

    for (n, (a, b)) in pairs(levels).enumerate() {
        let ordering = a.cmp(&b);

        if ordering == Ordering::Equal {
            return Some((n, Violation::Flat));
        }

        let step = a.abs_diff(b);

        if step > MAX_STEP {
            return Some((n, Violation::Step(step)));
        }

        match direction {
            None => {
                direction = Some(ordering);
            }
            Some(expected) if expected != ordering => {
                return Some((n, Violation::Reversal));
            }
            Some(..) => {}
        }
    }

    None
}

/// Iterate over adjacent pairs.
#[inline]
fn pairs<I>(it: I) -> impl Iterator<Item = (i64, i64)>
where
    I: IntoIterator<Item = i64>,
{
    let mut it = it.into_iter();
    let mut buf = it.next();

    from_fn(move || {
        let a = buf.take()?;
        let b = it.next()?;
        buf = Some(b);
        Some((a, b))
    })
}
