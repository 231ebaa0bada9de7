use std::collections::HashSet;

use lib::prelude::*;

/// Page ordering rules, as `(before, after)` pairs.
type Rules = HashSet<(u32, u32)>;

#[entry(input = "d05.txt", expect = (143, 123))]
fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let mut rules = Rules::new();

    while let Some(mut line) = input.try_line::<IStr>()? {
        if line.is_empty() {
            break;
        }

        let before = line.split(b'|').next::<u32>()?;
        let after = line.next::<u32>()?;
        rules.insert((before, after));
    }

    let mut ordered = 0;
    let mut fixed = 0;
    let mut pages = Vec::new();

    while let Some(mut line) = input.try_line::<IStr>()? {
        pages.clear();

        while !line.is_empty() {
            pages.push(line.split(b',').next::<u32>()?);
        }

        if pages.is_empty() {
            continue;
        }

        let middle = middle(&rules, &pages).context("pages can't be ordered")?;

        if is_ordered(&rules, &pages) {
            ordered += middle;
        } else {
            fixed += middle;
        }
    }

    Ok((ordered, fixed))
}

/// Test that no rule requires a later page to come before an earlier one.
fn is_ordered(rules: &Rules, pages: &[u32]) -> bool {
    pages
        .iter()
        .enumerate()
        .all(|(n, &a)| pages[n + 1..].iter().all(|&b| !rules.contains(&(b, a))))
}

/// The page which ends up in the middle once the update is ordered, which is
/// the one with exactly half of the other pages ordered before it.
fn middle(rules: &Rules, pages: &[u32]) -> Option<u32> {
    let half = pages.len() / 2;

    pages.iter().copied().find(|&page| {
        pages
            .iter()
            .filter(|&&other| rules.contains(&(other, page)))
            .count()
            == half
    })
}

#[cfg(test)]
mod tests {
    use super::{is_ordered, middle, Rules};

    #[test]
    fn middle_of_reordered_update() {
        let rules = Rules::from([(97, 75), (97, 47), (75, 47), (47, 13), (97, 13), (75, 13)]);

        assert!(!is_ordered(&rules, &[75, 97, 47]));
        assert_eq!(middle(&rules, &[75, 97, 47]), Some(75));

        assert!(is_ordered(&rules, &[97, 75, 47, 13]));
        assert_eq!(middle(&rules, &[97, 75, 47, 13]), Some(47));

        assert!(is_ordered(&rules, &[5]));
        assert_eq!(middle(&rules, &[5]), Some(5));

        // Without rules nothing is ordered before anything else.
        assert_eq!(middle(&Rules::new(), &[1, 2, 3]), None);
    }
}
