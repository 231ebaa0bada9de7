use lib::prelude::*;

#[entry(input = "d01.txt", expect = (11, 31))]
fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    while let Some(mut line) = input.try_line::<IStr>()? {
        let Some((l, r)) = line.try_next::<(u64, u64)>()? else {
            continue;
        };

        left.push(l);
        right.push(r);
    }

    left.sort_unstable();
    right.sort_unstable();

    let distance = left
        .iter()
        .zip(&right)
        .try_fold(0u64, |sum, (l, r)| sum.checked_add(l.abs_diff(*r)))
        .context("distance overflows")?;

    let mut similarity = 0u64;

    // Equal values are adjacent in the sorted right column.
    for &l in &left {
        let start = right.partition_point(|&r| r < l);
        let end = right.partition_point(|&r| r <= l);
        let count = u64::try_from(end - start)?;

        similarity = l
            .checked_mul(count)
            .and_then(|score| similarity.checked_add(score))
            .context("similarity overflows")?;
    }

    Ok((distance, similarity))
}
