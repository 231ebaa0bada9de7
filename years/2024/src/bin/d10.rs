use std::collections::HashSet;

use lib::grid::neighbours;
use lib::prelude::*;

#[entry(input = "d10.txt", expect = (36, 81))]
fn solve(mut input: IStr) -> Result<(usize, usize)> {
    let data = input.as_data();
    let columns = input.line::<&[u8]>()?.len();
    let grid = data.as_grid_with_stride(columns, 1);

    let mut score = 0;
    let mut rating = 0;
    let mut summits = HashSet::new();
    let mut queue = Vec::new();

    for (row, values) in grid.rows().enumerate() {
        for (column, &height) in values.iter().enumerate() {
            if height != b'0' {
                continue;
            }

            summits.clear();
            queue.push((row, column));

            // Every path up is walked separately, so each arrival at a summit
            // is a distinct trail.
            while let Some(position) = queue.pop() {
                let Some(&height) = grid.try_get(position.0, position.1) else {
                    continue;
                };

                if height == b'9' {
                    summits.insert(position);
                    rating += 1;
                    continue;
                }

                for next in neighbours(position) {
                    if grid.try_get(next.0, next.1) == Some(&(height + 1)) {
                        queue.push(next);
                    }
                }
            }

            score += summits.len();
        }
    }

    Ok((score, rating))
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::solve;

    #[test]
    fn single_trail() {
        let input = IStr::from("0123\n1234\n8765\n9876\n");
        assert_eq!(solve(input).unwrap(), (1, 16));
    }

    #[test]
    fn impassable_tiles() {
        let input = IStr::from("..90..9\n...1.98\n...2..7\n6543456\n765.987\n876....\n987....\n");
        assert_eq!(solve(input).unwrap(), (4, 13));
    }
}
