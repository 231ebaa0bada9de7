use lib::prelude::*;

/// Steps to read a word in, as `(column, row)` offsets.
const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

#[entry(input = "d04.txt", expect = (18, 9))]
fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let data = input.as_data();
    let columns = input.line::<&[u8]>()?.len();
    let grid = data.as_grid_with_stride(columns, 1);

    let mut words = 0;
    let mut crosses = 0;

    for (row, values) in grid.rows().enumerate() {
        for (column, &c) in values.iter().enumerate() {
            match c {
                b'X' => {
                    for step in DIRECTIONS {
                        let word = grid.collect::<4>(ray((column, row), step));
                        words += u32::from(&word[..] == b"XMAS");
                    }
                }
                b'A' => {
                    let (Some(left), Some(up)) = (column.checked_sub(1), row.checked_sub(1)) else {
                        continue;
                    };

                    let a = grid.collect::<3>(ray((left, up), (1, 1)));
                    let b = grid.collect::<3>(ray((column + 1, up), (-1, 1)));

                    crosses += u32::from(matches!(
                        (&a[..], &b[..]),
                        (b"MAS" | b"SAM", b"MAS" | b"SAM")
                    ));
                }
                _ => {}
            }
        }
    }

    Ok((words, crosses))
}

/// Positions from `start` moving by `step` until they underflow.
fn ray(
    (column, row): (usize, usize),
    (dx, dy): (isize, isize),
) -> impl Iterator<Item = (usize, usize)> {
    (0isize..).map_while(move |n| {
        Some((
            column.checked_add_signed(dx.checked_mul(n)?)?,
            row.checked_add_signed(dy.checked_mul(n)?)?,
        ))
    })
}
