use lib::grid::Grid;
use lib::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'^' => Some(Heading::Up),
            b'>' => Some(Heading::Right),
            b'v' => Some(Heading::Down),
            b'<' => Some(Heading::Left),
            _ => None,
        }
    }

    fn turn(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Bit marking that a position was left in this heading.
    fn bit(self) -> u8 {
        1 << self as u8
    }

    fn step(self, (row, column): (usize, usize)) -> Option<(usize, usize)> {
        Some(match self {
            Heading::Up => (row.checked_sub(1)?, column),
            Heading::Right => (row, column.checked_add(1)?),
            Heading::Down => (row.checked_add(1)?, column),
            Heading::Left => (row, column.checked_sub(1)?),
        })
    }
}

#[entry(input = "d06.txt", expect = (41, 6))]
fn solve(mut input: IStr) -> Result<(usize, usize)> {
    let data = input.as_data();
    let columns = input.line::<&[u8]>()?.len();
    let grid = data.as_grid_with_stride(columns, 1);

    let start = grid
        .position(|&b| Heading::from_byte(b).is_some())
        .context("no guard on the map")?;

    let heading = grid
        .try_get(start.0, start.1)
        .and_then(|&b| Heading::from_byte(b))
        .context("no guard on the map")?;

    let mut seen = vec![0u8; grid.rows_len() * columns];

    let visited = patrol(grid, (start, heading), None, &mut seen)
        .context("guard walks in a loop on the original map")?;

    // Only positions on the original path can change where the guard goes.
    let candidates = seen
        .iter()
        .enumerate()
        .filter(|(_, mark)| **mark != 0)
        .map(|(index, _)| (index / columns, index % columns))
        .filter(|&position| position != start)
        .collect::<Vec<_>>();

    let mut loops = 0;

    for &obstruction in &candidates {
        if patrol(grid, (start, heading), Some(obstruction), &mut seen).is_none() {
            loops += 1;
        }
    }

    log::debug!("{loops} of {} obstructions cause a loop", candidates.len());
    Ok((visited, loops))
}

/// Walk the guard until it leaves the map and count the distinct positions
/// visited. Returns `None` if the guard ends up walking in a loop.
fn patrol(
    grid: Grid<'_, u8>,
    (mut position, mut heading): ((usize, usize), Heading),
    obstruction: Option<(usize, usize)>,
    seen: &mut [u8],
) -> Option<usize> {
    seen.fill(0);
    let mut seen = seen.as_grid_mut(grid.columns_len());
    let mut visited = 0;

    loop {
        if let Some(mark) = seen.try_get_mut(position.0, position.1) {
            if *mark & heading.bit() != 0 {
                return None;
            }

            visited += usize::from(*mark == 0);
            *mark |= heading.bit();
        }

        let Some(next) = heading.step(position) else {
            break;
        };

        match grid.try_get(next.0, next.1) {
            None => break,
            Some(&b) if b == b'#' || Some(next) == obstruction => {
                heading = heading.turn();
            }
            Some(_) => {
                position = next;
            }
        }
    }

    Some(visited)
}
