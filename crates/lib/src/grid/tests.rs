use super::{neighbours, GridExt};

const MAP: &[u8] = b"MMMS\nMSAM\nAMXS";

#[test]
fn test_rows() {
    let grid = MAP.as_grid_with_stride(4, 1);
    assert_eq!(grid.rows_len(), 3);
    assert_eq!(grid.columns_len(), 4);
    assert!(grid.rows().eq([&b"MMMS"[..], &b"MSAM"[..], &b"AMXS"[..]]));

    // A trailing newline doesn't add a row.
    let grid = b"ab\ncd\n".as_grid_with_stride(2, 1);
    assert_eq!(grid.rows_len(), 2);

    let grid = b"".as_grid_with_stride(0, 0);
    assert_eq!(grid.rows_len(), 0);
    assert_eq!(grid.rows().count(), 0);
}

#[test]
fn test_get() {
    let grid = MAP.as_grid_with_stride(4, 1);
    assert_eq!(grid.try_get(0, 3), Some(&b'S'));
    assert_eq!(grid.try_get(2, 2), Some(&b'X'));
    // The separator is not part of the grid.
    assert_eq!(grid.try_get(0, 4), None);
    assert_eq!(grid.try_get(3, 0), None);
    assert_eq!(grid.position(|&c| c == b'X'), Some((2, 2)));
    assert_eq!(grid.position(|&c| c == b'#'), None);
}

#[test]
fn test_collect() {
    let grid = MAP.as_grid_with_stride(4, 1);

    let diagonal = grid.collect::<4>((0..).zip(0..));
    assert_eq!(&diagonal[..], b"MSX");

    let row = grid.collect::<2>((1..).zip([1; 8]));
    assert_eq!(&row[..], b"SA");

    let up = grid.collect::<4>([(1, 2), (1, 1), (1, 0)]);
    assert_eq!(&up[..], b"MSM");
}

#[test]
fn test_grid_mut() {
    let mut seen = [0u8; 6];
    let mut grid = seen.as_grid_mut(3);

    if let Some(value) = grid.try_get_mut(1, 2) {
        *value = 1;
    }

    assert!(grid.try_get_mut(0, 3).is_none());
    assert!(grid.try_get_mut(2, 0).is_none());
    assert_eq!(seen, [0, 0, 0, 0, 0, 1]);
}

#[test]
fn test_neighbours() {
    assert!(neighbours((0, 0)).eq([(0, 1), (1, 0)]));
    assert!(neighbours((2, 3)).eq([(1, 3), (2, 4), (3, 3), (2, 2)]));
}
