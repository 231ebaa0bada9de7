use lib::prelude::*;

/// A file occupying `len` blocks from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct File {
    id: u64,
    start: u64,
    len: u64,
}

impl File {
    fn checksum(&self) -> u64 {
        // Sum of positions `start..start + len`, times the id.
        let positions = self.start * self.len + self.len * self.len.saturating_sub(1) / 2;
        self.id * positions
    }
}

#[derive(Default)]
struct Disk {
    /// The file id of every block, `None` for free space.
    blocks: Vec<Option<u64>>,
    files: Vec<File>,
    /// Runs of free space as `(start, len)`.
    free: Vec<(u64, u64)>,
}

impl Disk {
    fn parse(map: &[u8]) -> Result<Self> {
        let mut disk = Disk::default();
        let mut start = 0u64;

        for (n, &d) in map.iter().enumerate() {
            ensure!(
                d.is_ascii_digit(),
                "expected digit at {n}, found `{}`",
                d.escape_ascii()
            );

            let len = u64::from(d - b'0');

            if n % 2 == 0 {
                let id = u64::try_from(n / 2)?;
                disk.files.push(File { id, start, len });
                disk.blocks.extend((0..len).map(|_| Some(id)));
            } else {
                disk.free.push((start, len));
                disk.blocks.extend((0..len).map(|_| None));
            }

            start += len;
        }

        Ok(disk)
    }

    /// Move blocks one at a time from the end into the leftmost free block.
    fn compact_blocks(&self) -> u64 {
        let mut blocks = self.blocks.clone();
        let mut front = 0;
        let mut back = blocks.len();

        while front < back {
            if blocks[front].is_some() {
                front += 1;
            } else if blocks[back - 1].is_none() {
                back -= 1;
            } else {
                blocks.swap(front, back - 1);
            }
        }

        (0u64..)
            .zip(&blocks)
            .filter_map(|(position, id)| Some(position * (*id)?))
            .sum()
    }

    /// Move whole files, highest id first, into the leftmost run of free
    /// space which fits them.
    fn compact_files(&self) -> u64 {
        let mut free = self.free.clone();
        let mut checksum = 0;

        for file in self.files.iter().rev() {
            let mut file = *file;

            let run = free
                .iter_mut()
                .take_while(|(start, _)| *start < file.start)
                .find(|(_, len)| *len >= file.len);

            if let Some((start, len)) = run {
                file.start = *start;
                *start += file.len;
                *len -= file.len;
            }

            checksum += file.checksum();
        }

        checksum
    }
}

#[entry(input = "d09.txt", expect = (1928, 2858))]
fn solve(input: IStr) -> Result<(u64, u64)> {
    let disk = Disk::parse(input.as_data().trim())?;
    Ok((disk.compact_blocks(), disk.compact_files()))
}
