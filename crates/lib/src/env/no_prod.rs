use core::ops::Range;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context};

use crate::cli::error::LineCol;
use crate::cli::Opts;
use crate::input::{IStr, NL};

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn checked_add(self, b: Size) -> Option<Self> {
        Some(Self(self.0.checked_add(b.0)?))
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.0 = self.0.saturating_add(n);
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Get the line and column of the start of the span.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    let start = span.start.0.min(data.len());

    let Some(head) = data.get(..start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, head).count();

    let column = match memchr::memrchr(NL, head) {
        Some(n) => start - n - 1,
        None => start,
    };

    LineCol::new(line, column)
}

/// Read input from disk.
///
/// If `--input` was passed it takes precedence over `read_path`. The buffer
/// is leaked, since it lives for as long as the process does anyway.
pub fn input(
    path: &'static str,
    read_path: &str,
    opts: &Opts,
) -> anyhow::Result<(IStr, Box<str>)> {
    let (path, read_path) = match opts.input() {
        Some(custom) => {
            let custom = Box::<str>::from(custom.to_string_lossy());
            (custom.clone(), custom)
        }
        None => (Box::from(path), Box::from(read_path)),
    };

    log::debug!("reading input from {read_path}");

    let data = read(Path::new(&*read_path)).with_context(|| anyhow!("{path}"))?;
    Ok((IStr::new(data, Size::ZERO), path))
}

fn read(path: &Path) -> anyhow::Result<&'static [u8]> {
    let mut file = File::open(path)?;
    let mut buf = Vec::with_capacity(4096);
    file.read_to_end(&mut buf)?;
    Ok(buf.leak())
}

/// Prepare an input processor.
#[macro_export]
macro_rules! input {
    ($path:literal, $opts:expr) => {
        $crate::env::input(
            concat!("inputs/", $path),
            concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path),
            $opts,
        )?
    };
}
