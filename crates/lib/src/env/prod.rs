use core::ops::Range;

use anyhow::bail;

use crate::cli::error::LineCol;
use crate::cli::Opts;
use crate::input::IStr;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size;

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self;

    #[inline]
    pub(crate) fn new(_: usize) -> Self {
        Self
    }

    #[inline]
    pub(crate) fn checked_add(self, _: Size) -> Option<Self> {
        Some(Self)
    }

    #[inline]
    pub(crate) fn saturating_add(self, _: Size) -> Self {
        Self
    }

    #[inline]
    pub(crate) fn advance(&mut self, _: usize) {}
}

pub(crate) fn pos_from(_: &[u8], _: Range<Size>) -> LineCol {
    LineCol::EMPTY
}

/// Wrap input embedded at compile time.
pub fn embedded(
    data: &'static [u8],
    path: &'static str,
    opts: &Opts,
) -> anyhow::Result<(IStr, Box<str>)> {
    if opts.input().is_some() {
        bail!("--input is not supported when input is embedded");
    }

    Ok((IStr::new(data, Size::ZERO), Box::from(path)))
}

/// Prepare an input processor.
#[macro_export]
macro_rules! input {
    ($path:literal, $opts:expr) => {
        $crate::env::embedded(
            include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path)),
            concat!("inputs/", $path),
            $opts,
        )?
    };
}
