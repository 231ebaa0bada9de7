use core::fmt;
use core::ops::Range;

use thiserror::Error;

use crate::env::Size;
use crate::input::{IStr, IStrError};

/// Associate the location of an input error with it.
pub(crate) fn error_context<E>(path: &str, data: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let span = find_range(&error);
    let pos = crate::env::pos_from(data.as_data(), span);
    error.context(CliError::new(path, pos))
}

/// A line and column combination, zero-based.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// The input error could be wrapped in any number of contexts.
fn find_range(error: &anyhow::Error) -> Range<Size> {
    match error.chain().find_map(|e| e.downcast_ref::<IStrError>()) {
        Some(e) => e.span.clone(),
        None => Size::ZERO..Size::ZERO,
    }
}

/// Location in the input where a solver failed.
#[derive(Debug, Error)]
#[error("{path}:{pos}")]
pub struct CliError {
    path: Box<str>,
    pos: LineCol,
}

impl CliError {
    fn new(path: &str, pos: LineCol) -> Self {
        Self {
            path: path.into(),
            pos,
        }
    }
}
