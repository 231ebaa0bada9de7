use core::ops::Range;

use thiserror::Error;

use crate::env::Size;

/// The kind of an input error.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not an integer or integer overflow `{0}`")]
    NotInteger(&'static str),
    #[error("not utf-8")]
    NotUtf8,
    #[error("expected line")]
    ExpectedLine,
    #[error("expected tuple of length `{0}`")]
    ExpectedTuple(usize),
    #[error("unexpected eof")]
    UnexpectedEof,
}

/// Error raised through string processing.
///
/// The span is turned into a `path:line:col` context by the runner, so it's
/// left out of the message.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Access the kind of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}
