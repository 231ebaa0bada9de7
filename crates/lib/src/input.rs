//! Input parser.

mod error;

#[cfg(test)]
mod tests;

use core::mem;
use core::ops;
use std::str::from_utf8;

use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};

pub(self) type Result<T> = std::result::Result<T, IStrError>;
use crate::env::Size;

pub(crate) const NL: u8 = b'\n';

/// Cursor over puzzle input.
///
/// The cursor is `Copy`, so a solver can keep the original around while a
/// copy is consumed. The index always refers to the position in the original
/// input, which is what error reporting uses to produce `line:col`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(prod, repr(transparent))]
pub struct IStr {
    /// Remaining data.
    data: &'static [u8],
    /// Index of the first remaining byte in the original input.
    index: Size,
}

impl From<&'static str> for IStr {
    #[inline]
    fn from(data: &'static str) -> Self {
        Self::new(data.as_bytes(), Size::ZERO)
    }
}

impl IStr {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'static [u8], index: Size) -> Self {
        Self { data, index }
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the remaining input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get remaining input.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining input as a binary string.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors if there are no more lines.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Parse the next line as `T`, returns `Ok(None)` if there are no more
    /// lines or if `T` finds nothing to parse on the line.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        line.try_next()
    }

    /// Split off the input up to the next `byte`, consuming the byte itself.
    /// If `byte` doesn't occur, the rest of the input is returned.
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut input = IStr::from("47|53");
    /// assert_eq!(input.split(b'|').next::<u32>()?, 47);
    /// assert_eq!(input.next::<u32>()?, 53);
    /// # Ok::<_, lib::input::IStrError>(())
    /// ```
    #[inline]
    pub fn split(&mut self, byte: u8) -> IStr {
        self.split_once(byte).unwrap_or(IStr::new(&[], self.index))
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(Size::new(n));
    }

    /// Try to parse the next whitespace-delimited word.
    fn try_next_word<T>(&mut self) -> Result<Option<(Size, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            self.advance(n);
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((Size::new(s), value)))
    }

    /// Split once at the given byte or until the end of input.
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let index = self.index;
            self.index.advance(self.data.len());
            let data = mem::take(&mut self.data);
            return Some(IStr::new(data, index));
        };

        let line = IStr::new(self.data.get(..at)?, self.index);
        self.advance(at.checked_add(1)?);
        Some(line)
    }

    /// Find the first index at or after `n` matching the predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(Size::new(range.start))?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error kind used when a value is required but nothing was found.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `None` if there is nothing to parse.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest, )*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let index = p.index;

                    let Some($rest_id) = p.try_next()? else {
                        return Err(IStrError::new(index..p.index, ErrorKind::ExpectedTuple($num)));
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

macro_rules! integer {
    ($ty:ty) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let index = p.index;

                let Some((n, string)) = p.try_next_word::<&str>()? else {
                    return Ok(None);
                };

                let Ok(value) = str::parse(string) else {
                    let start = index.saturating_add(n);
                    return Err(IStrError::new(start..p.index, ErrorKind::NotInteger(string)));
                };

                Ok(Some(value))
            }
        }
    };
}

tuple!(2 => A a, B b);

integer!(u32);
integer!(u64);
integer!(i64);

impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let out = *p;
        p.advance(p.len());
        Ok(Some(out))
    }
}

impl FromInput for &[u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let data = mem::take(&mut p.data);
        p.index.advance(data.len());
        Ok(Some(data))
    }
}

impl FromInput for &str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;
        let data = mem::take(&mut p.data);
        p.index.advance(data.len());

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(element) = T::try_from_input(p)? {
            output.push(element);
        }

        Ok(Some(output))
    }
}
