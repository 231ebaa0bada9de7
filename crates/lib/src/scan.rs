//! Scanner for `mul(a,b)` instructions in corrupted memory.
//!
//! The scanner is a finite-state machine fed one character at a time. It
//! recognizes three tokens:
//!
//! * `mul(A,B)` where `A` and `B` are one or more decimal digits,
//! * `don't()` which disables instructions,
//! * `do()` which enables them again.
//!
//! Everything else is noise. A character which does not extend the token
//! being matched aborts it, after which the same character is considered as
//! the potential start of a new token. Tokens never share characters.

use core::fmt;

#[cfg(test)]
mod tests;

/// Which tokens the scanner reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every instruction counts, `do()` and `don't()` are noise.
    Plain,
    /// Instructions only count while enabled.
    Toggled,
}

/// A matched `mul(a,b)` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub a: u64,
    pub b: u64,
}

impl Instruction {
    /// The product contributed by this instruction.
    #[inline]
    pub fn product(self) -> u64 {
        self.a.saturating_mul(self.b)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mul({},{})", self.a, self.b)
    }
}

/// A completed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Mul(Instruction),
    Enable,
    Disable,
}

/// Tokens which may start or continue in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Watch {
    pub(crate) mul: bool,
    pub(crate) enable: bool,
    pub(crate) disable: bool,
}

impl Watch {
    /// Tokens to watch for in `mode` given the current enabled state.
    ///
    /// While disabled instructions are ignored entirely, so only `do()` can
    /// make progress.
    #[inline]
    pub(crate) fn new(mode: Mode, enabled: bool) -> Self {
        match mode {
            Mode::Plain => Self {
                mul: true,
                enable: false,
                disable: false,
            },
            Mode::Toggled => Self {
                mul: enabled,
                enable: !enabled,
                disable: enabled,
            },
        }
    }

    #[inline]
    fn sentinel(self) -> bool {
        self.enable || self.disable
    }
}

/// How much of a token has been matched so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum State {
    /// Nothing matched.
    #[default]
    Idle,
    /// `m`
    M,
    /// `mu`
    Mu,
    /// `mul`
    Mul,
    /// `mul(`
    Open,
    /// `mul(` followed by digits.
    Left(u64),
    /// `mul(A,`
    Comma(u64),
    /// `mul(A,` followed by digits.
    Right(u64, u64),
    /// `d`
    D,
    /// `do`
    Do,
    /// `do(`
    DoOpen,
    /// `don`
    Don,
    /// `don'`
    DonQuote,
    /// `don't`
    Dont,
    /// `don't(`
    DontOpen,
}

impl State {
    /// State after seeing `c` when nothing is being matched.
    #[inline]
    fn start(c: char, watch: Watch) -> State {
        match c {
            'm' if watch.mul => State::M,
            'd' if watch.sentinel() => State::D,
            _ => State::Idle,
        }
    }
}

/// Perform a single transition.
///
/// Returns the next state and the token completed by `c`, if any.
pub(crate) fn transition(state: State, watch: Watch, c: char) -> (State, Option<Event>) {
    let next = match (state, c) {
        (State::M, 'u') => State::Mu,
        (State::Mu, 'l') => State::Mul,
        (State::Mul, '(') => State::Open,
        (State::Open, '0'..='9') => State::Left(digit(0, c)),
        (State::Left(a), '0'..='9') => State::Left(digit(a, c)),
        (State::Left(a), ',') => State::Comma(a),
        (State::Comma(a), '0'..='9') => State::Right(a, digit(0, c)),
        (State::Right(a, b), '0'..='9') => State::Right(a, digit(b, c)),
        (State::Right(a, b), ')') => {
            return (State::Idle, Some(Event::Mul(Instruction { a, b })));
        }
        (State::D, 'o') => State::Do,
        (State::Do, '(') if watch.enable => State::DoOpen,
        (State::DoOpen, ')') => {
            return (State::Idle, Some(Event::Enable));
        }
        (State::Do, 'n') if watch.disable => State::Don,
        (State::Don, '\'') => State::DonQuote,
        (State::DonQuote, 't') => State::Dont,
        (State::Dont, '(') => State::DontOpen,
        (State::DontOpen, ')') => {
            return (State::Idle, Some(Event::Disable));
        }
        _ => State::start(c, watch),
    };

    (next, None)
}

/// Append a decimal digit to `n`.
#[inline]
fn digit(n: u64, c: char) -> u64 {
    let d = u64::from(c.to_digit(10).unwrap_or_default());
    n.saturating_mul(10).saturating_add(d)
}

/// Scanner accumulating the products of enabled instructions.
///
/// # Examples
///
/// ```
/// use lib::scan::Scanner;
///
/// let mut scanner = Scanner::toggled();
/// scanner.extend("don't()mul(2,3)do()mul(4,5)".chars());
/// assert_eq!(scanner.total(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    mode: Mode,
    state: State,
    enabled: bool,
    total: u64,
}

impl Scanner {
    /// Construct a new scanner, initially enabled.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            state: State::Idle,
            enabled: true,
            total: 0,
        }
    }

    /// Construct a scanner where every instruction counts.
    pub fn plain() -> Self {
        Self::new(Mode::Plain)
    }

    /// Construct a scanner honoring `do()` and `don't()`.
    pub fn toggled() -> Self {
        Self::new(Mode::Toggled)
    }

    /// Start in the given enabled state, used to resume scanning where an
    /// earlier scan left off.
    pub fn with_enabled(self, enabled: bool) -> Self {
        Self {
            enabled: enabled || self.mode == Mode::Plain,
            ..self
        }
    }

    /// Feed a single character.
    pub fn push(&mut self, c: char) {
        let watch = Watch::new(self.mode, self.enabled);
        let (state, event) = transition(self.state, watch, c);
        self.state = state;

        match event {
            Some(Event::Mul(instruction)) => {
                if self.enabled {
                    self.total = self.total.saturating_add(instruction.product());
                }
            }
            Some(Event::Enable) => {
                log::debug!("enabled at total {}", self.total);
                self.enabled = true;
            }
            Some(Event::Disable) => {
                log::debug!("disabled at total {}", self.total);
                self.enabled = false;
            }
            None => {}
        }
    }

    /// Total of all enabled instructions seen so far.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Test if instructions currently count.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Extend<char> for Scanner {
    #[inline]
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = char>,
    {
        for c in iter {
            self.push(c);
        }
    }
}

/// Scan `text` honoring `do()` and `don't()`.
pub fn scan(text: &str) -> u64 {
    let mut scanner = Scanner::toggled();
    scanner.extend(text.chars());
    scanner.total()
}

/// Scan `text` counting every instruction.
pub fn scan_plain(text: &str) -> u64 {
    let mut scanner = Scanner::plain();
    scanner.extend(text.chars());
    scanner.total()
}
