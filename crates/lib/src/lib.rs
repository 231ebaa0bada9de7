//! Shared support for Advent of Code solutions.
//!
//! Solutions live in binaries under `years/`, each declared through
//! [`#[entry]`][prelude::entry]. The puzzle logic which is worth testing on
//! its own lives in [report] and [scan].

pub mod cli;
#[doc(hidden)]
#[cfg_attr(prod, path = "env/prod.rs")]
#[cfg_attr(not(prod), path = "env/no_prod.rs")]
pub mod env;
pub mod grid;
pub mod input;
pub mod report;
pub mod scan;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::GridExt;
    pub use crate::input::IStr;
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use bstr::{BStr, ByteSlice};
    pub use macros::entry;
}
