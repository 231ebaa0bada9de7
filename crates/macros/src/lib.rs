use proc_macro::TokenStream;

mod entry;
mod tokens;

/// Turn a solver into the `main` function of a puzzle binary.
///
/// ```ignore
/// use lib::prelude::*;
///
/// #[entry(input = "d02.txt", expect = 2)]
/// fn solve(mut input: IStr) -> Result<u32> {
///     todo!()
/// }
/// ```
///
/// The solver is called with the contents of `inputs/<input>`. The optional
/// `expect` answer is checked unless a custom input is passed with
/// `--input`. A solver not named `main` stays at module level so that tests
/// can call it.
#[proc_macro_attribute]
pub fn entry(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    crate::entry::build(args, item_stream)
}
