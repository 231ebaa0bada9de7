use lib::prelude::*;
use lib::scan::Scanner;

#[entry(input = "d03.txt", expect = (161, 48))]
fn solve(input: IStr) -> Result<(u64, u64)> {
    let mut plain = Scanner::plain();
    let mut toggled = Scanner::toggled();

    for c in input.as_bstr().chars() {
        plain.push(c);
        toggled.push(c);
    }

    Ok((plain.total(), toggled.total()))
}
