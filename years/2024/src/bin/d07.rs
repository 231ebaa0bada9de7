use lib::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Mul,
    Concat,
}

impl Op {
    /// Apply the operator, `None` on overflow.
    fn apply(self, a: u64, b: u64) -> Option<u64> {
        match self {
            Op::Add => a.checked_add(b),
            Op::Mul => a.checked_mul(b),
            Op::Concat => {
                let mut shift = 10u64;

                while shift <= b {
                    shift = shift.checked_mul(10)?;
                }

                a.checked_mul(shift)?.checked_add(b)
            }
        }
    }
}

#[entry(input = "d07.txt", expect = (3749, 11387))]
fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut plain = 0u64;
    let mut concat = 0u64;
    let mut operands = Vec::new();

    while let Some(mut line) = input.try_line::<IStr>()? {
        if line.is_empty() {
            continue;
        }

        let target = line.split(b':').next::<u64>()?;

        operands.clear();

        while let Some(n) = line.try_next::<u64>()? {
            operands.push(n);
        }

        if solvable(target, &operands, &[Op::Add, Op::Mul]) {
            plain = plain.checked_add(target).context("total overflows")?;
        }

        if solvable(target, &operands, &[Op::Add, Op::Mul, Op::Concat]) {
            concat = concat.checked_add(target).context("total overflows")?;
        }
    }

    Ok((plain, concat))
}

/// Test if combining `operands` left to right with any of `ops` can produce
/// `target`.
fn solvable(target: u64, operands: &[u64], ops: &[Op]) -> bool {
    let [first, rest @ ..] = operands else {
        return false;
    };

    search(target, *first, rest, ops)
}

fn search(target: u64, value: u64, rest: &[u64], ops: &[Op]) -> bool {
    let [next, rest @ ..] = rest else {
        return value == target;
    };

    ops.iter()
        .filter_map(|op| op.apply(value, *next))
        .any(|value| search(target, value, rest, ops))
}
