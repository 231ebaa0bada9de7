use lib::prelude::*;
use lib::report;

#[entry(input = "d02.txt", expect = 2)]
fn solve(mut input: IStr) -> Result<u32> {
    let mut safe = 0;
    let mut line = 0;

    while let Some(levels) = input.try_line::<Vec<i64>>()? {
        line += 1;

        if levels.is_empty() {
            continue;
        }

        match report::first_violation(levels.iter().copied()) {
            None => {
                safe += 1;
            }
            Some((n, violation)) => {
                log::debug!("report {line}: {violation} at level {}", n + 1);
            }
        }
    }

    Ok(safe)
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::solve;

    #[test]
    fn long_reports() {
        let input = IStr::from("1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17\n");
        assert_eq!(solve(input).unwrap(), 1);

        let levels = (0..1000).map(|n| (n * 3).to_string()).collect::<Vec<_>>();
        let data: &'static str = levels.join(" ").leak();
        assert_eq!(solve(IStr::from(data)).unwrap(), 1);
    }

    #[test]
    fn blank_lines_are_not_reports() {
        let input = IStr::from("7 6 4 2 1\n\n1 2 7 8 9\n\n");
        assert_eq!(solve(input).unwrap(), 1);
    }
}
