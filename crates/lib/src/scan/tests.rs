use proptest::prelude::*;

use super::{scan, scan_plain, transition, Event, Instruction, Mode, Scanner, State, Watch};

const ENABLED: Watch = Watch {
    mul: true,
    enable: false,
    disable: true,
};

const DISABLED: Watch = Watch {
    mul: false,
    enable: true,
    disable: false,
};

const PLAIN: Watch = Watch {
    mul: true,
    enable: false,
    disable: false,
};

#[test]
fn test_transitions() {
    let mul = |a, b| Some(Event::Mul(Instruction { a, b }));

    let table = [
        (State::Idle, ENABLED, 'm', State::M, None),
        (State::Idle, ENABLED, 'x', State::Idle, None),
        (State::Idle, DISABLED, 'm', State::Idle, None),
        (State::Idle, PLAIN, 'd', State::Idle, None),
        (State::M, ENABLED, 'u', State::Mu, None),
        (State::M, ENABLED, 'm', State::M, None),
        (State::Mu, ENABLED, 'l', State::Mul, None),
        (State::Mul, ENABLED, '(', State::Open, None),
        (State::Mul, ENABLED, '[', State::Idle, None),
        (State::Open, ENABLED, '4', State::Left(4), None),
        (State::Open, ENABLED, ',', State::Idle, None),
        (State::Left(4), ENABLED, '2', State::Left(42), None),
        (State::Left(4), ENABLED, '*', State::Idle, None),
        (State::Left(4), ENABLED, 'd', State::D, None),
        (State::Left(42), ENABLED, ',', State::Comma(42), None),
        (State::Comma(42), ENABLED, ')', State::Idle, None),
        (State::Comma(42), ENABLED, '7', State::Right(42, 7), None),
        (State::Right(42, 7), ENABLED, '1', State::Right(42, 71), None),
        (State::Right(42, 7), ENABLED, ',', State::Idle, None),
        (State::Right(42, 7), ENABLED, 'm', State::M, None),
        (State::Right(42, 7), ENABLED, ')', State::Idle, mul(42, 7)),
        (State::Idle, ENABLED, 'd', State::D, None),
        (State::Idle, DISABLED, 'd', State::D, None),
        (State::D, ENABLED, 'o', State::Do, None),
        (State::Do, ENABLED, 'n', State::Don, None),
        (State::Do, ENABLED, '(', State::Idle, None),
        (State::Do, DISABLED, '(', State::DoOpen, None),
        (State::Do, DISABLED, 'n', State::Idle, None),
        (State::DoOpen, DISABLED, ')', State::Idle, Some(Event::Enable)),
        (State::DoOpen, DISABLED, 'd', State::D, None),
        (State::Don, ENABLED, '\'', State::DonQuote, None),
        (State::DonQuote, ENABLED, 't', State::Dont, None),
        (State::Dont, ENABLED, '(', State::DontOpen, None),
        (State::DontOpen, ENABLED, ')', State::Idle, Some(Event::Disable)),
        (State::DontOpen, ENABLED, 'm', State::M, None),
    ];

    for (state, watch, c, expected, event) in table {
        assert_eq!(
            transition(state, watch, c),
            (expected, event),
            "{state:?} + {c:?}"
        );
    }
}

#[test]
fn test_watch() {
    assert_eq!(Watch::new(Mode::Toggled, true), ENABLED);
    assert_eq!(Watch::new(Mode::Toggled, false), DISABLED);
    assert_eq!(Watch::new(Mode::Plain, true), PLAIN);
    assert_eq!(Watch::new(Mode::Plain, false), PLAIN);
}

#[test]
fn test_scan() {
    assert_eq!(scan("mul(2,3)"), 6);
    assert_eq!(scan("mul(2,3)mul(4,5)"), 26);
    assert_eq!(scan("mul(2,3"), 0);
    assert_eq!(scan("don't()mul(2,3)do()mul(4,5)"), 20);
    assert_eq!(scan("mul(4*,3)"), 0);
    assert_eq!(scan("mul(,3)mul(3,)mul ( 2 , 4 )"), 0);
    assert_eq!(scan("mul(1,2,3)"), 0);
    assert_eq!(scan("mmul(2,3)"), 6);
    assert_eq!(scan("mul(2,mul(3,4)"), 12);
    assert_eq!(scan(""), 0);
}

#[test]
fn test_scan_plain() {
    assert_eq!(scan_plain("don't()mul(2,3)do()mul(4,5)"), 26);
    assert_eq!(
        scan_plain("xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))"),
        161
    );
}

#[test]
fn test_example() {
    let input = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
    assert_eq!(scan_plain(input), 161);
    assert_eq!(scan(input), 48);
}

#[test]
fn test_toggles() {
    let mut scanner = Scanner::toggled();
    scanner.extend("don't()".chars());
    assert!(!scanner.is_enabled());

    // Repeated disables and a do without parens change nothing.
    scanner.extend("don't()do(mul(1,1)".chars());
    assert!(!scanner.is_enabled());
    assert_eq!(scanner.total(), 0);

    scanner.extend("ddo()mul(3,3)".chars());
    assert!(scanner.is_enabled());
    assert_eq!(scanner.total(), 9);

    // A sentinel in progress is not folded into an instruction.
    scanner.extend("mul(2,don't()3)".chars());
    assert!(!scanner.is_enabled());
    assert_eq!(scanner.total(), 9);
}

#[test]
fn test_plain_ignores_enabled() {
    let mut scanner = Scanner::plain().with_enabled(false);
    assert!(scanner.is_enabled());
    scanner.extend("don't()mul(2,2)".chars());
    assert_eq!(scanner.total(), 4);
}

/// Pieces which leave the scanner idle, so no token straddles the boundary
/// between two of them.
const PIECES: &[&str] = &[
    "mul(2,3)",
    "mul(11,8)",
    "mul(123,4)",
    "do()",
    "don't()",
    "x",
    "%&",
    "mul[3,7]",
    "mul(4*,3)",
    "mul ( 2 , 4 )",
    "mul(32,64]",
    "do_not_",
    "undo?",
    "(",
];

fn pieces() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(PIECES), 0..16).prop_map(|p| p.concat())
}

/// Reference scanner which always matches instructions and instead decides
/// whether they count based on the enabled state when matching started.
fn scan_checked_at_start(text: &str) -> u64 {
    let mut state = State::Idle;
    let mut enabled = true;
    let mut started_enabled = true;
    let mut total = 0u64;

    for c in text.chars() {
        let watch = Watch {
            mul: true,
            ..Watch::new(Mode::Toggled, enabled)
        };

        let (next, event) = transition(state, watch, c);

        // `M` is only ever entered by an `m` starting a new match.
        if next == State::M {
            started_enabled = enabled;
        }

        state = next;

        match event {
            Some(Event::Mul(instruction)) if started_enabled => {
                total = total.saturating_add(instruction.product());
            }
            Some(Event::Enable) => enabled = true,
            Some(Event::Disable) => enabled = false,
            _ => {}
        }
    }

    total
}

proptest! {
    #[test]
    fn concatenation_adds_up(a in pieces(), b in pieces()) {
        let mut first = Scanner::toggled();
        first.extend(a.chars());

        let mut second = Scanner::toggled().with_enabled(first.is_enabled());
        second.extend(b.chars());

        prop_assert_eq!(scan(&(a + &b)), first.total() + second.total());
    }

    #[test]
    fn plain_concatenation_adds_up(a in pieces(), b in pieces()) {
        prop_assert_eq!(scan_plain(&(a.clone() + &b)), scan_plain(&a) + scan_plain(&b));
    }

    #[test]
    fn enabled_checked_at_start_or_end(text in "[mul(),don't0-9x]{0,64}") {
        prop_assert_eq!(scan(&text), scan_checked_at_start(&text));
    }

    #[test]
    fn toggled_never_exceeds_plain(text in "[mul(),don't0-9x]{0,64}") {
        prop_assert!(scan(&text) <= scan_plain(&text));
    }
}
