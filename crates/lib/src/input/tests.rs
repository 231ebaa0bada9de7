use crate::cli::error::{error_context, LineCol};
use crate::env::pos_from;
use crate::input::{ErrorKind, IStr, IStrError};

#[test]
fn test_lines_of_tuples() {
    let mut input = IStr::from("3   4\n4   3\n\n5 6");

    assert_eq!(input.try_line::<(u64, u64)>().unwrap(), Some((3, 4)));
    assert_eq!(input.try_line::<(u64, u64)>().unwrap(), Some((4, 3)));
    // A blank line has nothing to parse, but the input goes on after it.
    assert_eq!(input.try_line::<(u64, u64)>().unwrap(), None);
    assert!(!input.is_empty());
    assert_eq!(input.try_line::<(u64, u64)>().unwrap(), Some((5, 6)));
    assert!(input.is_empty());
}

#[test]
fn test_lines_of_vectors() {
    let mut input = IStr::from("7 6 4 2 1\n-1 2\n");

    let line = input.try_line::<Vec<i64>>().unwrap().unwrap();
    assert_eq!(line, [7, 6, 4, 2, 1]);

    let line = input.try_line::<Vec<i64>>().unwrap().unwrap();
    assert_eq!(line, [-1, 2]);

    assert!(input.try_line::<Vec<i64>>().unwrap().is_none());

    let error = input.line::<Vec<i64>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedLine));
}

#[test]
fn test_missing_tuple_element() {
    let mut input = IStr::from("1\n");
    let error = input.try_line::<(u32, u32)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedTuple(2)));
}

#[test]
fn test_split() {
    let mut input = IStr::from("75,47,61");
    let mut pages = Vec::new();

    while !input.is_empty() {
        pages.push(input.split(b',').next::<u32>().unwrap());
    }

    assert_eq!(pages, [75, 47, 61]);
    assert!(input.split(b',').is_empty());

    let mut input = IStr::from("190: 10 19");
    assert_eq!(input.split(b':').next::<u64>().unwrap(), 190);
    assert_eq!(input.next::<Vec<u64>>().unwrap(), [10, 19]);

    let error = IStr::from("").next::<u32>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UnexpectedEof));
}

#[test]
fn test_bytes_and_string() {
    let mut input = IStr::from("MMMS\nMSAM\n");
    assert_eq!(input.line::<&[u8]>().unwrap(), b"MMMS");

    let mut input = IStr::from("hello world");
    assert_eq!(input.next::<&str>().unwrap(), "hello world");
    assert_eq!(input.len(), 0);

    let mut input = IStr::new(b"\xff", crate::env::Size::ZERO);
    let error = input.next::<&str>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotUtf8));
}

#[cfg(not(prod))]
#[test]
fn test_error_position() {
    let data = IStr::from("1 2\n3 x 4\n");
    let mut input = data;

    assert!(input.try_line::<Vec<u32>>().is_ok());

    let error = input.try_line::<Vec<u32>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("x")));
    assert_eq!(error.to_string(), "not an integer or integer overflow `x`");

    let IStrError { span, .. } = &error;
    assert_eq!(pos_from(data.as_data(), span.clone()), LineCol::new(1, 2));

    let error = error_context("inputs/d02.txt", data, error);
    assert_eq!(error.to_string(), "inputs/d02.txt:2:3");
    assert_eq!(
        format!("{error:#}"),
        "inputs/d02.txt:2:3: not an integer or integer overflow `x`"
    );
}
