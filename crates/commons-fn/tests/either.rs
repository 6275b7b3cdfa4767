use std::cell::{Cell, RefCell};

use commons_fn::{either, AbsentValueError, Either, IntoEither};

#[test]
fn get_returns_right_value() {
    let x: Either<String, i32> = either(|_| 12);
    assert_eq!(Ok(12), x.get());
}

#[test]
fn get_or_null_on_left() {
    let x: Either<String, i32> = either(|cx| cx.left("error1".into()));
    assert_eq!(None, x.get_or_null());
}

#[test]
fn get_on_left_is_absent_value() {
    let x: Either<String, i32> = either(|cx| cx.left("error1".into()));
    let err = x.get().unwrap_err();
    assert_eq!(AbsentValueError, err);
    assert_eq!("absent value accessed", err.to_string());
}

#[test]
fn get_or_on_left() {
    let x: Either<String, i32> = either(|cx| cx.left("error".into()));
    assert_eq!(1, x.get_or(|| 1));
}

#[test]
fn map_right_to_string() {
    let given: Either<String, i32> = either(|_| 12);
    let expected: Either<String, String> = either(|_| "12".to_string());
    assert_eq!(expected, given.map(|i| i.to_string()));
}

#[test]
fn fold_both_sides() {
    let left: Either<i32, String> = Either::Left(6);
    let right: Either<i32, String> = Either::Right("Jane".into());

    assert_eq!("6", left.fold(|i| i.to_string(), |s| s));
    assert_eq!("Jane", right.fold(|i| i.to_string(), |s| s));
}

#[test]
fn into_either_extension() {
    let given = "1".left::<i32>();
    assert!(given.is_left());
    assert_eq!(Some("1"), given.get_left_or_null());

    let given = 1_i32.right::<&str>();
    assert!(given.is_right());
    assert_eq!(Some(1), given.get_or_null());
    assert_eq!(Ok(1), given.get());
}

/// Records every call so tests can check which side ran
#[derive(Default)]
struct Calls {
    left: RefCell<Vec<String>>,
    right: RefCell<Vec<i32>>,
}

#[test]
fn consume_left_side() {
    let calls = Calls::default();
    let given: Either<String, i32> = "error".to_string().left();

    given.clone().consume_left(|l| calls.left.borrow_mut().push(l));
    given.consume_right(|r| calls.right.borrow_mut().push(r));

    assert_eq!(vec!["error".to_string()], *calls.left.borrow());
    assert!(calls.right.borrow().is_empty());
}

#[test]
fn consume_right_side() {
    let calls = Calls::default();
    let given: Either<String, i32> = Either::Right(1);

    given.clone().consume_left(|l| calls.left.borrow_mut().push(l));
    given.consume_right(|r| calls.right.borrow_mut().push(r));

    assert_eq!(vec![1], *calls.right.borrow());
    assert!(calls.left.borrow().is_empty());
}

#[test]
fn consume_runs_exactly_one_callback() {
    let error: Either<String, i32> = "e".to_string().left();
    let ok: Either<String, i32> = 1_i32.right();

    for given in [error, ok] {
        let lefts = Cell::new(0);
        let rights = Cell::new(0);
        let was_left = given.is_left();

        given.consume(|_| lefts.set(lefts.get() + 1), |_| rights.set(rights.get() + 1));

        if was_left {
            assert_eq!((1, 0), (lefts.get(), rights.get()));
        } else {
            assert_eq!((0, 1), (lefts.get(), rights.get()));
        }
    }
}

#[test]
fn block_with_early_validation() {
    fn parse_port(input: &str) -> Either<String, u16> {
        either(|cx| {
            let port: u32 = input
                .trim()
                .parse()
                .unwrap_or_else(|_| cx.left(format!("not a number: {input}")));
            cx.ensure(port > 0, || "port 0 is reserved".to_string());
            u16::try_from(port).unwrap_or_else(|_| cx.left(format!("out of range: {port}")))
        })
    }

    assert_eq!(Either::Right(8080), parse_port(" 8080 "));
    assert_eq!(Either::Left("not a number: x".to_string()), parse_port("x"));
    assert_eq!(Either::Left("port 0 is reserved".to_string()), parse_port("0"));
    assert_eq!(Either::Left("out of range: 70000".to_string()), parse_port("70000"));
}
