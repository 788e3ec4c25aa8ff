use reckon::{ErrorKind, evaluate};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() <= f64::EPSILON * expected.abs().max(1.0),
                             "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail with {kind:?}"),
        Err(e) => assert_eq!(e.kind(), kind, "'{src}' failed with '{e}'"),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", 14.0);
    assert_value("2-3-4", -5.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("8/4/2", 1.0);
    assert_value("2*3+4*5", 26.0);
    assert_value("10-2*3", 4.0);
    assert_value("((1+2)*(3+4))/7", 3.0);
}

#[test]
fn unary_minus() {
    assert_value("-3+4", 1.0);
    assert_value("4*-3", -12.0);
    assert_value("-(2+3)", -5.0);
    assert_value("--3", 3.0);
    assert_value("3--2", 5.0);
    assert_value("2*(-3)", -6.0);
    assert_value("-2*3", -6.0);
    assert_value("1-(-1)", 2.0);
}

#[test]
fn decimals() {
    assert_value("0.5+0.25", 0.75);
    assert_value(".5*4", 2.0);
    assert_value("5.*2", 10.0);
    assert_value("1/4", 0.25);
}

#[test]
fn whitespace_is_ignored() {
    assert_value(" 1 +\t2 * 3 ", 7.0);
    assert_value("1 2 + 3", 15.0);
    assert_value("1\u{a0}+\u{2003}2", 3.0);
    assert_value("\u{3000}(4\u{2009}*\u{85}2)\n", 8.0);
}

#[test]
fn trailing_operator_is_trimmed() {
    assert_value("1+2+", 3.0);
    assert_value("6*", 6.0);
    assert_value("3 - ", 3.0);
    assert_value("(1+2)/", 3.0);
}

#[test]
fn floating_point_semantics() {
    assert_eq!(evaluate("0.1+0.2").unwrap(), 0.1 + 0.2);
    assert_eq!(evaluate("1/3").unwrap(), 1.0 / 3.0);
    assert_eq!(evaluate("2/3*3").unwrap(), 2.0 / 3.0 * 3.0);
}

#[test]
fn matches_native_float_arithmetic() {
    let cases: &[(&str, f64)] = &[("1+2*3-4/5", 1.0 + 2.0 * 3.0 - 4.0 / 5.0),
                                  ("(1+2)*(3-4)/5", (1.0 + 2.0) * (3.0 - 4.0) / 5.0),
                                  ("-1.5*-(2.25-0.75)", -1.5 * -(2.25 - 0.75)),
                                  ("100/7/3", 100.0 / 7.0 / 3.0),
                                  ("3.3*3.3*3.3", 3.3 * 3.3 * 3.3),
                                  ("-(-(-(8)))", -(-(-8.0_f64))),
                                  ("12.5-2.5*4+0.125", 12.5 - 2.5 * 4.0 + 0.125),
                                  ("9/(3-(1+1))", 9.0 / (3.0 - (1.0 + 1.0))),
                                  ("0.1*3", 0.1 * 3.0),
                                  ("1-2-3-4-5", 1.0 - 2.0 - 3.0 - 4.0 - 5.0)];

    for &(src, expected) in cases {
        assert_eq!(evaluate(src).unwrap(), expected, "'{src}'");
    }
}

#[test]
fn printed_result_evaluates_to_itself() {
    for src in ["0.1+0.2", "1/3", "-(2+3)", "2-3-4", "123456789*987654321", "1/7*-1", "4.5/0.5"] {
        let first = evaluate(src).unwrap();
        let second = evaluate(&first.to_string()).unwrap();
        assert_eq!(first, second, "'{src}' printed as '{first}'");
    }
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("5/0", ErrorKind::DivisionByZero);
    assert_failure("1/(2-2)", ErrorKind::DivisionByZero);
    assert_failure("1/-0", ErrorKind::DivisionByZero);
    assert_failure("0/0.0", ErrorKind::DivisionByZero);
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert_failure("(1+2", ErrorKind::UnbalancedParentheses);
    assert_failure("1+2)", ErrorKind::UnbalancedParentheses);
    assert_failure(")(", ErrorKind::UnbalancedParentheses);
    assert_failure("((1)", ErrorKind::UnbalancedParentheses);
}

#[test]
fn malformed_numbers_are_errors() {
    assert_failure("1.2.3", ErrorKind::MalformedNumber);
    assert_failure("1..2+1", ErrorKind::MalformedNumber);
    assert_failure(".", ErrorKind::MalformedNumber);
}

#[test]
fn invalid_characters_are_errors() {
    assert_failure("2+a", ErrorKind::InvalidCharacter);
    assert_failure("2^3", ErrorKind::InvalidCharacter);
    assert_failure("1e5", ErrorKind::InvalidCharacter);
    assert_failure("1,5", ErrorKind::InvalidCharacter);
    // Rejected before any other check.
    assert_failure("(1+x", ErrorKind::InvalidCharacter);
}

#[test]
fn empty_and_operator_only_input_is_malformed() {
    assert_failure("", ErrorKind::MalformedExpression);
    assert_failure("   ", ErrorKind::MalformedExpression);
    assert_failure("+", ErrorKind::MalformedExpression);
    assert_failure("-", ErrorKind::MalformedExpression);
    assert_failure("()", ErrorKind::MalformedExpression);
}

#[test]
fn stray_operators_surface_at_evaluation() {
    assert_failure("*3", ErrorKind::MalformedExpression);
    assert_failure("+3", ErrorKind::MalformedExpression);
    assert_failure("1**2", ErrorKind::MalformedExpression);
    assert_failure("1+/2", ErrorKind::MalformedExpression);
    // Only one trailing operator is trimmed.
    assert_failure("1++", ErrorKind::MalformedExpression);
    assert_failure("(1)(2)", ErrorKind::MalformedExpression);
}

#[test]
fn evaluation_is_thread_safe() {
    let handles: Vec<_> = (0..8).map(|i| {
                                    std::thread::spawn(move || {
                                        let src = format!("{i}*({i}+1)-{i}");
                                        evaluate(&src).unwrap()
                                    })
                                })
                                .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let i = f64::from(u8::try_from(i).unwrap());
        assert_eq!(handle.join().unwrap(), i * (i + 1.0) - i);
    }
}
