use std::{fs, rc::Rc};

use rpncalc::{
    error::ErrorKind,
    evaluate_script,
    interpreter::{
        operation::{
            BinaryOperation, Registry, UnaryOperation, arithmetic,
            registry::{BINARY_SYMBOLS, UNARY_SYMBOLS},
        },
        session::{Options, Session},
        value::Value,
    },
    repl::{ReplConfig, run},
};
use walkdir::WalkDir;

#[test]
fn session_transcripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "session")
                                      })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let mut session = Session::new(Options { report_details: true });

        for (i, (input, expected)) in extract_steps(&content).into_iter().enumerate() {
            count += 1;
            let outcome = match session.evaluate(&input) {
                Ok(Some(value)) => value.to_string(),
                Ok(None) => "none".to_string(),
                Err(_) => "error".to_string(),
            };
            assert_eq!(outcome, expected, "step {} in {:?} failed: {}", i + 1, path, input);
        }
    }

    assert!(count > 0, "No session steps found in tests/sessions");
}

fn extract_steps(content: &str) -> Vec<(String, String)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
           .map(|line| {
               let (input, expected) =
                   line.rsplit_once(" => ")
                       .unwrap_or_else(|| panic!("Step without expectation: {line}"));
               (input.to_string(), expected.trim().to_string())
           })
           .collect()
}

fn value(text: &str) -> Value {
    text.parse().unwrap()
}

fn assert_result(session: &mut Session, line: &str, expected: &str) {
    match session.evaluate(line) {
        Ok(Some(v)) => assert_eq!(v, value(expected), "'{line}' gave {v}"),
        other => panic!("'{line}' was expected to yield {expected}, got {other:?}"),
    }
}

fn assert_failure(session: &mut Session, line: &str, kind: ErrorKind) {
    match session.evaluate(line) {
        Err(e) => assert_eq!(e.kind(), kind, "'{line}' failed with {e}"),
        Ok(v) => panic!("'{line}' succeeded with {v:?} but was expected to fail"),
    }
}

fn eval_alone(line: &str) -> Value {
    let mut session = Session::new(Options::default());
    session.evaluate(line)
           .unwrap_or_else(|e| panic!("'{line}' failed: {e}"))
           .unwrap_or_else(|| panic!("'{line}' left an empty stack"))
}

#[test]
fn reference_walkthrough() {
    let mut session = Session::new(Options::default());

    assert_result(&mut session, "10", "10");
    assert_result(&mut session, "-5", "-5");
    assert_result(&mut session, "+", "5");
    assert_result(&mut session, "2 -2 -", "4");
    assert_result(&mut session, "*", "20");
    assert_result(&mut session, "5 /", "4");
    assert_result(&mut session, "5^", "1024");
    assert_result(&mut session, "-1 5 %", "-1");
    assert_failure(&mut session, "100 0 /", ErrorKind::OperationFailure);
    assert_failure(&mut session, "*O2)(*H&^GFJ", ErrorKind::UnknownSymbol);
    assert_result(&mut session,
                  "1000000000000000000000 10000094385 *",
                  "10000094385000000000000000000000");
}

#[test]
fn single_literal_is_identity() {
    for literal in ["0", "7", "42", "3.14", "0.001", "123456789012345678901234567890.5"] {
        assert_eq!(eval_alone(literal), value(literal));
        assert_eq!(eval_alone(literal).to_string(), literal);
    }
}

#[test]
fn literal_edge_forms() {
    assert_eq!(eval_alone(".5"), value("0.5"));
    assert_eq!(eval_alone("5."), value("5"));
    assert_eq!(eval_alone("1.50").to_string(), "1.50");
    assert_eq!(eval_alone("1.50").scale(), 2);
    assert_eq!(eval_alone("007"), value("7"));
}

#[test]
fn basic_arithmetic() {
    let cases = [("1.5 2.25 +", "3.75"),
                 ("10 4 -", "6"),
                 ("4 10 -", "-6"),
                 ("1.5 -2 *", "-3"),
                 ("0.1 0.2 +", "0.3"),
                 ("3 4 ^", "81"),
                 ("7 0 ^", "1"),
                 ("0 0 ^", "1"),
                 ("1.5 2 ^", "2.25"),
                 ("-2 3 ^", "-8"),
                 ("2 3.0 ^", "8"),
                 ("7 3 %", "1"),
                 ("-7 3 %", "-1"),
                 ("7 -3 %", "1"),
                 ("5.5 2 %", "1.5")];

    for (line, expected) in cases {
        assert_eq!(eval_alone(line), value(expected), "{line}");
    }
}

#[test]
fn division_is_rounded_and_normalized() {
    assert_eq!(eval_alone("8 2 /").to_string(), "4");
    assert_eq!(eval_alone("1 3 /").to_string(), "0.33333333333333333333");
    assert_eq!(eval_alone("2 3 /").to_string(), "0.66666666666666666667");
    assert_eq!(eval_alone("-2 3 /").to_string(), "-0.66666666666666666667");
    assert_eq!(eval_alone("2 -3 /").to_string(), "-0.66666666666666666667");
    assert_eq!(eval_alone("1 0.125 /").to_string(), "8");
    assert_eq!(eval_alone("1000 10 /").to_string(), "100");
    // Half of the last place rounds away from zero.
    assert_eq!(eval_alone("0.00000000000000000001 2 /").to_string(), "0.00000000000000000001");
    assert_eq!(eval_alone("0.00000000000000000001 -2 /").to_string(), "-0.00000000000000000001");
    assert_eq!(eval_alone("0.00000000000000000001 3 /").to_string(), "0");
}

#[test]
fn division_by_zero_fails_for_any_dividend() {
    for dividend in ["0", "1", "-1", "2.5", "100000000000000000000000"] {
        let mut session = Session::new(Options::default());
        assert_failure(&mut session, &format!("{dividend} 0 /"), ErrorKind::OperationFailure);
        assert_failure(&mut session, &format!("{dividend} 0.00 /"), ErrorKind::OperationFailure);
    }
}

#[test]
fn remainder_by_zero_fails() {
    let mut session = Session::new(Options::default());
    assert_failure(&mut session, "5 0 %", ErrorKind::OperationFailure);
}

#[test]
fn remainder_sign_follows_dividend() {
    for (a, b) in [(-7, 3), (7, -3), (-7, -3), (7, 3), (-1, 5)] {
        let r = eval_alone(&format!("{a} {b} %"));
        assert_eq!(r, Value::from(a % b), "{a} {b} %");
    }
}

#[test]
fn remainder_keeps_the_finer_scale() {
    for (line, expected) in [("-0.75 0.5 %", "-0.25"),
                             ("1000 7 %", "6"),
                             ("5.50 2 %", "1.50"),
                             ("7 -3 %", "1")]
    {
        let r = eval_alone(line);
        assert_eq!(r, value(expected), "{line}");
        assert_eq!(r.to_string(), expected, "{line}");
    }
}

#[test]
fn values_render_in_plain_notation() {
    assert_eq!(eval_alone("0.00000000000000000001").to_string(), "0.00000000000000000001");
    assert_eq!(eval_alone("10 5 ^").to_string(), "100000");
    assert_eq!(eval_alone("-0.050").to_string(), "-0.050");
    assert_eq!(eval_alone("12345.6789").to_string(), "12345.6789");
}

#[test]
fn integral_exponent_may_carry_trailing_zeros() {
    assert_eq!(eval_alone("2 2.0 ^"), value("4"));
    assert_eq!(eval_alone("3 2.000 ^").to_string(), "9");
}

#[test]
fn quit_is_recognised_next_to_other_tokens() {
    let mut session = Session::new(Options::default());

    assert_result(&mut session, "5q-", "5");
    assert!(!session.is_running());
    assert_eq!(session.stack(), &[value("5")]);
}

#[test]
fn invalid_exponents_fail() {
    for line in ["2 1.5 ^", "2 -1 ^", "2 0.1 ^", "2 1000000000 ^", "2 99999999999 ^"] {
        let mut session = Session::new(Options::default());
        assert_failure(&mut session, line, ErrorKind::OperationFailure);
    }
}

#[test]
fn negation_runs() {
    assert_eq!(eval_alone("-5"), value("-5"));
    assert_eq!(eval_alone("--5"), value("5"));
    assert_eq!(eval_alone("---5"), value("-5"));
    assert_eq!(eval_alone("----2.5"), value("2.5"));
    assert_eq!(eval_alone("3 --4 +"), value("7"));
}

#[test]
fn minus_before_space_or_end_is_subtraction() {
    assert_eq!(eval_alone("3 4 -"), value("-1"));
    assert_eq!(eval_alone("3 4 - "), value("-1"));
    assert_eq!(eval_alone("3 4 -\t"), value("-1"));

    // A run of minus signs that does not end in a number is not unary; only
    // its first sign is applied as subtraction before the next one underflows.
    let mut session = Session::new(Options::default());
    assert_failure(&mut session, "3 4 --", ErrorKind::StackUnderflow);
    assert_eq!(session.stack(), &[value("-1")]);
}

#[test]
fn adjacent_minus_binds_to_following_number() {
    let mut session = Session::new(Options::default());
    assert_result(&mut session, "5-3", "-3");
    assert_eq!(session.stack(), &[value("5"), value("-3")]);
}

#[test]
fn whitespace_is_only_a_separator() {
    assert_eq!(eval_alone("  1\t2   +  "), value("3"));
    assert_eq!(eval_alone("1 2+"), value("3"));
}

#[test]
fn malformed_numbers() {
    for line in ["1.2.3", ".", "..", "5 1..2 +"] {
        let mut session = Session::new(Options::default());
        assert_failure(&mut session, line, ErrorKind::MalformedNumber);
    }
}

#[test]
fn unknown_symbols_report_their_offset() {
    let mut session = Session::new(Options { report_details: true });

    let err = session.evaluate("1 2 + abc").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownSymbol);
    assert_eq!(err.offset(), 6);

    let err = session.evaluate("éé x").unwrap_err();
    assert_eq!(err.offset(), 0);

    let err = session.evaluate("1 é").unwrap_err();
    assert_eq!(err.offset(), 2);
    assert_eq!(session.describe(&err), "Error at character 2: Unknown symbol 'é'.");
}

#[test]
fn stack_underflow_leaves_stack_untouched() {
    let mut session = Session::new(Options::default());

    assert_failure(&mut session, "+", ErrorKind::StackUnderflow);
    assert!(session.stack().is_empty());

    assert_failure(&mut session, "4 *", ErrorKind::StackUnderflow);
    assert_eq!(session.stack(), &[value("4")]);
}

#[test]
fn failed_operation_keeps_its_operands() {
    let mut session = Session::new(Options::default());

    assert_failure(&mut session, "100 0 /", ErrorKind::OperationFailure);
    assert_eq!(session.stack(), &[value("100"), value("0")]);
}

#[test]
fn partial_results_carry_over_after_failure() {
    let mut session = Session::new(Options::default());

    assert_failure(&mut session, "1 2 + 3 ? 4", ErrorKind::UnknownSymbol);
    assert_eq!(session.stack(), &[value("3"), value("3")]);
    assert_result(&mut session, "*", "9");
}

#[test]
fn empty_line_returns_current_top() {
    let mut session = Session::new(Options::default());

    assert_eq!(session.evaluate("").unwrap(), None);
    assert_eq!(session.evaluate("   ").unwrap(), None);
    session.evaluate("6").unwrap();
    assert_result(&mut session, "", "6");
}

#[test]
fn terminate_symbol_stops_scanning() {
    let mut session = Session::new(Options::default());

    assert_result(&mut session, "4 5 q 6 +", "5");
    assert!(!session.is_running());
    assert_eq!(session.stack(), &[value("4"), value("5")]);
}

#[test]
fn external_terminate() {
    let mut session = Session::new(Options::default());
    assert!(session.is_running());
    session.terminate();
    assert!(!session.is_running());
}

#[test]
fn large_values_stay_exact() {
    assert_eq!(eval_alone("1000000000000000000000 10000094385 *").to_string(),
               "10000094385000000000000000000000");
    assert_eq!(eval_alone("2 100 ^").to_string(), "1267650600228229401496703205376");
    assert_eq!(eval_alone("0.1 3 ^").to_string(), "0.001");
    assert_eq!(eval_alone("99999999999999999999.99 0.01 +").to_string(),
               "100000000000000000000.00");
}

#[test]
fn builtin_symbols_are_registered() {
    let registry = Registry::builtin();

    for symbol in BINARY_SYMBOLS {
        assert!(registry.binary(*symbol).is_some(), "{symbol}");
    }
    for symbol in UNARY_SYMBOLS {
        assert!(registry.unary(*symbol).is_some(), "{symbol}");
    }
    assert_eq!(BINARY_SYMBOLS, &['+', '-', '*', '/', '^', '%']);
    assert_eq!(UNARY_SYMBOLS, &['-']);
}

fn double(value: &Value) -> Option<Value> {
    arithmetic::add(value, value)
}

fn maximum(lhs: &Value, rhs: &Value) -> Option<Value> {
    Some(lhs.max(rhs).clone())
}

#[test]
fn custom_registry_is_used_by_session() {
    let mut registry = Registry::empty();
    registry.register_binary(BinaryOperation::new('m', "maximum", maximum));
    registry.register_unary(UnaryOperation::new('~', "double", double));
    let registry = Rc::new(registry);

    let mut session = Session::with_registry(Rc::clone(&registry), Options::default());
    assert_result(&mut session, "3 ~4 m", "8");
    assert_failure(&mut session, "1 +", ErrorKind::UnknownSymbol);

    // A second session shares the registry but not the stack.
    let mut other = Session::with_registry(registry, Options::default());
    assert!(other.stack().is_empty());
    assert_result(&mut other, "~~1", "4");
}

#[test]
fn register_replaces_previous_operation() {
    let mut registry = Registry::builtin();
    let previous = registry.register_binary(BinaryOperation::new('+', "maximum", maximum));

    assert_eq!(previous.map(|op| op.name()), Some("addition"));
    assert_eq!(registry.binary('+').map(|op| op.name()), Some("maximum"));
}

#[test]
fn describe_honours_report_details() {
    let mut terse = Session::new(Options::default());
    let err = terse.evaluate("1 0 /").unwrap_err();
    assert_eq!(terse.describe(&err), "Parse error");

    let mut verbose = Session::new(Options { report_details: true });
    let err = verbose.evaluate("1 0 /").unwrap_err();
    assert_eq!(verbose.describe(&err),
               "Error at character 4: Illegal operation: division ('/') has no result for these operands.");

    let mut fresh = Session::new(Options { report_details: true });
    let err = fresh.evaluate("+ ").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at character 0: Operator '+' needs two values on the stack.");
}

#[test]
fn script_stops_at_first_error_or_quit() {
    assert_eq!(evaluate_script("1\n2\n+", Options::default()).unwrap(), Some(value("3")));
    assert_eq!(evaluate_script("1\nq\n2", Options::default()).unwrap(), Some(value("1")));
    assert_eq!(evaluate_script("", Options::default()).unwrap(), None);
    assert!(evaluate_script("1\n?\n2", Options::default()).is_err());
}

#[test]
fn repl_prints_results_stack_and_errors() {
    let mut session = Session::new(Options::default());
    let mut output = Vec::new();
    let config = ReplConfig { prompt:      Some(">".to_string()),
                              print_stack: true, };

    run(&mut session, "1 2\n+\r\n0 /\nq\n".as_bytes(), &mut output, &config).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(),
               ">Number Stack: [1, 2]\n2\n\
                >Number Stack: [3]\n3\n\
                >Number Stack: [3, 0]\nParse error\n\
                >Number Stack: [3, 0]\n0\n");
}

#[test]
fn repl_stops_at_end_of_input() {
    let mut session = Session::new(Options { report_details: true });
    let mut output = Vec::new();

    run(&mut session, "2 x\n".as_bytes(), &mut output, &ReplConfig::default()).unwrap();

    assert!(session.is_running());
    assert_eq!(String::from_utf8(output).unwrap(),
               "Error at character 2: Unknown symbol 'x'.\n");
}
