use std::io::Cursor;

use num_bigint::BigInt;
use smartcalc::{
    Diagnostic, ErrorKind, Input, Response, Session,
    frontend::{HELP_TEXT, classify, render},
    repl::run_lines,
};

fn error(kind: ErrorKind) -> Response {
    Response::Error(Diagnostic::new(kind))
}

fn expect_kind(response: Response) -> ErrorKind {
    match response {
        Response::Error(diagnostic) => diagnostic.kind,
        other => panic!("expected an error response, found {other:?}"),
    }
}

#[test]
fn classifies_commands_and_names() {
    assert_eq!(classify("   "), Input::Blank);
    assert_eq!(classify("/exit"), Input::Command("/exit"));
    assert_eq!(classify(" /help "), Input::Command("/help"));
    assert_eq!(classify("/"), Input::Command("/"));
    assert_eq!(classify("abc"), Input::Lookup("abc"));
}

#[test]
fn classifies_assignments() {
    assert_eq!(classify("a = 5"), Input::Assignment("a = 5"));
    assert_eq!(classify("a1 = -5"), Input::Assignment("a1 = -5"));
    assert_eq!(classify("a = b = c"), Input::Assignment("a = b = c"));
    assert_eq!(classify("a = +"), Input::Assignment("a = +"));
}

#[test]
fn classifies_expressions() {
    for line in [
        "2 + 3",
        "-5 + 3",
        "8 - ---+ 2",
        "((1 + 2))",
        "(1 + 2",
        "1 + 2)",
        "-(2 + 3) * 4",
        "2 * (-3)",
        "a ^ b / 7",
        "42",
    ] {
        assert_eq!(classify(line), Input::Expression(line), "`{line}`");
    }
}

#[test]
fn classifies_malformed_lines() {
    assert_eq!(classify("2 ** 3"), Input::Malformed(ErrorKind::InvalidExpression));
    assert_eq!(classify("4 // 2"), Input::Malformed(ErrorKind::InvalidExpression));
    assert_eq!(classify("2 a"), Input::Malformed(ErrorKind::InvalidIdentifier));
    assert_eq!(classify("a1"), Input::Malformed(ErrorKind::InvalidIdentifier));
}

#[test]
fn session_runs_commands() {
    let mut session = Session::new();
    assert_eq!(session.handle_line(""), Response::Nothing);
    assert_eq!(session.handle_line("/help"), Response::Help);
    assert_eq!(session.handle_line("/go"), error(ErrorKind::UnknownCommand));
    assert_eq!(session.handle_line("/exit"), Response::Quit);
}

#[test]
fn session_assigns_and_looks_up() {
    let mut session = Session::new();
    assert_eq!(session.handle_line("n = 3"), Response::Nothing);
    assert_eq!(session.handle_line("n"), Response::Value(BigInt::from(3)));
    assert_eq!(session.handle_line("n * 2"), Response::Value(BigInt::from(6)));
    assert_eq!(session.handle_line("x"), error(ErrorKind::UnknownVariable));
    assert_eq!(expect_kind(session.handle_line("m = x")), ErrorKind::UnknownVariable);
    assert_eq!(expect_kind(session.handle_line("m = +")), ErrorKind::InvalidAssignment);
    assert_eq!(expect_kind(session.handle_line("n1 = 2")), ErrorKind::InvalidIdentifier);
    assert_eq!(session.calculator().lookup("n"), Some(&BigInt::from(3)));
}

#[test]
fn session_applies_signs_after_division() {
    let mut session = Session::new();
    assert_eq!(session.handle_line("8 / -2 / 2"), Response::Value(BigInt::from(-2)));
    assert_eq!(session.handle_line("6 / -2 * 3"), Response::Value(BigInt::from(-9)));
}

#[test]
fn session_keeps_diagnostic_notes() {
    let mut session = Session::new();
    match session.handle_line("1 + 2)") {
        Response::Error(diagnostic) => {
            assert_eq!(diagnostic.kind, ErrorKind::InvalidExpression);
            assert_eq!(diagnostic.notes, ["`)` without a matching `(`"]);
        }
        other => panic!("expected an error response, found {other:?}"),
    }
}

#[test]
fn session_reports_expression_errors() {
    let mut session = Session::new();
    assert_eq!(
        expect_kind(session.handle_line("(1 + 2")),
        ErrorKind::InvalidExpression
    );
    assert_eq!(expect_kind(session.handle_line("9 / 0")), ErrorKind::DivisionByZero);
    assert_eq!(expect_kind(session.handle_line("2 ** 3")), ErrorKind::InvalidExpression);
}

#[test]
fn renders_user_visible_messages() {
    assert_eq!(render(&Response::Nothing), None);
    assert_eq!(render(&Response::Quit).as_deref(), Some("Bye!"));
    assert_eq!(render(&Response::Help).as_deref(), Some(HELP_TEXT));
    assert_eq!(
        render(&Response::Value(BigInt::from(-17))).as_deref(),
        Some("-17")
    );
    let messages = [
        (ErrorKind::InvalidIdentifier, "Invalid identifier"),
        (ErrorKind::InvalidAssignment, "Invalid assignment"),
        (ErrorKind::UnknownVariable, "Unknown variable"),
        (ErrorKind::InvalidExpression, "Invalid expression"),
        (ErrorKind::UnknownCommand, "Unknown command"),
    ];
    for (kind, message) in messages {
        assert_eq!(render(&error(kind)).as_deref(), Some(message));
    }
}

#[test]
fn run_lines_stops_after_exit() {
    let script = "a = 4\nb = a\n\na + b\nc\n/exit\n7\n";
    let mut output = Vec::new();
    let failures = run_lines(Cursor::new(script), &mut output).expect("script runs");
    assert_eq!(failures, 1);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "8\nUnknown variable\nBye!\n"
    );
}

#[test]
fn run_lines_says_goodbye_at_end_of_input() {
    let mut output = Vec::new();
    let failures = run_lines(Cursor::new("2 ^ 10\n/nope"), &mut output).expect("script runs");
    assert_eq!(failures, 1);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "1024\nUnknown command\nBye!\n"
    );
}
