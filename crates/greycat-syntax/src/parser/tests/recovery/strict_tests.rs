use crate::Error;
use crate::parser::{Parser, parse_strict};

#[test]
fn valid_input_passes() {
    let (parse, diagnostics) = parse_strict("var x = 1;").unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(parse.program().items().count(), 1);
}

#[test]
fn first_error_stops_the_parse() {
    let Err(Error::ParseFailed(diagnostics)) = parse_strict("var = 1; var = 2;") else {
        panic!("expected strict parse to fail");
    };
    insta::assert_snapshot!(diagnostics.to_string(), @"error at 4..5: expected an identifier, found `=`");
}

#[test]
fn failure_message_counts_errors() {
    let err = parse_strict("{ var ; var y = 1; }").unwrap_err();
    assert_eq!(err.to_string(), "parsing failed with 1 errors");
}

#[test]
fn warnings_do_not_stop() {
    let (_, diagnostics) = parse_strict("x;;;").unwrap();
    assert_eq!(diagnostics.warning_count(), 1);
    assert!(!diagnostics.has_errors());
}

#[test]
fn lexical_error_stops() {
    let Err(Error::ParseFailed(diagnostics)) = parse_strict("x @ y = ;") else {
        panic!("expected strict parse to fail");
    };
    insta::assert_snapshot!(diagnostics.to_string(), @"error at 2..3: unrecognized character: `@`");
}

#[test]
fn recovery_flag_on_builder() {
    let err = Parser::new("var ;").with_recovery(false).parse().unwrap_err();
    assert!(matches!(err, Error::ParseFailed(ref d) if d.len() == 1));

    let (_, diagnostics) = Parser::new("var ;").with_recovery(true).parse().unwrap();
    assert_eq!(diagnostics.len(), 1);
}
