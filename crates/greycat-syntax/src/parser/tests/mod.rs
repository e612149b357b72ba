
use super::parse;

/// CST dump of input that must parse cleanly.
#[track_caller]
pub(super) fn expect_valid(src: &str) -> String {
    let (parse, diagnostics) = parse(src).unwrap();
    if !diagnostics.is_empty() {
        panic!("Expected valid input, got diagnostics:\n{diagnostics}");
    }
    assert_eq!(parse.syntax().text().to_string(), src);
    parse.dump()
}

/// Plain diagnostics of input that must produce at least one.
#[track_caller]
pub(super) fn expect_invalid(src: &str) -> String {
    let (parse, diagnostics) = parse(src).unwrap();
    if diagnostics.is_empty() {
        panic!("Expected diagnostics, got a clean tree:\n{}", parse.dump());
    }
    assert_eq!(parse.syntax().text().to_string(), src);
    diagnostics.to_string()
}

/// CST dump followed by the diagnostics it was recovered with.
#[track_caller]
pub(super) fn expect_recovered(src: &str) -> String {
    let (parse, diagnostics) = parse(src).unwrap();
    if diagnostics.is_empty() {
        panic!("Expected diagnostics, got a clean tree:\n{}", parse.dump());
    }
    assert_eq!(parse.syntax().text().to_string(), src);
    format!("{}---\n{}", parse.dump(), diagnostics)
}
