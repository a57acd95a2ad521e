//! Integration tests for credential validation.

use movie_browser::core::validator::{can_submit, validate_email, validate_password};

#[test]
fn test_email_shapes() {
    assert!(validate_email("john.doe@mail.example.org"));
    assert!(validate_email("a@b.cd"));

    assert!(!validate_email("john.doe@mail"));
    assert!(!validate_email("john doe@mail.com"));
    assert!(!validate_email("john.doe@"));
    assert!(!validate_email("\tjohn@mail.com"));
}

#[test]
fn test_password_rules_are_independent() {
    // Each candidate misses exactly one rule.
    assert!(!validate_password("Sh0rt!"));
    assert!(!validate_password("Way2Long!Password"));
    assert!(!validate_password("nouppercase1!"));
    assert!(!validate_password("NoDigitsHere!"));
    assert!(!validate_password("NoSpecial123"));

    assert!(validate_password("Good1Pass!"));
}

#[test]
fn test_submit_gate() {
    assert!(can_submit("you@example.com", "Good1Pass!"));
    assert!(!can_submit("you@example.com", ""));
    assert!(!can_submit("", "Good1Pass!"));
}
