use super::*;

#[test]
fn password_needs_eight_characters() {
    assert!(!password_valid("short7!"));
    assert!(password_valid("longenough1"));
    assert!(password_valid("exactly8"));
}

#[test]
fn form_requires_every_field() {
    assert!(form_valid("a@b.com", "A", "longenough1", "longenough1", true));
    assert!(!form_valid("", "A", "longenough1", "longenough1", true));
    assert!(!form_valid("a@b.com", "  ", "longenough1", "longenough1", true));
    assert!(!form_valid("a@b.com", "A", "short", "short", true));
    assert!(!form_valid("a@b.com", "A", "longenough1", "different1x", true));
    assert!(!form_valid("a@b.com", "A", "longenough1", "longenough1", false));
}
