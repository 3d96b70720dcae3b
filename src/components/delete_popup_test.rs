use super::*;

#[test]
fn exact_match_is_required() {
    assert!(confirmation_matches(Some("Ember"), "Ember"));
    assert!(!confirmation_matches(Some("Ember"), "ember"));
    assert!(!confirmation_matches(Some("Ember"), "Ember "));
    assert!(!confirmation_matches(Some("Ember"), "wrong text"));
    assert!(!confirmation_matches(Some("Ember"), ""));
}

#[test]
fn mismatch_never_confirms_no_matter_how_often() {
    for _ in 0..10 {
        assert!(!confirmation_matches(Some("Ember"), "wrong text"));
    }
}

#[test]
fn no_phrase_means_plain_confirmation() {
    assert!(confirmation_matches(None, ""));
    assert!(confirmation_matches(None, "anything"));
}

#[test]
fn mismatch_message_is_stable() {
    assert_eq!(CONFIRM_MISMATCH, "Confirmation text does not match.");
}
