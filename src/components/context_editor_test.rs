use super::*;

#[test]
fn blank_context_uses_the_new_sentinel() {
    let ctx = blank_context();
    assert_eq!(ctx.id, "new");
    assert!(ctx.name.is_empty());
    assert!(ctx.content.is_empty());
}

#[test]
fn validate_context_requires_a_name() {
    let mut ctx = blank_context();
    assert_eq!(validate_context(&ctx), Err("Context name is required."));
    ctx.name = "   ".to_owned();
    assert!(validate_context(&ctx).is_err());
    ctx.name = "Lore".to_owned();
    assert_eq!(validate_context(&ctx), Ok(()));
}

#[test]
fn only_persisted_contexts_delete_over_the_network() {
    assert!(delete_needs_network("c-1"));
    assert!(!delete_needs_network("new"));
    assert!(!delete_needs_network("draft-123"));
}
