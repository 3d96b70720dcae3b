use super::*;

#[test]
fn messages_name_the_item_type() {
    assert_eq!(empty_message("world"), "No worlds found.");
    assert_eq!(
        no_match_message("blueprint"),
        "No blueprints found matching your search."
    );
    assert_eq!(loading_message("context"), "Loading contexts...");
    assert_eq!(search_placeholder("object"), "Search objects by name...");
}

#[test]
fn page_input_is_one_based_and_clamped() {
    assert_eq!(page_input_to_index("1", 3), Some(0));
    assert_eq!(page_input_to_index("3", 3), Some(2));
    assert_eq!(page_input_to_index(" 2 ", 3), Some(1));
    // Past the end snaps to the last page.
    assert_eq!(page_input_to_index("9", 3), Some(2));
    // Zero snaps to the first page.
    assert_eq!(page_input_to_index("0", 3), Some(0));
}

#[test]
fn page_input_rejects_garbage() {
    assert_eq!(page_input_to_index("abc", 3), None);
    assert_eq!(page_input_to_index("", 3), None);
    assert_eq!(page_input_to_index("-1", 3), None);
}
