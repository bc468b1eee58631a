use crate::services::chat::{build_prompt, select_context};

use kb_core::KnowledgeEntry;

fn entry(category: &str, title: &str, content: &str) -> KnowledgeEntry {
    KnowledgeEntry::new(category.into(), title.into(), content.into())
}

#[test]
fn test_build_prompt_contains_instructions_and_message() {
    let prompt = build_prompt(&[], "What are the visiting hours?");

    assert!(prompt.contains("You are a helpful assistant"));
    assert!(prompt.ends_with("User message:\nWhat are the visiting hours?"));
}

#[test]
fn test_build_prompt_numbers_entries_with_category_and_title() {
    let context = vec![
        entry("hours", "Opening times", "Open 9-5 on weekdays."),
        entry("parking", "Visitor parking", "Lot B is free after 6pm."),
    ];
    let prompt = build_prompt(&context, "parking?");

    assert!(prompt.contains("Knowledge entries:"));
    assert!(prompt.contains("[1] (hours) Opening times"));
    assert!(prompt.contains("Open 9-5 on weekdays."));
    assert!(prompt.contains("[2] (parking) Visitor parking"));
    assert!(prompt.contains("Lot B is free after 6pm."));
}

#[test]
fn test_build_prompt_blank_title_renders_category_only() {
    let context = vec![entry("faq", "  ", "Entries may have no title.")];
    let prompt = build_prompt(&context, "hello");

    assert!(prompt.contains("[1] (faq)\n"));
    assert!(!prompt.contains("[1] (faq) "));
}

#[test]
fn test_build_prompt_omits_entry_section_when_context_empty() {
    let prompt = build_prompt(&[], "hello");

    assert!(!prompt.contains("Knowledge entries:"));
}

#[test]
fn test_select_context_keeps_whole_corpus_within_limit() {
    let entries = vec![
        entry("a", "one", "first"),
        entry("b", "two", "second"),
    ];
    let selected = select_context(entries.clone(), "unrelated message", 5);

    // No filtering when everything fits
    assert_eq!(selected, entries);
}

#[test]
fn test_select_context_filters_by_keyword_beyond_limit() {
    let entries = vec![
        entry("hours", "Opening times", "Open 9-5."),
        entry("parking", "Visitor parking", "Lot B."),
        entry("food", "Cafeteria", "Closes at 3."),
    ];
    let selected = select_context(entries, "where is visitor parking", 2);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].category, "parking");
}

#[test]
fn test_select_context_matches_case_insensitively() {
    let entries = vec![
        entry("Parking", "LOT INFO", "Lot B."),
        entry("hours", "times", "9-5."),
        entry("food", "cafeteria", "3pm."),
    ];
    let selected = select_context(entries, "PARKING", 2);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].category, "Parking");
}

#[test]
fn test_select_context_ignores_words_shorter_than_three_chars() {
    let entries = vec![
        entry("a", "on", "is at no"),
        entry("b", "of", "to be or"),
        entry("c", "it", "an as by"),
    ];
    // Every message word is under three characters, so nothing matches
    let selected = select_context(entries, "is it on", 2);

    assert!(selected.is_empty());
}

#[test]
fn test_select_context_truncates_to_limit() {
    let entries = vec![
        entry("a", "parking one", "x"),
        entry("b", "parking two", "x"),
        entry("c", "parking three", "x"),
    ];
    let selected = select_context(entries, "parking", 2);

    assert_eq!(selected.len(), 2);
    assert_eq!(selected[0].title, "parking one");
    assert_eq!(selected[1].title, "parking two");
}
