use crate::{KnowledgeEntry, KnowledgeUpdate, NewKnowledgeEntry};

#[test]
fn test_knowledge_entry_new() {
    let entry = KnowledgeEntry::new(
        "faq".to_string(),
        "Opening hours".to_string(),
        "Open 08:00-17:00 on weekdays.".to_string(),
    );

    assert_eq!(entry.category, "faq");
    assert_eq!(entry.title, "Opening hours");
    assert_eq!(entry.content, "Open 08:00-17:00 on weekdays.");
    assert_eq!(entry.created_at, entry.updated_at);
}

#[test]
fn test_knowledge_entry_new_unique_ids() {
    let a = KnowledgeEntry::new("faq".into(), "A".into(), "a".into());
    let b = KnowledgeEntry::new("faq".into(), "B".into(), "b".into());

    assert_ne!(a.id, b.id);
}

#[test]
fn test_apply_partial_update() {
    let mut entry = KnowledgeEntry::new("faq".into(), "Title".into(), "Body".into());
    let original_id = entry.id;
    let original_created = entry.created_at;

    entry.apply(KnowledgeUpdate {
        content: Some("New body".into()),
        ..Default::default()
    });

    assert_eq!(entry.id, original_id);
    assert_eq!(entry.created_at, original_created);
    assert_eq!(entry.category, "faq");
    assert_eq!(entry.title, "Title");
    assert_eq!(entry.content, "New body");
    assert!(entry.updated_at >= original_created);
}

#[test]
fn test_apply_all_fields() {
    let mut entry = KnowledgeEntry::new("faq".into(), "Title".into(), "Body".into());

    entry.apply(KnowledgeUpdate {
        category: Some("jadwal".into()),
        title: Some("Jam buka".into()),
        content: Some("Senin-Jumat".into()),
    });

    assert_eq!(entry.category, "jadwal");
    assert_eq!(entry.title, "Jam buka");
    assert_eq!(entry.content, "Senin-Jumat");
}

#[test]
fn test_new_entry_validate_ok() {
    let input = NewKnowledgeEntry {
        category: "faq".into(),
        title: String::new(),
        content: "Body".into(),
    };

    assert!(input.validate().is_ok());
}

#[test]
fn test_new_entry_empty_category_rejected() {
    let input = NewKnowledgeEntry {
        category: "  ".into(),
        title: "Title".into(),
        content: "Body".into(),
    };

    let err = input.validate().unwrap_err();
    assert_eq!(err.message(), "Category cannot be empty");
}

#[test]
fn test_new_entry_empty_content_rejected() {
    let input = NewKnowledgeEntry {
        category: "faq".into(),
        title: "Title".into(),
        content: "".into(),
    };

    let err = input.validate().unwrap_err();
    assert_eq!(err.message(), "Content cannot be empty");
}

#[test]
fn test_update_validate_absent_fields_ok() {
    assert!(KnowledgeUpdate::default().validate().is_ok());
}

#[test]
fn test_update_validate_blank_category_rejected() {
    let update = KnowledgeUpdate {
        category: Some(" ".into()),
        ..Default::default()
    };

    assert!(update.validate().is_err());
}

#[test]
fn test_update_validate_blank_content_rejected() {
    let update = KnowledgeUpdate {
        content: Some(String::new()),
        ..Default::default()
    };

    assert!(update.validate().is_err());
}

#[test]
fn test_update_validate_blank_title_allowed() {
    let update = KnowledgeUpdate {
        title: Some(String::new()),
        ..Default::default()
    };

    assert!(update.validate().is_ok());
}
