use crate::Announcement;

#[test]
fn test_announcement_new() {
    let announcement = Announcement::new(
        "Libur Lebaran".to_string(),
        "Kantor tutup 8-12 April.".to_string(),
    );

    assert_eq!(announcement.title, "Libur Lebaran");
    assert_eq!(announcement.message, "Kantor tutup 8-12 April.");
}

#[test]
fn test_validate_ok() {
    let announcement = Announcement::new("Title".into(), "Message".into());
    assert!(announcement.validate().is_ok());
}

#[test]
fn test_validate_blank_title_rejected() {
    let announcement = Announcement::new("   ".into(), "Message".into());

    let err = announcement.validate().unwrap_err();
    assert_eq!(err.message(), "Title cannot be empty");
}

#[test]
fn test_validate_blank_message_rejected() {
    let announcement = Announcement::new("Title".into(), String::new());

    let err = announcement.validate().unwrap_err();
    assert_eq!(err.message(), "Message cannot be empty");
}
