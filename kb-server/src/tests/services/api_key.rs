use crate::services::ApiKeyHandle;

#[test]
fn given_no_initial_key_when_read_then_empty() {
    let handle = ApiKeyHandle::new(None);

    assert_eq!(handle.current(), "");
    assert!(!handle.is_configured());
}

#[test]
fn given_initial_key_when_read_then_returned() {
    let handle = ApiKeyHandle::new(Some("AIza-initial".to_string()));

    assert_eq!(handle.current(), "AIza-initial");
    assert!(handle.is_configured());
}

#[test]
fn given_replace_when_read_through_clone_then_new_value_visible() {
    let handle = ApiKeyHandle::new(None);
    let clone = handle.clone();

    handle.replace("AIza-replaced".to_string());

    assert_eq!(clone.current(), "AIza-replaced");
}

#[test]
fn given_concurrent_replaces_then_final_value_is_one_of_the_writes() {
    let handle = ApiKeyHandle::new(None);

    let writers: Vec<_> = ["AIza-first", "AIza-second"]
        .into_iter()
        .map(|key| {
            let handle = handle.clone();
            std::thread::spawn(move || handle.replace(key.to_string()))
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    let value = handle.current();
    assert!(value == "AIza-first" || value == "AIza-second");
}
