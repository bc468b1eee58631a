use crate::KnowledgeStats;

#[test]
fn test_record_counts_by_category() {
    let mut stats = KnowledgeStats::default();

    stats.record("faq");
    stats.record("faq");
    stats.record("jadwal");

    assert_eq!(stats.total_knowledge, 3);
    assert_eq!(stats.categories.get("faq"), Some(&2));
    assert_eq!(stats.categories.get("jadwal"), Some(&1));
}

#[test]
fn test_total_equals_category_sum() {
    let mut stats = KnowledgeStats::default();
    for category in ["a", "b", "a", "c", "b", "a"] {
        stats.record(category);
    }

    let sum: u64 = stats.categories.values().sum();
    assert_eq!(stats.total_knowledge, sum);
}

#[test]
fn test_default_is_zeroed() {
    let stats = KnowledgeStats::default();

    assert_eq!(stats.total_knowledge, 0);
    assert!(stats.categories.is_empty());
}
