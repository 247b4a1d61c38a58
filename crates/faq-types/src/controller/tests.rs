use super::*;
use crate::store::MemoryStore;
use crate::view::Indicator;
use std::sync::Arc;

fn sample() -> Vec<FaqRecord> {
    vec![FaqRecord::new("A?", "1"), FaqRecord::new("B?", "2")]
}

fn visible_answers(accordion: &Accordion) -> Vec<Option<&str>> {
    accordion.views().map(|v| v.visible_answer()).collect()
}

#[test]
fn test_fresh_mount_renders_collapsed() {
    let accordion = Accordion::mount(sample(), MemoryStore::new("faqState").shared());

    assert!(accordion.expanded().is_empty());
    assert!(accordion.views().all(|v| v.indicator() == Indicator::Down));
    assert_eq!(visible_answers(&accordion), vec![None, None]);
}

#[test]
fn test_toggle_opens_and_persists() {
    let store = Arc::new(MemoryStore::new("faqState"));
    let mut accordion = Accordion::mount(sample(), store.clone());

    let set = accordion.toggle(0);

    assert_eq!(set, ExpansionSet::from(vec![0]));
    assert_eq!(store.snapshot().as_deref(), Some("[0]"));
    let views: Vec<_> = accordion.views().collect();
    assert_eq!(views[0].visible_answer(), Some("1"));
    assert_eq!(views[0].indicator(), Indicator::Up);
    assert_eq!(views[1].visible_answer(), None);
    assert_eq!(views[1].indicator(), Indicator::Down);
}

#[test]
fn test_second_toggle_closes_and_persists_empty() {
    let store = Arc::new(MemoryStore::new("faqState"));
    let mut accordion = Accordion::mount(sample(), store.clone());

    accordion.toggle(0);
    let set = accordion.toggle(0);

    assert!(set.is_empty());
    assert_eq!(store.snapshot().as_deref(), Some("[]"));
    assert_eq!(visible_answers(&accordion), vec![None, None]);
}

#[test]
fn test_mount_rehydrates_stored_state() {
    let store = MemoryStore::with_value("faqState", "[1]").shared();
    let accordion = Accordion::mount(sample(), store);

    let views: Vec<_> = accordion.views().collect();
    assert_eq!(views[0].indicator(), Indicator::Down);
    assert_eq!(views[0].visible_answer(), None);
    assert_eq!(views[1].indicator(), Indicator::Up);
    assert_eq!(views[1].visible_answer(), Some("2"));
}

#[test]
fn test_toggle_replaces_rather_than_mutates() {
    let mut accordion = Accordion::mount(sample(), MemoryStore::new("faqState").shared());

    let before = accordion.expanded().clone();
    let after = accordion.toggle(1);

    assert!(before.is_empty());
    assert!(!after.ptr_eq(&before));
}

#[test]
fn test_even_toggles_restore_membership() {
    let records: Vec<_> = (0..4).map(|i| FaqRecord::new(format!("Q{i}"), format!("A{i}"))).collect();
    let mut accordion = Accordion::mount(records, MemoryStore::new("faqState").shared());
    accordion.toggle(2);
    let start = accordion.expanded().clone();

    for sequence in [vec![0, 0], vec![2, 1, 2, 1], vec![3, 0, 3, 0, 3, 3]] {
        for index in sequence {
            accordion.toggle(index);
        }
        assert_eq!(accordion.expanded(), &start);
    }
}

#[test]
fn test_state_round_trips_through_fresh_mount() {
    let records: Vec<_> = (0..6).map(|i| FaqRecord::new(format!("Q{i}"), format!("A{i}"))).collect();

    for open in [vec![], vec![5], vec![0, 2, 4], vec![0, 1, 2, 3, 4, 5]] {
        let store = Arc::new(MemoryStore::new("faqState"));
        let mut first = Accordion::mount(records.clone(), store.clone());
        for &index in &open {
            first.toggle(index);
        }

        let second = Accordion::mount(records.clone(), store);
        assert_eq!(second.expanded(), first.expanded());
        assert_eq!(second.expanded(), &ExpansionSet::from(open));
    }
}

#[test]
fn test_corrupt_state_falls_back_to_empty() {
    for raw in ["not json", "{\"0\":true}", "[\"a\"]", "[-3]"] {
        let store = MemoryStore::with_value("faqState", raw).shared();
        let accordion = Accordion::mount(sample(), store);
        assert!(accordion.expanded().is_empty(), "accepted {raw}");
    }
}

#[test]
fn test_unavailable_storage_still_toggles() {
    let mut accordion = Accordion::mount(sample(), MemoryStore::unavailable("faqState").shared());

    assert!(accordion.expanded().is_empty());
    assert_eq!(accordion.toggle(1), ExpansionSet::from(vec![1]));
    assert_eq!(visible_answers(&accordion), vec![None, Some("2")]);
}

#[test]
fn test_stale_indices_dropped_on_mount() {
    let store = MemoryStore::with_value("faqState", "[0,1,9]").shared();
    let accordion = Accordion::mount(sample(), store);

    assert_eq!(accordion.expanded(), &ExpansionSet::from(vec![0, 1]));
}

#[test]
fn test_out_of_range_toggle_is_ignored() {
    let store = Arc::new(MemoryStore::new("faqState"));
    let mut accordion = Accordion::mount(sample(), store.clone());

    let set = accordion.toggle(2);

    assert!(set.is_empty());
    assert_eq!(store.snapshot(), None);
}

#[test]
fn test_toggle_flips_in_range_index() {
    let start = ExpansionSet::from(vec![1]);

    let opened = toggle(&start, 0, 2).unwrap();
    let closed = toggle(&start, 1, 2).unwrap();

    assert_eq!(opened, ExpansionSet::from(vec![0, 1]));
    assert!(closed.is_empty());
    assert_eq!(start, ExpansionSet::from(vec![1]));
}

#[test]
fn test_toggle_rejects_index_past_end() {
    let start = ExpansionSet::from(vec![0]);

    assert_eq!(toggle(&start, 2, 2), None);
    assert_eq!(toggle(&ExpansionSet::new(), 0, 0), None);
}

#[test]
fn test_persist_writes_current_set() {
    let store = MemoryStore::new("faqState");

    persist(&store, &ExpansionSet::from(vec![3, 1]));

    assert_eq!(store.snapshot().as_deref(), Some("[1,3]"));
}

#[test]
fn test_persist_tolerates_unavailable_store() {
    let store = MemoryStore::unavailable("faqState");

    persist(&store, &ExpansionSet::from(vec![0]));

    assert_eq!(store.snapshot(), None);
}
