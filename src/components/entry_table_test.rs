use super::*;
use crate::state::draft::Draft;
use crate::util::storage::MemoryStore;

const T0: i64 = 1_704_067_200_000;

fn two_entry_book() -> (EntryBook<MemoryStore>, EntryId, EntryId) {
    let mut book = EntryBook::load(MemoryStore::new());
    let a = book
        .add(Draft::new("Alice", "a@x.com", "555-1111", "2024-01-01"), T0)
        .expect("added");
    let b = book
        .add(Draft::new("Bob", "b@x.com", "555-3333", "2023-12-31"), T0 + 1)
        .expect("added");
    (book, a, b)
}

#[test]
fn table_rows_follow_collection_order() {
    let (book, a, b) = two_entry_book();
    let ids: Vec<EntryId> = table_rows(&book).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn draft_edits_leave_table_rows_unchanged() {
    let (mut book, a, _) = two_entry_book();
    let before = table_rows(&book);
    book.begin_edit(a);
    book.set_field(DraftField::Name, "Alicia");
    book.set_field(DraftField::Email, "");
    assert_eq!(table_rows(&book), before);
}

#[test]
fn update_changes_only_the_updated_row_key() {
    let (mut book, a, _) = two_entry_book();
    let before = table_rows(&book);
    assert!(book.update(a, Draft::new("Alicia", "a@x.com", "555-1111", "2024-01-01")));
    let after = table_rows(&book);
    assert_ne!(after[0], before[0]);
    assert_eq!(after[0].id, before[0].id);
    assert_eq!(after[1], before[1]);
}
