//! Table of committed entries with per-row Edit and Delete actions.
//!
//! DESIGN
//! ======
//! Rows read from memos over the committed entries and the edit target, so
//! typing into the form does not re-render the table. Rows are keyed by the
//! whole entry: an updated entry gets a new key and its row is rebuilt.

#[cfg(test)]
#[path = "entry_table_test.rs"]
mod entry_table_test;

use leptos::prelude::*;

use crate::state::draft::DraftField;
use crate::state::entries::{ContactBook, Entry, EntryBook, EntryId};
use crate::util::storage::KeyValueStore;

/// Snapshot of the rows the table renders, in collection order.
fn table_rows<S: KeyValueStore>(book: &EntryBook<S>) -> Vec<Entry> {
    book.entries().to_vec()
}

/// Renders every entry in collection order.
#[component]
pub fn EntryTable(book: RwSignal<ContactBook>) -> impl IntoView {
    let rows = Memo::new(move |_| book.with(table_rows));
    let editing = Memo::new(move |_| book.with(|b| b.mode().target()));

    let on_edit = Callback::new(move |id: EntryId| {
        book.update(|b| {
            b.begin_edit(id);
        });
    });
    let on_delete = Callback::new(move |id: EntryId| {
        book.update(|b| {
            b.delete(id);
        });
    });

    view! {
        <table class="entry-table">
            <thead>
                <tr>
                    {DraftField::ALL
                        .into_iter()
                        .map(|field| view! { <th>{field.label()}</th> })
                        .collect::<Vec<_>>()}
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=Entry::clone
                    children=move |entry| {
                        view! {
                            <EntryRow entry=entry editing=editing on_edit=on_edit on_delete=on_delete/>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
fn EntryRow(
    entry: Entry,
    editing: Memo<Option<EntryId>>,
    on_edit: Callback<EntryId>,
    on_delete: Callback<EntryId>,
) -> impl IntoView {
    let id = entry.id;
    view! {
        <tr
            class=move || {
                if editing.get() == Some(id) {
                    "entry-table__row entry-table__row--editing"
                } else {
                    "entry-table__row"
                }
            }
            data-entry-id=id.to_string()
        >
            <td>{entry.name}</td>
            <td>{entry.email}</td>
            <td>{entry.number}</td>
            <td>{entry.date}</td>
            <td class="entry-table__actions">
                <button class="btn" on:click=move |_| on_edit.run(id)>
                    "Edit"
                </button>
                " "
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
