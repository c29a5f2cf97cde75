//! Contacts page: the entry form above the entry table.

use leptos::prelude::*;

use crate::components::entry_form::EntryForm;
use crate::components::entry_table::EntryTable;
use crate::state::entries::ContactBook;

#[component]
pub fn ContactsPage() -> impl IntoView {
    let book = expect_context::<RwSignal<ContactBook>>();

    view! {
        <div class="contacts-page">
            <h2>"📋 Contact Form"</h2>
            <EntryForm book=book/>
            <EntryTable book=book/>
        </div>
    }
}
