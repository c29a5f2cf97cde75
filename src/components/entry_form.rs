//! Contact form with one input per draft field and an Add/Update button.

use leptos::prelude::*;

use crate::state::draft::DraftField;
use crate::state::entries::ContactBook;

/// Draft inputs bound to the shared book. Submitting commits the draft.
#[component]
pub fn EntryForm(book: RwSignal<ContactBook>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        book.update(|b| {
            b.submit();
        });
    };

    view! {
        <form class="entry-form" on:submit=on_submit>
            {DraftField::ALL
                .into_iter()
                .map(|field| view! { <DraftInput book=book field=field/> })
                .collect::<Vec<_>>()}
            <button class="btn btn--primary entry-form__submit" type="submit">
                {move || book.with(|b| b.submit_label())}
            </button>
        </form>
    }
}

#[component]
fn DraftInput(book: RwSignal<ContactBook>, field: DraftField) -> impl IntoView {
    view! {
        <input
            class="entry-form__input"
            type=field.input_type()
            placeholder=field.placeholder()
            aria-label=field.label()
            required
            prop:value=move || book.with(|b| b.draft().get(field).to_owned())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                book.update(|b| b.set_field(field, value));
            }
        />
    }
}
