//! Root application component with routing and the book context provider.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::contacts::ContactsPage;
use crate::state::entries::ContactBook;
use crate::util::storage::LocalStorage;

/// Root application component.
///
/// Loads the persisted book once and provides it to the page as a signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let book = RwSignal::new(ContactBook::load(LocalStorage));
    provide_context(book);

    view! {
        <Title text="Contact Book"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ContactsPage/>
            </Routes>
        </Router>
    }
}
