//! Search Bar Component

use leptos::prelude::*;

use crate::filter::MIN_SEARCH_LEN;
use crate::store::use_todo_store;

/// Text box bound to the store's search term
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder=format!("Search (at least {} characters)...", MIN_SEARCH_LEN)
                prop:value=move || store.search_term()
                on:input=move |ev| store.set_search_term(event_target_value(&ev))
            />
        </div>
    }
}
