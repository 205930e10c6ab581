//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::use_todo_store;

/// Filtered todo list, with placeholders for loading and empty states
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <Show
            when=move || store.is_initialized()
            fallback=|| view! { <p class="placeholder">"Loading..."</p> }
        >
            <Show
                when=move || !store.filtered_items().is_empty()
                fallback=|| view! { <p class="placeholder">"Nothing to show"</p> }
            >
                <ul class="todo-list">
                    // Keyed by title too, so a reload after an edit re-renders the row
                    <For
                        each=move || store.filtered_items()
                        key=|item| (item.id, item.title.clone())
                        children=move |item| view! { <TodoRow item=item /> }
                    />
                </ul>
            </Show>
        </Show>
    }
}
