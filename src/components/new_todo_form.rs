//! New Todo Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::NewItem;
use crate::store::use_todo_store;

/// Form for creating a todo. Reloads the list once the server answers.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todo_store();
    let (new_title, set_new_title) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.trim().is_empty() { return; }

        spawn_local(async move {
            match store.add_item(&NewItem::new(title)).await {
                Ok(Some(created)) => {
                    log::info!("Created item #{}", created.id);
                    set_new_title.set(String::new());
                    store.reload();
                }
                Ok(None) => log::warn!("Server rejected new item"),
                Err(e) => log::error!("Failed to create item: {}", e),
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                placeholder="Add new todo..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
