//! Todo App
//!
//! Root component: builds the store, provides it to the tree, loads items.

use leptos::prelude::*;

use crate::api::TodoApi;
use crate::components::{NewTodoForm, SearchBar, TodoList};
use crate::config::AppConfig;
use crate::store::{provide_todo_store, TodoStore};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = TodoStore::new(TodoApi::fetch(config));
    provide_todo_store(store);

    // Initial load
    store.reload();

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>
            <SearchBar />
            <NewTodoForm />
            <TodoList />
            <p class="item-count">
                {move || {
                    let shown = store.filtered_items().len();
                    let total = store.items().len();
                    if shown == total {
                        format!("{} items", total)
                    } else {
                        format!("{} of {} items", shown, total)
                    }
                }}
            </p>
        </main>
    }
}
