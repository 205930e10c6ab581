//! Application State Store
//!
//! Uses Leptos reactive_stores for the cached list and search term, plus a
//! memo for the filtered view. Constructed once in `App` and handed to
//! components through context.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{ApiResult, TodoApi};
use crate::filter::filter_items;
use crate::models::{Item, NewItem};

/// Cached client-side state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Items in server order
    pub items: Vec<Item>,
    pub search_term: String,
    /// Set once the first `initialize` has completed
    pub initialized: bool,
}

/// Store handle shared through context. Cheap to copy.
#[derive(Clone, Copy)]
pub struct TodoStore {
    state: Store<TodoState>,
    filtered: Memo<Vec<Item>>,
    api: StoredValue<TodoApi>,
}

impl TodoStore {
    pub fn new(api: TodoApi) -> Self {
        let state = Store::new(TodoState::default());
        let filtered = Memo::new(move |_| {
            let term = state.search_term().get();
            filter_items(&state.items().read(), &term)
        });
        Self {
            state,
            filtered,
            api: StoredValue::new(api),
        }
    }

    // ========================
    // Reads
    // ========================

    /// Full cached list
    pub fn items(&self) -> Vec<Item> {
        self.state.items().get()
    }

    /// Cached list narrowed by the search term
    pub fn filtered_items(&self) -> Vec<Item> {
        self.filtered.get()
    }

    pub fn search_term(&self) -> String {
        self.state.search_term().get()
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.state.search_term().set(term.into());
    }

    pub fn is_initialized(&self) -> bool {
        self.state.initialized().get()
    }

    // ========================
    // Remote operations
    // ========================

    /// Replace the cached list with whatever the server returns.
    ///
    /// Overlapping calls are not sequenced: whichever response lands last wins.
    pub async fn initialize(&self) -> ApiResult<()> {
        let api = self.api.get_value();
        let items = api.list_items().await?;
        log::debug!("Loaded {} items", items.len());
        self.state.items().set(items);
        self.state.initialized().set(true);
        Ok(())
    }

    /// Fire-and-forget `initialize` for event handlers. Errors are only logged.
    pub fn reload(&self) {
        let store = *self;
        spawn_local(async move {
            if let Err(e) = store.initialize().await {
                log::error!("Failed to load items: {}", e);
            }
        });
    }

    /// Create on the server. The cached list is left as is.
    pub async fn add_item(&self, new_item: &NewItem) -> ApiResult<Option<Item>> {
        self.api.get_value().create_item(new_item).await
    }

    /// Update the title on the server. The cached list is left as is.
    pub async fn edit_item(&self, item: &Item) -> ApiResult<Option<Item>> {
        self.api.get_value().update_item(item).await
    }

    /// Delete on the server. The cached list is left as is.
    pub async fn delete_item(&self, item: &Item) -> ApiResult<bool> {
        self.api.get_value().delete_item(item).await
    }
}

/// Register the store for all descendants
pub fn provide_todo_store(store: TodoStore) {
    provide_context(store);
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}
