//! Todo Row Component
//!
//! Single todo with inline title editing and delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Item;
use crate::store::use_todo_store;

/// Titles longer than this are cut short in the delete prompt
const PROMPT_TITLE_MAX: usize = 24;

/// Where a row is in its delete flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeletePhase {
    Idle,
    Confirming,
    /// DELETE sent, waiting for the server
    InFlight,
}

/// Confirmation text naming the todo, e.g. `Delete 'Buy milk'?`
fn delete_prompt(item: &Item, phase: DeletePhase) -> String {
    if phase == DeletePhase::InFlight {
        return format!("Deleting #{}...", item.id);
    }
    let title = if item.title.chars().count() > PROMPT_TITLE_MAX {
        let cut: String = item.title.chars().take(PROMPT_TITLE_MAX).collect();
        format!("{}…", cut.trim_end())
    } else {
        item.title.clone()
    };
    format!("Delete '{}'?", title)
}

#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let store = use_todo_store();

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(item.title.clone());
    let item = StoredValue::new(item);

    let save = move || {
        let mut edited = item.get_value();
        let title = draft.get();
        set_editing.set(false);
        if title.trim().is_empty() || title == edited.title { return; }
        edited.title = title;

        spawn_local(async move {
            match store.edit_item(&edited).await {
                Ok(Some(_)) => store.reload(),
                Ok(None) => log::warn!("Server rejected edit of item #{}", edited.id),
                Err(e) => log::error!("Failed to edit item #{}: {}", edited.id, e),
            }
        });
    };

    let (delete_phase, set_delete_phase) = signal(DeletePhase::Idle);

    let confirm_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let target = item.get_value();
        set_delete_phase.set(DeletePhase::InFlight);
        spawn_local(async move {
            match store.delete_item(&target).await {
                Ok(true) => store.reload(),
                Ok(false) => {
                    log::warn!("Server refused to delete item #{}", target.id);
                    set_delete_phase.set(DeletePhase::Idle);
                }
                Err(e) => {
                    log::error!("Failed to delete item #{}: {}", target.id, e);
                    set_delete_phase.set(DeletePhase::Idle);
                }
            }
        });
    };

    view! {
        <li class="todo-row">
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span
                        class="item-text"
                        title="Double-click to edit"
                        on:dblclick=move |_| {
                            set_draft.set(item.with_value(|i| i.title.clone()));
                            set_editing.set(true);
                        }
                    >
                        {item.with_value(|i| i.title.clone())}
                    </span>
                }
            >
                <form class="edit-form" on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    save();
                }>
                    <input
                        type="text"
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                set_editing.set(false);
                            }
                        }
                    />
                    <button type="submit">"Save"</button>
                </form>
            </Show>
            <span class="item-date">{item.with_value(|i| i.created_date.clone())}</span>
            <Show
                when=move || delete_phase.get() != DeletePhase::Idle
                fallback=move || view! {
                    <button
                        class="delete-btn"
                        title=format!("Delete todo #{}", item.with_value(|i| i.id))
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_delete_phase.set(DeletePhase::Confirming);
                        }
                    >
                        "×"
                    </button>
                }
            >
                <span class="delete-confirm">
                    <span class="delete-confirm-text">
                        {move || item.with_value(|i| delete_prompt(i, delete_phase.get()))}
                    </span>
                    <button
                        class="confirm-btn"
                        disabled=move || delete_phase.get() == DeletePhase::InFlight
                        on:click=confirm_delete
                    >
                        "Yes"
                    </button>
                    <button
                        class="cancel-btn"
                        disabled=move || delete_phase.get() == DeletePhase::InFlight
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_delete_phase.set(DeletePhase::Idle);
                        }
                    >
                        "No"
                    </button>
                </span>
            </Show>
        </li>
    }
}
