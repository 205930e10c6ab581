//! UI Components
//!
//! Leptos components reading the todo store from context.

mod new_todo_form;
mod search_bar;
mod todo_list;
mod todo_row;

pub use new_todo_form::NewTodoForm;
pub use search_bar::SearchBar;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
