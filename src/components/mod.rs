//! UI Components
//!
//! Reusable Leptos components.

mod new_todo_form;
mod todo_list;

pub use new_todo_form::NewTodoForm;
pub use todo_list::{RenameFuture, TodoList};
