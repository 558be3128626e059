//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use crate::models::Todo;
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos in display order (backend keeps them filtered and sorted)
    pub todos: Vec<Todo>,
    /// Todo with an in-flight backend operation, shows the busy overlay
    pub loading_todo_id: Option<u32>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Update a todo in the store by ID
pub fn store_update_todo(store: &AppStore, updated: Todo) {
    store.todos().write().iter_mut()
        .find(|todo| todo.id == updated.id)
        .map(|todo| *todo = updated);
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &AppStore, todo_id: u32) {
    store.todos().write().retain(|todo| todo.id != todo_id);
}
