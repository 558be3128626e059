//! Todo App Shell
//!
//! Wires the backend commands and global store to the todo components.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{NewTodoForm, RenameFuture, TodoList};
use crate::context::AppContext;
use crate::store::{store_remove_todo, store_update_todo, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Load todos on mount and on each reload trigger
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            match commands::list_todos().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} todos, trigger={}", loaded.len(), trigger).into());
                    store.todos().set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load todos: {}", e).into());
                }
            }
        });
    });

    let filtered_todos = Signal::derive(move || store.todos().get());
    let loading_todo_id = Signal::derive(move || store.loading_todo_id().get());

    // Toggle completion, busy overlay on the target row while in flight
    let update_todo_status = move |(id, completed): (u32, bool)| {
        spawn_local(async move {
            store.loading_todo_id().set(Some(id));
            if let Ok(updated) = commands::update_todo_status(id, completed).await {
                store_update_todo(&store, updated);
            }
            store.loading_todo_id().set(None);
        });
    };

    let delete_todo = move |id: u32| {
        spawn_local(async move {
            store.loading_todo_id().set(Some(id));
            if commands::delete_todo(id).await.is_ok() {
                store_remove_todo(&store, id);
            }
            store.loading_todo_id().set(None);
        });
    };

    // Rename hands its future back so the list can keep the editor open on failure
    let update_todo_title = Callback::new(move |(id, new_title): (u32, String)| -> RenameFuture {
        Box::pin(async move {
            store.loading_todo_id().set(Some(id));
            let result = commands::update_todo_title(id, &new_title).await;
            if let Ok(updated) = &result {
                store_update_todo(&store, updated.clone());
            }
            store.loading_todo_id().set(None);
            result.map(|_| ())
        })
    });

    view! {
        <div class="todoapp">
            <h1>"todos"</h1>

            <NewTodoForm />

            <TodoList
                filtered_todos=filtered_todos
                loading_todo_id=loading_todo_id
                update_todo_status=update_todo_status
                delete_todo=delete_todo
                update_todo_title=update_todo_title
            />

            <p class="todo-count">
                {move || {
                    let left = store.todos().get().iter().filter(|t| !t.completed).count();
                    format!("{} items left", left)
                }}
            </p>
        </div>
    }
}
