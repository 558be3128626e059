//! Todo List Component
//!
//! The todo rows: status toggle, delete, inline rename, and a busy overlay
//! on the row with an in-flight backend operation. Rows animate in and out
//! via keyed transitions.

use std::future::Future;
use std::pin::Pin;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use leptos_transition::{use_keyed_transitions, TransitionConfig};

use crate::editor::{Commit, EditorState};
use crate::models::Todo;

/// Row insert/remove animation length, matches the stylesheet
const TRANSITION_MS: u32 = 300;

/// Future returned by the rename capability; resolves once the backend
/// accepts or rejects the new title
pub type RenameFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Row class with completion and transition modifiers
fn row_class(completed: bool, transition_class: &str) -> String {
    let mut class = String::from("todo");
    if completed {
        class.push_str(" completed");
    }
    if !transition_class.is_empty() {
        class.push(' ');
        class.push_str(transition_class);
    }
    class
}

/// Busy overlay class, active for exactly the loading todo
fn loader_class(loading_todo_id: Option<u32>, id: u32) -> &'static str {
    if loading_todo_id == Some(id) {
        "modal overlay is-active"
    } else {
        "modal overlay"
    }
}

/// Todo list with inline rename and animated rows
#[component]
pub fn TodoList(
    /// Todos in display order, filtered and sorted by the caller
    filtered_todos: Signal<Vec<Todo>>,
    /// Todo showing the busy overlay, if any
    loading_todo_id: Signal<Option<u32>>,
    /// Fire-and-forget completion toggle
    #[prop(into)]
    update_todo_status: Callback<(u32, bool)>,
    /// Fire-and-forget delete
    #[prop(into)]
    delete_todo: Callback<u32>,
    /// Rename request; its result gates closing the editor
    update_todo_title: Callback<(u32, String), RenameFuture>,
) -> impl IntoView {
    let editor = RwSignal::new(EditorState::Viewing);

    let config = TransitionConfig::named("item", TRANSITION_MS);
    let rows = use_keyed_transitions(filtered_todos, |todo: &Todo| todo.id, config.clone());

    // Commit the draft: empty deletes, non-empty renames. A failed rename
    // keeps the editor open with the unsaved draft.
    let commit = move || match editor.with_untracked(|e| e.commit_intent()) {
        Commit::Noop => editor.set(EditorState::Viewing),
        Commit::Delete(id) => {
            delete_todo.run(id);
            editor.set(EditorState::Viewing);
        }
        Commit::Rename { id, title } => {
            let request = update_todo_title.run((id, title));
            spawn_local(async move {
                if request.await.is_ok() {
                    // Close only if this edit is still the active one
                    editor.update(|state| {
                        if state.is_editing(id) {
                            *state = EditorState::Viewing;
                        }
                    });
                }
            });
        }
    };

    view! {
        <section class="todoapp__main">
            <For
                each=move || rows.get()
                key=|entry| entry.key
                children=move |entry| {
                    let id = entry.key;
                    let config = config.clone();
                    let input_ref = NodeRef::<html::Input>::new();

                    view! {
                        <div class=move || {
                            let completed = entry.value.with(|t| t.completed);
                            row_class(completed, config.class_for(entry.phase.get()))
                        }>
                            <label class="todo__status-label">
                                <input
                                    type="checkbox"
                                    class="todo__status"
                                    prop:checked=move || entry.value.with(|t| t.completed)
                                    on:change=move |_| {
                                        let completed = entry.value.with_untracked(|t| t.completed);
                                        update_todo_status.run((id, !completed));
                                    }
                                />
                            </label>

                            {move || if editor.with(|e| e.is_editing(id)) {
                                // Focus the input once it mounts
                                Effect::new(move |_| {
                                    if let Some(input) = input_ref.get() {
                                        let _ = input.focus();
                                    }
                                });

                                view! {
                                    <form on:submit=move |ev: web_sys::SubmitEvent| {
                                        ev.prevent_default();
                                        commit();
                                    }>
                                        <input
                                            type="text"
                                            class="todo__title-field"
                                            placeholder="Empty todo will be deleted"
                                            node_ref=input_ref
                                            prop:value=move || editor.with(|e| e.draft().to_string())
                                            on:input=move |ev| {
                                                let target = ev.target().unwrap();
                                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                editor.update(|e| e.set_draft(input.value()));
                                            }
                                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                                if ev.key() == "Escape" {
                                                    editor.update(|e| e.cancel());
                                                } else if ev.key() == "Enter" {
                                                    ev.prevent_default();
                                                    commit();
                                                }
                                            }
                                            on:blur=move |_| commit()
                                        />
                                    </form>
                                }.into_any()
                            } else {
                                view! {
                                    <span
                                        class="todo__title"
                                        on:dblclick=move |_| {
                                            let title = entry.value.with_untracked(|t| t.title.clone());
                                            editor.update(|e| e.begin_edit(id, &title));
                                        }
                                    >
                                        {move || entry.value.with(|t| t.title.clone())}
                                    </span>
                                    <button
                                        type="button"
                                        class="todo__remove"
                                        on:click=move |_| delete_todo.run(id)
                                    >
                                        "×"
                                    </button>
                                }.into_any()
                            }}

                            <div class=move || loader_class(loading_todo_id.get(), id)>
                                <div class="modal-background has-background-white-ter"></div>
                                <div class="loader"></div>
                            </div>
                        </div>
                    }
                }
            />
        </section>
    }
}
