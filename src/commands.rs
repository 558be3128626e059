//! Backend Command Wrappers
//!
//! Frontend bindings to backend commands.

use crate::models::Todo;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

// ========================
// Command Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateTodoArgs<'a> {
    pub title: &'a str,
}

#[derive(Serialize)]
pub struct IdArgs {
    pub id: u32,
}

#[derive(Serialize)]
pub struct StatusArgs {
    pub id: u32,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct TitleArgs<'a> {
    pub id: u32,
    #[serde(rename = "newTitle")]
    pub new_title: &'a str,
}

// ========================
// Todo Commands
// ========================

pub async fn list_todos() -> Result<Vec<Todo>, String> {
    let result = invoke("list_todos", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_todo(title: &str) -> Result<Todo, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateTodoArgs { title }).map_err(|e| e.to_string())?;
    let result = invoke("create_todo", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_todo_status(id: u32, completed: bool) -> Result<Todo, String> {
    let js_args = serde_wasm_bindgen::to_value(&StatusArgs { id, completed }).map_err(|e| e.to_string())?;
    let result = invoke("update_todo_status", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_todo_title(id: u32, new_title: &str) -> Result<Todo, String> {
    let js_args = serde_wasm_bindgen::to_value(&TitleArgs { id, new_title }).map_err(|e| e.to_string())?;
    let result = invoke("update_todo_title", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_todo(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let _ = invoke("delete_todo", js_args).await;
    Ok(())
}
