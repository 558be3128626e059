//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"[
            {"id": 1, "title": "Buy milk", "completed": false},
            {"id": 2, "title": "Walk dog", "completed": true}
        ]"#;
        let todos: Vec<Todo> = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].title, "Buy milk");
        assert!(todos[1].completed);
    }
}
