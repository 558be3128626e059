//! Rename Editor State
//!
//! Tracks which todo (if any) is mid-rename and its unsaved draft.
//! One edit at a time; the draft has no relation to the stored title
//! until committed.

/// Inline rename state, a single owned value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    /// No rename in progress
    #[default]
    Viewing,
    /// Renaming one todo with an unsaved draft
    Editing { id: u32, draft: String },
}

/// What a commit gesture (blur, submit, Enter) must do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commit {
    /// No edit in progress, nothing to commit
    Noop,
    /// Trimmed draft is empty, delete the todo being edited
    Delete(u32),
    /// Rename the todo to the trimmed draft
    Rename { id: u32, title: String },
}

impl EditorState {
    /// Start editing a todo, pre-filling the draft with its current title.
    /// Any edit already in progress is abandoned.
    pub fn begin_edit(&mut self, id: u32, current_title: &str) {
        *self = EditorState::Editing {
            id,
            draft: current_title.to_string(),
        };
    }

    /// Replace the draft text; ignored when not editing
    pub fn set_draft(&mut self, text: String) {
        if let EditorState::Editing { draft, .. } = self {
            *draft = text;
        }
    }

    /// Discard the draft without committing
    pub fn cancel(&mut self) {
        *self = EditorState::Viewing;
    }

    /// Id of the todo being edited, if any
    pub fn editing_id(&self) -> Option<u32> {
        match self {
            EditorState::Editing { id, .. } => Some(*id),
            EditorState::Viewing => None,
        }
    }

    pub fn is_editing(&self, id: u32) -> bool {
        self.editing_id() == Some(id)
    }

    /// Current draft text, empty when not editing
    pub fn draft(&self) -> &str {
        match self {
            EditorState::Editing { draft, .. } => draft,
            EditorState::Viewing => "",
        }
    }

    /// Decide what a commit must do.
    ///
    /// Deleting requires a todo actually being edited; an empty draft with
    /// no active edit commits nothing.
    pub fn commit_intent(&self) -> Commit {
        match self {
            EditorState::Viewing => Commit::Noop,
            EditorState::Editing { id, draft } => {
                let trimmed = draft.trim();
                if trimmed.is_empty() {
                    Commit::Delete(*id)
                } else {
                    Commit::Rename {
                        id: *id,
                        title: trimmed.to_string(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_edit_prefills_draft_with_current_title() {
        let mut editor = EditorState::Viewing;
        editor.begin_edit(1, "Buy milk");
        assert_eq!(editor.editing_id(), Some(1));
        assert_eq!(editor.draft(), "Buy milk");
    }

    #[test]
    fn begin_edit_abandons_previous_edit() {
        let mut editor = EditorState::Viewing;
        editor.begin_edit(1, "Buy milk");
        editor.set_draft("half-finished".to_string());
        editor.begin_edit(2, "Walk dog");
        // One edit at a time, the old draft is gone
        assert_eq!(editor.editing_id(), Some(2));
        assert_eq!(editor.draft(), "Walk dog");
    }

    #[test]
    fn set_draft_is_ignored_while_viewing() {
        let mut editor = EditorState::Viewing;
        editor.set_draft("stray text".to_string());
        assert_eq!(editor, EditorState::Viewing);
        assert_eq!(editor.draft(), "");
    }

    #[test]
    fn commit_with_nonempty_draft_renames_with_trimmed_title() {
        let mut editor = EditorState::Viewing;
        editor.begin_edit(2, "Walk dog");
        editor.set_draft("  Walk the dog  ".to_string());
        assert_eq!(
            editor.commit_intent(),
            Commit::Rename {
                id: 2,
                title: "Walk the dog".to_string()
            }
        );
    }

    #[test]
    fn commit_with_empty_draft_deletes_edited_todo() {
        let mut editor = EditorState::Viewing;
        editor.begin_edit(1, "Buy milk");
        editor.set_draft(String::new());
        assert_eq!(editor.commit_intent(), Commit::Delete(1));
    }

    #[test]
    fn commit_with_whitespace_draft_deletes_edited_todo() {
        let mut editor = EditorState::Viewing;
        editor.begin_edit(3, "Water plants");
        editor.set_draft("   ".to_string());
        assert_eq!(editor.commit_intent(), Commit::Delete(3));
    }

    #[test]
    fn commit_while_viewing_never_deletes() {
        // Delete requires an active edit, so a commit with no editor open
        // must not produce a delete for any id
        let editor = EditorState::Viewing;
        assert_eq!(editor.commit_intent(), Commit::Noop);
    }

    #[test]
    fn cancel_returns_to_viewing_regardless_of_draft() {
        let mut editor = EditorState::Viewing;
        editor.begin_edit(1, "Buy milk");
        editor.set_draft("unsaved changes".to_string());
        editor.cancel();
        assert_eq!(editor, EditorState::Viewing);
        assert_eq!(editor.commit_intent(), Commit::Noop);
    }

    #[test]
    fn at_most_one_todo_is_edited() {
        let mut editor = EditorState::Viewing;
        editor.begin_edit(1, "Buy milk");
        editor.begin_edit(2, "Walk dog");
        assert!(!editor.is_editing(1));
        assert!(editor.is_editing(2));
    }

    #[test]
    fn scenario_clearing_the_title_deletes_the_todo() {
        // Items [{1,"Buy milk"},{2,"Walk dog"}]; double-click item 1,
        // clear the input, submit
        let mut editor = EditorState::Viewing;
        editor.begin_edit(1, "Buy milk");
        assert_eq!(editor.draft(), "Buy milk");
        editor.set_draft(String::new());
        assert_eq!(editor.commit_intent(), Commit::Delete(1));
        editor.cancel();
        assert_eq!(editor, EditorState::Viewing);
    }

    #[test]
    fn scenario_rename_on_blur() {
        // Double-click item 2, change the draft, blur
        let mut editor = EditorState::Viewing;
        editor.begin_edit(2, "Walk dog");
        editor.set_draft("Walk the dog".to_string());
        assert_eq!(
            editor.commit_intent(),
            Commit::Rename {
                id: 2,
                title: "Walk the dog".to_string()
            }
        );
    }
}
