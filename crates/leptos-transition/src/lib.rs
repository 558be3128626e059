//! Leptos Transition Utilities
//!
//! Keyed enter/exit transitions for Leptos lists.
//! Mirrors a keyed source list into render entries; removed entries keep
//! rendering with the exit class until the transition duration elapses.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Lifecycle phase of a rendered entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Just inserted, enter class applied
    Entering,
    /// Transition finished, no class applied
    Settled,
    /// Gone from the source, exit class applied until removal
    Exiting,
}

/// CSS classes and timing for a transition group
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionConfig {
    pub enter_class: String,
    pub exit_class: String,
    pub duration_ms: u32,
}

impl TransitionConfig {
    /// Conventional `{name}-enter` / `{name}-exit` class pair
    pub fn named(name: &str, duration_ms: u32) -> Self {
        Self {
            enter_class: format!("{}-enter", name),
            exit_class: format!("{}-exit", name),
            duration_ms,
        }
    }

    /// Class for a phase, empty once settled
    pub fn class_for(&self, phase: TransitionPhase) -> &str {
        match phase {
            TransitionPhase::Entering => &self.enter_class,
            TransitionPhase::Exiting => &self.exit_class,
            TransitionPhase::Settled => "",
        }
    }
}

/// A keyed row mirrored from the source list
pub struct TransitionEntry<T: Send + Sync + 'static> {
    pub key: u32,
    pub value: RwSignal<T>,
    pub phase: RwSignal<TransitionPhase>,
}

impl<T: Send + Sync + 'static> Clone for TransitionEntry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for TransitionEntry<T> {}

/// Keys entering and leaving between two keyed snapshots
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyedDiff {
    pub entered: Vec<u32>,
    pub exited: Vec<u32>,
}

/// Diff two key sequences, preserving the order of each side
pub fn diff_keys(prev: &[u32], next: &[u32]) -> KeyedDiff {
    KeyedDiff {
        entered: next.iter().filter(|k| !prev.contains(k)).copied().collect(),
        exited: prev.iter().filter(|k| !next.contains(k)).copied().collect(),
    }
}

/// Mirror a keyed source list into transition entries.
///
/// New keys show up in `Entering` and settle after `duration_ms`. Keys that
/// leave the source flip to `Exiting` and stay rendered at their old position
/// until `duration_ms` elapses, then drop out. A key re-added while exiting
/// is revived in place. Value changes under a stable key propagate through
/// the entry's value signal without restarting any transition.
pub fn use_keyed_transitions<T, F>(
    source: Signal<Vec<T>>,
    key_of: F,
    config: TransitionConfig,
) -> ReadSignal<Vec<TransitionEntry<T>>>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(&T) -> u32 + Send + Sync + 'static,
{
    let (entries, set_entries) = signal(Vec::<TransitionEntry<T>>::new());
    let duration = config.duration_ms;

    Effect::new(move |_| {
        let next = source.get();
        let next_keys: Vec<u32> = next.iter().map(&key_of).collect();
        let current = entries.get_untracked();
        let prev_keys: Vec<u32> = current.iter().map(|e| e.key).collect();
        let diff = diff_keys(&prev_keys, &next_keys);

        // Rebuild in source order, reviving exiting rows and inserting new ones
        let mut rebuilt: Vec<TransitionEntry<T>> = Vec::with_capacity(next.len());
        for item in &next {
            let key = key_of(item);
            if let Some(existing) = current.iter().find(|e| e.key == key) {
                if existing.value.with_untracked(|v| v != item) {
                    existing.value.set(item.clone());
                }
                if existing.phase.get_untracked() == TransitionPhase::Exiting {
                    existing.phase.set(TransitionPhase::Settled);
                }
                rebuilt.push(*existing);
            } else {
                let entry = TransitionEntry {
                    key,
                    value: RwSignal::new(item.clone()),
                    phase: RwSignal::new(TransitionPhase::Entering),
                };
                rebuilt.push(entry);
                spawn_local(async move {
                    TimeoutFuture::new(duration).await;
                    if entry.phase.get_untracked() == TransitionPhase::Entering {
                        entry.phase.set(TransitionPhase::Settled);
                    }
                });
            }
        }

        // Exiting rows keep rendering at their old index until the timer fires
        for key in diff.exited {
            let Some(idx) = current.iter().position(|e| e.key == key) else {
                continue;
            };
            let entry = current[idx];
            if entry.phase.get_untracked() != TransitionPhase::Exiting {
                entry.phase.set(TransitionPhase::Exiting);
                spawn_local(async move {
                    TimeoutFuture::new(duration).await;
                    // Revived entries keep their slot, everything else drops out
                    if entry.phase.get_untracked() == TransitionPhase::Exiting {
                        set_entries.update(|list| list.retain(|e| e.key != entry.key));
                    }
                });
            }
            rebuilt.insert(idx.min(rebuilt.len()), entry);
        }

        set_entries.set(rebuilt);
    });

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keys_are_entered() {
        let diff = diff_keys(&[1, 2], &[1, 2, 3, 4]);
        assert_eq!(diff.entered, vec![3, 4]);
        assert!(diff.exited.is_empty());
    }

    #[test]
    fn missing_keys_are_exited() {
        let diff = diff_keys(&[1, 2, 3], &[2]);
        assert_eq!(diff.exited, vec![1, 3]);
        assert!(diff.entered.is_empty());
    }

    #[test]
    fn unchanged_lists_produce_empty_diff() {
        let diff = diff_keys(&[5, 6], &[5, 6]);
        assert_eq!(diff, KeyedDiff::default());
    }

    #[test]
    fn reorder_without_membership_change_is_empty() {
        let diff = diff_keys(&[1, 2, 3], &[3, 1, 2]);
        assert_eq!(diff, KeyedDiff::default());
    }

    #[test]
    fn empty_prev_enters_everything() {
        let diff = diff_keys(&[], &[7, 8]);
        assert_eq!(diff.entered, vec![7, 8]);
        assert!(diff.exited.is_empty());
    }

    #[test]
    fn empty_next_exits_everything() {
        let diff = diff_keys(&[7, 8], &[]);
        assert_eq!(diff.exited, vec![7, 8]);
        assert!(diff.entered.is_empty());
    }

    #[test]
    fn named_config_builds_class_pair() {
        let config = TransitionConfig::named("item", 300);
        assert_eq!(config.enter_class, "item-enter");
        assert_eq!(config.exit_class, "item-exit");
        assert_eq!(config.duration_ms, 300);
    }

    #[test]
    fn class_for_follows_phase() {
        let config = TransitionConfig::named("item", 300);
        assert_eq!(config.class_for(TransitionPhase::Entering), "item-enter");
        assert_eq!(config.class_for(TransitionPhase::Exiting), "item-exit");
        assert_eq!(config.class_for(TransitionPhase::Settled), "");
    }
}
