use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use super::kind::Kind;

/// A unit of work owned by a [`Record`](super::Record): a play of a game or a
/// to-do item on a note.
///
/// Ids are assigned by the owning record and are only unique within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Task<K: Kind> {
    pub id: u32,
    pub contents: String,
    pub complete: bool,
    #[serde(skip)]
    kind: PhantomData<K>,
}

impl<K: Kind> Task<K> {
    pub(crate) fn new(id: u32, input: TaskInput) -> Self {
        Self {
            id,
            contents: input.contents,
            complete: input.complete,
            kind: PhantomData,
        }
    }

    /// Flips between complete and pending, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.complete = !self.complete;
        self.complete
    }
}

impl<K: Kind> fmt::Display for Task<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.complete {
            K::COMPLETE_LABEL
        } else {
            K::PENDING_LABEL
        };
        write!(f, "{}: {} ({})", self.id, self.contents, status)
    }
}

/// Input for creating or replacing a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInput {
    pub contents: String,
    pub complete: bool,
}

impl TaskInput {
    /// A pending task with the given contents.
    pub fn pending(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Games, Notes};

    #[test]
    fn test_play_display() {
        let mut play = Task::<Games>::new(3, TaskInput::pending("Opening gambit"));
        assert_eq!(play.to_string(), "3: Opening gambit (To-Be Played)");

        play.toggle();
        assert_eq!(play.to_string(), "3: Opening gambit (Played)");
    }

    #[test]
    fn test_item_display() {
        let item = Task::<Notes>::new(
            0,
            TaskInput {
                contents: "Buy milk".to_string(),
                complete: true,
            },
        );
        assert_eq!(item.to_string(), "0: Buy milk (Complete)");
    }

    #[test]
    fn test_toggle_round_trips() {
        let mut item = Task::<Notes>::new(0, TaskInput::pending("x"));
        assert!(item.toggle());
        assert!(!item.toggle());
        assert!(!item.complete);
    }
}
