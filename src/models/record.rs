use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use super::kind::Kind;
use super::task::{Task, TaskInput};

/// A top-level catalog entry: a game or a note.
///
/// A record owns its tasks exclusively and numbers them itself, starting at 0.
/// Task ids are never reused within a record, even after deletions, because
/// the counter is persisted alongside the tasks.
///
/// The `archived` flag is one-way: a record can be archived (saved for later)
/// but there is no operation that brings it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Record<K: Kind> {
    pub id: u32,
    pub name: String,
    /// Star rating for games, priority for notes.
    pub rating: i32,
    /// Brand for games, category for notes.
    pub category: String,
    pub archived: bool,
    tasks: Vec<Task<K>>,
    #[serde(default)]
    next_task_id: u32,
    #[serde(skip)]
    kind: PhantomData<K>,
}

impl<K: Kind> Record<K> {
    pub(crate) fn new(id: u32, input: RecordInput) -> Self {
        Self {
            id,
            name: input.name,
            rating: input.rating,
            category: input.category,
            archived: false,
            tasks: Vec::new(),
            next_task_id: 0,
            kind: PhantomData,
        }
    }

    pub fn tasks(&self) -> &[Task<K>] {
        &self.tasks
    }

    /// Appends a pending or complete task and returns its id.
    ///
    /// `None` once the record has used up every id; `u32::MAX` is never
    /// handed out so the counter always stays above the last id.
    pub fn add_task(&mut self, input: TaskInput) -> Option<u32> {
        let id = self.next_task_id;
        self.next_task_id = id.checked_add(1)?;
        self.tasks.push(Task::new(id, input));
        Some(id)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn find_task(&self, id: u32) -> Option<&Task<K>> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn find_task_mut(&mut self, id: u32) -> Option<&mut Task<K>> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Replaces the contents and completion flag of a task.
    pub fn update_task(&mut self, id: u32, input: TaskInput) -> bool {
        match self.find_task_mut(id) {
            Some(task) => {
                task.contents = input.contents;
                task.complete = input.complete;
                true
            }
            None => false,
        }
    }

    pub fn delete_task(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Flips a task between complete and pending. Returns the new state, or
    /// `None` if the record has no task with that id.
    pub fn toggle_task(&mut self, id: u32) -> Option<bool> {
        self.find_task_mut(id).map(Task::toggle)
    }

    pub fn pending_tasks(&self) -> impl Iterator<Item = &Task<K>> {
        self.tasks.iter().filter(|task| !task.complete)
    }

    /// Tab-indented task lines, or the "no tasks" message.
    pub fn list_tasks(&self) -> String {
        if self.tasks.is_empty() {
            K::NO_TASKS.to_string()
        } else {
            self.tasks
                .iter()
                .map(|task| format!("\t{}", task))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    /// Brings the task counter past every stored task id.
    ///
    /// Payloads written without a counter (or edited by hand) would otherwise
    /// hand out ids that are already taken. Fails with the offending id when
    /// it leaves no room for a next one.
    pub(crate) fn repair_task_counter(&mut self) -> Result<(), u32> {
        if let Some(max) = self.tasks.iter().map(|task| task.id).max() {
            let next = max.checked_add(1).ok_or(max)?;
            self.next_task_id = self.next_task_id.max(next);
        }
        Ok(())
    }
}

impl<K: Kind> fmt::Display for Record<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, {}({}), {}({}), {}({}) \n{}",
            self.id,
            self.name,
            K::RATING_LABEL,
            self.rating,
            K::CATEGORY_LABEL,
            self.category,
            K::ARCHIVED_LABEL,
            K::archived_flag(self.archived),
            self.list_tasks()
        )
    }
}

/// Input for creating a record or replacing its editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInput {
    pub name: String,
    pub rating: i32,
    pub category: String,
}

impl RecordInput {
    pub fn new(name: impl Into<String>, rating: i32, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating,
            category: category.into(),
        }
    }
}
