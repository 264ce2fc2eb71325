use std::path::PathBuf;
use uuid::Uuid;

use super::{read_records, write_records, StoreError};
use crate::models::Task;

/// File name for the task collection, resolved against the working
/// directory.
pub const TASKS_FILE: &str = "tasks.json";

/// The to-do list and its backing file.
///
/// Ordering invariant: pending tasks sort before completed ones, and each
/// group ascends by `added_on`. Applied after load and every mutation.
pub struct TaskList {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskList {
    /// Open the list at the default location.
    pub fn open() -> Result<Self, StoreError> {
        Self::open_at(TASKS_FILE)
    }

    /// Open the list at an explicit path. Missing file yields an empty
    /// list; an undecodable file is an error the caller may degrade from
    /// with [`TaskList::empty`].
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let mut tasks: Vec<Task> = read_records(&path)?;
        sort_tasks(&mut tasks);
        Ok(Self { tasks, path })
    }

    /// An empty list bound to `path`, for degrading after a failed load.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            tasks: Vec::new(),
            path: path.into(),
        }
    }

    /// Rewrite the backing file with the whole collection.
    pub fn save(&self) -> Result<(), StoreError> {
        write_records(&self.path, &self.tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_completed()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }

    /// Append a new pending task stamped with the current time.
    pub fn add(&mut self, description: &str) -> Result<Uuid, StoreError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(StoreError::DescriptionRequired);
        }
        let task = Task::new(description.to_string());
        let id = task.id;
        self.tasks.push(task);
        sort_tasks(&mut self.tasks);
        Ok(id)
    }

    /// Transition pending → completed, stamping `completed_on`. A task that
    /// is already complete is left untouched; callers report the
    /// [`StoreError::AlreadyCompleted`] as a warning, not a failure.
    pub fn mark_complete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        if task.is_completed() {
            return Err(StoreError::AlreadyCompleted);
        }
        task.complete();
        sort_tasks(&mut self.tasks);
        Ok(())
    }

    /// Replace a task's description, keeping its status. Returns `false`
    /// when the new description equals the old one and nothing changed.
    pub fn rename(&mut self, id: Uuid, description: &str) -> Result<bool, StoreError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(StoreError::DescriptionRequired);
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        if task.description == description {
            return Ok(false);
        }
        task.description = description.to_string();
        Ok(true)
    }

    /// Remove and return the task at `id`.
    pub fn delete(&mut self, id: Uuid) -> Result<Task, StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.tasks.remove(idx))
    }

    /// Case-insensitive substring match against descriptions.
    pub fn search(&self, term: &str) -> Vec<&Task> {
        let term = term.trim().to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.description.to_lowercase().contains(&term))
            .collect()
    }
}

fn sort_tasks(tasks: &mut [Task]) {
    // Stable, so same-minute tasks keep insertion order.
    tasks.sort_by(|a, b| {
        (a.is_completed(), &a.added_on).cmp(&(b.is_completed(), &b.added_on))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    #[test]
    fn test_add_rejects_empty_description() {
        let mut list = TaskList::empty("unused.json");
        assert!(matches!(
            list.add("   "),
            Err(StoreError::DescriptionRequired)
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn test_pending_sorts_before_completed() {
        let mut list = TaskList::empty("unused.json");
        let first = list.add("first").unwrap();
        list.add("second").unwrap();
        list.add("third").unwrap();

        list.mark_complete(first).unwrap();
        let descriptions: Vec<&str> = list.tasks().iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["second", "third", "first"]);
        assert!(list.tasks().last().unwrap().is_completed());
    }

    #[test]
    fn test_mark_complete_sets_stamp() {
        let mut list = TaskList::empty("unused.json");
        let id = list.add("Water the plants").unwrap();

        list.mark_complete(id).unwrap();
        let task = list.get(id).unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(task.completed_on.is_some());
    }

    #[test]
    fn test_second_mark_complete_is_a_no_op() {
        let mut list = TaskList::empty("unused.json");
        let id = list.add("Water the plants").unwrap();
        list.mark_complete(id).unwrap();
        let stamp = list.get(id).unwrap().completed_on.clone();

        let err = list.mark_complete(id).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyCompleted));
        assert_eq!(list.get(id).unwrap().completed_on, stamp);
    }

    #[test]
    fn test_rename_keeps_status() {
        let mut list = TaskList::empty("unused.json");
        let id = list.add("Call the bank").unwrap();
        list.mark_complete(id).unwrap();

        assert!(list.rename(id, "Call the bank branch").unwrap());
        let task = list.get(id).unwrap();
        assert_eq!(task.description, "Call the bank branch");
        assert!(task.is_completed());
    }

    #[test]
    fn test_rename_unchanged_reports_no_change() {
        let mut list = TaskList::empty("unused.json");
        let id = list.add("Call the bank").unwrap();
        assert!(!list.rename(id, "Call the bank").unwrap());
        assert!(matches!(
            list.rename(id, ""),
            Err(StoreError::DescriptionRequired)
        ));
    }

    #[test]
    fn test_delete_and_counts() {
        let mut list = TaskList::empty("unused.json");
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        list.mark_complete(b).unwrap();
        assert_eq!(list.pending_count(), 1);
        assert_eq!(list.completed_count(), 1);

        let removed = list.delete(a).unwrap();
        assert_eq!(removed.description, "a");
        assert!(list.get(a).is_none());
        assert_eq!(list.pending_count(), 0);

        assert!(matches!(list.delete(a), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_search_by_description() {
        let mut list = TaskList::empty("unused.json");
        list.add("Water the plants").unwrap();
        list.add("Buy plant food").unwrap();
        list.add("Call the bank").unwrap();

        assert_eq!(list.search("PLANT").len(), 2);
        assert_eq!(list.search("bank").len(), 1);
        assert!(list.search("garage").is_empty());
    }

    #[test]
    fn test_save_then_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");

        let mut list = TaskList::open_at(&path).unwrap();
        let id = list.add("Water the plants").unwrap();
        list.add("Call the bank").unwrap();
        list.mark_complete(id).unwrap();
        list.save().unwrap();
        let first = std::fs::read(&path).unwrap();

        let reloaded = TaskList::open_at(&path).unwrap();
        assert_eq!(reloaded.tasks(), list.tasks());

        reloaded.save().unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
    }
}
