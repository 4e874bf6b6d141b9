//! Task list.
//!
//! The collection owns the items and their completion flags, persisting
//! under one store key on every mutation. Each mutation returns the fresh
//! snapshot so the owner can resynchronize the statistics ledger.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::storage::KeyValueStore;

/// Store key holding the task list.
pub const TODOS_KEY: &str = "todos";

/// One task item, wire-compatible with the persisted `todos` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,
    pub done: bool,
}

/// Task counts reported to the statistics ledger after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoSnapshot {
    pub total_tasks: u32,
    pub completed_tasks: u32,
}

/// Display filter over the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Open,
    Done,
}

/// Owner of the task items.
pub struct TodoCollection {
    store: Rc<dyn KeyValueStore>,
    items: Vec<TodoItem>,
}

impl TodoCollection {
    /// Load the persisted list. A malformed stored value loads as empty.
    pub fn load(store: Rc<dyn KeyValueStore>) -> Result<Self, StoreError> {
        let items = match store.get(TODOS_KEY)? {
            Some(value) => serde_json::from_value(value).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self { store, items })
    }

    fn save(&self) -> Result<(), StoreError> {
        let value = serde_json::to_value(&self.items).map_err(StoreError::Encode)?;
        self.store.set(TODOS_KEY, &value)
    }

    /// Append a task. Blank input is a no-op returning `None`.
    pub fn add(&mut self, text: &str) -> Result<Option<TodoSnapshot>, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        self.items.push(TodoItem {
            text: text.to_string(),
            done: false,
        });
        self.save()?;
        Ok(Some(self.snapshot()))
    }

    /// Flip one task's completion flag. Out-of-range index is a no-op.
    pub fn toggle(&mut self, index: usize) -> Result<Option<TodoSnapshot>, StoreError> {
        match self.items.get_mut(index) {
            Some(item) => {
                item.done = !item.done;
                self.save()?;
                Ok(Some(self.snapshot()))
            }
            None => Ok(None),
        }
    }

    /// Delete one task. Out-of-range index is a no-op.
    pub fn remove(&mut self, index: usize) -> Result<Option<TodoSnapshot>, StoreError> {
        if index >= self.items.len() {
            return Ok(None);
        }
        self.items.remove(index);
        self.save()?;
        Ok(Some(self.snapshot()))
    }

    /// Current counts for ledger resynchronization.
    pub fn snapshot(&self) -> TodoSnapshot {
        TodoSnapshot {
            total_tasks: self.items.len() as u32,
            completed_tasks: self.items.iter().filter(|t| t.done).count() as u32,
        }
    }

    /// Items matching a display filter, with their stable indices.
    pub fn items(&self, filter: TodoFilter) -> Vec<(usize, &TodoItem)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| match filter {
                TodoFilter::All => true,
                TodoFilter::Open => !item.done,
                TodoFilter::Done => item.done,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn collection() -> TodoCollection {
        TodoCollection::load(Rc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn add_trims_and_counts() {
        let mut todos = collection();
        let snap = todos.add("  write report  ").unwrap().unwrap();
        assert_eq!(snap.total_tasks, 1);
        assert_eq!(snap.completed_tasks, 0);
        assert_eq!(todos.items(TodoFilter::All)[0].1.text, "write report");
    }

    #[test]
    fn blank_add_is_noop() {
        let mut todos = collection();
        assert!(todos.add("   ").unwrap().is_none());
        assert!(todos.is_empty());
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut todos = collection();
        todos.add("a").unwrap();
        let snap = todos.toggle(0).unwrap().unwrap();
        assert_eq!(snap.completed_tasks, 1);
        let snap = todos.toggle(0).unwrap().unwrap();
        assert_eq!(snap.completed_tasks, 0);
    }

    #[test]
    fn out_of_range_index_is_noop() {
        let mut todos = collection();
        todos.add("a").unwrap();
        assert!(todos.toggle(5).unwrap().is_none());
        assert!(todos.remove(5).unwrap().is_none());
        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn remove_drops_item() {
        let mut todos = collection();
        todos.add("a").unwrap();
        todos.add("b").unwrap();
        todos.toggle(0).unwrap();
        let snap = todos.remove(0).unwrap().unwrap();
        assert_eq!(snap.total_tasks, 1);
        assert_eq!(snap.completed_tasks, 0);
        assert_eq!(todos.items(TodoFilter::All)[0].1.text, "b");
    }

    #[test]
    fn filters_partition_items() {
        let mut todos = collection();
        todos.add("a").unwrap();
        todos.add("b").unwrap();
        todos.add("c").unwrap();
        todos.toggle(1).unwrap();

        assert_eq!(todos.items(TodoFilter::All).len(), 3);
        let open: Vec<_> = todos.items(TodoFilter::Open);
        assert_eq!(open.len(), 2);
        assert_eq!(open[0].0, 0);
        assert_eq!(open[1].0, 2);
        let done = todos.items(TodoFilter::Done);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].1.text, "b");
    }

    #[test]
    fn list_persists_across_loads() {
        let store = Rc::new(MemoryStore::new());
        {
            let mut todos = TodoCollection::load(store.clone()).unwrap();
            todos.add("persisted").unwrap();
            todos.toggle(0).unwrap();
        }
        let todos = TodoCollection::load(store).unwrap();
        assert_eq!(todos.len(), 1);
        assert!(todos.items(TodoFilter::All)[0].1.done);
    }

    #[test]
    fn malformed_stored_list_loads_empty() {
        let store = Rc::new(MemoryStore::new());
        store.set(TODOS_KEY, &serde_json::json!("oops")).unwrap();
        let todos = TodoCollection::load(store).unwrap();
        assert!(todos.is_empty());
    }
}
