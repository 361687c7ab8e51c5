// src/services/store.rs
use std::collections::VecDeque;

use crate::models::view::ViewModel;

/// Newest-first feed history: prepend on arrival, never reorder, never
/// mutate after insertion.
///
/// Unbounded by default, matching observed behavior. With a capacity set,
/// the oldest entry is evicted on overflow; a zero capacity disables
/// insertion outright.
#[derive(Debug, Default)]
pub struct NotificationStore {
    items: VecDeque<ViewModel>,
    capacity: Option<usize>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn prepend(&mut self, view: ViewModel) {
        if self.capacity == Some(0) {
            return;
        }
        self.items.push_front(view);
        if let Some(capacity) = self.capacity {
            while self.items.len() > capacity {
                self.items.pop_back();
            }
        }
    }

    /// Current feed contents, newest first. Non-mutating.
    pub fn snapshot(&self) -> impl Iterator<Item = &ViewModel> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
