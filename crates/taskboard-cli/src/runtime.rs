// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use taskboard_app::{Task, TaskAction, TaskEvent, TaskStatus, TaskStore};
use taskboard_tui::StatusCounts;

pub struct StoreRuntime<'a> {
    store: &'a mut TaskStore,
}

impl<'a> StoreRuntime<'a> {
    pub fn new(store: &'a mut TaskStore) -> Self {
        Self { store }
    }
}

impl taskboard_tui::AppRuntime for StoreRuntime<'_> {
    fn load_partition(&mut self, status: TaskStatus) -> Result<Vec<Task>> {
        Ok(self
            .store
            .tasks_with_status(status)
            .into_iter()
            .cloned()
            .collect())
    }

    fn load_counts(&mut self) -> Result<StatusCounts> {
        let mut counts = StatusCounts::default();
        for status in TaskStatus::ALL {
            counts.set(status, self.store.count_with_status(status));
        }
        Ok(counts)
    }

    fn load_checked_counts(&mut self) -> Result<StatusCounts> {
        let mut counts = StatusCounts::default();
        for task in self.store.tasks().iter().filter(|task| task.is_checked) {
            counts.set(task.status, counts.get(task.status) + 1);
        }
        Ok(counts)
    }

    fn dispatch(&mut self, action: TaskAction) -> Result<Vec<TaskEvent>> {
        Ok(self.store.dispatch(action))
    }
}
