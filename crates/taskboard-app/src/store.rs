// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use tracing::debug;

use crate::{NewTask, Task, TaskEdit, TaskId, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    AddTask(NewTask),
    EditTask(TaskEdit),
    ChangeStatus { ids: Vec<TaskId>, status: TaskStatus },
    ChangeCheckedStatus(TaskStatus),
    ChangeIsChecked { id: TaskId, checked: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    Added(TaskId),
    Edited(TaskId),
    StatusChanged { ids: Vec<TaskId>, status: TaskStatus },
    CheckedChanged { id: TaskId, checked: bool },
}

/// Canonical, insertion-ordered task collection. Tasks are never removed;
/// `TaskStatus::Deleted` is an ordinary partition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action. An empty event list means nothing matched and the
    /// store is unchanged.
    pub fn dispatch(&mut self, action: TaskAction) -> Vec<TaskEvent> {
        match action {
            TaskAction::AddTask(task) => self.add_task(task),
            TaskAction::EditTask(edit) => self.edit_task(edit),
            TaskAction::ChangeStatus { ids, status } => self.change_status(&ids, status),
            TaskAction::ChangeCheckedStatus(status) => self.change_checked_status(status),
            TaskAction::ChangeIsChecked { id, checked } => self.change_is_checked(&id, checked),
        }
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

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Stable filter: matching tasks in insertion order.
    pub fn tasks_with_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.status == status)
            .collect()
    }

    pub fn count_with_status(&self, status: TaskStatus) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status == status)
            .count()
    }

    pub fn checked_ids(&self) -> Vec<TaskId> {
        self.tasks
            .iter()
            .filter(|task| task.is_checked)
            .map(|task| task.id.clone())
            .collect()
    }

    fn add_task(&mut self, task: NewTask) -> Vec<TaskEvent> {
        let id = match task.id {
            Some(id) if self.get(&id).is_none() => id,
            Some(id) => {
                debug!(%id, "supplied task id already present; generating a fresh one");
                self.fresh_id()
            }
            None => self.fresh_id(),
        };
        let status = task.status.unwrap_or(TaskStatus::ToDo);
        debug!(%id, status = status.as_str(), "task added");
        self.tasks.push(Task {
            id: id.clone(),
            title: task.title,
            description: task.description,
            date: task.date,
            status,
            is_checked: false,
        });
        vec![TaskEvent::Added(id)]
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn edit_task(&mut self, edit: TaskEdit) -> Vec<TaskEvent> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == edit.id) else {
            debug!(id = %edit.id, "edit ignored; no such task");
            return Vec::new();
        };
        task.title = edit.title;
        task.description = edit.description;
        task.date = edit.date;
        task.status = edit.status;
        debug!(id = %edit.id, status = edit.status.as_str(), "task edited");
        vec![TaskEvent::Edited(edit.id)]
    }

    /// Every moved task also loses its checked flag, so a selection never
    /// follows a task into another partition.
    fn change_status(&mut self, ids: &[TaskId], status: TaskStatus) -> Vec<TaskEvent> {
        let mut changed = Vec::new();
        let mut unchecked = Vec::new();
        for id in ids {
            match self.tasks.iter_mut().find(|task| &task.id == id) {
                Some(task) => {
                    task.status = status;
                    if task.is_checked {
                        task.is_checked = false;
                        unchecked.push(id.clone());
                    }
                    if !changed.contains(id) {
                        changed.push(id.clone());
                    }
                }
                None => debug!(%id, "status change skipped; no such task"),
            }
        }
        if changed.is_empty() {
            return Vec::new();
        }
        debug!(
            count = changed.len(),
            unchecked = unchecked.len(),
            status = status.as_str(),
            "task status changed"
        );
        let mut events = vec![TaskEvent::StatusChanged {
            ids: changed,
            status,
        }];
        events.extend(
            unchecked
                .into_iter()
                .map(|id| TaskEvent::CheckedChanged { id, checked: false }),
        );
        events
    }

    fn change_checked_status(&mut self, status: TaskStatus) -> Vec<TaskEvent> {
        let ids = self.checked_ids();
        self.change_status(&ids, status)
    }

    fn change_is_checked(&mut self, id: &TaskId, checked: bool) -> Vec<TaskEvent> {
        let Some(task) = self.tasks.iter_mut().find(|task| &task.id == id) else {
            debug!(%id, "check toggle ignored; no such task");
            return Vec::new();
        };
        task.is_checked = checked;
        vec![TaskEvent::CheckedChanged {
            id: id.clone(),
            checked,
        }]
    }
}
