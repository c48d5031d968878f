// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;
use time::Date;

use crate::{
    FieldErrors, FormKind, NewTask, Task, TaskAction, TaskDraft, TaskEdit, TaskField, TaskId,
    TaskStatus, format_date, validate_draft,
};

/// Create/edit form state. Every change revalidates the whole draft; errors
/// surface per field once that field has been touched or a submit was tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    kind: FormKind,
    task_id: Option<TaskId>,
    original_status: TaskStatus,
    draft: TaskDraft,
    errors: FieldErrors,
    touched: BTreeSet<TaskField>,
}

impl TaskForm {
    pub fn create(today: Date) -> Self {
        Self::from_draft(
            FormKind::Create,
            None,
            TaskStatus::ToDo,
            TaskDraft {
                title: String::new(),
                description: String::new(),
                date: format_date(today),
                status: TaskStatus::ToDo.as_str().to_owned(),
            },
        )
    }

    pub fn edit(task: &Task) -> Self {
        Self::from_draft(
            FormKind::Edit,
            Some(task.id.clone()),
            task.status,
            TaskDraft {
                title: task.title.clone(),
                description: task.description.clone(),
                date: format_date(task.date),
                status: task.status.as_str().to_owned(),
            },
        )
    }

    fn from_draft(
        kind: FormKind,
        task_id: Option<TaskId>,
        original_status: TaskStatus,
        draft: TaskDraft,
    ) -> Self {
        let errors = validate_draft(&draft).err().unwrap_or_default();
        Self {
            kind,
            task_id,
            original_status,
            draft,
            errors,
            touched: BTreeSet::new(),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn visible_error(&self, field: TaskField) -> Option<&'static str> {
        if self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }

    /// Create mode pins the status to `TO_DO`. A task that is already
    /// deleted can only have its status changed (the undelete path).
    pub fn is_editable(&self, field: TaskField) -> bool {
        match (self.kind, field) {
            (FormKind::Create, TaskField::Status) => false,
            (FormKind::Create, _) => true,
            (FormKind::Edit, TaskField::Status) => true,
            (FormKind::Edit, _) => self.original_status != TaskStatus::Deleted,
        }
    }

    pub fn set_field(&mut self, field: TaskField, value: impl Into<String>) -> bool {
        if !self.is_editable(field) {
            return false;
        }
        *self.draft.field_mut(field) = value.into();
        self.touch(field);
        true
    }

    pub fn push_char(&mut self, field: TaskField, ch: char) -> bool {
        if field == TaskField::Status || !self.is_editable(field) {
            return false;
        }
        self.draft.field_mut(field).push(ch);
        self.touch(field);
        true
    }

    pub fn pop_char(&mut self, field: TaskField) -> bool {
        if field == TaskField::Status || !self.is_editable(field) {
            return false;
        }
        let popped = self.draft.field_mut(field).pop().is_some();
        self.touch(field);
        popped
    }

    pub fn cycle_status(&mut self, delta: isize) -> Option<TaskStatus> {
        if !self.is_editable(TaskField::Status) {
            return None;
        }
        let current = TaskStatus::parse(&self.draft.status).unwrap_or(self.original_status);
        let next = current.rotate(delta);
        self.draft.status = next.as_str().to_owned();
        self.touch(TaskField::Status);
        Some(next)
    }

    /// Validates and, on success, produces the store action for this form.
    /// A failed submit marks every field touched so all errors show.
    pub fn submit(&mut self) -> Result<TaskAction, FieldErrors> {
        self.touched.extend(TaskField::ALL);
        let valid = validate_draft(&self.draft).inspect_err(|errors| {
            self.errors = errors.clone();
        })?;
        let action = match (self.kind, &self.task_id) {
            (FormKind::Edit, Some(id)) => TaskAction::EditTask(TaskEdit {
                id: id.clone(),
                title: valid.title,
                description: valid.description,
                date: valid.date,
                status: valid.status,
            }),
            _ => TaskAction::AddTask(NewTask {
                id: None,
                title: valid.title,
                description: valid.description,
                date: valid.date,
                status: Some(valid.status),
            }),
        };
        Ok(action)
    }

    fn touch(&mut self, field: TaskField) {
        self.touched.insert(field);
        self.errors = validate_draft(&self.draft).err().unwrap_or_default();
    }
}
