// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{TaskAction, TaskId, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Ok,
    Cancel,
}

/// Yes/no gate around a staged payload. Resolving consumes the dialog and
/// runs exactly one of the two callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDialog<T> {
    question: String,
    staged: T,
}

impl<T> QuestionDialog<T> {
    pub fn new(question: impl Into<String>, staged: T) -> Self {
        Self {
            question: question.into(),
            staged,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn resolve<R>(
        self,
        choice: ConfirmChoice,
        on_ok: impl FnOnce(T) -> R,
        on_cancel: impl FnOnce(T) -> R,
    ) -> R {
        match choice {
            ConfirmChoice::Ok => on_ok(self.staged),
            ConfirmChoice::Cancel => on_cancel(self.staged),
        }
    }
}

/// A status transition picked in the UI but not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedChange {
    Rows { ids: Vec<TaskId>, status: TaskStatus },
    Checked { count: usize, status: TaskStatus },
}

impl StagedChange {
    pub fn status(&self) -> TaskStatus {
        match self {
            Self::Rows { status, .. } | Self::Checked { status, .. } => *status,
        }
    }

    pub fn into_action(self) -> TaskAction {
        match self {
            Self::Rows { ids, status } => TaskAction::ChangeStatus { ids, status },
            Self::Checked { status, .. } => TaskAction::ChangeCheckedStatus(status),
        }
    }

    pub fn question(&self, row_title: Option<&str>) -> String {
        match (self, row_title) {
            (Self::Rows { status, .. }, Some(title)) if *status == TaskStatus::Deleted => {
                format!("Delete task \"{title}\"?")
            }
            (Self::Rows { status, .. }, Some(title)) => {
                format!("Move \"{title}\" to {}?", status.label())
            }
            (Self::Rows { ids, status }, None) => {
                format!("Move {} task(s) to {}?", ids.len(), status.label())
            }
            (Self::Checked { count, status }, _) if *status == TaskStatus::Deleted => {
                format!("Delete {count} selected task(s)?")
            }
            (Self::Checked { count, status }, _) => {
                format!("Move {count} selected task(s) to {}?", status.label())
            }
        }
    }
}

pub type ConfirmDialog = QuestionDialog<StagedChange>;
