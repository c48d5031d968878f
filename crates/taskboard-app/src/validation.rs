// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeMap;
use std::fmt;
use time::macros::format_description;
use time::Date;

use crate::TaskStatus;

pub const DATE_LAYOUT: &str = "YYYY-MM-DD";
pub const TITLE_MAX_CHARS: usize = 99;
pub const DESCRIPTION_MAX_CHARS: usize = 1024;

pub const REQUIRED_MESSAGE: &str = "Field is required";
pub const TITLE_TOO_LONG_MESSAGE: &str = "Title should be 99 characters maximum";
pub const DESCRIPTION_TOO_LONG_MESSAGE: &str = "Description should be 1024 characters maximum";
pub const INVALID_DATE_MESSAGE: &str = "Date must be a valid YYYY-MM-DD date";
pub const INVALID_STATUS_MESSAGE: &str =
    "Status must be one of TO_DO, IN_PROGRESS, DONE, DELETED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskField {
    Title,
    Date,
    Status,
    Description,
}

impl TaskField {
    /// Form order.
    pub const ALL: [Self; 4] = [Self::Title, Self::Date, Self::Status, Self::Description];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Date => "Date",
            Self::Status => "Status",
            Self::Description => "Description",
        }
    }
}

/// Raw, unvalidated field text as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub status: String,
}

impl TaskDraft {
    pub fn field(&self, field: TaskField) -> &str {
        match field {
            TaskField::Title => &self.title,
            TaskField::Description => &self.description,
            TaskField::Date => &self.date,
            TaskField::Status => &self.status,
        }
    }

    pub fn field_mut(&mut self, field: TaskField) -> &mut String {
        match field {
            TaskField::Title => &mut self.title,
            TaskField::Description => &mut self.description,
            TaskField::Date => &mut self.date,
            TaskField::Status => &mut self.status,
        }
    }
}

/// A draft that passed every rule, with text trimmed and values parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTask {
    pub title: String,
    pub description: String,
    pub date: Date,
    pub status: TaskStatus,
}

/// Per-field messages; each failing field reports independently.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<TaskField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: TaskField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: TaskField, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.label())?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

pub fn validate_draft(draft: &TaskDraft) -> Result<ValidTask, FieldErrors> {
    let mut errors = FieldErrors::default();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.insert(TaskField::Title, REQUIRED_MESSAGE);
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errors.insert(TaskField::Title, TITLE_TOO_LONG_MESSAGE);
    }

    let description = draft.description.trim();
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.insert(TaskField::Description, DESCRIPTION_TOO_LONG_MESSAGE);
    }

    let date = if draft.date.trim().is_empty() {
        errors.insert(TaskField::Date, REQUIRED_MESSAGE);
        None
    } else {
        let parsed = parse_date(&draft.date);
        if parsed.is_none() {
            errors.insert(TaskField::Date, INVALID_DATE_MESSAGE);
        }
        parsed
    };

    let status = if draft.status.trim().is_empty() {
        errors.insert(TaskField::Status, REQUIRED_MESSAGE);
        None
    } else {
        let parsed = TaskStatus::parse(&draft.status);
        if parsed.is_none() {
            errors.insert(TaskField::Status, INVALID_STATUS_MESSAGE);
        }
        parsed
    };

    match (date, status) {
        (Some(date), Some(status)) if errors.is_empty() => Ok(ValidTask {
            title: title.to_owned(),
            description: description.to_owned(),
            date,
            status,
        }),
        _ => Err(errors),
    }
}

pub fn parse_date(input: &str) -> Option<Date> {
    Date::parse(input.trim(), &format_description!("[year]-[month]-[day]")).ok()
}

pub fn format_date(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Row display form, for example `01 Jan, 2024`.
pub fn format_display_date(date: Date) -> String {
    date.format(&format_description!("[day] [month repr:short], [year]"))
        .unwrap_or_else(|_| date.to_string())
}
