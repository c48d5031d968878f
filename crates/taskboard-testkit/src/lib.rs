// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use taskboard_app::{NewTask, TaskAction, TaskDraft, TaskEvent, TaskId, TaskStatus, TaskStore};
use time::{Date, Duration, Month};

const VERBS: [&str; 14] = [
    "Call", "Email", "Review", "Draft", "Fix", "Plan", "Buy", "Book", "Clean", "Renew", "Update",
    "Schedule", "Return", "Pay",
];

const OBJECTS: [&str; 16] = [
    "dentist",
    "quarterly report",
    "kitchen faucet",
    "team retro",
    "groceries",
    "flight to Lisbon",
    "garage",
    "passport",
    "project roadmap",
    "insurance claim",
    "library books",
    "electric bill",
    "birthday gift",
    "bike tune-up",
    "conference talk",
    "lease renewal",
];

const DETAILS: [&str; 10] = [
    "before Friday",
    "ask about the weekend slot",
    "check the shared drive first",
    "bring the receipt",
    "coordinate with Sam",
    "",
    "low priority",
    "see notes from last week",
    "",
    "needs a second pair of eyes",
];

/// Status mix for demo boards, weighted toward open work.
const STATUS_WEIGHTS: [(TaskStatus, usize); 4] = [
    (TaskStatus::ToDo, 5),
    (TaskStatus::InProgress, 3),
    (TaskStatus::Done, 2),
    (TaskStatus::Deleted, 1),
];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Seeded generator for plausible tasks; the same seed always yields the
/// same sequence.
#[derive(Debug, Clone)]
pub struct TaskFaker {
    rng: DeterministicRng,
}

impl TaskFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
        }
    }

    pub fn title(&mut self) -> String {
        format!("{} {}", self.pick(&VERBS), self.pick(&OBJECTS))
    }

    pub fn description(&mut self) -> String {
        self.pick(&DETAILS).to_owned()
    }

    pub fn status(&mut self) -> TaskStatus {
        let total = STATUS_WEIGHTS.iter().map(|(_, weight)| weight).sum();
        let mut roll = self.rng.int_n(total);
        for (status, weight) in STATUS_WEIGHTS {
            if roll < weight {
                return status;
            }
            roll -= weight;
        }
        TaskStatus::ToDo
    }

    /// A date within two weeks either side of `around`.
    pub fn date_near(&mut self, around: Date) -> Date {
        let offset = self.rng.int_n(29) as i64 - 14;
        around
            .checked_add(Duration::days(offset))
            .unwrap_or(around)
    }

    pub fn new_task(&mut self, around: Date) -> NewTask {
        NewTask {
            id: None,
            title: self.title(),
            description: self.description(),
            date: self.date_near(around),
            status: Some(self.status()),
        }
    }

    pub fn draft(&mut self, around: Date) -> TaskDraft {
        let task = self.new_task(around);
        TaskDraft {
            title: task.title,
            description: task.description,
            date: taskboard_app::format_date(task.date),
            status: task.status.unwrap_or(TaskStatus::ToDo).as_str().to_owned(),
        }
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }
}

/// Seeds `count` demo tasks and returns their ids in insertion order.
pub fn seed_demo_tasks(store: &mut TaskStore, seed: u64, count: usize, today: Date) -> Vec<TaskId> {
    let mut faker = TaskFaker::new(seed);
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        for event in store.dispatch(TaskAction::AddTask(faker.new_task(today))) {
            if let TaskEvent::Added(id) = event {
                ids.push(id);
            }
        }
    }
    ids
}

pub fn fixture_date() -> Date {
    Date::from_calendar_date(2024, Month::January, 1).unwrap_or(Date::MIN)
}

pub fn new_task(title: &str, status: TaskStatus) -> NewTask {
    NewTask {
        id: None,
        title: title.to_owned(),
        description: String::new(),
        date: fixture_date(),
        status: Some(status),
    }
}

/// Adds one task and returns the id the store assigned.
pub fn add_task(store: &mut TaskStore, title: &str, status: TaskStatus) -> Option<TaskId> {
    store
        .dispatch(TaskAction::AddTask(new_task(title, status)))
        .into_iter()
        .find_map(|event| match event {
            TaskEvent::Added(id) => Some(id),
            _ => None,
        })
}
