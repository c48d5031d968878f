// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use taskboard_app::{
    AppCommand, AppEvent, AppMode, AppState, ConfirmChoice, ConfirmDialog, FormKind,
    StagedChange, Task, TaskAction, TaskEvent, TaskField, TaskForm, TaskStatus,
    format_display_date,
};
use time::{Date, OffsetDateTime};
use tracing::warn;

const EMPTY_PARTITION_TEXT: &str = "Nothing here yet.";
const CHECK_MARK: &str = "[x]";
const NO_CHECK_MARK: &str = "[ ]";
const DESCRIPTION_PREVIEW_CHARS: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts([usize; 4]);

impl StatusCounts {
    pub fn get(&self, status: TaskStatus) -> usize {
        self.0[status.index()]
    }

    pub fn set(&mut self, status: TaskStatus, count: usize) {
        self.0[status.index()] = count;
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

/// Everything the UI needs from the task store. The UI never holds task data
/// beyond what the last load returned.
pub trait AppRuntime {
    fn load_partition(&mut self, status: TaskStatus) -> Result<Vec<Task>>;
    fn load_counts(&mut self) -> Result<StatusCounts>;
    /// Checked tasks per partition.
    fn load_checked_counts(&mut self) -> Result<StatusCounts>;
    fn dispatch(&mut self, action: TaskAction) -> Result<Vec<TaskEvent>>;
    fn today(&mut self) -> Date {
        OffsetDateTime::now_utc().date()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    /// Gate single-row, non-delete transitions behind the confirm dialog.
    /// Deletes and checked-set changes are always confirmed.
    pub confirm_status_changes: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            confirm_status_changes: true,
        }
    }
}

pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct StatusMenuUiState {
    cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormUiState {
    form: TaskForm,
    field_index: usize,
}

impl FormUiState {
    fn field(&self) -> TaskField {
        TaskField::ALL[self.field_index.min(TaskField::ALL.len() - 1)]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    options: UiOptions,
    counts: StatusCounts,
    rows: Vec<Task>,
    cursor: usize,
    checked: StatusCounts,
    checked_count: usize,
    form: Option<FormUiState>,
    status_menu: StatusMenuUiState,
    confirm: Option<ConfirmDialog>,
    help_visible: bool,
    status_token: u64,
}

impl ViewData {
    fn selected_row(&self) -> Option<&Task> {
        self.rows.get(self.cursor)
    }
}

pub fn run_app<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    options: UiOptions,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData {
        options,
        ..ViewData::default()
    };
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = refresh_view_data(state, runtime, &mut view_data) {
        warn!(error = %error, "initial load failed");
        state.dispatch(AppCommand::SetStatus(format!("load failed: {error}")));
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if !has_event {
            continue;
        }
        match event::read().context("read event") {
            Ok(Event::Key(key)) => {
                if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                    break;
                }
            }
            Ok(_) => {}
            Err(error) => {
                result = Err(error);
                break;
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    match state.mode {
        AppMode::Confirm => {
            handle_confirm_key(state, runtime, view_data, internal_tx, key);
            false
        }
        AppMode::StatusMenu => {
            handle_status_menu_key(state, runtime, view_data, internal_tx, key);
            false
        }
        AppMode::Form(_) => {
            handle_form_key(state, runtime, view_data, internal_tx, key);
            false
        }
        AppMode::Nav => handle_nav_key(state, runtime, view_data, internal_tx, key),
    }
}

fn handle_nav_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => move_cursor(view_data, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(view_data, -1),
        KeyCode::Char('g') | KeyCode::Home => view_data.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            view_data.cursor = view_data.rows.len().saturating_sub(1);
        }
        KeyCode::Char('f') | KeyCode::Tab | KeyCode::Right => {
            dispatch_and_refresh(state, runtime, view_data, AppCommand::NextTab, internal_tx);
        }
        KeyCode::Char('b') | KeyCode::BackTab | KeyCode::Left => {
            dispatch_and_refresh(state, runtime, view_data, AppCommand::PrevTab, internal_tx);
        }
        KeyCode::Char(digit @ '1'..='4') => {
            let index = (digit as usize) - ('1' as usize);
            dispatch_and_refresh(
                state,
                runtime,
                view_data,
                AppCommand::SelectTab(TaskStatus::ALL[index]),
                internal_tx,
            );
        }
        KeyCode::Char(' ') => toggle_checked(state, runtime, view_data, internal_tx),
        KeyCode::Char('n') => open_create_form(state, runtime, view_data),
        KeyCode::Char('e') | KeyCode::Enter => {
            open_edit_form(state, view_data, internal_tx);
        }
        KeyCode::Char('d') => stage_delete(state, runtime, view_data, internal_tx),
        KeyCode::Char('s') => open_status_menu(state, view_data, internal_tx),
        KeyCode::Char('?') => view_data.help_visible = true,
        _ => {}
    }
    false
}

fn move_cursor(view_data: &mut ViewData, delta: isize) {
    if view_data.rows.is_empty() {
        view_data.cursor = 0;
        return;
    }
    let max = view_data.rows.len() as isize - 1;
    view_data.cursor = (view_data.cursor as isize + delta).clamp(0, max) as usize;
}

fn toggle_checked<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(task) = view_data.selected_row() else {
        emit_status(state, view_data, internal_tx, "no task selected");
        return;
    };
    let action = TaskAction::ChangeIsChecked {
        id: task.id.clone(),
        checked: !task.is_checked,
    };
    apply_action(state, runtime, view_data, internal_tx, action);
}

fn open_create_form<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
) {
    view_data.form = Some(FormUiState {
        form: TaskForm::create(runtime.today()),
        field_index: 0,
    });
    state.dispatch(AppCommand::OpenForm(FormKind::Create));
}

fn open_edit_form(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(task) = view_data.selected_row() else {
        emit_status(state, view_data, internal_tx, "no task selected");
        return;
    };
    let form = TaskForm::edit(task);
    let field_index = TaskField::ALL
        .iter()
        .position(|field| form.is_editable(*field))
        .unwrap_or(0);
    view_data.form = Some(FormUiState { form, field_index });
    state.dispatch(AppCommand::OpenForm(FormKind::Edit));
}

fn stage_delete<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(task) = view_data.selected_row() else {
        emit_status(state, view_data, internal_tx, "no task selected");
        return;
    };
    if task.status == TaskStatus::Deleted {
        emit_status(state, view_data, internal_tx, "already deleted");
        return;
    }
    let staged = StagedChange::Rows {
        ids: vec![task.id.clone()],
        status: TaskStatus::Deleted,
    };
    stage_change(state, runtime, view_data, internal_tx, staged);
}

fn open_status_menu(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    if view_data.checked_count == 0 && view_data.rows.is_empty() {
        emit_status(state, view_data, internal_tx, "no task selected");
        return;
    }
    view_data.status_menu = StatusMenuUiState {
        cursor: state.active_status.index(),
    };
    state.dispatch(AppCommand::OpenStatusMenu);
}

fn handle_status_menu_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let len = TaskStatus::ALL.len();
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            state.dispatch(AppCommand::ExitToNav);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            view_data.status_menu.cursor = (view_data.status_menu.cursor + 1) % len;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.status_menu.cursor = (view_data.status_menu.cursor + len - 1) % len;
        }
        KeyCode::Enter => {
            let status = TaskStatus::ALL[view_data.status_menu.cursor % len];
            let staged = if view_data.checked_count > 0 {
                StagedChange::Checked {
                    count: view_data.checked_count,
                    status,
                }
            } else if let Some(task) = view_data.selected_row() {
                StagedChange::Rows {
                    ids: vec![task.id.clone()],
                    status,
                }
            } else {
                state.dispatch(AppCommand::ExitToNav);
                emit_status(state, view_data, internal_tx, "no task selected");
                return;
            };
            stage_change(state, runtime, view_data, internal_tx, staged);
        }
        _ => {}
    }
}

fn stage_change<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    staged: StagedChange,
) {
    let needs_confirm = matches!(staged, StagedChange::Checked { .. })
        || staged.status() == TaskStatus::Deleted
        || view_data.options.confirm_status_changes;
    if !needs_confirm {
        state.dispatch(AppCommand::ExitToNav);
        apply_action(state, runtime, view_data, internal_tx, staged.into_action());
        return;
    }

    let row_title = match &staged {
        StagedChange::Rows { ids, .. } if ids.len() == 1 => view_data
            .rows
            .iter()
            .find(|task| task.id == ids[0])
            .map(|task| task.title.as_str()),
        _ => None,
    };
    let question = staged.question(row_title);
    view_data.confirm = Some(ConfirmDialog::new(question, staged));
    state.dispatch(AppCommand::OpenConfirm);
}

fn handle_confirm_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let choice = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => ConfirmChoice::Ok,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ConfirmChoice::Cancel,
        _ => return,
    };
    let Some(dialog) = view_data.confirm.take() else {
        state.dispatch(AppCommand::ExitToNav);
        return;
    };
    state.dispatch(AppCommand::ExitToNav);
    let action = dialog.resolve(choice, |staged| Some(staged.into_action()), |_| None);
    match action {
        Some(action) => apply_action(state, runtime, view_data, internal_tx, action),
        None => emit_status(state, view_data, internal_tx, "change discarded"),
    }
}

fn handle_form_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Some(form_ui) = view_data.form.as_mut() else {
        state.dispatch(AppCommand::ExitToNav);
        return;
    };
    let field = form_ui.field();
    let field_count = TaskField::ALL.len();

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            view_data.form = None;
            state.dispatch(AppCommand::ExitToNav);
            emit_status(state, view_data, internal_tx, "edit discarded");
        }
        (KeyCode::Char('s'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            submit_form(state, runtime, view_data, internal_tx);
        }
        (KeyCode::Enter, _) if form_ui.field_index + 1 >= field_count => {
            submit_form(state, runtime, view_data, internal_tx);
        }
        (KeyCode::Tab | KeyCode::Down | KeyCode::Enter, _) => {
            form_ui.field_index = (form_ui.field_index + 1) % field_count;
        }
        (KeyCode::BackTab | KeyCode::Up, _) => {
            form_ui.field_index = (form_ui.field_index + field_count - 1) % field_count;
        }
        (KeyCode::Left | KeyCode::Right, _) if field == TaskField::Status => {
            let delta = if key.code == KeyCode::Left { -1 } else { 1 };
            if form_ui.form.cycle_status(delta).is_none() {
                emit_status(state, view_data, internal_tx, locked_field_message(field));
            }
        }
        (KeyCode::Backspace, _) => {
            if !form_ui.form.is_editable(field) || field == TaskField::Status {
                emit_status(state, view_data, internal_tx, locked_field_message(field));
            } else {
                form_ui.form.pop_char(field);
            }
        }
        (KeyCode::Char(ch), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            if !form_ui.form.push_char(field, ch) {
                emit_status(state, view_data, internal_tx, locked_field_message(field));
            }
        }
        _ => {}
    }
}

fn locked_field_message(field: TaskField) -> String {
    match field {
        TaskField::Status => "status: use left/right to change".to_owned(),
        other => format!("{} is read-only here", other.label().to_ascii_lowercase()),
    }
}

fn submit_form<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(form_ui) = view_data.form.as_mut() else {
        return;
    };
    match form_ui.form.submit() {
        Ok(action) => {
            view_data.form = None;
            state.dispatch(AppCommand::ExitToNav);
            apply_action(state, runtime, view_data, internal_tx, action);
        }
        Err(errors) => {
            if let Some(index) = TaskField::ALL
                .iter()
                .position(|field| errors.get(*field).is_some())
            {
                form_ui.field_index = index;
            }
            let message = format!("fix {} field(s) before saving", errors.len());
            emit_status(state, view_data, internal_tx, message);
        }
    }
}

fn apply_action<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    action: TaskAction,
) {
    let events = match runtime.dispatch(action) {
        Ok(events) => events,
        Err(error) => {
            warn!(error = %error, "task action failed");
            emit_status(state, view_data, internal_tx, format!("save failed: {error}"));
            return;
        }
    };
    if let Some(message) = summarize_task_events(&events) {
        emit_status(state, view_data, internal_tx, message);
    } else if events.is_empty() {
        emit_status(state, view_data, internal_tx, "nothing changed");
    }
    if let Err(error) = refresh_view_data(state, runtime, view_data) {
        warn!(error = %error, "reload after task action failed");
        emit_status(state, view_data, internal_tx, format!("load failed: {error}"));
    }
}

fn summarize_task_events(events: &[TaskEvent]) -> Option<String> {
    events.iter().find_map(|event| match event {
        TaskEvent::Added(_) => Some("task added".to_owned()),
        TaskEvent::Edited(_) => Some("task updated".to_owned()),
        TaskEvent::StatusChanged { ids, status } if *status == TaskStatus::Deleted => {
            Some(format!("deleted {} task(s)", ids.len()))
        }
        TaskEvent::StatusChanged { ids, status } => Some(format!(
            "moved {} task(s) to {}",
            ids.len(),
            status.label()
        )),
        TaskEvent::CheckedChanged { .. } => None,
    })
}

fn dispatch_and_refresh<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    command: AppCommand,
    internal_tx: &Sender<InternalEvent>,
) {
    let events = state.dispatch(command);
    if events
        .iter()
        .any(|event| matches!(event, AppEvent::TabChanged(_)))
    {
        view_data.cursor = 0;
        if let Err(error) = refresh_view_data(state, runtime, view_data) {
            warn!(error = %error, "reload after tab change failed");
            emit_status(state, view_data, internal_tx, format!("load failed: {error}"));
        }
    }
}

fn refresh_view_data<R: AppRuntime>(
    state: &AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
) -> Result<()> {
    view_data.counts = runtime.load_counts()?;
    view_data.rows = runtime.load_partition(state.active_status)?;
    view_data.checked = runtime.load_checked_counts()?;
    view_data.checked_count = view_data.checked.total();
    view_data.cursor = view_data
        .cursor
        .min(view_data.rows.len().saturating_sub(1));
    Ok(())
}

fn tab_title(status: TaskStatus, counts: &StatusCounts) -> String {
    format!(" {} ({}) ", status.label(), counts.get(status))
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let tab_titles = TaskStatus::ALL
        .iter()
        .map(|status| tab_title(*status, &view_data.counts))
        .collect::<Vec<String>>();
    let tabs = Tabs::new(tab_titles)
        .block(Block::default().title("taskboard").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(state.active_status.index());
    frame.render_widget(tabs, layout[0]);

    render_task_list(frame, layout[1], state, view_data);

    let status_widget = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[2]);

    if let (Some(form_ui), AppMode::Form(_)) = (&view_data.form, state.mode) {
        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);
        let title = match form_ui.form.kind() {
            FormKind::Create => "new task",
            FormKind::Edit => "edit task",
        };
        let form = Paragraph::new(render_form_text(form_ui))
            .wrap(Wrap { trim: false })
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(form, area);
    }

    if state.mode == AppMode::StatusMenu {
        let area = centered_rect(36, 36, frame.area());
        frame.render_widget(Clear, area);
        let menu = Paragraph::new(render_status_menu_text(view_data)).block(
            Block::default()
                .title("change status")
                .borders(Borders::ALL),
        );
        frame.render_widget(menu, area);
    }

    if let (Some(dialog), AppMode::Confirm) = (&view_data.confirm, state.mode) {
        let area = centered_rect(50, 20, frame.area());
        frame.render_widget(Clear, area);
        let confirm = Paragraph::new(render_confirm_text(dialog))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title("confirm")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(confirm, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_task_list(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(list_title(state, view_data));

    if view_data.rows.is_empty() {
        let placeholder = Paragraph::new(EMPTY_PARTITION_TEXT).block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(["", "title", "description", "date", "status"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = view_data.rows.iter().enumerate().map(|(index, task)| {
        let style = if index == view_data.cursor {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        Row::new(row_cells(task).map(Cell::from)).style(style)
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
            Constraint::Length(12),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .block(block);
    frame.render_widget(table, area);
}

fn list_title(state: &AppState, view_data: &ViewData) -> String {
    let label = state.active_status.label();
    let here = view_data.checked.get(state.active_status);
    let elsewhere = view_data.checked_count.saturating_sub(here);
    match (here, elsewhere) {
        (0, 0) => label.to_owned(),
        (here, 0) => format!("{label} | {here} selected"),
        (here, elsewhere) => format!("{label} | {here} selected, {elsewhere} on other tabs"),
    }
}

fn row_cells(task: &Task) -> [String; 5] {
    [
        if task.is_checked {
            CHECK_MARK
        } else {
            NO_CHECK_MARK
        }
        .to_owned(),
        task.title.clone(),
        truncate_label(&single_line(&task.description), DESCRIPTION_PREVIEW_CHARS),
        format_display_date(task.date),
        task.status.as_str().to_owned(),
    ]
}

fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_label(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_owned();
    }
    let mut out = value
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect::<String>();
    out.push('…');
    out
}

fn render_form_text(form_ui: &FormUiState) -> String {
    let form = &form_ui.form;
    let mut lines = Vec::new();
    for (index, field) in TaskField::ALL.iter().enumerate() {
        let marker = if index == form_ui.field_index {
            ">"
        } else {
            " "
        };
        let lock = if form.is_editable(*field) {
            ""
        } else {
            " (locked)"
        };
        let value = form.draft().field(*field);
        let value = match field {
            TaskField::Status => TaskStatus::parse(value)
                .map(|status| format!("< {} >", status.label()))
                .unwrap_or_else(|| value.to_owned()),
            _ => value.to_owned(),
        };
        lines.push(format!("{marker} {}{lock}: {value}", field.label()));
        if let Some(message) = form.visible_error(*field) {
            lines.push(format!("    ! {message}"));
        }
    }
    lines.push(String::new());
    let save_hint = if form.can_submit() {
        "ctrl+s save"
    } else {
        "ctrl+s save (blocked)"
    };
    lines.push(format!("tab/shift+tab field | {save_hint} | esc cancel"));
    lines.join("\n")
}

fn render_status_menu_text(view_data: &ViewData) -> String {
    let target = if view_data.checked_count > 0 {
        format!(
            "{} selected task(s) ({})",
            view_data.checked_count,
            checked_breakdown(&view_data.checked)
        )
    } else {
        view_data
            .selected_row()
            .map(|task| format!("\"{}\"", task.title))
            .unwrap_or_else(|| "no task".to_owned())
    };
    let mut lines = vec![format!("move {target} to:"), String::new()];
    for (index, status) in TaskStatus::ALL.iter().enumerate() {
        let marker = if index == view_data.status_menu.cursor {
            ">"
        } else {
            " "
        };
        lines.push(format!("{marker} {}", status.as_str()));
    }
    lines.push(String::new());
    lines.push("j/k move | enter choose | esc close".to_owned());
    lines.join("\n")
}

/// Names every partition holding checked tasks, so selections made on
/// other tabs are visible before a bulk change.
fn checked_breakdown(checked: &StatusCounts) -> String {
    TaskStatus::ALL
        .iter()
        .filter(|status| checked.get(**status) > 0)
        .map(|status| format!("{} {}", status.label(), checked.get(*status)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_confirm_text(dialog: &ConfirmDialog) -> String {
    format!("{}\n\ny/enter ok | n/esc cancel", dialog.question())
}

fn help_overlay_text() -> &'static str {
    "j/k or arrows   move cursor\n\
     f/b, tab, 1-4   switch status tab\n\
     space           check/uncheck task\n\
     n               new task\n\
     e/enter         edit task\n\
     d               delete task (confirm)\n\
     s               change status of checked tasks or cursor row\n\
     ?               toggle help\n\
     q, ctrl+q       quit"
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible {
        return String::new();
    }

    let mode = match state.mode {
        AppMode::Nav => "NAV",
        AppMode::Form(_) => "FORM",
        AppMode::StatusMenu => "MENU",
        AppMode::Confirm => "CONFIRM",
    };
    let default = match state.mode {
        AppMode::Nav => "j/k f/b space n e d s | ? help | q quit",
        AppMode::Form(_) => "tab field | ctrl+s save | esc cancel",
        AppMode::StatusMenu => "j/k enter | esc close",
        AppMode::Confirm => "y ok | n cancel",
    };
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {default}"),
        None => format!("{mode} | {default}"),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::{
        AppRuntime, EMPTY_PARTITION_TEXT, FormUiState, StatusCounts, UiOptions, ViewData,
        handle_key_event, help_overlay_text, refresh_view_data, render_confirm_text,
        render_form_text, render_status_menu_text, row_cells, status_text, tab_title,
    };
    use anyhow::{Result, anyhow};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::mpsc;
    use taskboard_app::{
        AppMode, AppState, ConfirmDialog, FormKind, REQUIRED_MESSAGE, StagedChange, Task,
        TaskAction, TaskEvent, TaskForm, TaskStatus, TaskStore,
    };
    use taskboard_testkit::{add_task, fixture_date};
    use time::Date;

    #[derive(Debug, Default)]
    struct TestRuntime {
        store: TaskStore,
        dispatch_count: usize,
        fail_loads: bool,
    }

    impl AppRuntime for TestRuntime {
        fn load_partition(&mut self, status: TaskStatus) -> Result<Vec<Task>> {
            if self.fail_loads {
                return Err(anyhow!("store unavailable"));
            }
            Ok(self
                .store
                .tasks_with_status(status)
                .into_iter()
                .cloned()
                .collect())
        }

        fn load_counts(&mut self) -> Result<StatusCounts> {
            if self.fail_loads {
                return Err(anyhow!("store unavailable"));
            }
            let mut counts = StatusCounts::default();
            for status in TaskStatus::ALL {
                counts.set(status, self.store.count_with_status(status));
            }
            Ok(counts)
        }

        fn load_checked_counts(&mut self) -> Result<StatusCounts> {
            let mut counts = StatusCounts::default();
            for id in self.store.checked_ids() {
                if let Some(task) = self.store.get(&id) {
                    counts.set(task.status, counts.get(task.status) + 1);
                }
            }
            Ok(counts)
        }

        fn dispatch(&mut self, action: TaskAction) -> Result<Vec<TaskEvent>> {
            self.dispatch_count += 1;
            Ok(self.store.dispatch(action))
        }

        fn today(&mut self) -> Date {
            fixture_date()
        }
    }

    struct Harness {
        state: AppState,
        runtime: TestRuntime,
        view_data: ViewData,
        tx: mpsc::Sender<super::InternalEvent>,
        _rx: mpsc::Receiver<super::InternalEvent>,
    }

    impl Harness {
        fn new(runtime: TestRuntime) -> Self {
            Self::with_options(runtime, UiOptions::default())
        }

        fn with_options(runtime: TestRuntime, options: UiOptions) -> Self {
            let (tx, rx) = mpsc::channel();
            let mut harness = Self {
                state: AppState::default(),
                runtime,
                view_data: ViewData {
                    options,
                    ..ViewData::default()
                },
                tx,
                _rx: rx,
            };
            refresh_view_data(&harness.state, &mut harness.runtime, &mut harness.view_data)
                .expect("initial load");
            harness
        }

        fn press(&mut self, code: KeyCode) -> bool {
            self.press_with(code, KeyModifiers::NONE)
        }

        fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
            handle_key_event(
                &mut self.state,
                &mut self.runtime,
                &mut self.view_data,
                &self.tx,
                KeyEvent::new(code, modifiers),
            )
        }

        fn type_text(&mut self, text: &str) {
            for ch in text.chars() {
                self.press(KeyCode::Char(ch));
            }
        }
    }

    fn runtime_with(tasks: &[(&str, TaskStatus)]) -> TestRuntime {
        let mut runtime = TestRuntime::default();
        for (title, status) in tasks {
            add_task(&mut runtime.store, title, *status).expect("task added");
        }
        runtime
    }

    #[test]
    fn tab_keys_switch_partition() {
        let runtime = runtime_with(&[
            ("write report", TaskStatus::ToDo),
            ("review pr", TaskStatus::InProgress),
        ]);
        let mut harness = Harness::new(runtime);
        assert_eq!(harness.view_data.rows.len(), 1);
        assert_eq!(harness.view_data.rows[0].title, "write report");

        assert!(!harness.press(KeyCode::Char('f')));
        assert_eq!(harness.state.active_status, TaskStatus::InProgress);
        assert_eq!(harness.view_data.rows[0].title, "review pr");

        harness.press(KeyCode::Char('4'));
        assert_eq!(harness.state.active_status, TaskStatus::Deleted);
        assert!(harness.view_data.rows.is_empty());

        harness.press(KeyCode::Tab);
        assert_eq!(harness.state.active_status, TaskStatus::ToDo);

        harness.press(KeyCode::BackTab);
        assert_eq!(harness.state.active_status, TaskStatus::Deleted);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let runtime = runtime_with(&[("a", TaskStatus::ToDo), ("b", TaskStatus::ToDo)]);
        let mut harness = Harness::new(runtime);

        harness.press(KeyCode::Char('k'));
        assert_eq!(harness.view_data.cursor, 0);
        harness.press(KeyCode::Char('j'));
        harness.press(KeyCode::Char('j'));
        harness.press(KeyCode::Char('j'));
        assert_eq!(harness.view_data.cursor, 1);
        harness.press(KeyCode::Char('g'));
        assert_eq!(harness.view_data.cursor, 0);
    }

    #[test]
    fn space_toggles_checked_flag() {
        let runtime = runtime_with(&[("a", TaskStatus::ToDo)]);
        let mut harness = Harness::new(runtime);

        harness.press(KeyCode::Char(' '));
        assert!(harness.view_data.rows[0].is_checked);
        assert_eq!(harness.view_data.checked_count, 1);

        harness.press(KeyCode::Char(' '));
        assert!(!harness.view_data.rows[0].is_checked);
        assert_eq!(harness.view_data.checked_count, 0);
    }

    #[test]
    fn create_form_submits_new_task() {
        let mut harness = Harness::new(TestRuntime::default());

        harness.press(KeyCode::Char('n'));
        assert_eq!(harness.state.mode, AppMode::Form(FormKind::Create));
        harness.type_text("Buy milk");
        harness.press_with(KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert_eq!(harness.state.mode, AppMode::Nav);
        assert!(harness.view_data.form.is_none());
        assert_eq!(harness.runtime.store.len(), 1);
        let task = &harness.runtime.store.tasks()[0];
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.status, TaskStatus::ToDo);
        assert_eq!(task.date, fixture_date());
        assert_eq!(harness.view_data.counts.get(TaskStatus::ToDo), 1);
        assert_eq!(harness.state.status_line.as_deref(), Some("task added"));
    }

    #[test]
    fn enter_on_last_field_submits() {
        let mut harness = Harness::new(TestRuntime::default());

        harness.press(KeyCode::Char('n'));
        harness.type_text("Call plumber");
        for _ in 0..3 {
            harness.press(KeyCode::Enter);
        }
        assert!(matches!(harness.state.mode, AppMode::Form(_)));
        harness.press(KeyCode::Enter);

        assert_eq!(harness.state.mode, AppMode::Nav);
        assert_eq!(harness.runtime.store.len(), 1);
    }

    #[test]
    fn esc_discards_form() {
        let mut harness = Harness::new(TestRuntime::default());

        harness.press(KeyCode::Char('n'));
        harness.type_text("never saved");
        harness.press(KeyCode::Esc);

        assert_eq!(harness.state.mode, AppMode::Nav);
        assert!(harness.view_data.form.is_none());
        assert!(harness.runtime.store.is_empty());
        assert_eq!(harness.runtime.dispatch_count, 0);
    }

    #[test]
    fn invalid_submit_keeps_form_open_with_errors() {
        let mut harness = Harness::new(TestRuntime::default());

        harness.press(KeyCode::Char('n'));
        harness.press_with(KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert_eq!(harness.state.mode, AppMode::Form(FormKind::Create));
        assert_eq!(harness.runtime.dispatch_count, 0);
        let form_ui = harness.view_data.form.as_ref().expect("form still open");
        assert!(render_form_text(form_ui).contains(REQUIRED_MESSAGE));
    }

    #[test]
    fn create_form_ignores_status_cycling() {
        let mut harness = Harness::new(TestRuntime::default());

        harness.press(KeyCode::Char('n'));
        harness.press(KeyCode::Tab);
        harness.press(KeyCode::Tab);
        harness.press(KeyCode::Right);

        let form_ui = harness.view_data.form.as_ref().expect("form open");
        assert_eq!(form_ui.form.draft().status, "TO_DO");
        assert!(harness.state.status_line.is_some());
    }

    #[test]
    fn edit_form_changes_title() {
        let runtime = runtime_with(&[("old title", TaskStatus::ToDo)]);
        let mut harness = Harness::new(runtime);

        harness.press(KeyCode::Char('e'));
        assert_eq!(harness.state.mode, AppMode::Form(FormKind::Edit));
        for _ in 0.."title".len() {
            harness.press(KeyCode::Backspace);
        }
        harness.type_text("name");
        harness.press_with(KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert_eq!(harness.runtime.store.tasks()[0].title, "old name");
        assert_eq!(harness.view_data.rows[0].title, "old name");
    }

    #[test]
    fn deleted_task_only_allows_status_edits() {
        let runtime = runtime_with(&[("gone", TaskStatus::Deleted)]);
        let mut harness = Harness::new(runtime);
        harness.press(KeyCode::Char('4'));

        harness.press(KeyCode::Enter);
        let form_ui = harness.view_data.form.as_ref().expect("form open");
        assert_eq!(form_ui.field(), taskboard_app::TaskField::Status);

        harness.press(KeyCode::Up);
        harness.press(KeyCode::Up);
        harness.type_text("x");
        assert_eq!(
            harness.view_data.form.as_ref().expect("form open").form.draft().title,
            "gone"
        );

        harness.press(KeyCode::Down);
        harness.press(KeyCode::Down);
        harness.press(KeyCode::Right);
        harness.press_with(KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert_eq!(harness.runtime.store.tasks()[0].status, TaskStatus::ToDo);
        assert!(harness.view_data.rows.is_empty());
    }

    #[test]
    fn delete_requires_confirmation() {
        let runtime = runtime_with(&[("remove me", TaskStatus::ToDo)]);
        let mut harness = Harness::new(runtime);

        harness.press(KeyCode::Char('d'));
        assert_eq!(harness.state.mode, AppMode::Confirm);
        assert_eq!(harness.runtime.dispatch_count, 0);
        let dialog = harness.view_data.confirm.as_ref().expect("dialog open");
        assert!(render_confirm_text(dialog).contains("Delete task \"remove me\"?"));

        harness.press(KeyCode::Char('y'));
        assert_eq!(harness.state.mode, AppMode::Nav);
        assert_eq!(harness.runtime.store.tasks()[0].status, TaskStatus::Deleted);
        assert_eq!(harness.view_data.counts.get(TaskStatus::Deleted), 1);
        assert!(harness.view_data.rows.is_empty());
    }

    #[test]
    fn cancelled_delete_changes_nothing() {
        let runtime = runtime_with(&[("keep me", TaskStatus::ToDo)]);
        let mut harness = Harness::new(runtime);

        harness.press(KeyCode::Char('d'));
        harness.press(KeyCode::Esc);

        assert_eq!(harness.state.mode, AppMode::Nav);
        assert!(harness.view_data.confirm.is_none());
        assert_eq!(harness.runtime.dispatch_count, 0);
        assert_eq!(harness.runtime.store.tasks()[0].status, TaskStatus::ToDo);
    }

    #[test]
    fn status_menu_moves_checked_tasks_and_clears_checks() {
        let runtime = runtime_with(&[
            ("a", TaskStatus::ToDo),
            ("b", TaskStatus::ToDo),
            ("c", TaskStatus::ToDo),
        ]);
        let mut harness = Harness::new(runtime);

        harness.press(KeyCode::Char(' '));
        harness.press(KeyCode::Char('j'));
        harness.press(KeyCode::Char(' '));
        assert_eq!(harness.view_data.checked_count, 2);

        harness.press(KeyCode::Char('s'));
        assert_eq!(harness.state.mode, AppMode::StatusMenu);
        assert!(
            render_status_menu_text(&harness.view_data).contains("2 selected task(s) (To Do 2)")
        );
        harness.press(KeyCode::Char('j'));
        harness.press(KeyCode::Enter);
        assert_eq!(harness.state.mode, AppMode::Confirm);
        harness.press(KeyCode::Enter);

        assert_eq!(harness.view_data.counts.get(TaskStatus::InProgress), 2);
        assert_eq!(harness.view_data.counts.get(TaskStatus::ToDo), 1);
        assert_eq!(harness.view_data.checked_count, 0);
        assert!(harness.runtime.store.tasks().iter().all(|task| !task.is_checked));
    }

    #[test]
    fn deleted_task_is_not_swept_up_by_a_later_bulk_change() {
        let runtime = runtime_with(&[("a", TaskStatus::ToDo), ("b", TaskStatus::ToDo)]);
        let mut harness = Harness::new(runtime);

        harness.press(KeyCode::Char(' '));
        harness.press(KeyCode::Char('j'));
        harness.press(KeyCode::Char(' '));
        harness.press(KeyCode::Char('k'));
        harness.press(KeyCode::Char('d'));
        harness.press(KeyCode::Char('y'));

        let a = harness.runtime.store.tasks()[0].clone();
        assert_eq!(a.status, TaskStatus::Deleted);
        assert!(!a.is_checked);
        assert_eq!(harness.view_data.checked_count, 1);

        harness.press(KeyCode::Char('s'));
        harness.press(KeyCode::Char('j'));
        harness.press(KeyCode::Char('j'));
        harness.press(KeyCode::Enter);
        harness.press(KeyCode::Char('y'));

        let tasks = harness.runtime.store.tasks();
        assert_eq!(tasks[0].status, TaskStatus::Deleted);
        assert_eq!(tasks[1].status, TaskStatus::Done);
        assert_eq!(harness.view_data.counts.get(TaskStatus::Deleted), 1);
    }

    #[test]
    fn selections_on_other_tabs_are_named_before_a_bulk_change() {
        let runtime = runtime_with(&[("a", TaskStatus::ToDo), ("b", TaskStatus::Done)]);
        let mut harness = Harness::new(runtime);

        harness.press(KeyCode::Char(' '));
        harness.press(KeyCode::Char('3'));
        harness.press(KeyCode::Char(' '));
        harness.press(KeyCode::Char('1'));
        assert_eq!(
            super::list_title(&harness.state, &harness.view_data),
            "To Do | 1 selected, 1 on other tabs"
        );

        harness.press(KeyCode::Char('s'));
        assert!(
            render_status_menu_text(&harness.view_data)
                .contains("2 selected task(s) (To Do 1, Done 1)")
        );
    }

    #[test]
    fn single_row_change_applies_immediately_when_confirm_disabled() {
        let runtime = runtime_with(&[("a", TaskStatus::ToDo)]);
        let mut harness = Harness::with_options(
            runtime,
            UiOptions {
                confirm_status_changes: false,
            },
        );

        harness.press(KeyCode::Char('s'));
        harness.press(KeyCode::Char('j'));
        harness.press(KeyCode::Char('j'));
        harness.press(KeyCode::Enter);

        assert_eq!(harness.state.mode, AppMode::Nav);
        assert_eq!(harness.runtime.store.tasks()[0].status, TaskStatus::Done);
    }

    #[test]
    fn delete_confirms_even_when_confirm_disabled() {
        let runtime = runtime_with(&[("a", TaskStatus::ToDo)]);
        let mut harness = Harness::with_options(
            runtime,
            UiOptions {
                confirm_status_changes: false,
            },
        );

        harness.press(KeyCode::Char('d'));
        assert_eq!(harness.state.mode, AppMode::Confirm);
    }

    #[test]
    fn empty_partition_reports_no_selection() {
        let mut harness = Harness::new(TestRuntime::default());

        harness.press(KeyCode::Char('e'));
        assert_eq!(harness.state.mode, AppMode::Nav);
        assert_eq!(harness.state.status_line.as_deref(), Some("no task selected"));
        assert_eq!(EMPTY_PARTITION_TEXT, "Nothing here yet.");
    }

    #[test]
    fn load_failure_surfaces_on_status_line() {
        let runtime = runtime_with(&[("a", TaskStatus::ToDo)]);
        let mut harness = Harness::new(runtime);
        harness.runtime.fail_loads = true;

        harness.press(KeyCode::Char('f'));
        let status = harness.state.status_line.clone().unwrap_or_default();
        assert!(status.starts_with("load failed"), "{status}");
    }

    #[test]
    fn quit_keys() {
        let mut harness = Harness::new(TestRuntime::default());
        assert!(harness.press_with(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(harness.press(KeyCode::Char('q')));

        harness.press(KeyCode::Char('n'));
        assert!(!harness.press(KeyCode::Char('q')));
        assert_eq!(
            harness.view_data.form.as_ref().expect("form open").form.draft().title,
            "q"
        );
    }

    #[test]
    fn help_overlay_swallows_keys_until_closed() {
        let runtime = runtime_with(&[("a", TaskStatus::ToDo)]);
        let mut harness = Harness::new(runtime);

        harness.press(KeyCode::Char('?'));
        assert!(harness.view_data.help_visible);
        harness.press(KeyCode::Char('d'));
        assert_eq!(harness.state.mode, AppMode::Nav);
        harness.press(KeyCode::Esc);
        assert!(!harness.view_data.help_visible);
        assert!(help_overlay_text().contains("space"));
    }

    #[test]
    fn tab_title_includes_count() {
        let mut counts = StatusCounts::default();
        counts.set(TaskStatus::Done, 3);
        assert_eq!(tab_title(TaskStatus::Done, &counts), " Done (3) ");
        assert_eq!(tab_title(TaskStatus::ToDo, &counts), " To Do (0) ");
    }

    #[test]
    fn row_cells_render_check_and_display_date() {
        let runtime = runtime_with(&[("a", TaskStatus::InProgress)]);
        let mut task = runtime.store.tasks()[0].clone();
        task.is_checked = true;
        task.description = "line one\nline two".to_owned();

        let cells = row_cells(&task);
        assert_eq!(cells[0], "[x]");
        assert_eq!(cells[2], "line one line two");
        assert_eq!(cells[3], "01 Jan, 2024");
        assert_eq!(cells[4], "IN_PROGRESS");
    }

    #[test]
    fn status_text_shows_mode_and_message() {
        let mut state = AppState::default();
        let view_data = ViewData::default();
        assert!(status_text(&state, &view_data).starts_with("NAV | "));

        state.mode = AppMode::Confirm;
        state.status_line = Some("hello".to_owned());
        assert!(status_text(&state, &view_data).starts_with("CONFIRM | hello | "));
    }

    #[test]
    fn form_text_marks_locked_status_in_create_mode() {
        let form_ui = FormUiState {
            form: TaskForm::create(fixture_date()),
            field_index: 0,
        };
        let text = render_form_text(&form_ui);
        assert!(text.contains("> Title: "));
        assert!(text.contains("Status (locked): < To Do >"));
        assert!(text.contains("Date: 2024-01-01"));
    }

    #[test]
    fn confirm_text_for_bulk_change() {
        let dialog = ConfirmDialog::new(
            "Move 2 selected task(s) to Done?",
            StagedChange::Checked {
                count: 2,
                status: TaskStatus::Done,
            },
        );
        assert!(render_confirm_text(&dialog).starts_with("Move 2 selected task(s) to Done?"));
    }
}
