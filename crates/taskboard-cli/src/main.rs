// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use runtime::StoreRuntime;
use std::env;
use std::path::PathBuf;
use taskboard_app::{AppState, TaskStore};
use taskboard_tui::UiOptions;
use time::OffsetDateTime;

const DEMO_SEED: u64 = 42;
const DEMO_TASK_COUNT: usize = 24;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `taskboard --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let log_dir = config.log_dir()?;
    let (log_path, _log_guard) = logging::init_logging(&log_dir, config.log_level())
        .with_context(|| {
            format!(
                "initialize logging in {}; set [log].dir to a writable directory",
                log_dir.display()
            )
        })?;
    tracing::info!(
        config = %options.config_path.display(),
        log = %log_path.display(),
        demo = options.demo,
        "starting taskboard"
    );

    if options.check_only {
        println!("config ok: {}", options.config_path.display());
        println!("log file: {}", log_path.display());
        return Ok(());
    }

    let mut store = TaskStore::new();
    if options.demo {
        let today = OffsetDateTime::now_utc().date();
        let seeded =
            taskboard_testkit::seed_demo_tasks(&mut store, DEMO_SEED, DEMO_TASK_COUNT, today);
        tracing::info!(count = seeded.len(), "seeded demo tasks");
    }

    let mut state = AppState {
        active_status: config.start_tab(),
        ..AppState::default()
    };
    let ui_options = UiOptions {
        confirm_status_changes: config.confirm_status_changes(),
    };

    let mut runtime = StoreRuntime::new(&mut store);
    let result = taskboard_tui::run_app(&mut state, &mut runtime, ui_options);
    tracing::info!(tasks = store.len(), "taskboard exited");
    result
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    demo: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        demo: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("taskboard");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Launch with seeded demo tasks");
    println!("  --check                  Validate config and logging setup, then exit");
    println!("  --help                   Show this help");
}
