#![warn(clippy::pedantic)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use liftbook_app::{Settings, SettingsService, Tracker};
use liftbook_storage::{export::JsonFileExporter, memory::Memory, settings::SettingsFile};
use log::{LevelFilter, info};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

use crate::{
    command::{Command, ParseError},
    session::Session,
    terminal::TerminalNotifier,
};

mod command;
mod render;
mod session;
mod terminal;

#[derive(Parser)]
#[command(name = "liftbook", version, about = "Track gym workouts in the terminal")]
struct Cli {
    /// Rest period after each set in seconds
    #[arg(long)]
    rest_period: Option<u32>,

    /// Name of new workouts
    #[arg(long)]
    workout_name: Option<String>,

    /// Directory finished workouts are saved to
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Settings file (defaults to the platform configuration directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn apply(&self, settings: &mut Settings) {
        if let Some(rest_period) = self.rest_period {
            settings.rest_period = rest_period;
        }
        if let Some(workout_name) = &self.workout_name {
            settings.workout_name.clone_from(workout_name);
        }
        if let Some(export_dir) = &self.export_dir {
            settings.export_dir = Some(export_dir.clone());
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_settings_path()?,
    };
    let settings_service = liftbook_app::Service::new(SettingsFile::new(&settings_path));
    let mut settings = settings_service
        .get_settings()
        .await
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("failed to read settings from {}", settings_path.display()))?;
    cli.apply(&mut settings);

    let memory = Memory::with_default_catalog();
    let (sender, mut ticks) = mpsc::unbounded_channel();
    let tracker = Tracker::new(
        liftbook_domain::Service::new(&memory),
        JsonFileExporter::new(settings.export_dir()),
        TerminalNotifier,
        &settings,
        sender,
    );
    let mut session = Session::new(tracker, settings_service);

    info!("saving workouts to {}", settings.export_dir().display());
    println!("Type \"help\" for a list of commands.");
    print!("{}", session.show());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read input")? else {
                    break;
                };
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => print!("{}", session.execute(command).await),
                    Err(ParseError::Empty) => {}
                    Err(err) => println!("{err}"),
                }
            }
            Some(tick) = ticks.recv() => session.on_tick(tick),
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn default_settings_path() -> anyhow::Result<PathBuf> {
    directories::ProjectDirs::from("", "", "liftbook")
        .map(|dirs| dirs.config_dir().join("settings.json"))
        .context("failed to determine the configuration directory")
}
