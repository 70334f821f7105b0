#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use liftbook_domain::Workout;

pub use notification::{Notification, Notifier, Severity};
pub use service::Service;
pub use settings::{DEFAULT_WORKOUT_NAME, Settings, SettingsRepository, SettingsService};
pub use ticker::{Tick, Ticker, TimerKind};
pub use tracker::{FinishError, Tracker};

pub mod notification;
mod service;
pub mod settings;
pub mod ticker;
pub mod tracker;

/// Writes finished workouts to a place where the user can pick them up.
#[allow(async_fn_in_trait)]
pub trait WorkoutExporter {
    /// Returns the location of the exported workout.
    async fn export_workout(&self, workout: &Workout) -> Result<PathBuf, String>;
}

impl<E: WorkoutExporter> WorkoutExporter for &E {
    async fn export_workout(&self, workout: &Workout) -> Result<PathBuf, String> {
        (*self).export_workout(workout).await
    }
}
