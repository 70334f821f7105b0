use std::path::PathBuf;

use chrono::Utc;
use liftbook_domain::{
    CatalogExercise, CatalogExerciseID, CatalogService, CreateError, DragEnd, ElapsedTimer,
    ExerciseID, OngoingWorkout, RestEvent, RestPeriod, RestPeriodError, RestTimer, SetID, Workout,
    WorkoutError, WorkoutHistoryService,
};
use log::{debug, error, info};
use tokio::sync::mpsc::UnboundedSender;

use crate::{Notification, Notifier, Settings, Tick, Ticker, TimerKind, WorkoutExporter};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FinishError {
    #[error("workout has no exercises")]
    NoExercises,
    #[error("failed to export workout: {0}")]
    Export(String),
}

/// Holds the state of the current session and applies user actions and
/// timer ticks to it.
///
/// Declined actions never change the state. They are logged and returned,
/// but not shown to the user.
pub struct Tracker<S, E, N> {
    service: S,
    exporter: E,
    notifier: N,
    workout: OngoingWorkout,
    elapsed: ElapsedTimer,
    rest: RestTimer,
    elapsed_ticker: Ticker,
    rest_ticker: Ticker,
}

impl<S, E, N> Tracker<S, E, N>
where
    S: CatalogService + WorkoutHistoryService,
    E: WorkoutExporter,
    N: Notifier,
{
    pub fn new(
        service: S,
        exporter: E,
        notifier: N,
        settings: &Settings,
        ticks: UnboundedSender<Tick>,
    ) -> Self {
        Self {
            service,
            exporter,
            notifier,
            workout: OngoingWorkout::new(settings.workout_name()),
            elapsed: ElapsedTimer::new(),
            rest: RestTimer::new(settings.rest_period()),
            elapsed_ticker: Ticker::new(TimerKind::Elapsed, ticks.clone()),
            rest_ticker: Ticker::new(TimerKind::Rest, ticks),
        }
    }

    pub fn workout(&self) -> &OngoingWorkout {
        &self.workout
    }

    pub fn elapsed(&self) -> &ElapsedTimer {
        &self.elapsed
    }

    pub fn rest(&self) -> &RestTimer {
        &self.rest
    }

    pub fn rename_workout(&mut self, name: &str) -> Result<(), WorkoutError> {
        declined(self.workout.rename(name), "rename workout")
    }

    pub fn add_exercise(&mut self, name: &str) -> Result<ExerciseID, WorkoutError> {
        declined(self.workout.add_exercise(name), "add exercise")
    }

    /// Add an exercise named like the given catalog entry.
    pub async fn pick_catalog_exercise(&mut self, id: CatalogExerciseID) -> Option<ExerciseID> {
        match self.service.get_catalog_exercise(id).await {
            Ok(Some(exercise)) => self.add_exercise(exercise.name.as_ref()).ok(),
            Ok(None) => {
                debug!("failed to pick catalog exercise: {id} not found");
                None
            }
            Err(err) => {
                self.notifier
                    .notify(Notification::catalog_unavailable(&err.to_string()));
                None
            }
        }
    }

    pub fn delete_exercise(&mut self, id: ExerciseID) -> Result<(), WorkoutError> {
        declined(self.workout.delete_exercise(id), "delete exercise").map(|_| ())
    }

    /// Record a set and restart the rest countdown.
    pub fn add_set(
        &mut self,
        exercise_id: ExerciseID,
        reps: &str,
        weight: &str,
    ) -> Result<SetID, WorkoutError> {
        let id = declined(self.workout.add_set(exercise_id, reps, weight), "add set")?;
        self.rest.trigger();
        self.rest_ticker.start();
        Ok(id)
    }

    pub fn delete_set(
        &mut self,
        exercise_id: ExerciseID,
        set_id: SetID,
    ) -> Result<(), WorkoutError> {
        declined(self.workout.delete_set(exercise_id, set_id), "delete set").map(|_| ())
    }

    pub fn reorder_exercises(&mut self, drag: DragEnd) -> Result<(), WorkoutError> {
        declined(self.workout.apply_drag(drag), "reorder exercises")
    }

    pub fn toggle_elapsed_timer(&mut self) {
        self.elapsed.toggle();
        if self.elapsed.is_running() {
            self.elapsed_ticker.start();
        } else {
            self.elapsed_ticker.stop();
        }
    }

    pub fn reset_elapsed_timer(&mut self) {
        self.elapsed.reset();
        if self.elapsed.is_running() {
            self.elapsed_ticker.start();
        }
    }

    pub fn set_rest_period(&mut self, seconds: u32) -> Result<(), RestPeriodError> {
        let period = RestPeriod::new(seconds).inspect_err(|err| {
            debug!("failed to set rest period: {err}");
        })?;
        self.rest.set_period(period);
        Ok(())
    }

    /// Apply a tick. Ticks of stopped or restarted tickers are ignored.
    pub fn on_tick(&mut self, tick: Tick) {
        match tick.timer {
            TimerKind::Elapsed => {
                if self.elapsed_ticker.accepts(tick) {
                    self.elapsed.tick();
                } else {
                    debug!("ignoring stale elapsed tick");
                }
            }
            TimerKind::Rest => {
                if !self.rest_ticker.accepts(tick) {
                    debug!("ignoring stale rest tick");
                    return;
                }
                if let Some(RestEvent::Finished) = self.rest.tick() {
                    self.rest_ticker.stop();
                    info!("rest period finished");
                    self.notifier.notify(Notification::rest_finished());
                }
            }
        }
    }

    pub async fn catalog(&self) -> Vec<CatalogExercise> {
        match self.service.get_catalog().await {
            Ok(catalog) => catalog,
            Err(err) => {
                self.notifier
                    .notify(Notification::catalog_unavailable(&err.to_string()));
                vec![]
            }
        }
    }

    pub async fn add_catalog_exercise(
        &self,
        name: &str,
        description: &str,
    ) -> Option<CatalogExercise> {
        match self.service.create_catalog_exercise(name, description).await {
            Ok(exercise) => {
                self.notifier.notify(Notification::catalog_exercise_added(
                    exercise.name.as_ref(),
                ));
                Some(exercise)
            }
            Err(CreateError::Invalid(_)) => {
                self.notifier
                    .notify(Notification::catalog_exercise_incomplete());
                None
            }
            Err(err) => {
                self.notifier
                    .notify(Notification::catalog_unavailable(&err.to_string()));
                None
            }
        }
    }

    /// Export the workout, add it to the history and start over.
    ///
    /// If the export fails, the ongoing workout is kept.
    pub async fn finish_workout(&mut self) -> Result<(Workout, PathBuf), FinishError> {
        if self.workout.is_empty() {
            debug!("failed to finish workout: no exercises");
            return Err(FinishError::NoExercises);
        }

        let workout = self.workout.snapshot(Utc::now());
        let path = match self.exporter.export_workout(&workout).await {
            Ok(path) => path,
            Err(err) => {
                error!("failed to export workout: {err}");
                self.notifier.notify(Notification::export_failed(&err));
                return Err(FinishError::Export(err));
            }
        };
        info!("exported workout to {}", path.display());

        if let Err(err) = self.service.create_workout(workout.clone()).await {
            error!("failed to add workout to history: {err}");
        }

        self.notifier.notify(Notification::workout_finished(
            &path.display().to_string(),
        ));
        self.workout.reset();
        self.elapsed.reset();
        self.elapsed.stop();
        self.elapsed_ticker.stop();

        Ok((workout, path))
    }

    pub async fn history(&self) -> Vec<Workout> {
        match self.service.get_workouts().await {
            Ok(workouts) => workouts,
            Err(err) => {
                self.notifier
                    .notify(Notification::history_unavailable(&err.to_string()));
                vec![]
            }
        }
    }
}

fn declined<T>(result: Result<T, WorkoutError>, action: &str) -> Result<T, WorkoutError> {
    result.inspect_err(|err| {
        if err.is_lookup_miss() {
            debug!("failed to {action}: {err}");
        } else {
            debug!("declined to {action}: {err}");
        }
    })
}
