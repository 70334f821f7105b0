use liftbook_app::{FinishError, Notifier, SettingsService, Tick, Tracker, WorkoutExporter};
use liftbook_domain::{
    CatalogService, Destination, DragEnd, ExerciseID, SetID, WorkoutHistoryService,
};
use log::debug;

use crate::{
    command::{Command, HELP},
    render,
};

/// Maps terminal commands onto the tracker.
pub struct Session<S, E, N, C> {
    tracker: Tracker<S, E, N>,
    settings: C,
}

impl<S, E, N, C> Session<S, E, N, C>
where
    S: CatalogService + WorkoutHistoryService,
    E: WorkoutExporter,
    N: Notifier,
    C: SettingsService,
{
    pub fn new(tracker: Tracker<S, E, N>, settings: C) -> Self {
        Self { tracker, settings }
    }

    pub fn on_tick(&mut self, tick: Tick) {
        self.tracker.on_tick(tick);
    }

    pub fn show(&self) -> String {
        render::workout(
            self.tracker.workout(),
            self.tracker.elapsed(),
            self.tracker.rest(),
        )
    }

    /// Returns the text to print.
    pub async fn execute(&mut self, command: Command) -> String {
        self.try_execute(command)
            .await
            .unwrap_or_else(|message| message)
    }

    async fn try_execute(&mut self, command: Command) -> Result<String, String> {
        match command {
            Command::Help => Ok(format!("{HELP}\n")),
            Command::Show => Ok(self.show()),
            Command::Name(name) => {
                let _ = self.tracker.rename_workout(&name);
                Ok(self.show())
            }
            Command::Catalog => Ok(render::catalog(&self.tracker.catalog().await)),
            Command::CatalogAdd { name, description } => {
                self.tracker.add_catalog_exercise(&name, &description).await;
                Ok(String::new())
            }
            Command::Add(name) => {
                let _ = self.tracker.add_exercise(&name);
                Ok(self.show())
            }
            Command::Pick(id) => {
                self.tracker.pick_catalog_exercise(id.into()).await;
                Ok(self.show())
            }
            Command::Remove(exercise) => {
                let id = self.exercise_id(exercise)?;
                let _ = self.tracker.delete_exercise(id);
                Ok(self.show())
            }
            Command::Set {
                exercise,
                reps,
                weight,
            } => {
                let id = self.exercise_id(exercise)?;
                let _ = self.tracker.add_set(id, &reps, &weight);
                Ok(self.show())
            }
            Command::RemoveSet { exercise, set } => {
                let exercise_id = self.exercise_id(exercise)?;
                let set_id = self.set_id(exercise_id, exercise, set)?;
                let _ = self.tracker.delete_set(exercise_id, set_id);
                Ok(self.show())
            }
            Command::Move { from, to } => {
                let source = self.exercise_id(from)?;
                let destination = match self.exercise_id(to) {
                    Ok(target) => Destination::Item(target),
                    Err(_) => Destination::Index(to - 1),
                };
                let _ = self.tracker.reorder_exercises(DragEnd {
                    source,
                    destination: Some(destination),
                });
                Ok(self.show())
            }
            Command::Timer => {
                self.tracker.toggle_elapsed_timer();
                Ok(render::elapsed_timer(self.tracker.elapsed()))
            }
            Command::TimerReset => {
                self.tracker.reset_elapsed_timer();
                Ok(render::elapsed_timer(self.tracker.elapsed()))
            }
            Command::Rest(seconds) => {
                self.tracker
                    .set_rest_period(seconds)
                    .map_err(|err| format!("{err}\n"))?;
                self.save_rest_period(seconds).await;
                Ok(render::rest_timer(self.tracker.rest()))
            }
            Command::Finish => match self.tracker.finish_workout().await {
                Ok(_) => Ok(self.show()),
                Err(FinishError::NoExercises) => {
                    Err(String::from("Add an exercise before finishing the workout.\n"))
                }
                Err(FinishError::Export(_)) => Ok(String::new()),
            },
            Command::History => Ok(render::history(&self.tracker.history().await)),
            Command::Quit => Ok(String::new()),
        }
    }

    fn exercise_id(&self, position: usize) -> Result<ExerciseID, String> {
        position
            .checked_sub(1)
            .and_then(|index| self.tracker.workout().exercises().get(index))
            .map(|exercise| exercise.id)
            .ok_or_else(|| format!("No exercise at position {position}\n"))
    }

    fn set_id(
        &self,
        exercise_id: ExerciseID,
        exercise: usize,
        position: usize,
    ) -> Result<SetID, String> {
        position
            .checked_sub(1)
            .and_then(|index| {
                self.tracker
                    .workout()
                    .exercise(exercise_id)?
                    .sets
                    .get(index)
            })
            .map(|set| set.id)
            .ok_or_else(|| format!("No set at position {position} of exercise {exercise}\n"))
    }

    /// Keep the new rest period for the next start.
    async fn save_rest_period(&self, seconds: u32) {
        let Ok(mut settings) = self.settings.get_settings().await else {
            return;
        };
        settings.rest_period = seconds;
        if self.settings.set_settings(settings).await.is_ok() {
            debug!("saved rest period of {seconds} s");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, fs, path::Path};

    use liftbook_app::{Notification, Settings, Severity};
    use liftbook_storage::{export::JsonFileExporter, memory::Memory, settings::SettingsFile};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tokio::sync::mpsc;

    use super::*;

    #[derive(Default)]
    struct RecordingNotifier {
        notifications: RefCell<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.notifications.borrow_mut().push(notification);
        }
    }

    type TestSession<'a> = Session<
        liftbook_domain::Service<&'a Memory>,
        JsonFileExporter,
        &'a RecordingNotifier,
        liftbook_app::Service<SettingsFile>,
    >;

    fn session<'a>(
        memory: &'a Memory,
        notifier: &'a RecordingNotifier,
        directory: &Path,
    ) -> TestSession<'a> {
        let (sender, _) = mpsc::unbounded_channel();
        let tracker = Tracker::new(
            liftbook_domain::Service::new(memory),
            JsonFileExporter::new(directory.join("workouts")),
            notifier,
            &Settings::default(),
            sender,
        );
        Session::new(
            tracker,
            liftbook_app::Service::new(SettingsFile::new(directory.join("settings.json"))),
        )
    }

    async fn run(session: &mut TestSession<'_>, lines: &[&str]) -> String {
        let mut output = String::new();
        for line in lines {
            output = session.execute(line.parse().unwrap()).await;
        }
        output
    }

    fn exercise_names(session: &TestSession<'_>) -> Vec<String> {
        session
            .tracker
            .workout()
            .exercises()
            .iter()
            .map(|e| e.name.to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_record_and_finish_workout() {
        let directory = tempfile::tempdir().unwrap();
        let memory = Memory::with_default_catalog();
        let notifier = RecordingNotifier::default();
        let mut session = session(&memory, &notifier, directory.path());

        let output = run(&mut session, &["add Squat", "set 1 10 100"]).await;

        assert_eq!(
            output,
            "My Workout  [00:00 stopped]\n\
             \x20 1. Squat\n\
             \x20      1) 10 x 100 kg\n\
             Rest 01:00 (100%)\n"
        );

        let output = run(&mut session, &["finish"]).await;

        assert_eq!(
            output,
            "My Workout  [00:00 stopped]\n  No exercises yet.\nRest 01:00 (100%)\n"
        );
        let files = fs::read_dir(directory.path().join("workouts"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("My_Workout_"));
        assert_eq!(
            notifier.notifications.borrow().last().map(|n| n.title.clone()),
            Some(String::from("Workout finished!"))
        );
        assert!(
            run(&mut session, &["history"])
                .await
                .contains("My Workout  1 exercises, 1 sets, 1000.0 kg")
        );
    }

    #[tokio::test]
    async fn test_finish_empty_workout() {
        let directory = tempfile::tempdir().unwrap();
        let memory = Memory::new();
        let notifier = RecordingNotifier::default();
        let mut session = session(&memory, &notifier, directory.path());

        assert_eq!(
            run(&mut session, &["finish"]).await,
            "Add an exercise before finishing the workout.\n"
        );
        assert!(!directory.path().join("workouts").exists());
    }

    #[rstest]
    #[case("rm 3", "No exercise at position 3\n")]
    #[case("set 2 10 100", "No exercise at position 2\n")]
    #[case("rmset 1 1", "No set at position 1 of exercise 1\n")]
    #[case("move 2 1", "No exercise at position 2\n")]
    #[tokio::test]
    async fn test_unknown_position(#[case] line: &str, #[case] expected: &str) {
        let directory = tempfile::tempdir().unwrap();
        let memory = Memory::new();
        let notifier = RecordingNotifier::default();
        let mut session = session(&memory, &notifier, directory.path());

        assert_eq!(run(&mut session, &["add Squat", line]).await, expected);
        assert_eq!(exercise_names(&session), vec!["Squat"]);
    }

    #[rstest]
    #[case("move 3 1", vec!["C", "A", "B"])]
    #[case("move 1 3", vec!["B", "C", "A"])]
    #[case("move 1 9", vec!["B", "C", "A"])]
    #[case("move 2 2", vec!["A", "B", "C"])]
    #[tokio::test]
    async fn test_move(#[case] line: &str, #[case] expected: Vec<&str>) {
        let directory = tempfile::tempdir().unwrap();
        let memory = Memory::new();
        let notifier = RecordingNotifier::default();
        let mut session = session(&memory, &notifier, directory.path());

        run(&mut session, &["add A", "add B", "add C", line]).await;

        assert_eq!(exercise_names(&session), expected);
    }

    #[tokio::test]
    async fn test_delete_set_and_exercise() {
        let directory = tempfile::tempdir().unwrap();
        let memory = Memory::new();
        let notifier = RecordingNotifier::default();
        let mut session = session(&memory, &notifier, directory.path());

        run(
            &mut session,
            &["add A", "add B", "set 2 5 50", "set 2 6 60", "rmset 2 1", "rm 1"],
        )
        .await;

        let exercises = session.tracker.workout().exercises();
        assert_eq!(exercise_names(&session), vec!["B"]);
        assert_eq!(exercises[0].sets.len(), 1);
        assert_eq!(exercises[0].sets[0].reps.to_string(), "6");
    }

    #[tokio::test]
    async fn test_pick_from_catalog() {
        let directory = tempfile::tempdir().unwrap();
        let memory = Memory::with_default_catalog();
        let notifier = RecordingNotifier::default();
        let mut session = session(&memory, &notifier, directory.path());

        run(&mut session, &["pick 2", "pick 9"]).await;

        assert_eq!(exercise_names(&session), vec!["Bench Press"]);
    }

    #[tokio::test]
    async fn test_add_catalog_exercise() {
        let directory = tempfile::tempdir().unwrap();
        let memory = Memory::with_default_catalog();
        let notifier = RecordingNotifier::default();
        let mut session = session(&memory, &notifier, directory.path());

        run(
            &mut session,
            &["catalog add Front Squat", "catalog add Front Squat | Bar in front."],
        )
        .await;

        assert_eq!(
            *notifier.notifications.borrow(),
            vec![
                Notification::catalog_exercise_incomplete(),
                Notification::catalog_exercise_added("Front Squat"),
            ]
        );
        assert!(
            run(&mut session, &["catalog"])
                .await
                .ends_with("    4  Front Squat: Bar in front.\n")
        );
    }

    #[tokio::test]
    async fn test_rest_period() {
        let directory = tempfile::tempdir().unwrap();
        let memory = Memory::new();
        let notifier = RecordingNotifier::default();
        let mut session = session(&memory, &notifier, directory.path());

        assert_eq!(run(&mut session, &["rest 90"]).await, "Rest period 01:30\n");
        assert_eq!(
            run(&mut session, &["rest 0"]).await,
            "Rest period must be at least one second\n"
        );
        assert_eq!(*session.tracker.rest().period(), 90);

        let stored = fs::read_to_string(directory.path().join("settings.json")).unwrap();
        assert!(stored.contains("\"rest_period\": 90"));
    }

    #[tokio::test]
    async fn test_elapsed_timer() {
        let directory = tempfile::tempdir().unwrap();
        let memory = Memory::new();
        let notifier = RecordingNotifier::default();
        let mut session = session(&memory, &notifier, directory.path());

        assert_eq!(run(&mut session, &["timer"]).await, "Timer 00:00 (running)\n");
        assert_eq!(
            run(&mut session, &["timer reset"]).await,
            "Timer 00:00 (running)\n"
        );
        assert_eq!(run(&mut session, &["timer"]).await, "Timer 00:00 (stopped)\n");
    }

    #[tokio::test]
    async fn test_notifier_severity() {
        let directory = tempfile::tempdir().unwrap();
        let memory = Memory::new();
        let notifier = RecordingNotifier::default();
        let mut session = session(&memory, &notifier, directory.path());

        run(&mut session, &["catalog add | no name"]).await;

        assert_eq!(
            notifier.notifications.borrow()[0].severity,
            Severity::Destructive
        );
    }
}
