use strum::Display;

/// Sink for transient messages shown to the user.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Display, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    #[default]
    #[strum(to_string = "info")]
    Default,
    #[strum(to_string = "error")]
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    #[must_use]
    pub fn new(title: &str, message: &str, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            severity,
        }
    }

    #[must_use]
    pub fn rest_finished() -> Self {
        Self::new(
            "Rest period finished!",
            "Time to start your next set.",
            Severity::Default,
        )
    }

    #[must_use]
    pub fn workout_finished(file: &str) -> Self {
        Self::new(
            "Workout finished!",
            &format!("Your workout has been saved to {file}."),
            Severity::Default,
        )
    }

    #[must_use]
    pub fn export_failed(err: &str) -> Self {
        Self::new(
            "Export failed",
            &format!("The workout could not be saved: {err}"),
            Severity::Destructive,
        )
    }

    #[must_use]
    pub fn catalog_exercise_incomplete() -> Self {
        Self::new(
            "Error",
            "Please fill in both name and description.",
            Severity::Destructive,
        )
    }

    #[must_use]
    pub fn catalog_exercise_added(name: &str) -> Self {
        Self::new(
            "Exercise added",
            &format!("{name} has been added to the exercise library."),
            Severity::Default,
        )
    }

    #[must_use]
    pub fn catalog_unavailable(err: &str) -> Self {
        Self::new(
            "Error",
            &format!("The exercise library is unavailable: {err}"),
            Severity::Destructive,
        )
    }

    #[must_use]
    pub fn history_unavailable(err: &str) -> Self {
        Self::new(
            "Error",
            &format!("The workout history is unavailable: {err}"),
            Severity::Destructive,
        )
    }
}

impl<N: Notifier> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (*self).notify(notification);
    }
}
