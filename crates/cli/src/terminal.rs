use liftbook_app::{Notification, Notifier, Severity};

/// Prints notifications between the command output.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Default => println!("{}", format_notification(&notification)),
            Severity::Destructive => eprintln!("{}", format_notification(&notification)),
        }
    }
}

fn format_notification(notification: &Notification) -> String {
    format!(
        "[{}] {}\n  {}",
        notification.severity, notification.title, notification.message
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_notification() {
        assert_eq!(
            format_notification(&Notification::rest_finished()),
            "[info] Rest period finished!\n  Time to start your next set."
        );
        assert_eq!(
            format_notification(&Notification::catalog_exercise_incomplete()),
            "[error] Error\n  Please fill in both name and description."
        );
    }
}
