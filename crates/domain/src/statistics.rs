use chrono::NaiveDate;

use crate::Workout;

/// Total volume load of each workout, in the order of the history.
#[must_use]
pub fn volume_per_workout(workouts: &[Workout]) -> Vec<(NaiveDate, f32)> {
    workouts.iter().map(|w| (w.day(), w.volume_load())).collect()
}

#[must_use]
pub fn total_volume_load(workouts: &[Workout]) -> f32 {
    workouts.iter().map(Workout::volume_load).sum()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use crate::{Name, OngoingWorkout};

    use super::*;

    fn workout(day: u32, sets: &[(&str, &str)]) -> Workout {
        let mut ongoing = OngoingWorkout::new(Name::new("My Workout").unwrap());
        let id = ongoing.add_exercise("Squat").unwrap();
        for (reps, weight) in sets {
            ongoing.add_set(id, reps, weight).unwrap();
        }
        ongoing.finish(Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap())
    }

    #[test]
    fn test_volume_per_workout() {
        let workouts = vec![
            workout(2, &[("10", "100"), ("8", "100")]),
            workout(1, &[]),
            workout(4, &[("5", "x"), ("3", "60.5")]),
        ];

        let volume = volume_per_workout(&workouts);

        assert_eq!(
            volume.iter().map(|(d, _)| *d).collect::<Vec<_>>(),
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            ]
        );
        assert_approx_eq!(volume[0].1, 1800.0);
        assert_approx_eq!(volume[1].1, 0.0);
        assert_approx_eq!(volume[2].1, 181.5);
        assert_approx_eq!(total_volume_load(&workouts), 1981.5);
    }

    #[test]
    fn test_volume_per_workout_empty_history() {
        assert!(volume_per_workout(&[]).is_empty());
    }
}
