use crate::{ExerciseID, OngoingWorkout, WorkoutError};

/// The result of a drag gesture on the exercise list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub source: ExerciseID,
    /// `None` if the item was dropped outside of a valid target.
    pub destination: Option<Destination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Item(ExerciseID),
    Index(usize),
}

impl OngoingWorkout {
    pub fn apply_drag(&mut self, drag: DragEnd) -> Result<(), WorkoutError> {
        match drag.destination {
            None => Ok(()),
            Some(Destination::Item(target)) => self.reorder_exercises(drag.source, target),
            Some(Destination::Index(index)) => {
                let from = self.index_of(drag.source)?;
                let to = index.min(self.exercises().len() - 1);
                self.move_exercise(from, to);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::Name;

    use super::*;

    fn workout() -> (OngoingWorkout, Vec<ExerciseID>) {
        let mut workout = OngoingWorkout::new(Name::new("My Workout").unwrap());
        let ids = ["A", "B", "C", "D"]
            .iter()
            .map(|n| workout.add_exercise(n).unwrap())
            .collect();
        (workout, ids)
    }

    fn names(workout: &OngoingWorkout) -> Vec<String> {
        workout
            .exercises()
            .iter()
            .map(|e| e.name.to_string())
            .collect()
    }

    #[test]
    fn test_apply_drag_without_destination() {
        let (mut workout, ids) = workout();
        let before = workout.clone();

        workout
            .apply_drag(DragEnd {
                source: ids[0],
                destination: None,
            })
            .unwrap();

        assert_eq!(workout, before);
    }

    #[test]
    fn test_apply_drag_onto_item() {
        let (mut workout, ids) = workout();

        workout
            .apply_drag(DragEnd {
                source: ids[3],
                destination: Some(Destination::Item(ids[1])),
            })
            .unwrap();

        assert_eq!(names(&workout), vec!["A", "D", "B", "C"]);
    }

    #[rstest]
    #[case(0, 0, vec!["A", "B", "C", "D"])]
    #[case(0, 3, vec!["B", "C", "D", "A"])]
    #[case(0, 99, vec!["B", "C", "D", "A"])]
    #[case(2, 0, vec!["C", "A", "B", "D"])]
    fn test_apply_drag_onto_index(
        #[case] source: usize,
        #[case] index: usize,
        #[case] expected: Vec<&str>,
    ) {
        let (mut workout, ids) = workout();

        workout
            .apply_drag(DragEnd {
                source: ids[source],
                destination: Some(Destination::Index(index)),
            })
            .unwrap();

        assert_eq!(names(&workout), expected);
    }

    #[test]
    fn test_apply_drag_unknown_source() {
        let (mut workout, _) = workout();
        let before = workout.clone();

        assert_eq!(
            workout.apply_drag(DragEnd {
                source: ExerciseID::nil(),
                destination: Some(Destination::Index(0)),
            }),
            Err(WorkoutError::ExerciseNotFound(ExerciseID::nil()))
        );
        assert_eq!(workout, before);
    }

    #[test]
    fn test_apply_drag_never_drops_or_duplicates() {
        let (mut workout, ids) = workout();

        for (source, target) in [(0, 3), (3, 1), (2, 2), (1, 0)] {
            workout
                .apply_drag(DragEnd {
                    source: ids[source],
                    destination: Some(Destination::Item(ids[target])),
                })
                .unwrap();
        }

        let mut sorted = names(&workout);
        sorted.sort();
        assert_eq!(sorted, vec!["A", "B", "C", "D"]);
    }
}
