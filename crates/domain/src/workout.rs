use chrono::{DateTime, NaiveDate, Utc};
use derive_more::{AsRef, Deref, Display};
use uuid::Uuid;

use crate::{CreateError, Name, NameError, ReadError};

#[allow(async_fn_in_trait)]
pub trait WorkoutHistoryRepository {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
}

impl<R: WorkoutHistoryRepository> WorkoutHistoryRepository for &R {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        (*self).read_workouts().await
    }

    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        (*self).create_workout(workout).await
    }
}

#[allow(async_fn_in_trait)]
pub trait WorkoutHistoryService {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
}

/// A finished workout. Only created when the ongoing workout is finished.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub exercises: Vec<Exercise>,
    pub date: DateTime<Utc>,
}

impl Workout {
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}.json",
            self.name.to_file_stem(),
            self.day().format("%Y-%m-%d")
        )
    }

    #[must_use]
    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    /// Sum of reps times weight over all sets with parsable values.
    #[must_use]
    pub fn volume_load(&self) -> f32 {
        self.exercises.iter().map(Exercise::volume_load).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub sets: Vec<Set>,
}

impl Exercise {
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            id: ExerciseID::random(),
            name,
            sets: vec![],
        }
    }

    #[must_use]
    pub fn set(&self, id: SetID) -> Option<&Set> {
        self.sets.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn volume_load(&self) -> f32 {
        self.sets.iter().filter_map(Set::volume_load).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    pub id: SetID,
    pub reps: Reps,
    pub weight: Weight,
}

impl Set {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn volume_load(&self) -> Option<f32> {
        Some(self.reps.value()? as f32 * self.weight.value()?)
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetID(Uuid);

impl SetID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for SetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Repetition count as entered by the user.
#[derive(AsRef, Display, Debug, Clone, PartialEq, Eq)]
pub struct Reps(String);

impl Reps {
    /// Kept as entered. Only blank input is rejected.
    pub fn new(reps: &str) -> Result<Self, ValueError> {
        if reps.trim().is_empty() {
            return Err(ValueError::Empty);
        }
        Ok(Self(reps.to_string()))
    }

    #[must_use]
    pub fn value(&self) -> Option<u32> {
        self.0.trim().parse().ok()
    }
}

/// Weight in kg as entered by the user.
#[derive(AsRef, Display, Debug, Clone, PartialEq, Eq)]
pub struct Weight(String);

impl Weight {
    /// Kept as entered. Only blank input is rejected.
    pub fn new(weight: &str) -> Result<Self, ValueError> {
        if weight.trim().is_empty() {
            return Err(ValueError::Empty);
        }
        Ok(Self(weight.to_string()))
    }

    #[must_use]
    pub fn value(&self) -> Option<f32> {
        self.0.trim().parse().ok().filter(|v: &f32| v.is_finite())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValueError {
    #[error("Value must not be empty")]
    Empty,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutError {
    #[error(transparent)]
    InvalidName(#[from] NameError),
    #[error("Reps must not be empty")]
    EmptyReps,
    #[error("Weight must not be empty")]
    EmptyWeight,
    #[error("exercise {0} not found")]
    ExerciseNotFound(ExerciseID),
    #[error("set {0} not found")]
    SetNotFound(SetID),
}

impl WorkoutError {
    #[must_use]
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            WorkoutError::ExerciseNotFound(_) | WorkoutError::SetNotFound(_)
        )
    }
}

/// The workout currently being edited.
///
/// All operations either succeed or leave the workout unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct OngoingWorkout {
    default_name: Name,
    name: Name,
    exercises: Vec<Exercise>,
}

impl OngoingWorkout {
    #[must_use]
    pub fn new(default_name: Name) -> Self {
        Self {
            name: default_name.clone(),
            default_name,
            exercises: vec![],
        }
    }

    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn exercise(&self, id: ExerciseID) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn rename(&mut self, name: &str) -> Result<(), WorkoutError> {
        self.name = Name::new(name)?;
        Ok(())
    }

    pub fn add_exercise(&mut self, name: &str) -> Result<ExerciseID, WorkoutError> {
        let exercise = Exercise::new(Name::new(name)?);
        let id = exercise.id;
        self.exercises.push(exercise);
        Ok(id)
    }

    pub fn delete_exercise(&mut self, id: ExerciseID) -> Result<Exercise, WorkoutError> {
        let index = self.index_of(id)?;
        Ok(self.exercises.remove(index))
    }

    pub fn add_set(
        &mut self,
        exercise_id: ExerciseID,
        reps: &str,
        weight: &str,
    ) -> Result<SetID, WorkoutError> {
        let reps = Reps::new(reps).map_err(|_| WorkoutError::EmptyReps)?;
        let weight = Weight::new(weight).map_err(|_| WorkoutError::EmptyWeight)?;
        let exercise = self
            .exercises
            .iter_mut()
            .find(|e| e.id == exercise_id)
            .ok_or(WorkoutError::ExerciseNotFound(exercise_id))?;
        let id = SetID::random();
        exercise.sets.push(Set { id, reps, weight });
        Ok(id)
    }

    pub fn delete_set(
        &mut self,
        exercise_id: ExerciseID,
        set_id: SetID,
    ) -> Result<Set, WorkoutError> {
        let exercise = self
            .exercises
            .iter_mut()
            .find(|e| e.id == exercise_id)
            .ok_or(WorkoutError::ExerciseNotFound(exercise_id))?;
        let index = exercise
            .sets
            .iter()
            .position(|s| s.id == set_id)
            .ok_or(WorkoutError::SetNotFound(set_id))?;
        Ok(exercise.sets.remove(index))
    }

    /// Move the source exercise to the position currently held by the target exercise.
    pub fn reorder_exercises(
        &mut self,
        source: ExerciseID,
        target: ExerciseID,
    ) -> Result<(), WorkoutError> {
        if source == target {
            return Ok(());
        }
        let from = self.index_of(source)?;
        let to = self.index_of(target)?;
        self.move_exercise(from, to);
        Ok(())
    }

    pub(crate) fn index_of(&self, id: ExerciseID) -> Result<usize, WorkoutError> {
        self.exercises
            .iter()
            .position(|e| e.id == id)
            .ok_or(WorkoutError::ExerciseNotFound(id))
    }

    pub(crate) fn move_exercise(&mut self, from: usize, to: usize) {
        if from == to || from >= self.exercises.len() {
            return;
        }
        let exercise = self.exercises.remove(from);
        self.exercises.insert(to.min(self.exercises.len()), exercise);
    }

    #[must_use]
    pub fn snapshot(&self, date: DateTime<Utc>) -> Workout {
        Workout {
            id: WorkoutID::random(),
            name: self.name.clone(),
            exercises: self.exercises.clone(),
            date,
        }
    }

    /// Materialize the workout and reset the editable state.
    pub fn finish(&mut self, date: DateTime<Utc>) -> Workout {
        let workout = self.snapshot(date);
        self.reset();
        workout
    }

    pub fn reset(&mut self) {
        self.exercises.clear();
        self.name = self.default_name.clone();
    }
}
