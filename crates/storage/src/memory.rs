use std::sync::RwLock;

use liftbook_domain::{
    self as domain, CatalogExercise, CatalogRepository, CreateError, Description, Name,
    ReadError, StorageError, Workout, WorkoutHistoryRepository,
};
use log::{debug, warn};

/// Storage that lives as long as the process.
///
/// Construct once at startup and share by reference.
#[derive(Default)]
pub struct Memory {
    catalog: RwLock<Vec<CatalogExercise>>,
    workouts: RwLock<Vec<Workout>>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Memory with the entries of [`domain::default_catalog`].
    #[must_use]
    pub fn with_default_catalog() -> Self {
        let catalog = domain::default_catalog()
            .into_iter()
            .zip(1_u32..)
            .filter_map(|((name, description), id)| {
                match (Name::new(name), Description::new(description)) {
                    (Ok(name), Ok(description)) => Some(CatalogExercise {
                        id: id.into(),
                        name,
                        description,
                    }),
                    _ => {
                        warn!("skipping invalid catalog entry {name:?}");
                        None
                    }
                }
            })
            .collect();
        Self {
            catalog: RwLock::new(catalog),
            workouts: RwLock::default(),
        }
    }
}

impl CatalogRepository for Memory {
    async fn read_catalog(&self) -> Result<Vec<CatalogExercise>, ReadError> {
        let catalog = self.catalog.read().map_err(|_| StorageError::Poisoned)?;
        Ok(catalog.clone())
    }

    async fn create_catalog_exercise(
        &self,
        name: Name,
        description: Description,
    ) -> Result<CatalogExercise, CreateError> {
        let mut catalog = self.catalog.write().map_err(|_| StorageError::Poisoned)?;
        let id = catalog.iter().map(|e| *e.id).max().unwrap_or_default() + 1;
        let exercise = CatalogExercise {
            id: id.into(),
            name,
            description,
        };
        debug!("adding {} to catalog", exercise.name);
        catalog.push(exercise.clone());
        Ok(exercise)
    }
}

impl WorkoutHistoryRepository for Memory {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        let workouts = self.workouts.read().map_err(|_| StorageError::Poisoned)?;
        Ok(workouts.clone())
    }

    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        let mut workouts = self.workouts.write().map_err(|_| StorageError::Poisoned)?;
        workouts.push(workout.clone());
        Ok(workout)
    }
}
