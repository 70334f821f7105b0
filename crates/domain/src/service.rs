use log::{debug, error};

use crate::{
    CatalogExercise, CatalogExerciseID, CatalogRepository, CatalogService, CreateError,
    Description, Name, ReadError, ValidationError, Workout, WorkoutHistoryRepository,
    WorkoutHistoryService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(_) | $error::Other(_) => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
                #[allow(unreachable_patterns)]
                _ => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CatalogRepository> CatalogService for Service<R> {
    async fn get_catalog(&self) -> Result<Vec<CatalogExercise>, ReadError> {
        log_on_error!(
            self.repository.read_catalog(),
            ReadError,
            "get",
            "catalog"
        )
    }

    async fn get_catalog_exercise(
        &self,
        id: CatalogExerciseID,
    ) -> Result<Option<CatalogExercise>, ReadError> {
        Ok(self
            .get_catalog()
            .await?
            .into_iter()
            .find(|e| e.id == id))
    }

    async fn create_catalog_exercise(
        &self,
        name: &str,
        description: &str,
    ) -> Result<CatalogExercise, CreateError> {
        let validated = Name::new(name)
            .map_err(ValidationError::from)
            .and_then(|name| {
                Description::new(description)
                    .map(|description| (name, description))
                    .map_err(ValidationError::from)
            });
        let (name, description) = match validated {
            Ok(validated) => validated,
            Err(err) => {
                debug!("failed to create catalog exercise: {err}");
                return Err(err.into());
            }
        };
        log_on_error!(
            self.repository.create_catalog_exercise(name, description),
            CreateError,
            "create",
            "catalog exercise"
        )
    }
}

impl<R: WorkoutHistoryRepository> WorkoutHistoryService for Service<R> {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(),
            ReadError,
            "get",
            "workouts"
        )
    }

    async fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository.create_workout(workout),
            CreateError,
            "create",
            "workout"
        )
    }
}
