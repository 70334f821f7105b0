use derive_more::{Deref, Display};

use crate::{CreateError, Description, Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait CatalogRepository {
    async fn read_catalog(&self) -> Result<Vec<CatalogExercise>, ReadError>;
    async fn create_catalog_exercise(
        &self,
        name: Name,
        description: Description,
    ) -> Result<CatalogExercise, CreateError>;
}

impl<R: CatalogRepository> CatalogRepository for &R {
    async fn read_catalog(&self) -> Result<Vec<CatalogExercise>, ReadError> {
        (*self).read_catalog().await
    }

    async fn create_catalog_exercise(
        &self,
        name: Name,
        description: Description,
    ) -> Result<CatalogExercise, CreateError> {
        (*self).create_catalog_exercise(name, description).await
    }
}

#[allow(async_fn_in_trait)]
pub trait CatalogService {
    async fn get_catalog(&self) -> Result<Vec<CatalogExercise>, ReadError>;
    async fn get_catalog_exercise(
        &self,
        id: CatalogExerciseID,
    ) -> Result<Option<CatalogExercise>, ReadError>;
    async fn create_catalog_exercise(
        &self,
        name: &str,
        description: &str,
    ) -> Result<CatalogExercise, CreateError>;
}

/// An entry of the exercise library that workout exercises can be picked from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogExercise {
    pub id: CatalogExerciseID,
    pub name: Name,
    pub description: Description,
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CatalogExerciseID(u32);

impl From<u32> for CatalogExerciseID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Entries every new catalog starts with.
#[must_use]
pub fn default_catalog() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Squat", "A compound exercise that targets the legs and core."),
        (
            "Bench Press",
            "A compound exercise that targets the chest, shoulders, and triceps.",
        ),
        (
            "Deadlift",
            "A compound exercise that targets the back, legs, and core.",
        ),
    ]
}
