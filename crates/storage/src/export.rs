use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, SecondsFormat, Utc};
use liftbook_app::WorkoutExporter;
use liftbook_domain as domain;
use log::debug;
use uuid::Uuid;

/// Exported workout as written to the JSON file.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub date: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub sets: Vec<Set>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Set {
    pub id: Uuid,
    pub reps: String,
    pub weight: String,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
            date: value.date.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = ExportError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::Exercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            date: DateTime::parse_from_rfc3339(&value.date)?.with_timezone(&Utc),
        })
    }
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            sets: value.sets.iter().map(Set::from).collect(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = ExportError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            sets: value
                .sets
                .into_iter()
                .map(domain::Set::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

impl From<&domain::Set> for Set {
    fn from(value: &domain::Set) -> Self {
        Self {
            id: *value.id,
            reps: value.reps.to_string(),
            weight: value.weight.to_string(),
        }
    }
}

impl TryFrom<Set> for domain::Set {
    type Error = ExportError;

    fn try_from(value: Set) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            reps: domain::Reps::new(&value.reps)?,
            weight: domain::Weight::new(&value.weight)?,
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidValue(#[from] domain::ValueError),
    #[error(transparent)]
    InvalidDate(#[from] chrono::ParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Pretty printed JSON representation of a workout.
pub fn encode(workout: &domain::Workout) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&Workout::from(workout))?)
}

pub fn decode(json: &str) -> Result<domain::Workout, ExportError> {
    domain::Workout::try_from(serde_json::from_str::<Workout>(json)?)
}

/// Writes each workout into its own file in a directory.
pub struct JsonFileExporter {
    directory: PathBuf,
}

impl JsonFileExporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn write(&self, workout: &domain::Workout) -> Result<PathBuf, ExportError> {
        let json = encode(workout)?;
        fs::create_dir_all(&self.directory)?;
        let path = unused_path(&self.directory, &workout.file_name());
        fs::write(&path, json)?;
        debug!("wrote workout {} to {}", workout.id, path.display());
        Ok(path)
    }
}

impl WorkoutExporter for JsonFileExporter {
    async fn export_workout(&self, workout: &domain::Workout) -> Result<PathBuf, String> {
        self.write(workout).map_err(|err| err.to_string())
    }
}

/// Append a counter to the file stem while the file already exists.
fn unused_path(directory: &Path, file_name: &str) -> PathBuf {
    let path = directory.join(file_name);
    if !path.exists() {
        return path;
    }
    let (stem, extension) = file_name.rsplit_once('.').unwrap_or((file_name, ""));
    (2..)
        .map(|n| directory.join(format!("{stem}_{n}.{extension}")))
        .find(|p| !p.exists())
        .unwrap_or(path)
}
