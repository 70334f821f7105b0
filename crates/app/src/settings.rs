use std::path::PathBuf;

use liftbook_domain::{Name, RestPeriod};
use log::warn;

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub rest_period: u32,
    pub workout_name: String,
    pub export_dir: Option<PathBuf>,
}

impl Settings {
    #[must_use]
    pub fn rest_period(&self) -> RestPeriod {
        RestPeriod::new(self.rest_period).unwrap_or_else(|err| {
            warn!("invalid rest period in settings: {err}");
            RestPeriod::default()
        })
    }

    #[must_use]
    pub fn workout_name(&self) -> Name {
        Name::new(&self.workout_name).unwrap_or_else(|err| {
            warn!("invalid workout name in settings: {err}");
            default_workout_name()
        })
    }

    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rest_period: *RestPeriod::default(),
            workout_name: String::from(DEFAULT_WORKOUT_NAME),
            export_dir: None,
        }
    }
}

pub const DEFAULT_WORKOUT_NAME: &str = "My Workout";

fn default_workout_name() -> Name {
    Name::new(DEFAULT_WORKOUT_NAME).expect("default workout name is valid")
}
