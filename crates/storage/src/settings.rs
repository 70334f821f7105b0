use std::{fs, io::ErrorKind, path::PathBuf};

use liftbook_app::{Settings, SettingsRepository};
use log::debug;

/// Settings stored as JSON in a file.
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsRepository for SettingsFile {
    async fn read_settings(&self) -> Result<Settings, String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).map_err(|err| err.to_string()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no settings at {}, using defaults", self.path.display());
                Ok(Settings::default())
            }
            Err(err) => Err(err.to_string()),
        }
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| err.to_string())?;
        }
        let content = serde_json::to_string_pretty(&settings).map_err(|err| err.to_string())?;
        fs::write(&self.path, content).map_err(|err| err.to_string())
    }
}
