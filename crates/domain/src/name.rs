use derive_more::{AsRef, Display};

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Name usable as a file name in any directory.
    ///
    /// Runs of whitespace, path separators, characters reserved on common
    /// file systems and leading dots are replaced by underscores.
    #[must_use]
    pub fn to_file_stem(&self) -> String {
        let mut leading = true;
        self.0
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .chars()
            .map(|c| {
                let reserved = matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
                    || c.is_control()
                    || (leading && c == '.');
                leading &= c == '.';
                if reserved { '_' } else { c }
            })
            .collect()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(description: &str) -> Result<Self, DescriptionError> {
        let trimmed_description = description.trim();

        if trimmed_description.is_empty() {
            return Err(DescriptionError::Empty);
        }

        Ok(Description(trimmed_description.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DescriptionError {
    #[error("Description must not be empty")]
    Empty,
}
