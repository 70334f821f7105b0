#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod export;
pub mod memory;
pub mod settings;
