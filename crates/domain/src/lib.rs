#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub use catalog::*;
pub use error::*;
pub use name::*;
pub use reorder::*;
pub use service::*;
pub use statistics::*;
pub use timer::*;
pub use workout::*;

mod catalog;
mod error;
mod name;
mod reorder;
mod service;
mod statistics;
mod timer;
mod workout;
