pub mod config;
pub mod distance;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod output;
pub mod setup;
pub mod utils;

pub use error::{GeneratorError, Result};
