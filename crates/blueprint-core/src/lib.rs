pub mod agent;
pub mod config;
pub mod error;
pub mod generate;
pub mod io;
pub mod paths;
pub mod render;
pub mod template;
pub mod types;

pub use error::{BlueprintError, Result};
