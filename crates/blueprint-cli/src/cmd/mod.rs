pub mod agents;
pub mod config;
pub mod generate;
pub mod render;
