//! Scenario data model and plain-text loader

pub mod loader;
pub mod record;

pub use loader::{load_scenarios, parse_scenarios};
pub use record::Scenario;
