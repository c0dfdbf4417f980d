mod builder;
mod types;

pub use builder::ReportBuilder;
pub use types::{DaySnapshot, ItemState, SimulationReport};
