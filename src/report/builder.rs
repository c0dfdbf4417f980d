use super::types::{DaySnapshot, SimulationReport};
use crate::inventory::Inventory;

/// Drives a simulation and assembles the report.
///
/// Day 0 captures the initial catalog; each subsequent snapshot is the state
/// after that day's tick.
pub struct ReportBuilder {
    inventory: Inventory,
    snapshots: Vec<DaySnapshot>,
    day: u32,
}

impl ReportBuilder {
    pub fn new(inventory: Inventory) -> Self {
        let initial = DaySnapshot::capture(0, inventory.items());
        Self {
            inventory,
            snapshots: vec![initial],
            day: 0,
        }
    }

    /// Advance one day and record the resulting state.
    pub fn advance_day(&mut self) -> &DaySnapshot {
        self.inventory.tick();
        self.day += 1;
        self.snapshots
            .push(DaySnapshot::capture(self.day, self.inventory.items()));
        self.snapshots.last().expect("snapshot just pushed")
    }

    /// Run the remaining days and build the final report.
    pub fn run(mut self, days: u32) -> SimulationReport {
        while self.day < days {
            self.advance_day();
        }
        self.build()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn snapshots(&self) -> &[DaySnapshot] {
        &self.snapshots
    }

    /// Build the report from whatever has been recorded so far.
    pub fn build(self) -> SimulationReport {
        let mut report = SimulationReport::new(self.day);
        report.snapshots = self.snapshots;
        report
    }
}
