use serde::{Deserialize, Serialize};

use crate::catalog::Item;

/// Full record of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationReport {
    pub report_version: String,
    pub report_id: String,
    pub generated_at: String,
    pub days: u32,
    pub snapshots: Vec<DaySnapshot>,
}

impl SimulationReport {
    pub fn new(days: u32) -> Self {
        Self {
            report_version: "1.0.0".to_string(),
            report_id: uuid::Uuid::new_v4().to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            days,
            snapshots: Vec::new(),
        }
    }
}

/// Catalog state at the end of one simulated day (day 0 = initial state)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<ItemState>,
}

impl DaySnapshot {
    pub fn capture(day: u32, items: &[Item]) -> Self {
        Self {
            day,
            items: items.iter().map(ItemState::from).collect(),
        }
    }
}

/// Observable state of a single item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemState {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl From<&Item> for ItemState {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name().to_string(),
            sell_in: item.sell_in(),
            quality: item.quality(),
        }
    }
}
