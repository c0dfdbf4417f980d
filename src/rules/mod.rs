mod aged_brie;
mod backstage;
mod conjured;
mod engine;
mod legendary;
mod regular;

pub use aged_brie::AgedBrieRule;
pub use backstage::BackstagePassRule;
pub use conjured::ConjuredRule;
pub use engine::{AgingRule, RuleRegistry};
pub use legendary::LegendaryRule;
pub use regular::RegularRule;
