use crate::catalog::{CatalogError, Item};
use crate::rules::{AgingRule, RuleRegistry};

/// Holds the item catalog and drives the once-per-day update pass.
///
/// Each tick visits every item in collection order and lets the registry
/// apply exactly one rule to it. Items are independent; updates are strictly
/// sequential.
pub struct Inventory {
    items: Vec<Item>,
    registry: RuleRegistry,
}

impl Inventory {
    /// Create an inventory with the built-in rule set.
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_registry(items, RuleRegistry::with_default_rules())
    }

    /// Create an inventory with an injected registry.
    pub fn with_registry(items: Vec<Item>, registry: RuleRegistry) -> Self {
        Self { items, registry }
    }

    /// Advance the whole catalog by one simulated day.
    pub fn tick(&mut self) {
        for item in &mut self.items {
            self.registry.update(item);
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at the given position.
    pub fn item(&self, index: usize) -> Result<&Item, CatalogError> {
        self.items.get(index).ok_or(CatalogError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Register an extra rule at top priority.
    pub fn register_rule(&mut self, rule: Box<dyn AgingRule>) {
        self.registry.register(rule);
    }
}
