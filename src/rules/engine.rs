use crate::catalog::Item;

/// Trait for implementing item aging rules
pub trait AgingRule: Send + Sync {
    /// Unique identifier for the rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Whether this rule governs the given item
    fn handles(&self, item: &Item) -> bool;

    /// Advance the item by one day under this rule's policy
    fn apply(&self, item: &mut Item);
}

/// Registry for managing and dispatching aging rules.
///
/// Holds a priority-ordered list of rules plus a default that fires when
/// nothing else matches. Dispatch is first-match-wins: exactly one rule
/// applies per item per update.
pub struct RuleRegistry {
    rules: Vec<Box<dyn AgingRule>>,
    default_rule: Box<dyn AgingRule>,
}

impl RuleRegistry {
    /// Create a registry with no specialized rules, only a default.
    pub fn new(default_rule: Box<dyn AgingRule>) -> Self {
        Self {
            rules: Vec::new(),
            default_rule,
        }
    }

    /// Registry preloaded with the built-in rules, most specific first.
    pub fn with_default_rules() -> Self {
        use super::{AgedBrieRule, BackstagePassRule, ConjuredRule, LegendaryRule, RegularRule};

        let mut registry = Self::new(Box::new(RegularRule));
        // register() front-inserts, so push in reverse priority order
        registry.register(Box::new(ConjuredRule));
        registry.register(Box::new(BackstagePassRule));
        registry.register(Box::new(AgedBrieRule));
        registry.register(Box::new(LegendaryRule));
        registry
    }

    /// Register a rule at top priority, ahead of everything already present.
    pub fn register(&mut self, rule: Box<dyn AgingRule>) {
        self.rules.insert(0, rule);
    }

    /// Apply the first matching rule to the item, falling back to the
    /// default rule. Exactly one rule fires.
    pub fn update(&self, item: &mut Item) {
        self.find_rule(item).apply(item);
    }

    fn find_rule(&self, item: &Item) -> &dyn AgingRule {
        self.rules
            .iter()
            .find(|rule| rule.handles(item))
            .map(|rule| rule.as_ref())
            .unwrap_or(self.default_rule.as_ref())
    }

    /// Identifier of the rule that would fire for the item
    pub fn rule_id_for(&self, item: &Item) -> &'static str {
        self.find_rule(item).id()
    }

    /// Number of rules, counting the default
    pub fn len(&self) -> usize {
        self.rules.len() + 1
    }

    /// A registry always carries at least the default rule
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Registered rule IDs in evaluation order, default last
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .map(|r| r.id())
            .chain(std::iter::once(self.default_rule.id()))
            .collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
