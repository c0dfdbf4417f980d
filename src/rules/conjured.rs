use super::AgingRule;
use crate::catalog::Item;

const CONJURED_PREFIX: &str = "Conjured";
const QUALITY_LOSS: i32 = 2;
const EXPIRED_QUALITY_LOSS: i32 = 4;

/// Rule for conjured items, which degrade twice as fast as regular ones.
pub struct ConjuredRule;

impl AgingRule for ConjuredRule {
    fn id(&self) -> &'static str {
        "conjured"
    }

    fn name(&self) -> &'static str {
        "Conjured Item"
    }

    fn handles(&self, item: &Item) -> bool {
        item.name().starts_with(CONJURED_PREFIX)
    }

    fn apply(&self, item: &mut Item) {
        item.decrement_sell_in();

        let loss = if item.is_expired() {
            EXPIRED_QUALITY_LOSS
        } else {
            QUALITY_LOSS
        };
        item.set_quality(item.quality() - loss);
    }
}
