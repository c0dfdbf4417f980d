use super::AgingRule;
use crate::catalog::Item;

const QUALITY_LOSS: i32 = 1;
const EXPIRED_QUALITY_LOSS: i32 = 2;

/// Default rule: ordinary items lose quality daily, twice as fast once past
/// their sell-by date.
pub struct RegularRule;

fn is_special(name: &str) -> bool {
    name == "Aged Brie"
        || name == "Backstage passes to a TAFKAL80ETC concert"
        || name == crate::catalog::LEGENDARY_NAME
        || name.starts_with("Conjured")
}

impl AgingRule for RegularRule {
    fn id(&self) -> &'static str {
        "regular"
    }

    fn name(&self) -> &'static str {
        "Regular Item"
    }

    fn handles(&self, item: &Item) -> bool {
        !is_special(item.name())
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
