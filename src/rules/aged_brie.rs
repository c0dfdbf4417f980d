use super::AgingRule;
use crate::catalog::Item;

const AGED_BRIE_NAME: &str = "Aged Brie";
const QUALITY_GAIN: i32 = 1;
const EXPIRED_QUALITY_GAIN: i32 = 2;

/// Rule for aged brie, which gains quality as it ages, twice as fast once
/// past its sell-by date.
pub struct AgedBrieRule;

impl AgingRule for AgedBrieRule {
    fn id(&self) -> &'static str {
        "aged_brie"
    }

    fn name(&self) -> &'static str {
        "Aged Brie"
    }

    fn handles(&self, item: &Item) -> bool {
        item.name() == AGED_BRIE_NAME
    }

    fn apply(&self, item: &mut Item) {
        item.decrement_sell_in();

        let gain = if item.is_expired() {
            EXPIRED_QUALITY_GAIN
        } else {
            QUALITY_GAIN
        };
        item.set_quality(item.quality() + gain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brie(sell_in: i32, quality: i32) -> Item {
        Item::new(AGED_BRIE_NAME, sell_in, quality).unwrap()
    }

    #[test]
    fn test_brie_handles() {
        let rule = AgedBrieRule;
        assert!(rule.handles(&brie(2, 0)));
        assert!(!rule.handles(&Item::new("Brie", 2, 0).unwrap()));
    }

    #[test]
    fn test_brie_gains_quality() {
        let rule = AgedBrieRule;
        let mut item = brie(2, 0);

        rule.apply(&mut item);

        assert_eq!(item.sell_in(), 1);
        assert_eq!(item.quality(), 1);
    }

    #[test]
    fn test_brie_gains_double_after_expiry() {
        let rule = AgedBrieRule;
        let mut item = brie(0, 10);

        // decrement puts sell_in at -1, so the expired gain applies
        rule.apply(&mut item);

        assert_eq!(item.sell_in(), -1);
        assert_eq!(item.quality(), 12);
    }

    #[test]
    fn test_brie_quality_caps_at_fifty() {
        let rule = AgedBrieRule;
        let mut item = brie(5, 50);

        rule.apply(&mut item);

        assert_eq!(item.quality(), 50);
    }

    #[test]
    fn test_brie_expired_gain_caps_at_fifty() {
        let rule = AgedBrieRule;
        let mut item = brie(-3, 49);

        rule.apply(&mut item);

        assert_eq!(item.quality(), 50);
    }
}
