use super::AgingRule;
use crate::catalog::{Item, LEGENDARY_NAME};

/// Rule for the legendary item, which never ages or degrades.
pub struct LegendaryRule;

impl AgingRule for LegendaryRule {
    fn id(&self) -> &'static str {
        "legendary"
    }

    fn name(&self) -> &'static str {
        "Legendary Item"
    }

    fn handles(&self, item: &Item) -> bool {
        item.name() == LEGENDARY_NAME
    }

    fn apply(&self, _item: &mut Item) {
        // nothing changes, not even sell_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legendary_handles() {
        let rule = LegendaryRule;
        let sulfuras = Item::new(LEGENDARY_NAME, 0, 80).unwrap();
        let vest = Item::new("+5 Dexterity Vest", 10, 20).unwrap();

        assert!(rule.handles(&sulfuras));
        assert!(!rule.handles(&vest));
    }

    #[test]
    fn test_legendary_unchanged() {
        let rule = LegendaryRule;
        let mut item = Item::new(LEGENDARY_NAME, 0, 80).unwrap();

        for _ in 0..100 {
            rule.apply(&mut item);
        }

        assert_eq!(item.sell_in(), 0);
        assert_eq!(item.quality(), 80);
    }

    #[test]
    fn test_legendary_negative_sell_in_unchanged() {
        let rule = LegendaryRule;
        let mut item = Item::new(LEGENDARY_NAME, -1, 80).unwrap();

        rule.apply(&mut item);

        assert_eq!(item.sell_in(), -1);
        assert_eq!(item.quality(), 80);
    }
}
