use super::AgingRule;
use crate::catalog::Item;

const BACKSTAGE_PASS_NAME: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Days-to-concert thresholds for the stepped quality gain
const MEDIUM_PROXIMITY_DAYS: i32 = 10;
const HIGH_PROXIMITY_DAYS: i32 = 5;

const BASE_QUALITY_GAIN: i32 = 1;
const MEDIUM_PROXIMITY_BONUS: i32 = 1;
const HIGH_PROXIMITY_BONUS: i32 = 2;

/// Rule for backstage passes: quality climbs as the concert approaches and
/// collapses to zero once it has passed.
pub struct BackstagePassRule;

impl BackstagePassRule {
    fn quality_gain(days_until_concert: i32) -> i32 {
        let mut gain = BASE_QUALITY_GAIN;

        if days_until_concert <= HIGH_PROXIMITY_DAYS {
            gain += HIGH_PROXIMITY_BONUS;
        } else if days_until_concert <= MEDIUM_PROXIMITY_DAYS {
            gain += MEDIUM_PROXIMITY_BONUS;
        }

        gain
    }
}

impl AgingRule for BackstagePassRule {
    fn id(&self) -> &'static str {
        "backstage_pass"
    }

    fn name(&self) -> &'static str {
        "Backstage Pass"
    }

    fn handles(&self, item: &Item) -> bool {
        item.name() == BACKSTAGE_PASS_NAME
    }

    fn apply(&self, item: &mut Item) {
        item.decrement_sell_in();

        if item.is_expired() {
            item.set_quality(0);
        } else {
            let gain = Self::quality_gain(item.sell_in());
            item.set_quality(item.quality() + gain);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(sell_in: i32, quality: i32) -> Item {
        Item::new(BACKSTAGE_PASS_NAME, sell_in, quality).unwrap()
    }

    #[test]
    fn test_backstage_handles() {
        let rule = BackstagePassRule;
        assert!(rule.handles(&pass(15, 20)));
        assert!(!rule.handles(&Item::new("Backstage passes", 15, 20).unwrap()));
    }

    #[test]
    fn test_backstage_far_from_concert() {
        let rule = BackstagePassRule;
        let mut item = pass(15, 20);

        rule.apply(&mut item);

        assert_eq!(item.sell_in(), 14);
        assert_eq!(item.quality(), 21);
    }

    #[test]
    fn test_backstage_within_ten_days() {
        let rule = BackstagePassRule;
        let mut item = pass(11, 20);

        // post-decrement sell_in is 10, so the +2 band applies
        rule.apply(&mut item);

        assert_eq!(item.sell_in(), 10);
        assert_eq!(item.quality(), 22);
    }

    #[test]
    fn test_backstage_within_five_days() {
        let rule = BackstagePassRule;
        let mut item = pass(6, 20);

        rule.apply(&mut item);

        assert_eq!(item.sell_in(), 5);
        assert_eq!(item.quality(), 23);
    }

    #[test]
    fn test_backstage_clamps_at_fifty_medium_band() {
        let rule = BackstagePassRule;
        let mut item = pass(10, 49);

        rule.apply(&mut item);

        assert_eq!(item.sell_in(), 9);
        assert_eq!(item.quality(), 50);
    }

    #[test]
    fn test_backstage_clamps_at_fifty_high_band() {
        let rule = BackstagePassRule;
        let mut item = pass(5, 49);

        rule.apply(&mut item);

        assert_eq!(item.sell_in(), 4);
        assert_eq!(item.quality(), 50);
    }

    #[test]
    fn test_backstage_last_day_then_worthless() {
        let rule = BackstagePassRule;
        let mut item = pass(1, 30);

        rule.apply(&mut item);
        assert_eq!(item.sell_in(), 0);
        assert_eq!(item.quality(), 33);

        rule.apply(&mut item);
        assert_eq!(item.sell_in(), -1);
        assert_eq!(item.quality(), 0);
    }

    #[test]
    fn test_backstage_stays_worthless_after_concert() {
        let rule = BackstagePassRule;
        let mut item = pass(-2, 0);

        rule.apply(&mut item);

        assert_eq!(item.quality(), 0);
    }
}
