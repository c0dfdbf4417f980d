mod file;
mod item;

pub use file::{load_catalog, CatalogEntry};
pub use item::{
    CatalogError, Item, LEGENDARY_NAME, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY,
};

/// Demonstration catalog covering every rule kind.
pub fn demo_catalog() -> Vec<Item> {
    [
        ("+5 Dexterity Vest", 10, 20),
        ("Elixir of the Mongoose", 5, 7),
        ("Aged Brie", 2, 0),
        (LEGENDARY_NAME, 0, 80),
        (LEGENDARY_NAME, -1, 80),
        ("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        ("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        ("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        ("Backstage passes to a TAFKAL80ETC concert", 1, 30),
        ("Conjured Mana Cake", 3, 6),
        ("Conjured Health Potion", 1, 10),
    ]
    .into_iter()
    .map(|(name, sell_in, quality)| {
        Item::new(name, sell_in, quality).expect("demo catalog entries are valid")
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_size() {
        assert_eq!(demo_catalog().len(), 11);
    }

    #[test]
    fn test_demo_catalog_legendary_entries() {
        let items = demo_catalog();
        let legendary: Vec<_> = items.iter().filter(|i| i.is_legendary()).collect();
        assert_eq!(legendary.len(), 2);
        assert!(legendary.iter().all(|i| i.quality() == LEGENDARY_QUALITY));
    }
}
