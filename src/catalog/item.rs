use thiserror::Error;

/// Quality bounds for ordinary catalog items
pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 50;

/// The legendary item: fixed quality, shelf-life never moves
pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";
pub const LEGENDARY_QUALITY: i32 = 80;

/// Errors raised by catalog construction and lookup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item name must not be empty")]
    EmptyName,

    #[error("quality {0} is negative")]
    NegativeQuality(i32),

    #[error("quality {quality} exceeds maximum of {max}")]
    QualityAboveMax { quality: i32, max: i32 },

    #[error("item index {index} out of range for catalog of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A single catalog entry: name, days of shelf-life left, and quality.
///
/// Fields are private; aging rules mutate items only through
/// [`Item::decrement_sell_in`] and [`Item::set_quality`], which enforce the
/// legendary exemption and the quality bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl Item {
    /// Validate and construct a catalog item.
    ///
    /// The legendary item is special-cased: its stored quality is forced to
    /// 80 no matter what the caller supplied. A negative quality is rejected
    /// before that override, so `(LEGENDARY_NAME, 0, -1)` still fails.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Result<Self, CatalogError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if quality < MIN_QUALITY {
            return Err(CatalogError::NegativeQuality(quality));
        }

        let quality = if name == LEGENDARY_NAME {
            LEGENDARY_QUALITY
        } else if quality > MAX_QUALITY {
            return Err(CatalogError::QualityAboveMax {
                quality,
                max: MAX_QUALITY,
            });
        } else {
            quality
        };

        Ok(Self {
            name,
            sell_in,
            quality,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// True once the sell-by date has passed.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    pub fn is_legendary(&self) -> bool {
        self.name == LEGENDARY_NAME
    }

    /// Set quality, saturating into `[MIN_QUALITY, MAX_QUALITY]`.
    /// No-op for the legendary item.
    pub fn set_quality(&mut self, quality: i32) {
        if self.is_legendary() {
            return;
        }
        self.quality = quality.clamp(MIN_QUALITY, MAX_QUALITY);
    }

    /// Take one day off the remaining shelf-life.
    /// No-op for the legendary item.
    pub fn decrement_sell_in(&mut self) {
        if !self.is_legendary() {
            self.sell_in -= 1;
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
