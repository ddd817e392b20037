use serde::Serialize;
use strum_macros::EnumIter;

/// Text color used for ratings that fall into no tier.
pub const UNRATED_COLOR: &str = "#000000";

/// Display tier of a rating, highest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RatingTier {
    Yellow,
    Blue,
    Cyan,
    Green,
    Brown,
    Gray,
}

impl RatingTier {
    /// Inclusive lower bound of the tier.
    pub fn threshold(self) -> i32 {
        match self {
            RatingTier::Yellow => 2000,
            RatingTier::Blue => 1600,
            RatingTier::Cyan => 1200,
            RatingTier::Green => 800,
            RatingTier::Brown => 400,
            RatingTier::Gray => 1,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RatingTier::Yellow => "#c0c000",
            RatingTier::Blue => "#0000ff",
            RatingTier::Cyan => "#00c0c0",
            RatingTier::Green => "#008000",
            RatingTier::Brown => "#804000",
            RatingTier::Gray => "#c0c0c0",
        }
    }

    /// The highest tier whose threshold `rating` reaches, if any.
    pub fn of(rating: i32) -> Option<RatingTier> {
        use strum::IntoEnumIterator;

        RatingTier::iter().find(|tier| rating >= tier.threshold())
    }
}

/// Text color of `rating`, [`UNRATED_COLOR`] below every tier.
pub fn rating_color(rating: i32) -> &'static str {
    RatingTier::of(rating).map_or(UNRATED_COLOR, RatingTier::color)
}
