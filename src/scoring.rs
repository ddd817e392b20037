use serde::Serialize;

/// Rank GP awarded for a member placement in one contest.
///
/// `None` and `Some(0)` both mean the user was not ranked and score 0.
pub fn placement_score(tuat_place: Option<u32>) -> u32 {
    match tuat_place {
        None | Some(0) => 0,
        Some(rank @ 1..=6) => 20 - (rank - 1) * 2,
        Some(rank @ 7..=10) => 9 - (rank - 7),
        Some(11..=12) => 5,
        Some(13..=14) => 4,
        Some(15..=16) => 3,
        Some(17..=18) => 2,
        Some(_) => 1,
    }
}

/// Update GP for a season: the rise of the highest rating, divided by four and
/// rounded down.
pub fn update_gp(highest_delta: u32) -> u32 {
    highest_delta / 4
}

/// Highlight applied to a per-contest score cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Gold from 20, silver from 16, bronze from 10.
    pub fn for_score(score: u32) -> Option<Medal> {
        match score {
            20.. => Some(Medal::Gold),
            16..=19 => Some(Medal::Silver),
            10..=15 => Some(Medal::Bronze),
            _ => None,
        }
    }
}
