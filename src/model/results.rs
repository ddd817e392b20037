use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use super::season::Season;

/// Pre-aggregated standing of one user in one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonResult {
    pub user: String,
    pub season: Season,
    pub final_rating: i32,
    pub update_highest: i32,
    pub place_gp: i32,
    pub update_gp: i32,
    pub total_gp: i32,
    pub final_highest: i32,
}

impl SeasonResult {
    pub fn field(&self, field: ResultField) -> i32 {
        match field {
            ResultField::FinalRating => self.final_rating,
            ResultField::TotalGp => self.total_gp,
            ResultField::FinalHighest => self.final_highest,
            ResultField::UpdateHighest => self.update_highest,
            ResultField::PlaceGp => self.place_gp,
            ResultField::UpdateGp => self.update_gp,
        }
    }
}

/// The numeric columns of a [`SeasonResult`] a leaderboard can be sorted by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum ResultField {
    FinalRating,
    TotalGp,
    FinalHighest,
    UpdateHighest,
    PlaceGp,
    UpdateGp,
}

/// One user's placement among members in a single contest.
///
/// `tuat_place` is `None` when the user was not ranked that round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestResult {
    pub user: String,
    pub abc: u32,
    #[serde(default)]
    pub tuat_place: Option<u32>,
}

/// The most recent contest row of a user, as read for the rating view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestContest {
    pub user: String,
    pub abc: u32,
    pub new_rating: i32,
    pub highest: i32,
}
