use serde::Serialize;

use super::results::{ContestResult, SeasonResult};
use super::season::Season;
use crate::league::League;
use crate::scoring::Medal;

/// Everything read from the store for one season.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonSnapshot {
    pub season: Season,
    pub season_results: Vec<SeasonResult>,
    pub contest_results: Vec<ContestResult>,
}

/// A ranked, filtered season table ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub season: Season,
    /// Contest numbers of the per-contest columns, ascending.
    pub columns: Vec<u32>,
    pub rows: Vec<BoardRow>,
}

/// One member row of a [`Leaderboard`].
#[derive(Debug, Clone, Serialize)]
pub struct BoardRow {
    /// 1-based position in the displayed order.
    pub position: usize,
    pub user: String,
    pub profile_url: String,
    pub league: League,
    pub final_rating: i32,
    pub final_rating_color: &'static str,
    pub total_gp: i32,
    pub final_highest: i32,
    pub final_highest_color: &'static str,
    pub update_highest: i32,
    pub place_gp: i32,
    pub update_gp: i32,
    pub cells: Vec<ContestCell>,
}

/// Rank GP earned by one user in one contest column.
#[derive(Debug, Clone, Serialize)]
pub struct ContestCell {
    pub abc: u32,
    /// 0 when the user was not ranked; rendered as an empty cell.
    pub score: u32,
    pub medal: Option<Medal>,
    pub standings_url: String,
}

/// Current and highest rating of an active member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingEntry {
    pub user: String,
    pub current_rating: i32,
    pub highest: i32,
}

/// One row of the rating table.
#[derive(Debug, Clone, Serialize)]
pub struct RatingRow {
    pub position: usize,
    pub user: String,
    pub profile_url: String,
    pub current_rating: i32,
    pub current_color: &'static str,
    pub highest: i32,
    pub highest_color: &'static str,
}
