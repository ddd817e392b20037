use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::model::{MembershipTable, Season, SeasonResult};

/// Competitive tier of a member, from `N` (newest) up to `A`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum League {
    N,
    C,
    B,
    A,
}

/// Tenure in years between the season a member joined and `current`.
///
/// Each season counts a quarter year; the result is negative when `begin` is
/// after `current`.
pub fn elapsed_seasons(current: Season, begin: Season) -> f64 {
    (f64::from(current.year) - f64::from(begin.year))
        + (f64::from(current.index()) - f64::from(begin.index())) / 4.0
}

/// Classify a member by tenure and highest rating ever reached.
///
/// A rating of 1200 or more is `A` regardless of tenure. Otherwise members with
/// less than one year of tenure stay in `N`.
pub fn classify_league(elapsed_seasons: f64, highest_rating: i32) -> League {
    if highest_rating >= 1200 {
        League::A
    } else if elapsed_seasons < 1.0 {
        League::N
    } else if elapsed_seasons >= 3.0 || highest_rating >= 800 {
        League::B
    } else {
        // elapsed >= 1 holds here
        League::C
    }
}

/// League of a season result when viewing `current`.
///
/// Users missing from `members` are treated as having joined in `current`.
pub fn league_of(row: &SeasonResult, members: &MembershipTable, current: Season) -> League {
    let begin = members.begin_of(&row.user, current);
    classify_league(elapsed_seasons(current, begin), row.final_highest)
}

/// League selection of the leaderboard.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeagueFilter {
    #[default]
    All,
    Only(League),
}

impl LeagueFilter {
    /// Whether a row of `league` is shown under this selection.
    pub fn matches(&self, league: League) -> bool {
        match self {
            LeagueFilter::All => true,
            LeagueFilter::Only(selected) => *selected == league,
        }
    }
}

impl FromStr for LeagueFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(LeagueFilter::All);
        }
        League::from_str(s).map(LeagueFilter::Only)
    }
}

impl std::fmt::Display for LeagueFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueFilter::All => write!(f, "All"),
            LeagueFilter::Only(league) => write!(f, "{league}"),
        }
    }
}
