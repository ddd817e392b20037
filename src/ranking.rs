use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::league::{league_of, LeagueFilter};
use crate::model::{ContestResult, MembershipTable, ResultField, Season, SeasonResult};

/// Column a leaderboard is re-sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Descending by a numeric field.
    Field(ResultField),
    /// Ascending by member placement in an ABC contest, unranked users last.
    Contest(u32),
}

impl FromStr for SortKey {
    type Err = strum::ParseError;

    /// Accepts a field name such as `total_gp`, or a contest number as `412`
    /// or `abc412`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .strip_prefix("abc")
            .or_else(|| s.strip_prefix("ABC"))
            .unwrap_or(s);
        if let Ok(abc) = number.parse() {
            return Ok(SortKey::Contest(abc));
        }
        ResultField::from_str(s).map(SortKey::Field)
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Field(field) => write!(f, "{field}"),
            SortKey::Contest(abc) => write!(f, "abc{abc}"),
        }
    }
}

/// Member placements of a season, keyed by user and contest number.
#[derive(Debug, Clone, Default)]
pub struct ContestIndex {
    placements: HashMap<String, HashMap<u32, Option<u32>>>,
}

impl ContestIndex {
    /// Build the index. When a user has several rows for one contest the first
    /// one wins.
    pub fn new(results: &[ContestResult]) -> Self {
        let mut placements: HashMap<String, HashMap<u32, Option<u32>>> = HashMap::new();
        for result in results {
            placements
                .entry(result.user.clone())
                .or_default()
                .entry(result.abc)
                .or_insert(result.tuat_place);
        }
        Self { placements }
    }

    /// Placement of `user` in contest `abc`. A stored place of 0 counts as
    /// unranked.
    pub fn placement(&self, user: &str, abc: u32) -> Option<u32> {
        self.placements
            .get(user)
            .and_then(|contests| contests.get(&abc))
            .copied()
            .flatten()
            .filter(|place| *place > 0)
    }

    /// Distinct contest numbers, ascending.
    pub fn columns(&self) -> Vec<u32> {
        self.placements
            .values()
            .flat_map(|contests| contests.keys())
            .copied()
            .unique()
            .sorted()
            .collect_vec()
    }
}

/// Order of a freshly loaded season: total GP descending, then rank GP
/// descending.
pub fn initial_order(mut rows: Vec<SeasonResult>) -> Vec<SeasonResult> {
    rows.sort_by_key(|row| (Reverse(row.total_gp), Reverse(row.place_gp)));
    rows
}

/// Stable re-sort of `rows` by `key`. Rows with equal keys keep their order.
pub fn sort_rows(
    mut rows: Vec<SeasonResult>,
    key: SortKey,
    contests: &ContestIndex,
) -> Vec<SeasonResult> {
    match key {
        SortKey::Field(field) => rows.sort_by_key(|row| Reverse(row.field(field))),
        SortKey::Contest(abc) => rows.sort_by_key(|row| {
            let place = contests.placement(&row.user, abc);
            (place.is_none(), place)
        }),
    }
    rows
}

/// Keep the rows whose league matches `filter`, preserving order.
pub fn filter_by_league(
    rows: Vec<SeasonResult>,
    filter: LeagueFilter,
    members: &MembershipTable,
    current: Season,
) -> Vec<SeasonResult> {
    if filter == LeagueFilter::All {
        return rows;
    }
    rows.into_iter()
        .filter(|row| filter.matches(league_of(row, members, current)))
        .collect()
}

/// Distinct seasons, newest first.
pub fn season_list(seasons: impl IntoIterator<Item = Season>) -> Vec<Season> {
    seasons
        .into_iter()
        .unique()
        .sorted_by_key(|season| Reverse(*season))
        .collect_vec()
}
