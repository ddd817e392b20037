use std::cmp::Reverse;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::league::{league_of, LeagueFilter};
use crate::links::{profile_url, standings_url};
use crate::model::{
    BoardRow, ContestCell, Leaderboard, MembershipTable, RatingEntry, RatingRow, Season,
    SeasonSnapshot,
};
use crate::ranking::{filter_by_league, initial_order, sort_rows, ContestIndex, SortKey};
use crate::rating::rating_color;
use crate::scoring::{placement_score, Medal};

/// Selection state of the season leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewParams {
    pub season: Season,
    pub league: LeagueFilter,
    /// `None` keeps the initial order.
    pub sort: Option<SortKey>,
}

impl ViewParams {
    pub fn new(season: Season) -> Self {
        Self {
            season,
            league: LeagueFilter::All,
            sort: None,
        }
    }

    pub fn with_league(self, league: LeagueFilter) -> Self {
        Self { league, ..self }
    }

    pub fn with_sort(self, sort: SortKey) -> Self {
        Self {
            sort: Some(sort),
            ..self
        }
    }
}

/// Build the displayed leaderboard.
///
/// Rows are put in initial order, filtered by league, then re-sorted when
/// `params.sort` is set. Leagues are computed relative to `params.season`.
pub fn derive_leaderboard(
    snapshot: &SeasonSnapshot,
    members: &MembershipTable,
    params: &ViewParams,
) -> Leaderboard {
    let contests = ContestIndex::new(&snapshot.contest_results);
    let columns = contests.columns();

    let rows = initial_order(snapshot.season_results.clone());
    let rows = filter_by_league(rows, params.league, members, params.season);
    let rows = match params.sort {
        Some(key) => sort_rows(rows, key, &contests),
        None => rows,
    };

    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = columns
                .iter()
                .map(|&abc| {
                    let score = placement_score(contests.placement(&row.user, abc));
                    ContestCell {
                        abc,
                        score,
                        medal: Medal::for_score(score),
                        standings_url: standings_url(abc, &row.user),
                    }
                })
                .collect_vec();

            BoardRow {
                position: i + 1,
                profile_url: profile_url(&row.user),
                league: league_of(&row, members, params.season),
                final_rating_color: rating_color(row.final_rating),
                final_highest_color: rating_color(row.final_highest),
                final_rating: row.final_rating,
                total_gp: row.total_gp,
                final_highest: row.final_highest,
                update_highest: row.update_highest,
                place_gp: row.place_gp,
                update_gp: row.update_gp,
                cells,
                user: row.user,
            }
        })
        .collect_vec();

    Leaderboard {
        season: params.season,
        columns,
        rows,
    }
}

/// Column the rating table is sorted by, descending.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum RatingSortKey {
    #[default]
    Current,
    Highest,
}

/// Build the rating table. Entries are sorted descending by `key`; ties keep
/// the order of `entries`.
pub fn rating_board(entries: &[RatingEntry], key: RatingSortKey) -> Vec<RatingRow> {
    entries
        .iter()
        .sorted_by_key(|entry| match key {
            RatingSortKey::Current => Reverse(entry.current_rating),
            RatingSortKey::Highest => Reverse(entry.highest),
        })
        .enumerate()
        .map(|(i, entry)| RatingRow {
            position: i + 1,
            user: entry.user.clone(),
            profile_url: profile_url(&entry.user),
            current_rating: entry.current_rating,
            current_color: rating_color(entry.current_rating),
            highest: entry.highest,
            highest_color: rating_color(entry.highest),
        })
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::League;
    use crate::model::{ContestResult, ResultField, SeasonName, SeasonResult};

    const SPRING: Season = Season::new(2025, SeasonName::Spring);

    fn season_result(
        user: &str,
        total_gp: i32,
        place_gp: i32,
        final_highest: i32,
    ) -> SeasonResult {
        SeasonResult {
            user: user.to_string(),
            season: SPRING,
            final_rating: final_highest - 10,
            update_highest: 8,
            place_gp,
            update_gp: total_gp - place_gp,
            total_gp,
            final_highest,
        }
    }

    fn snapshot() -> SeasonSnapshot {
        SeasonSnapshot {
            season: SPRING,
            season_results: vec![
                season_result("bob", 50, 18, 900),
                season_result("carol", 12, 10, 1250),
                season_result("alice", 50, 20, 700),
            ],
            contest_results: vec![
                ContestResult {
                    user: "alice".to_string(),
                    abc: 401,
                    tuat_place: Some(1),
                },
                ContestResult {
                    user: "bob".to_string(),
                    abc: 401,
                    tuat_place: Some(2),
                },
                ContestResult {
                    user: "carol".to_string(),
                    abc: 400,
                    tuat_place: Some(5),
                },
                ContestResult {
                    user: "bob".to_string(),
                    abc: 400,
                    tuat_place: None,
                },
            ],
        }
    }

    fn users(board: &Leaderboard) -> Vec<&str> {
        board.rows.iter().map(|r| r.user.as_str()).collect()
    }

    #[test]
    fn test_default_order_breaks_total_gp_tie() {
        let board = derive_leaderboard(
            &snapshot(),
            &MembershipTable::default(),
            &ViewParams::new(SPRING),
        );
        assert_eq!(users(&board), ["alice", "bob", "carol"]);
        assert_eq!(board.columns, [400, 401]);
        assert_eq!(
            board.rows.iter().map(|r| r.position).collect_vec(),
            [1, 2, 3]
        );
    }

    #[test]
    fn test_cells_follow_columns() {
        let board = derive_leaderboard(
            &snapshot(),
            &MembershipTable::default(),
            &ViewParams::new(SPRING),
        );
        let alice = &board.rows[0];
        assert_eq!(alice.cells.len(), 2);
        assert_eq!(alice.cells[0].abc, 400);
        assert_eq!(alice.cells[0].score, 0);
        assert_eq!(alice.cells[0].medal, None);
        assert_eq!(alice.cells[1].score, 20);
        assert_eq!(alice.cells[1].medal, Some(Medal::Gold));
        assert_eq!(
            alice.cells[1].standings_url,
            "https://atcoder.jp/contests/abc401/standings?watching=alice"
        );

        let carol = &board.rows[2];
        assert_eq!(carol.cells[0].score, 12);
        assert_eq!(carol.cells[0].medal, Some(Medal::Bronze));
        assert_eq!(carol.final_highest_color, "#00c0c0");
    }

    #[test]
    fn test_filter_then_sort() {
        let params = ViewParams::new(SPRING).with_league(LeagueFilter::Only(League::N));
        let board = derive_leaderboard(&snapshot(), &MembershipTable::default(), &params);
        assert_eq!(users(&board), ["alice", "bob"]);
        assert!(board.rows.iter().all(|r| r.league == League::N));

        let params = params.with_sort(SortKey::Field(ResultField::FinalHighest));
        let board = derive_leaderboard(&snapshot(), &MembershipTable::default(), &params);
        assert_eq!(users(&board), ["bob", "alice"]);
    }

    #[test]
    fn test_sort_by_contest() {
        let params = ViewParams::new(SPRING).with_sort(SortKey::Contest(400));
        let board = derive_leaderboard(&snapshot(), &MembershipTable::default(), &params);
        assert_eq!(users(&board), ["carol", "alice", "bob"]);
    }

    #[test]
    fn test_rating_board() {
        let entries = vec![
            RatingEntry {
                user: "a".to_string(),
                current_rating: 1200,
                highest: 1300,
            },
            RatingEntry {
                user: "b".to_string(),
                current_rating: 1500,
                highest: 1500,
            },
            RatingEntry {
                user: "c".to_string(),
                current_rating: 900,
                highest: 1300,
            },
        ];

        let by_current = rating_board(&entries, RatingSortKey::Current);
        assert_eq!(
            by_current.iter().map(|r| r.user.as_str()).collect_vec(),
            ["b", "a", "c"]
        );
        assert_eq!(by_current[0].current_color, "#0000ff");

        let by_highest = rating_board(&entries, RatingSortKey::Highest);
        assert_eq!(
            by_highest.iter().map(|r| r.user.as_str()).collect_vec(),
            ["b", "a", "c"]
        );
        assert_eq!(by_highest[2].position, 3);
    }
}
