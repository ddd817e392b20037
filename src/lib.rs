//! Seasonal GP leaderboard for AtCoder Beginner Contest results.
//!
//! Result rows are read from a PostgREST-style store and reshaped into
//! leaderboard tables: placement scores per contest, league tiers by tenure and
//! peak rating, and sortable, filterable rows.

pub use client::GpClient;
pub use config::{Config, ReferenceSource, StoreConfig};
pub use error::{GpError, Result};
pub use generation::{Generation, ViewState};
pub use league::{classify_league, elapsed_seasons, league_of, League, LeagueFilter};
pub use model::*;
pub use ranking::{filter_by_league, initial_order, season_list, sort_rows, ContestIndex, SortKey};
pub use rating::{rating_color, RatingTier};
pub use scoring::{placement_score, update_gp, Medal};
pub use view::{derive_leaderboard, rating_board, RatingSortKey, ViewParams};

pub mod client;
pub mod config;
pub mod error;
pub mod generation;
pub mod league;
pub mod links;
pub mod model;
pub mod ranking;
pub mod rating;
pub mod scoring;
pub(crate) mod store;
pub mod view;
