use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::Result;
use crate::model::*;
use crate::store;
use crate::view::{derive_leaderboard, ViewParams};

/// The main entry point for loading leaderboard data.
///
/// `GpClient` wraps a [`reqwest::Client`] together with the store and
/// reference-file configuration, and exposes one method per read the
/// leaderboard and rating views need.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> gp_ranking::Result<()> {
/// use gp_ranking::{Config, GpClient, ViewParams};
///
/// let client = GpClient::new(Config::from_env()?);
/// let params = ViewParams::new(client.config().default_season);
/// let board = client.get_leaderboard(&params).await?;
/// println!("{} members ranked", board.rows.len());
/// # Ok(())
/// # }
/// ```
pub struct GpClient {
    http: reqwest::Client,
    config: Config,
}

impl GpClient {
    /// Create a new client with default HTTP settings.
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: Config) -> Self {
        Self {
            http: client,
            config,
        }
    }

    /// The configuration this client reads with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// List every season that has results, newest first.
    #[instrument(skip(self))]
    pub async fn get_seasons(&self) -> Result<Vec<Season>> {
        store::seasons::get_seasons(&self.http, &self.config.store).await
    }

    /// Fetch the season and contest results of one season.
    ///
    /// Both collections are requested concurrently.
    #[instrument(skip(self))]
    pub async fn get_season_snapshot(&self, season: Season) -> Result<SeasonSnapshot> {
        let (season_results, contest_results) = tokio::try_join!(
            store::seasons::get_season_results(&self.http, &self.config.store, season),
            store::contests::get_contest_results(&self.http, &self.config.store, season),
        )?;
        Ok(SeasonSnapshot {
            season,
            season_results,
            contest_results,
        })
    }

    /// Load the list of all known users.
    #[instrument(skip(self))]
    pub async fn get_users(&self) -> Result<Vec<String>> {
        store::reference::get_users(&self.http, &self.config.users).await
    }

    /// Load the membership periods of all users.
    #[instrument(skip(self))]
    pub async fn get_membership_table(&self) -> Result<MembershipTable> {
        store::reference::get_membership_table(&self.http, &self.config.periods).await
    }

    /// Fetch everything `params` needs and derive the leaderboard.
    #[instrument(skip(self))]
    pub async fn get_leaderboard(&self, params: &ViewParams) -> Result<Leaderboard> {
        let (snapshot, members) = tokio::try_join!(
            self.get_season_snapshot(params.season),
            self.get_membership_table(),
        )?;
        Ok(derive_leaderboard(&snapshot, &members, params))
    }

    /// Current and highest rating of every member still active on `today`.
    ///
    /// Members whose period ended before the month of `today` are skipped, as
    /// are users without any contest row.
    #[instrument(skip(self))]
    pub async fn get_rating_entries(&self, today: NaiveDate) -> Result<Vec<RatingEntry>> {
        let (users, members) = tokio::try_join!(self.get_users(), self.get_membership_table())?;
        let now = YearMonth::of(today);

        let mut entries = Vec::with_capacity(users.len());
        for user in users {
            if !members.is_active(&user, now) {
                debug!(user = %user, "skipping retired member");
                continue;
            }
            let latest =
                store::contests::get_latest_contest(&self.http, &self.config.store, &user).await?;
            match latest {
                Some(latest) => entries.push(RatingEntry {
                    user,
                    current_rating: latest.new_rating,
                    highest: latest.highest,
                }),
                None => debug!(user = %user, "no contest results"),
            }
        }
        Ok(entries)
    }
}
