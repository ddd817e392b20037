use tracing::{debug, instrument};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::{ContestResult, LatestContest, Season};
use crate::store;

pub(crate) const CONTEST_RESULT: &str = "contest_result";

#[instrument(skip(client, config))]
pub(crate) async fn get_contest_results(
    client: &reqwest::Client,
    config: &StoreConfig,
    season: Season,
) -> Result<Vec<ContestResult>> {
    let rows: Vec<ContestResult> =
        store::get_rows(client, config, CONTEST_RESULT, &format!("season=eq.{season}")).await?;
    debug!(count = rows.len(), %season, "fetched contest results");
    Ok(rows)
}

/// The contest row of `user` with the highest ABC number, if any.
#[instrument(skip(client, config))]
pub(crate) async fn get_latest_contest(
    client: &reqwest::Client,
    config: &StoreConfig,
    user: &str,
) -> Result<Option<LatestContest>> {
    let rows: Vec<LatestContest> = store::get_rows(
        client,
        config,
        CONTEST_RESULT,
        &latest_contest_query(user),
    )
    .await?;
    Ok(rows.into_iter().next())
}

fn latest_contest_query(user: &str) -> String {
    format!("user=eq.{user}&order=abc.desc&limit=1")
}
