use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::{Season, SeasonResult};
use crate::ranking::season_list;
use crate::store;

pub(crate) const SEASON_RESULT: &str = "season_result";

#[derive(Debug, Deserialize)]
struct SeasonColumn {
    season: String,
}

/// Distinct well-formed seasons, newest first. Rows with malformed tokens such
/// as `unknown` are skipped.
fn seasons_of(rows: Vec<SeasonColumn>) -> Vec<Season> {
    season_list(rows.into_iter().filter_map(|row| Season::try_parse(&row.season)))
}

/// Every season with at least one result, newest first.
#[instrument(skip(client, config))]
pub(crate) async fn get_seasons(
    client: &reqwest::Client,
    config: &StoreConfig,
) -> Result<Vec<Season>> {
    let rows: Vec<SeasonColumn> =
        store::get_rows(client, config, SEASON_RESULT, "select=season").await?;
    let seasons = seasons_of(rows);
    debug!(count = seasons.len(), "listed seasons");
    Ok(seasons)
}

#[instrument(skip(client, config))]
pub(crate) async fn get_season_results(
    client: &reqwest::Client,
    config: &StoreConfig,
    season: Season,
) -> Result<Vec<SeasonResult>> {
    let rows: Vec<SeasonResult> =
        store::get_rows(client, config, SEASON_RESULT, &format!("season=eq.{season}")).await?;
    debug!(count = rows.len(), %season, "fetched season results");
    Ok(rows)
}
