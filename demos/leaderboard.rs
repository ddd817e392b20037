use std::env;

use gp_ranking::{
    rating_board, Config, GpClient, LeagueFilter, RatingSortKey, Season, SortKey, ViewParams,
};

/// Usage: `leaderboard [season] [league] [sort]`, e.g.
/// `leaderboard 2025spring B abc401`, or `leaderboard rating`.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let client = GpClient::new(Config::from_env().unwrap());
    let args: Vec<String> = env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("rating") {
        let today = chrono::Local::now().date_naive();
        let entries = client.get_rating_entries(today).await.unwrap();
        for row in rating_board(&entries, RatingSortKey::Current) {
            println!(
                "|{0:3}. | {1:20} | {2:5} | {3:5}",
                row.position, row.user, row.current_rating, row.highest
            );
        }
        return;
    }

    let seasons = client.get_seasons().await.unwrap();
    println!(
        "Seasons: {}",
        seasons.iter().map(Season::to_string).collect::<Vec<_>>().join(", ")
    );

    let season = args
        .first()
        .map(|s| Season::parse(s))
        .unwrap_or(client.config().default_season);
    let mut params = ViewParams::new(season);
    if let Some(league) = args.get(1) {
        params = params.with_league(league.parse::<LeagueFilter>().unwrap());
    }
    if let Some(sort) = args.get(2) {
        params = params.with_sort(sort.parse::<SortKey>().unwrap());
    }

    let board = client.get_leaderboard(&params).await.unwrap();
    println!("{} / league {}", board.season, params.league);
    for row in &board.rows {
        let cells = row
            .cells
            .iter()
            .map(|c| match c.score {
                0 => "  .".to_string(),
                score => format!("{score:3}"),
            })
            .collect::<String>();
        println!(
            "|{0:3}. | {1:20} | {2} | {3:5} | {4:4} | {5:4} | {6:4} |{7}",
            row.position,
            row.user,
            row.league,
            row.final_rating,
            row.total_gp,
            row.place_gp,
            row.update_gp,
            cells,
        );
    }
}
