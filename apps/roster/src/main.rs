use std::process::ExitCode;
use std::sync::Arc;

use teams_roster::domain::errors::RosterResult;
use teams_roster::domain::player::Team;
use teams_roster::domain::repositories::{GroupRepository, PlayerRepository};
use teams_roster::infrastructure::config::RosterConfig;
use teams_roster::infrastructure::repositories::kv_repositories;
use teams_roster::infrastructure::store::JsonFileStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = RosterConfig::from_env();
    tracing::info!(path = %config.store_path.display(), "Opening roster store");

    match summarize(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read roster store");
            ExitCode::FAILURE
        }
    }
}

/// Logs every stored group with its per-team player counts
async fn summarize(config: &RosterConfig) -> RosterResult<()> {
    let store = Arc::new(JsonFileStore::new(&config.store_path));
    let (groups, players) = kv_repositories(store);

    let names = groups.list_groups().await?;
    tracing::info!("{} group(s) stored", names.len());

    for group in &names {
        let mut counts = Vec::with_capacity(Team::ALL.len());
        for team in Team::ALL {
            let count = players.list_players_by_group_and_team(group, team).await?.len();
            counts.push(format!("{}: {}", team, count));
        }
        tracing::info!(group = %group, "{}", counts.join(", "));
    }

    Ok(())
}
