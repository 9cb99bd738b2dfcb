//! Maintenance tasks that run outside the request path.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use futsal_attendance::config::EnvConfig;
use futsal_attendance::db::reset::ResetTable;
use futsal_attendance::db::service::DbService;
use futsal_attendance::types::league::LeagueSnapshot;

#[derive(Debug, Parser)]
#[command(name = "futsal-admin", about = "Reset tables or import league data")]
struct Cli {
    /// Database URL; falls back to `DATABASE_URL`.
    #[arg(long)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Delete every row of the given tables, in the order given. Attendance,
    /// memberships and league stats go with their parent table. `all` clears
    /// everything child-first.
    Reset {
        #[arg(required = true)]
        tables: Vec<String>,
    },
    /// Replace the league mirror with a scraper snapshot (JSON).
    ImportLeague {
        file: PathBuf,
    },
}

fn parse_tables(raw: &[String]) -> Result<Option<Vec<ResetTable>>, String> {
    if raw.iter().any(|t| t == "all") {
        return Ok(None);
    }
    raw.iter().map(|t| t.parse()).collect::<Result<Vec<_>, _>>().map(Some)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let db_url = match cli.database_url {
        Some(url) => url,
        None => EnvConfig::from_env()?.db_url,
    };
    let db = DbService::new(&db_url).await?;

    match cli.command {
        Command::Reset { tables } => {
            let results = match parse_tables(&tables)? {
                None => db.reset_all().await?,
                Some(tables) => {
                    let mut out = Vec::with_capacity(tables.len());
                    for table in tables {
                        out.extend(db.reset_table(table).await?);
                    }
                    out
                }
            };
            for (table, removed) in results {
                println!("{table}: {removed} rows removed");
            }
        }
        Command::ImportLeague { file } => {
            let raw = fs::read_to_string(&file)?;
            let snapshot: LeagueSnapshot = serde_json::from_str(&raw)?;
            let summary = db.replace_league_data(snapshot).await?;
            println!(
                "imported {} teams, {} matches, {} players, {} stats",
                summary.teams, summary.matches, summary.players, summary.stats
            );
        }
    }
    Ok(())
}
