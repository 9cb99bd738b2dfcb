use std::fmt;
use std::str::FromStr;

use crate::db::service::DbService;
use crate::types::error::AppError;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, TransactionTrait};
use tracing::info;

/// Tables the reset utility can clear. Rows the database cascades from a
/// parent are cleared and counted along with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetTable {
    Attendance,
    Matches,
    Memberships,
    Players,
    Teams,
    LeagueStats,
    LeaguePlayers,
    LeagueMatches,
    LeagueTeams,
}

impl ResetTable {
    /// Dependency order: children before parents.
    pub const ALL: [ResetTable; 9] = [
        ResetTable::Attendance,
        ResetTable::Matches,
        ResetTable::Memberships,
        ResetTable::Players,
        ResetTable::Teams,
        ResetTable::LeagueStats,
        ResetTable::LeaguePlayers,
        ResetTable::LeagueMatches,
        ResetTable::LeagueTeams,
    ];

    pub const LEAGUE: [ResetTable; 4] = [
        ResetTable::LeagueStats,
        ResetTable::LeaguePlayers,
        ResetTable::LeagueMatches,
        ResetTable::LeagueTeams,
    ];

    /// Child tables whose rows go with this table's rows through an
    /// `ON DELETE CASCADE` foreign key.
    pub fn cascades(&self) -> &'static [ResetTable] {
        match self {
            Self::Matches => &[ResetTable::Attendance],
            Self::Players => &[ResetTable::Attendance, ResetTable::Memberships],
            Self::LeaguePlayers => &[ResetTable::LeagueStats],
            _ => &[],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attendance => "attendance",
            Self::Matches => "matches",
            Self::Memberships => "memberships",
            Self::Players => "players",
            Self::Teams => "teams",
            Self::LeagueStats => "league-stats",
            Self::LeaguePlayers => "league-players",
            Self::LeagueMatches => "league-matches",
            Self::LeagueTeams => "league-teams",
        }
    }
}

impl fmt::Display for ResetTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResetTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResetTable::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = ResetTable::ALL.iter().map(|t| t.as_str()).collect();
                format!("unknown table {s:?} (known: {})", known.join(", "))
            })
    }
}

/// Unconditional delete-all, returns rows removed.
pub(crate) async fn clear_table<C: ConnectionTrait>(conn: &C, table: ResetTable) -> Result<u64, DbErr> {
    let res = match table {
        ResetTable::Attendance => entity::attendance::Entity::delete_many().exec(conn).await?,
        ResetTable::Matches => entity::fixture::Entity::delete_many().exec(conn).await?,
        ResetTable::Memberships => entity::player_team::Entity::delete_many().exec(conn).await?,
        ResetTable::Players => entity::player::Entity::delete_many().exec(conn).await?,
        ResetTable::Teams => entity::team::Entity::delete_many().exec(conn).await?,
        ResetTable::LeagueStats => entity::league_player_team_stat::Entity::delete_many().exec(conn).await?,
        ResetTable::LeaguePlayers => entity::league_player::Entity::delete_many().exec(conn).await?,
        ResetTable::LeagueMatches => entity::league_match::Entity::delete_many().exec(conn).await?,
        ResetTable::LeagueTeams => entity::league_team::Entity::delete_many().exec(conn).await?,
    };
    Ok(res.rows_affected)
}

impl DbService {
    /// Clears `table` together with the child rows the database would cascade.
    /// Every table that lost rows is reported, children first.
    pub async fn reset_table(&self, table: ResetTable) -> Result<Vec<(ResetTable, u64)>, AppError> {
        let txn = self.db.begin().await?;
        let mut removed = Vec::with_capacity(table.cascades().len() + 1);
        for &child in table.cascades() {
            let n = clear_table(&txn, child).await?;
            if n > 0 {
                removed.push((child, n));
            }
        }
        removed.push((table, clear_table(&txn, table).await?));
        txn.commit().await?;

        for (t, n) in &removed {
            info!(table = t.as_str(), removed = n, "table reset");
        }
        Ok(removed)
    }

    pub async fn reset_all(&self) -> Result<Vec<(ResetTable, u64)>, AppError> {
        let mut out = Vec::with_capacity(ResetTable::ALL.len());
        for table in ResetTable::ALL {
            out.extend(self.reset_table(table).await?);
        }
        Ok(out)
    }
}
