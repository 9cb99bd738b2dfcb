use std::collections::HashMap;

use crate::db::reset::{clear_table, ResetTable};
use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::league::{
    encode_form, ImportSummary, LeagueMatchView, LeaguePlayerRow, LeagueSnapshot, LeagueTeamDetail,
    LeagueTeamView,
};
use crate::utils::time::parse_iso;
use chrono::Utc;
use entity::league_match::{self, ActiveModel as LeagueMatchActive, Entity as LeagueMatch};
use entity::league_player::{self, ActiveModel as LeaguePlayerActive, Entity as LeaguePlayer, Model as LeaguePlayerModel};
use entity::league_player_team_stat::{self, ActiveModel as LeagueStatActive, Entity as LeagueStat, Model as LeagueStatModel};
use entity::league_team::{self, ActiveModel as LeagueTeamActive, Entity as LeagueTeam, Model as LeagueTeamModel};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait};
use tracing::info;

/// Rank ascending, teams without a rank last.
pub fn sort_by_rank(teams: &mut [LeagueTeamModel]) {
    teams.sort_by_key(|t| (t.rank.is_none(), t.rank, t.id));
}

/// Builds the scorers list from all players and all stat rows (both in id
/// order). See [`LeaguePlayerRow`] for the two shapes.
pub fn league_player_rows(
    players: &[LeaguePlayerModel],
    stats: Vec<LeagueStatModel>,
    team_id: Option<i32>,
) -> Vec<LeaguePlayerRow> {
    let mut by_player: HashMap<i32, Vec<LeagueStatModel>> = HashMap::new();
    for stat in stats {
        by_player.entry(stat.player_id).or_default().push(stat);
    }

    let mut rows: Vec<LeaguePlayerRow> = match team_id {
        Some(team) => players
            .iter()
            .filter_map(|p| {
                let stats = by_player.get(&p.id)?;
                let stat = stats.iter().find(|s| s.team_id == team)?;
                let team_ids = stats.iter().map(|s| s.team_id).collect();
                Some(LeaguePlayerRow::for_team(p, stat, team_ids))
            })
            .collect(),
        None => players
            .iter()
            .map(|p| {
                let stats = by_player.get(&p.id).map(Vec::as_slice).unwrap_or(&[]);
                LeaguePlayerRow::aggregated(p, stats)
            })
            .collect(),
    };

    rows.sort_by(|a, b| b.goals.cmp(&a.goals));
    rows
}

impl DbService {
    pub async fn list_league_teams(&self) -> Result<Vec<LeagueTeamView>, AppError> {
        let mut teams = LeagueTeam::find().all(&self.db).await?;
        sort_by_rank(&mut teams);
        Ok(teams.into_iter().map(LeagueTeamView::from).collect())
    }

    pub async fn list_league_matches(&self, team_id: Option<i32>) -> Result<Vec<LeagueMatchView>, AppError> {
        let mut query = LeagueMatch::find();
        if let Some(team) = team_id {
            query = query.filter(league_match::Column::TeamId.eq(team));
        }
        let matches = query
            .order_by_asc(league_match::Column::Date)
            .order_by_asc(league_match::Column::Id)
            .all(&self.db)
            .await?;
        Ok(matches.into_iter().map(LeagueMatchView::from).collect())
    }

    pub async fn list_league_players(&self, team_id: Option<i32>) -> Result<Vec<LeaguePlayerRow>, AppError> {
        let players = LeaguePlayer::find()
            .order_by_asc(league_player::Column::Id)
            .all(&self.db)
            .await?;
        let stats = LeagueStat::find()
            .order_by_asc(league_player_team_stat::Column::Id)
            .all(&self.db)
            .await?;
        Ok(league_player_rows(&players, stats, team_id))
    }

    /// Table row, fixtures and scorers of one league team, by its source id.
    pub async fn get_league_team(&self, external_id: i32) -> Result<Option<LeagueTeamDetail>, AppError> {
        let Some(team) = LeagueTeam::find()
            .filter(league_team::Column::ExternalId.eq(external_id))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };
        Ok(Some(LeagueTeamDetail {
            team: team.into(),
            matches: self.list_league_matches(Some(external_id)).await?,
            players: self.list_league_players(Some(external_id)).await?,
        }))
    }

    /// Swaps the whole league mirror for `snapshot` in one transaction.
    pub async fn replace_league_data(&self, snapshot: LeagueSnapshot) -> Result<ImportSummary, AppError> {
        let now = Utc::now();

        let teams: Vec<LeagueTeamActive> = snapshot
            .teams
            .into_iter()
            .map(|t| LeagueTeamActive {
                external_id: Set(t.external_id),
                name: Set(t.name),
                rank: Set(t.rank),
                points: Set(t.points),
                played: Set(t.played),
                wins: Set(t.wins),
                draws: Set(t.draws),
                losses: Set(t.losses),
                goals_for: Set(t.goals_for),
                goals_against: Set(t.goals_against),
                goal_difference: Set(t.goal_difference),
                form: Set(encode_form(&t.form)),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();

        let matches = snapshot
            .matches
            .into_iter()
            .map(|m| {
                Ok(LeagueMatchActive {
                    date: Set(parse_iso(&m.date)?),
                    external_id: Set(m.external_id),
                    home_team: Set(m.home_team),
                    away_team: Set(m.away_team),
                    home_score: Set(m.home_score),
                    away_score: Set(m.away_score),
                    location: Set(m.location),
                    team_id: Set(m.team_id),
                    status: Set(m.status),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let players: Vec<LeaguePlayerActive> = snapshot
            .players
            .into_iter()
            .map(|p| LeaguePlayerActive {
                external_id: Set(p.external_id),
                name: Set(p.name),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();

        let summary = ImportSummary {
            teams: teams.len() as u64,
            matches: matches.len() as u64,
            players: players.len() as u64,
            stats: snapshot.stats.len() as u64,
        };

        let txn = self.db.begin().await?;
        for table in ResetTable::LEAGUE {
            clear_table(&txn, table).await?;
        }
        if !teams.is_empty() {
            LeagueTeam::insert_many(teams).exec_without_returning(&txn).await?;
        }
        if !matches.is_empty() {
            LeagueMatch::insert_many(matches).exec_without_returning(&txn).await?;
        }
        if !players.is_empty() {
            LeaguePlayer::insert_many(players).exec_without_returning(&txn).await?;
        }

        let player_ids: HashMap<i32, i32> = LeaguePlayer::find()
            .all(&txn)
            .await?
            .into_iter()
            .map(|p| (p.external_id, p.id))
            .collect();

        let mut stats = Vec::with_capacity(snapshot.stats.len());
        for s in snapshot.stats {
            let Some(&player_id) = player_ids.get(&s.player_external_id) else {
                txn.rollback().await?;
                return Err(AppError::Validation(format!(
                    "stat references unknown player {}",
                    s.player_external_id
                )));
            };
            stats.push(LeagueStatActive {
                player_id: Set(player_id),
                team_id: Set(s.team_id),
                jersey_number: Set(s.jersey_number),
                games_played: Set(s.games_played),
                goals: Set(s.goals),
                assists: Set(s.assists),
                fairplay_rank: Set(s.fairplay_rank),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            });
        }
        if !stats.is_empty() {
            LeagueStat::insert_many(stats).exec_without_returning(&txn).await?;
        }

        txn.commit().await?;
        info!(
            teams = summary.teams,
            matches = summary.matches,
            players = summary.players,
            stats = summary.stats,
            "league data replaced"
        );
        Ok(summary)
    }
}
