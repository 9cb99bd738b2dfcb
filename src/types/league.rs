use entity::league_match::{LeagueMatchStatus, Model as LeagueMatchModel};
use entity::league_player::Model as LeaguePlayerModel;
use entity::league_player_team_stat::Model as LeagueStatModel;
use entity::league_team::Model as LeagueTeamModel;
use serde::{Deserialize, Serialize};

use crate::utils::time::to_iso;

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeagueQuery {
    pub team_id: Option<i32>,
}

const FORM_SEPARATOR: &str = ",";

pub fn encode_form(codes: &[String]) -> String {
    codes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(FORM_SEPARATOR)
}

pub fn decode_form(stored: &str) -> Vec<String> {
    stored
        .split(FORM_SEPARATOR)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueTeamView {
    pub id: i32,
    pub external_id: i32,
    pub name: String,
    pub rank: Option<i32>,
    pub points: i32,
    pub played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub form: Vec<String>,
}

impl From<LeagueTeamModel> for LeagueTeamView {
    fn from(t: LeagueTeamModel) -> Self {
        LeagueTeamView {
            id: t.id,
            external_id: t.external_id,
            name: t.name,
            rank: t.rank,
            points: t.points,
            played: t.played,
            wins: t.wins,
            draws: t.draws,
            losses: t.losses,
            goals_for: t.goals_for,
            goals_against: t.goals_against,
            goal_difference: t.goal_difference,
            form: decode_form(&t.form),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueMatchView {
    pub id: i32,
    pub external_id: String,
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub location: Option<String>,
    pub team_id: i32,
    pub status: LeagueMatchStatus,
}

impl From<LeagueMatchModel> for LeagueMatchView {
    fn from(m: LeagueMatchModel) -> Self {
        LeagueMatchView {
            id: m.id,
            external_id: m.external_id,
            date: to_iso(m.date),
            home_team: m.home_team,
            away_team: m.away_team,
            home_score: m.home_score,
            away_score: m.away_score,
            location: m.location,
            team_id: m.team_id,
            status: m.status,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStatView {
    pub team_id: i32,
    pub jersey_number: Option<i32>,
    pub games_played: i32,
    pub goals: i32,
    pub assists: i32,
    pub fairplay_rank: Option<i32>,
}

impl From<&LeagueStatModel> for LeagueStatView {
    fn from(s: &LeagueStatModel) -> Self {
        LeagueStatView {
            team_id: s.team_id,
            jersey_number: s.jersey_number,
            games_played: s.games_played,
            goals: s.goals,
            assists: s.assists,
            fairplay_rank: s.fairplay_rank,
        }
    }
}

/// One line of the scorers list.
///
/// Filtered by team, the numbers are that team's stat row and `teams` is
/// absent. Unfiltered, goals/assists/gamesPlayed are summed over every team,
/// `teamId`/`jerseyNumber`/`fairplayRank` come from the first stat row and
/// `teams` holds the per-team breakdown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaguePlayerRow {
    pub id: i32,
    pub external_id: i32,
    pub name: String,
    pub team_id: Option<i32>,
    pub jersey_number: Option<i32>,
    pub games_played: i32,
    pub goals: i32,
    pub assists: i32,
    pub fairplay_rank: Option<i32>,
    pub team_ids: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<LeagueStatView>>,
}

impl LeaguePlayerRow {
    pub fn for_team(player: &LeaguePlayerModel, stat: &LeagueStatModel, team_ids: Vec<i32>) -> Self {
        LeaguePlayerRow {
            id: player.id,
            external_id: player.external_id,
            name: player.name.clone(),
            team_id: Some(stat.team_id),
            jersey_number: stat.jersey_number,
            games_played: stat.games_played,
            goals: stat.goals,
            assists: stat.assists,
            fairplay_rank: stat.fairplay_rank,
            team_ids,
            teams: None,
        }
    }

    pub fn aggregated(player: &LeaguePlayerModel, stats: &[LeagueStatModel]) -> Self {
        let first = stats.first();
        LeaguePlayerRow {
            id: player.id,
            external_id: player.external_id,
            name: player.name.clone(),
            team_id: first.map(|s| s.team_id),
            jersey_number: first.and_then(|s| s.jersey_number),
            games_played: stats.iter().map(|s| s.games_played).sum(),
            goals: stats.iter().map(|s| s.goals).sum(),
            assists: stats.iter().map(|s| s.assists).sum(),
            fairplay_rank: first.and_then(|s| s.fairplay_rank),
            team_ids: stats.iter().map(|s| s.team_id).collect(),
            teams: Some(stats.iter().map(LeagueStatView::from).collect()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeagueTeamDetail {
    pub team: LeagueTeamView,
    pub matches: Vec<LeagueMatchView>,
    pub players: Vec<LeaguePlayerRow>,
}

/// Output of the league scraper, consumed by `futsal-admin import-league`.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSnapshot {
    #[serde(default)]
    pub teams: Vec<SnapshotTeam>,
    #[serde(default)]
    pub matches: Vec<SnapshotMatch>,
    #[serde(default)]
    pub players: Vec<SnapshotPlayer>,
    #[serde(default)]
    pub stats: Vec<SnapshotStat>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotTeam {
    pub external_id: i32,
    pub name: String,
    pub rank: Option<i32>,
    pub points: i32,
    pub played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub form: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMatch {
    pub external_id: String,
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub location: Option<String>,
    pub team_id: i32,
    pub status: LeagueMatchStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPlayer {
    pub external_id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotStat {
    pub player_external_id: i32,
    pub team_id: i32,
    pub jersey_number: Option<i32>,
    #[serde(default)]
    pub games_played: i32,
    #[serde(default)]
    pub goals: i32,
    #[serde(default)]
    pub assists: i32,
    pub fairplay_rank: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub teams: u64,
    pub matches: u64,
    pub players: u64,
    pub stats: u64,
}
