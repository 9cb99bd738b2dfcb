use std::collections::HashMap;

use entity::player::Model as PlayerModel;
use serde::{Deserialize, Serialize};

use crate::types::team::TeamSummary;
use crate::utils::time::timestamp_to_iso;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RPlayerCreate {
    pub name: String,
    #[serde(default)]
    pub team_ids: Vec<i32>,
}

/// Full replacement: an omitted `teamIds` clears every membership.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RPlayerUpdate {
    pub name: String,
    #[serde(default)]
    pub team_ids: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct DBPlayerWrite {
    pub name: String,
    pub team_ids: Vec<i32>,
}

impl DBPlayerWrite {
    pub fn new(name: String, team_ids: Vec<i32>) -> Self {
        DBPlayerWrite { name, team_ids: unique_ids(team_ids) }
    }
}

/// Drops repeated ids, first occurrence wins.
pub fn unique_ids(ids: Vec<i32>) -> Vec<i32> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: i32,
    pub name: String,
    /// Stored memberships, including ids whose team is gone.
    pub team_ids: Vec<i32>,
    /// Memberships that still resolve to a team.
    pub teams: Vec<TeamSummary>,
    pub created_at: String,
    pub updated_at: String,
}

impl PlayerView {
    pub fn new(player: PlayerModel, team_ids: Vec<i32>, known: &HashMap<i32, TeamSummary>) -> Self {
        let teams = team_ids.iter().filter_map(|id| known.get(id).cloned()).collect();
        PlayerView {
            id: player.id,
            name: player.name,
            team_ids,
            teams,
            created_at: timestamp_to_iso(&player.created_at),
            updated_at: timestamp_to_iso(&player.updated_at),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    pub id: i32,
    pub name: String,
}

impl From<&PlayerModel> for PlayerSummary {
    fn from(p: &PlayerModel) -> Self {
        PlayerSummary { id: p.id, name: p.name.clone() }
    }
}
