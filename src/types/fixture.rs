use entity::fixture::Model as FixtureModel;
use serde::{Deserialize, Serialize};

use crate::types::attendance::AttendanceView;
use crate::types::error::AppError;
use crate::types::team::TeamSummary;
use crate::utils::time::{parse_iso, timestamp_to_iso, to_iso};

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchQuery {
    pub player_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RMatchCreate {
    pub date: String,
    pub location: Option<String>,
    pub name: Option<String>,
    pub team_name: Option<String>,
    pub team_id: Option<i32>,
}

/// Partial patch: only fields present in the body are written.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RMatchUpdate {
    pub date: Option<String>,
    pub location: Option<String>,
    pub name: Option<String>,
    pub team_name: Option<String>,
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct DBMatchCreate {
    pub date: i64,
    pub location: Option<String>,
    pub name: Option<String>,
    pub team_name: Option<String>,
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct DBMatchPatch {
    pub date: Option<i64>,
    pub location: Option<String>,
    pub name: Option<String>,
    pub team_name: Option<String>,
    pub team_id: Option<i32>,
}

impl TryFrom<RMatchCreate> for DBMatchCreate {
    type Error = AppError;

    fn try_from(r: RMatchCreate) -> Result<Self, Self::Error> {
        Ok(DBMatchCreate {
            date: parse_iso(&r.date)?,
            location: r.location,
            name: r.name,
            team_name: r.team_name,
            team_id: r.team_id,
        })
    }
}

impl TryFrom<RMatchUpdate> for DBMatchPatch {
    type Error = AppError;

    fn try_from(r: RMatchUpdate) -> Result<Self, Self::Error> {
        Ok(DBMatchPatch {
            date: r.date.as_deref().map(parse_iso).transpose()?,
            location: r.location,
            name: r.name,
            team_name: r.team_name,
            team_id: r.team_id,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub id: i32,
    pub date: String,
    pub location: Option<String>,
    pub name: Option<String>,
    pub team_name: Option<String>,
    pub team_id: Option<i32>,
    pub team: Option<TeamSummary>,
    pub attendances: Vec<AttendanceView>,
    pub created_at: String,
    pub updated_at: String,
}

impl MatchView {
    pub fn new(fixture: FixtureModel, team: Option<TeamSummary>, attendances: Vec<AttendanceView>) -> Self {
        MatchView {
            id: fixture.id,
            date: to_iso(fixture.date),
            location: fixture.location,
            name: fixture.name,
            team_name: fixture.team_name,
            team_id: fixture.team_id,
            team,
            attendances,
            created_at: timestamp_to_iso(&fixture.created_at),
            updated_at: timestamp_to_iso(&fixture.updated_at),
        }
    }
}
