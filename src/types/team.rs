use entity::team::Model as TeamModel;
use serde::{Deserialize, Serialize};

use crate::utils::time::timestamp_to_iso;

#[derive(Serialize, Deserialize, Debug)]
pub struct RTeamCreate {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamView {
    pub id: i32,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TeamModel> for TeamView {
    fn from(t: TeamModel) -> Self {
        TeamView {
            id: t.id,
            name: t.name,
            created_at: timestamp_to_iso(&t.created_at),
            updated_at: timestamp_to_iso(&t.updated_at),
        }
    }
}

/// `{id, name}` of a team, embedded in player and match views.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub id: i32,
    pub name: String,
}

impl From<&TeamModel> for TeamSummary {
    fn from(t: &TeamModel) -> Self {
        TeamSummary { id: t.id, name: t.name.clone() }
    }
}
