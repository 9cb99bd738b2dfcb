use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::error::AppError;

/// Team objects are whatever the client got from `/lzv`; only the fields
/// the prompt uses are read.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ROpponentAnalysis {
    pub own_team: Option<Value>,
    pub opponent: Option<Value>,
    #[serde(default)]
    pub opponent_players: Vec<Value>,
    pub recent_form: Option<Value>,
}

impl ROpponentAnalysis {
    pub fn teams(&self) -> Result<(&Value, &Value), AppError> {
        match (&self.own_team, &self.opponent) {
            (Some(own), Some(opp)) if own.is_object() && opp.is_object() => Ok((own, opp)),
            _ => Err(AppError::Validation("ownTeam and opponent are required".to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OpponentAnalysisRes {
    pub analysis: String,
}
