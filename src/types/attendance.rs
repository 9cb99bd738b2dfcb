use entity::attendance::{AttendanceStatus, Model as AttendanceModel};
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::types::player::PlayerSummary;
use crate::utils::time::timestamp_to_iso;

#[derive(Deserialize, Debug)]
pub struct AttendanceQuery {
    pub status: Option<String>,
}

impl AttendanceQuery {
    pub fn status(&self) -> Result<AttendanceStatus, AppError> {
        let raw = self
            .status
            .as_deref()
            .ok_or_else(|| AppError::Validation("Missing status".to_string()))?;
        AttendanceStatus::parse(raw).ok_or_else(|| {
            AppError::Validation(format!(
                "Invalid status {raw:?}, expected one of Present, NotPresent, Maybe"
            ))
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRes {
    pub match_id: i32,
    pub player_id: i32,
    pub status: AttendanceStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceView {
    pub id: i32,
    pub match_id: i32,
    pub player_id: i32,
    pub status: AttendanceStatus,
    /// `None` when the player row is gone.
    pub player: Option<PlayerSummary>,
    pub created_at: String,
    pub updated_at: String,
}

impl AttendanceView {
    pub fn new(record: AttendanceModel, player: Option<PlayerSummary>) -> Self {
        AttendanceView {
            id: record.id,
            match_id: record.match_id,
            player_id: record.player_id,
            status: record.status,
            player,
            created_at: timestamp_to_iso(&record.created_at),
            updated_at: timestamp_to_iso(&record.updated_at),
        }
    }
}
