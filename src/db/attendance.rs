use crate::db::service::DbService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::attendance::{
    ActiveModel as AttendanceActive, AttendanceStatus, Column, Entity as Attendance,
    Model as AttendanceModel,
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::debug;

impl DbService {
    pub async fn find_attendance(&self, match_id: i32, player_id: i32) -> Result<Option<AttendanceModel>, AppError> {
        Ok(Attendance::find()
            .filter(Column::MatchId.eq(match_id))
            .filter(Column::PlayerId.eq(player_id))
            .one(&self.db)
            .await?)
    }

    pub async fn list_attendance_for_match(&self, match_id: i32) -> Result<Vec<AttendanceModel>, AppError> {
        Ok(Attendance::find()
            .filter(Column::MatchId.eq(match_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Overwrites the existing answer in place (id and created_at survive) or
    /// inserts the first one. Concurrent writers: the last one wins.
    pub async fn upsert_attendance(
        &self,
        match_id: i32,
        player_id: i32,
        status: AttendanceStatus,
    ) -> Result<i32, AppError> {
        match self.find_attendance(match_id, player_id).await? {
            Some(record) => {
                let id = record.id;
                let mut am: AttendanceActive = record.into();
                am.status = Set(status);
                am.updated_at = Set(Utc::now());
                am.update(&self.db).await?;
                debug!(attendance_id = id, match_id, player_id, status = status.as_str(), "attendance updated");
                Ok(id)
            }
            None => self.insert_attendance(match_id, player_id, status).await,
        }
    }

    /// First answer for the pair. If another writer got there in between, its
    /// row is overwritten through `uk_attendance_match_player` instead.
    pub async fn insert_attendance(
        &self,
        match_id: i32,
        player_id: i32,
        status: AttendanceStatus,
    ) -> Result<i32, AppError> {
        let now = Utc::now();
        let id = Attendance::insert(AttendanceActive {
            match_id: Set(match_id),
            player_id: Set(player_id),
            status: Set(status),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([Column::MatchId, Column::PlayerId])
                .update_columns([Column::Status, Column::UpdatedAt])
                .to_owned(),
        )
        .exec(&self.db)
        .await?
        .last_insert_id;
        debug!(attendance_id = id, match_id, player_id, status = status.as_str(), "attendance recorded");
        Ok(id)
    }
}
