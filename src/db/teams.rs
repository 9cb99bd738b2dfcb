use std::collections::HashMap;

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::team::TeamSummary;
use chrono::Utc;
use entity::team::{ActiveModel as TeamActive, Column, Entity as Team, Model as TeamModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::debug;

impl DbService {
    pub async fn list_teams(&self) -> Result<Vec<TeamModel>, AppError> {
        Ok(Team::find().order_by_asc(Column::Id).all(&self.db).await?)
    }

    pub async fn get_team(&self, id: i32) -> Result<Option<TeamModel>, AppError> {
        Ok(Team::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create_team(&self, name: String) -> Result<i32, AppError> {
        let now = Utc::now();
        let res = Team::insert(TeamActive {
            name: Set(name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;
        debug!(team_id = res.last_insert_id, "team created");
        Ok(res.last_insert_id)
    }
}

/// `{id, name}` for every id that still resolves. Missing ids are skipped.
pub(crate) async fn team_summaries<C: ConnectionTrait>(
    conn: &C,
    ids: &[i32],
) -> Result<HashMap<i32, TeamSummary>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let teams = Team::find()
        .filter(Column::Id.is_in(ids.iter().copied()))
        .all(conn)
        .await?;
    Ok(teams.iter().map(|t| (t.id, TeamSummary::from(t))).collect())
}
