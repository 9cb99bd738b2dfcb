use actix_web::{post, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{RTeamCreate, TeamView};
use crate::utils::webutils::required_name;

#[post("")]
pub async fn create(
    db: web::Data<Arc<DbService>>,
    data: web::Json<RTeamCreate>,
) -> ApiResult<TeamView> {
    let name = required_name(&data.name)?;
    let id = db.create_team(name).await?;

    let team = db
        .get_team(id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("team {id} vanished after insert")))?;
    Ok(ApiResponse::Created(team.into()))
}
