use actix_web::{post, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::player::{DBPlayerWrite, PlayerView, RPlayerCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::required_name;

#[post("")]
pub async fn create(
    db: web::Data<Arc<DbService>>,
    data: web::Json<RPlayerCreate>,
) -> ApiResult<PlayerView> {
    let data = data.into_inner();
    let name = required_name(&data.name)?;
    let id = db.create_player(DBPlayerWrite::new(name, data.team_ids)).await?;

    let player = db
        .get_player(id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("player {id} vanished after insert")))?;
    Ok(ApiResponse::Created(player))
}
