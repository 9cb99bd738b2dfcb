use actix_web::{put, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::player::{DBPlayerWrite, PlayerView, RPlayerUpdate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::required_name;

/// Full replace of name and teams; the body must carry the complete set.
#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
    data: web::Json<RPlayerUpdate>,
) -> ApiResult<PlayerView> {
    let data = data.into_inner();
    let name = required_name(&data.name)?;
    let id = db.update_player(path.into_inner(), DBPlayerWrite::new(name, data.team_ids)).await?;
    ApiResponse::found(db.get_player(id).await?, "Player")
}
