use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::player::PlayerView;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list(
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Vec<PlayerView>> {
    Ok(ApiResponse::Ok(db.list_players().await?))
}
