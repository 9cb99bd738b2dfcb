use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::player::PlayerView;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
pub async fn get_player(
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<PlayerView> {
    ApiResponse::found(db.get_player(path.into_inner()).await?, "Player")
}
