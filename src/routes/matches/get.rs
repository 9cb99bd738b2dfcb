use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::fixture::MatchView;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
pub async fn get_match(
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<MatchView> {
    ApiResponse::found(db.get_match(path.into_inner()).await?, "Match")
}
