use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::fixture::{MatchQuery, MatchView};
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list(
    db: web::Data<Arc<DbService>>,
    query: web::Query<MatchQuery>,
) -> ApiResult<Vec<MatchView>> {
    Ok(ApiResponse::Ok(db.list_matches(query.player_id).await?))
}
