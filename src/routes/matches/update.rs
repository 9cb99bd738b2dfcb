use actix_web::{put, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::fixture::{DBMatchPatch, MatchView, RMatchUpdate};
use crate::types::response::{ApiResponse, ApiResult};

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
    data: web::Json<RMatchUpdate>,
) -> ApiResult<MatchView> {
    let patch = DBMatchPatch::try_from(data.into_inner())?;
    let id = db.update_match(path.into_inner(), patch).await?;
    ApiResponse::found(db.get_match(id).await?, "Match")
}
