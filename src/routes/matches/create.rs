use actix_web::{post, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::fixture::{DBMatchCreate, MatchView, RMatchCreate};
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
pub async fn create(
    db: web::Data<Arc<DbService>>,
    data: web::Json<RMatchCreate>,
) -> ApiResult<MatchView> {
    let payload = DBMatchCreate::try_from(data.into_inner())?;
    let id = db.create_match(payload).await?;

    let created = db
        .get_match(id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("match {id} vanished after insert")))?;
    Ok(ApiResponse::Created(created))
}
