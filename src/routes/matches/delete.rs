use actix_web::{delete, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};

#[delete("/{id}")]
pub async fn delete_match(
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<()> {
    db.delete_match(path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
