use actix_web::{put, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::attendance::{AttendanceQuery, AttendanceRes};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

#[put("/{id}/players/{player_id}/attendance")]
pub async fn attendance(
    db: web::Data<Arc<DbService>>,
    path: web::Path<(i32, i32)>,
    query: web::Query<AttendanceQuery>,
) -> ApiResult<AttendanceRes> {
    let (match_id, player_id) = path.into_inner();
    // reject bad input before touching anything
    let status = query.status()?;

    if !db.match_exists(match_id).await? {
        return Err(AppError::not_found("Match"));
    }
    if !db.player_exists(player_id).await? {
        return Err(AppError::not_found("Player"));
    }

    db.upsert_attendance(match_id, player_id, status).await?;

    Ok(ApiResponse::Ok(AttendanceRes { match_id, player_id, status }))
}
