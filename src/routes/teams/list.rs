use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::TeamView;

#[get("")]
pub async fn list(
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Vec<TeamView>> {
    let teams = db.list_teams().await?;
    Ok(ApiResponse::Ok(teams.into_iter().map(TeamView::from).collect()))
}
