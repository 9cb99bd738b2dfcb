use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::league::LeagueTeamDetail;
use crate::types::response::{ApiResponse, ApiResult};

/// `{id}` is the league's own team id, the one `teamId` filters use.
#[get("/team/{id}")]
pub async fn team(
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<LeagueTeamDetail> {
    ApiResponse::found(db.get_league_team(path.into_inner()).await?, "Team")
}
