use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::league::LeagueTeamView;
use crate::types::response::{ApiResponse, ApiResult};

/// The league table.
#[get("/stats")]
pub async fn stats(
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Vec<LeagueTeamView>> {
    Ok(ApiResponse::Ok(db.list_league_teams().await?))
}
