use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::league::{LeaguePlayerRow, LeagueQuery};
use crate::types::response::{ApiResponse, ApiResult};

#[get("/players")]
pub async fn players(
    db: web::Data<Arc<DbService>>,
    query: web::Query<LeagueQuery>,
) -> ApiResult<Vec<LeaguePlayerRow>> {
    Ok(ApiResponse::Ok(db.list_league_players(query.team_id).await?))
}
