use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::league::{LeagueMatchView, LeagueQuery};
use crate::types::response::{ApiResponse, ApiResult};

#[get("/matches")]
pub async fn matches(
    db: web::Data<Arc<DbService>>,
    query: web::Query<LeagueQuery>,
) -> ApiResult<Vec<LeagueMatchView>> {
    Ok(ApiResponse::Ok(db.list_league_matches(query.team_id).await?))
}
