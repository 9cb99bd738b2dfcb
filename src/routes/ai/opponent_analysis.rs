use actix_web::{post, web};

use crate::types::analysis::{OpponentAnalysisRes, ROpponentAnalysis};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::analysis::{build_prompt, AnalysisClient};

#[post("/opponent-analysis")]
pub async fn opponent_analysis(
    ai: web::Data<AnalysisClient>,
    body: web::Json<ROpponentAnalysis>,
) -> ApiResult<OpponentAnalysisRes> {
    if !ai.is_configured() {
        return Err(AppError::ServiceUnavailable("AI analysis is not configured".to_string()));
    }
    let (own, opponent) = body.teams()?;

    let prompt = build_prompt(own, opponent, &body.opponent_players, body.recent_form.as_ref());
    let analysis = ai.opponent_analysis(&prompt).await?;

    Ok(ApiResponse::Ok(OpponentAnalysisRes { analysis }))
}
