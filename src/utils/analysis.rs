use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::AiConfig;
use crate::types::error::AppError;

const MAX_PLAYERS_IN_PROMPT: usize = 10;

const SYSTEM_PROMPT: &str = "You are an experienced futsal coach. Give a short, practical \
scouting report: the opponent's strengths, their weaknesses, and a concrete game plan.";

/// Thin client for an OpenAI-compatible chat-completions endpoint.
pub struct AnalysisClient {
    http: Client,
    config: AiConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl AnalysisClient {
    pub fn new(config: AiConfig) -> Result<Self, reqwest::Error> {
        let http = ClientBuilder::new()
            .user_agent("futsal-attendance/0.1 (+reqwest)")
            .tcp_nodelay(true)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(AnalysisClient { http, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    pub async fn opponent_analysis(&self, prompt: &str) -> Result<String, AppError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::ServiceUnavailable("AI analysis is not configured".to_string()))?;

        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: prompt },
            ],
            temperature: 0.7,
        };

        debug!(url = %self.config.api_url, model = %self.config.model, prompt_len = prompt.len(), "requesting analysis");
        let res = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("send failed: {e}")))?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            warn!(%status, "analysis request rejected");
            return Err(AppError::Upstream(format!("HTTP {status}: {text}")));
        }

        let parsed: ChatResponse = res
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("bad response body: {e}")))?;

        parsed
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::Upstream("empty completion".to_string()))
    }
}

fn field_i64(v: &Value, key: &str) -> Option<i64> {
    v.get(key).and_then(Value::as_i64)
}

fn field_str<'a>(v: &'a Value, key: &str) -> Option<&'a str> {
    v.get(key).and_then(Value::as_str)
}

fn form_codes(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::Array(items) => {
            let codes: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!codes.is_empty()).then(|| codes.join(" "))
        }
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// One line describing a league team from its `/lzv` JSON.
pub fn describe_team(team: &Value) -> String {
    let name = field_str(team, "name").unwrap_or("Unknown team");
    let mut facts = Vec::new();
    if let Some(rank) = field_i64(team, "rank") {
        facts.push(format!("rank {rank}"));
    }
    if let Some(points) = field_i64(team, "points") {
        facts.push(format!("{points} points"));
    }
    if let (Some(w), Some(d), Some(l)) = (field_i64(team, "wins"), field_i64(team, "draws"), field_i64(team, "losses")) {
        facts.push(format!("record {w}W-{d}D-{l}L"));
    }
    if let (Some(gf), Some(ga)) = (field_i64(team, "goalsFor"), field_i64(team, "goalsAgainst")) {
        facts.push(format!("goals {gf}:{ga}"));
    }
    if let Some(form) = form_codes(team.get("form")) {
        facts.push(format!("form {form}"));
    }
    if facts.is_empty() {
        name.to_string()
    } else {
        format!("{name} ({})", facts.join(", "))
    }
}

fn describe_player(player: &Value) -> Option<String> {
    let name = field_str(player, "name")?;
    let goals = field_i64(player, "goals").unwrap_or(0);
    let assists = field_i64(player, "assists").unwrap_or(0);
    let games = field_i64(player, "gamesPlayed").unwrap_or(0);
    Some(format!("- {name}: {goals} goals, {assists} assists in {games} games"))
}

fn describe_result(m: &Value) -> String {
    match (field_str(m, "homeTeam"), field_str(m, "awayTeam")) {
        (Some(home), Some(away)) => match (field_i64(m, "homeScore"), field_i64(m, "awayScore")) {
            (Some(hs), Some(aws)) => format!("- {home} {hs}-{aws} {away}"),
            _ => format!("- {home} vs {away}"),
        },
        _ => match m {
            Value::String(s) => format!("- {s}"),
            other => format!("- {other}"),
        },
    }
}

/// User prompt for the scouting report.
pub fn build_prompt(own: &Value, opponent: &Value, opponent_players: &[Value], recent_form: Option<&Value>) -> String {
    let mut prompt = format!(
        "Our team: {}\nOpponent: {}\n",
        describe_team(own),
        describe_team(opponent)
    );

    let players: Vec<String> = opponent_players
        .iter()
        .filter_map(describe_player)
        .take(MAX_PLAYERS_IN_PROMPT)
        .collect();
    if !players.is_empty() {
        prompt.push_str("\nOpponent key players:\n");
        prompt.push_str(&players.join("\n"));
        prompt.push('\n');
    }

    match recent_form {
        Some(Value::Array(results)) if !results.is_empty() => {
            prompt.push_str("\nOpponent recent results:\n");
            let lines: Vec<String> = results.iter().map(describe_result).collect();
            prompt.push_str(&lines.join("\n"));
            prompt.push('\n');
        }
        Some(Value::String(s)) if !s.is_empty() => {
            prompt.push_str(&format!("\nOpponent recent form: {s}\n"));
        }
        _ => {}
    }

    prompt.push_str("\nHow should we approach this match?");
    prompt
}
