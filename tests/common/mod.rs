use std::sync::Arc;
use futsal_attendance::db::service::DbService;

pub mod client;

pub struct TestContext {
    pub db: Arc<DbService>,
}

impl TestContext {
    /// Fresh, migrated in-memory database per test.
    pub async fn new() -> TestContext {
        let db = Arc::new(
            DbService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize DbService")
        );

        TestContext { db }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use futsal_attendance::types::fixture::DBMatchCreate;
    use futsal_attendance::types::league::{
        LeagueSnapshot, SnapshotMatch, SnapshotPlayer, SnapshotStat, SnapshotTeam,
    };
    use entity::league_match::LeagueMatchStatus;

    pub fn match_on(date: i64, team_id: Option<i32>) -> DBMatchCreate {
        DBMatchCreate {
            date,
            location: Some("Sporthal De Vijvers".to_string()),
            name: None,
            team_name: None,
            team_id,
        }
    }

    pub fn team(external_id: i32, name: &str, rank: Option<i32>, points: i32) -> SnapshotTeam {
        SnapshotTeam {
            external_id,
            name: name.to_string(),
            rank,
            points,
            form: vec!["W".into(), "D".into(), "L".into()],
            ..Default::default()
        }
    }

    fn league_match(external_id: &str, date: &str, team_id: i32, status: LeagueMatchStatus) -> SnapshotMatch {
        SnapshotMatch {
            external_id: external_id.to_string(),
            date: date.to_string(),
            home_team: "Rapid Noord".to_string(),
            away_team: "Zaal Oost".to_string(),
            home_score: None,
            away_score: None,
            location: None,
            team_id,
            status,
        }
    }

    fn stat(player: i32, team_id: i32, goals: i32, assists: i32, games: i32) -> SnapshotStat {
        SnapshotStat {
            player_external_id: player,
            team_id,
            jersey_number: Some(player % 100),
            games_played: games,
            goals,
            assists,
            fairplay_rank: None,
        }
    }

    /// Teams 10 (rank 2), 20 (rank 1), 30 (unranked). Player 501 plays for
    /// 10 and 20, 502 for 10, 503 for 20.
    pub fn league_snapshot() -> LeagueSnapshot {
        LeagueSnapshot {
            teams: vec![
                team(10, "Zaal Oost", Some(2), 20),
                team(30, "Nieuwkomers", None, 0),
                team(20, "Rapid Noord", Some(1), 25),
            ],
            matches: vec![
                league_match("m-3", "2025-03-20T20:00:00.000Z", 10, LeagueMatchStatus::Scheduled),
                league_match("m-1", "2025-03-06T20:00:00.000Z", 10, LeagueMatchStatus::Played),
                league_match("m-2", "2025-03-13T20:00:00.000Z", 20, LeagueMatchStatus::Postponed),
            ],
            players: vec![
                SnapshotPlayer { external_id: 501, name: "Jens".to_string() },
                SnapshotPlayer { external_id: 502, name: "Wout".to_string() },
                SnapshotPlayer { external_id: 503, name: "Karel".to_string() },
            ],
            stats: vec![
                stat(501, 10, 4, 1, 6),
                stat(501, 20, 7, 3, 5),
                stat(502, 10, 9, 0, 8),
                stat(503, 20, 2, 2, 3),
            ],
        }
    }
}
