use actix_web::{web, App};
use std::sync::Arc;
use futsal_attendance::{
    config::AiConfig,
    db::service::DbService,
    types::{fixture::DBMatchCreate, player::DBPlayerWrite},
    utils::analysis::AnalysisClient,
};

pub struct TestClient {
    pub db: Arc<DbService>,
    pub ai: AiConfig,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient { db, ai: AiConfig::default() }
    }

    #[allow(dead_code)]
    pub fn with_ai(db: Arc<DbService>, ai: AiConfig) -> Self {
        TestClient { db, ai }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let analysis = AnalysisClient::new(self.ai.clone()).expect("Failed to build AnalysisClient");
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(analysis))
            .configure(futsal_attendance::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_team(&self, name: &str) -> i32 {
        self.db.create_team(name.to_string())
            .await
            .expect("Failed to create team")
    }

    #[allow(dead_code)]
    pub async fn create_player(&self, name: &str, team_ids: Vec<i32>) -> i32 {
        self.db.create_player(DBPlayerWrite::new(name.to_string(), team_ids))
            .await
            .expect("Failed to create player")
    }

    #[allow(dead_code)]
    pub async fn create_match(&self, payload: DBMatchCreate) -> i32 {
        self.db.create_match(payload)
            .await
            .expect("Failed to create match")
    }
}
