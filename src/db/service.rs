use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Query and mutation layer over one pooled connection. Each aggregate adds
/// its own `impl DbService` block in a sibling module.
#[derive(Clone)]
pub struct DbService {
    pub(crate) db: DatabaseConnection,
}

impl DbService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        let mut opts = ConnectOptions::new(uri.to_owned());
        opts.sqlx_logging(false);
        // every connection to an in-memory SQLite database is a fresh database
        if is_in_memory(uri) {
            opts.max_connections(1).min_connections(1);
        }
        Self::connect(opts).await
    }

    pub async fn connect(opts: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let db = Database::connect(opts).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Database ready.");
        Ok(Self { db })
    }
}

fn is_in_memory(uri: &str) -> bool {
    uri.starts_with("sqlite::memory:") || (uri.starts_with("sqlite:") && uri.contains("mode=memory"))
}
