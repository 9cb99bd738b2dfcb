pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_team_table;
mod m20250101_000002_create_player_tables;
mod m20250101_000003_create_fixture_table;
mod m20250101_000004_create_attendance_table;
mod m20250101_000005_create_league_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_team_table::Migration),
            Box::new(m20250101_000002_create_player_tables::Migration),
            Box::new(m20250101_000003_create_fixture_table::Migration),
            Box::new(m20250101_000004_create_attendance_table::Migration),
            Box::new(m20250101_000005_create_league_tables::Migration),
        ]
    }
}
