use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Fixture {
    Table,
    Id,
    Date,
    Location,
    Name,
    TeamName,
    TeamId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Fixture::Table)
                .if_not_exists()
                .col(ColumnDef::new(Fixture::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Fixture::Date).big_integer().not_null())
                .col(ColumnDef::new(Fixture::Location).string().null())
                .col(ColumnDef::new(Fixture::Name).string().null())
                .col(ColumnDef::new(Fixture::TeamName).string().null())
                .col(ColumnDef::new(Fixture::TeamId).integer().null())
                .col(ColumnDef::new(Fixture::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Fixture::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_fixture_date")
                .table(Fixture::Table)
                .col(Fixture::Date)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_fixture_team_date")
                .table(Fixture::Table)
                .col(Fixture::TeamId)
                .col(Fixture::Date)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Fixture::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
