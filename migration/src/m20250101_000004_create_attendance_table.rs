use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Attendance {
    Table,
    Id,
    MatchId,
    PlayerId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Fixture {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Player {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Attendance::Table)
                .if_not_exists()
                .col(ColumnDef::new(Attendance::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Attendance::MatchId).integer().not_null())
                .col(ColumnDef::new(Attendance::PlayerId).integer().not_null())
                .col(ColumnDef::new(Attendance::Status).string_len(16).not_null())
                .col(ColumnDef::new(Attendance::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Attendance::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_attendance_fixture")
                        .from(Attendance::Table, Attendance::MatchId)
                        .to(Fixture::Table, Fixture::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_attendance_player")
                        .from(Attendance::Table, Attendance::PlayerId)
                        .to(Player::Table, Player::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_attendance_match")
                .table(Attendance::Table)
                .col(Attendance::MatchId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_attendance_player")
                .table(Attendance::Table)
                .col(Attendance::PlayerId)
                .to_owned(),
        ).await?;

        // one answer per player and match
        m.create_index(
            Index::create()
                .name("uk_attendance_match_player")
                .table(Attendance::Table)
                .col(Attendance::MatchId)
                .col(Attendance::PlayerId)
                .unique()
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Attendance::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
