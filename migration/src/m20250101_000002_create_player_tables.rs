use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Player {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PlayerTeam {
    Table,
    PlayerId,
    TeamId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Player::Table)
                .if_not_exists()
                .col(ColumnDef::new(Player::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Player::Name).string().not_null())
                .col(ColumnDef::new(Player::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Player::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_player_name")
                .table(Player::Table)
                .col(Player::Name)
                .to_owned(),
        ).await?;

        // Membership join table. team_id is left without a FK on purpose:
        // memberships may point at teams that were reset away.
        m.create_table(
            Table::create()
                .table(PlayerTeam::Table)
                .if_not_exists()
                .col(ColumnDef::new(PlayerTeam::PlayerId).integer().not_null())
                .col(ColumnDef::new(PlayerTeam::TeamId).integer().not_null())
                .col(ColumnDef::new(PlayerTeam::CreatedAt).timestamp_with_time_zone().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_player_team")
                        .col(PlayerTeam::PlayerId)
                        .col(PlayerTeam::TeamId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_player_team_player")
                        .from(PlayerTeam::Table, PlayerTeam::PlayerId)
                        .to(Player::Table, Player::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_player_team_team")
                .table(PlayerTeam::Table)
                .col(PlayerTeam::TeamId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(PlayerTeam::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Player::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
