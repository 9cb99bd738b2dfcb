use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum LeagueTeam {
    Table,
    Id,
    ExternalId,
    Name,
    Rank,
    Points,
    Played,
    Wins,
    Draws,
    Losses,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
    Form,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LeagueMatch {
    Table,
    Id,
    ExternalId,
    Date,
    HomeTeam,
    AwayTeam,
    HomeScore,
    AwayScore,
    Location,
    TeamId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LeaguePlayer {
    Table,
    Id,
    ExternalId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LeaguePlayerTeamStat {
    Table,
    Id,
    PlayerId,
    TeamId,
    JerseyNumber,
    GamesPlayed,
    Goals,
    Assists,
    FairplayRank,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // league teams
        m.create_table(
            Table::create()
                .table(LeagueTeam::Table)
                .if_not_exists()
                .col(ColumnDef::new(LeagueTeam::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(LeagueTeam::ExternalId).integer().not_null())
                .col(ColumnDef::new(LeagueTeam::Name).string().not_null())
                .col(ColumnDef::new(LeagueTeam::Rank).integer().null())
                .col(ColumnDef::new(LeagueTeam::Points).integer().not_null().default(0))
                .col(ColumnDef::new(LeagueTeam::Played).integer().not_null().default(0))
                .col(ColumnDef::new(LeagueTeam::Wins).integer().not_null().default(0))
                .col(ColumnDef::new(LeagueTeam::Draws).integer().not_null().default(0))
                .col(ColumnDef::new(LeagueTeam::Losses).integer().not_null().default(0))
                .col(ColumnDef::new(LeagueTeam::GoalsFor).integer().not_null().default(0))
                .col(ColumnDef::new(LeagueTeam::GoalsAgainst).integer().not_null().default(0))
                .col(ColumnDef::new(LeagueTeam::GoalDifference).integer().not_null().default(0))
                .col(ColumnDef::new(LeagueTeam::Form).string().not_null().default(""))
                .col(ColumnDef::new(LeagueTeam::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(LeagueTeam::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("uk_league_team_external_id")
                .table(LeagueTeam::Table)
                .col(LeagueTeam::ExternalId)
                .unique()
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_league_team_rank")
                .table(LeagueTeam::Table)
                .col(LeagueTeam::Rank)
                .to_owned(),
        ).await?;

        // league matches
        m.create_table(
            Table::create()
                .table(LeagueMatch::Table)
                .if_not_exists()
                .col(ColumnDef::new(LeagueMatch::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(LeagueMatch::ExternalId).string().not_null())
                .col(ColumnDef::new(LeagueMatch::Date).big_integer().not_null())
                .col(ColumnDef::new(LeagueMatch::HomeTeam).string().not_null())
                .col(ColumnDef::new(LeagueMatch::AwayTeam).string().not_null())
                .col(ColumnDef::new(LeagueMatch::HomeScore).integer().null())
                .col(ColumnDef::new(LeagueMatch::AwayScore).integer().null())
                .col(ColumnDef::new(LeagueMatch::Location).string().null())
                .col(ColumnDef::new(LeagueMatch::TeamId).integer().not_null())
                .col(ColumnDef::new(LeagueMatch::Status).string_len(16).not_null())
                .col(ColumnDef::new(LeagueMatch::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(LeagueMatch::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                // a game between two league teams is stored once per team
                .name("uk_league_match_external_team")
                .table(LeagueMatch::Table)
                .col(LeagueMatch::ExternalId)
                .col(LeagueMatch::TeamId)
                .unique()
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_league_match_date")
                .table(LeagueMatch::Table)
                .col(LeagueMatch::Date)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_league_match_team_date")
                .table(LeagueMatch::Table)
                .col(LeagueMatch::TeamId)
                .col(LeagueMatch::Date)
                .to_owned(),
        ).await?;

        // league players
        m.create_table(
            Table::create()
                .table(LeaguePlayer::Table)
                .if_not_exists()
                .col(ColumnDef::new(LeaguePlayer::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(LeaguePlayer::ExternalId).integer().not_null())
                .col(ColumnDef::new(LeaguePlayer::Name).string().not_null())
                .col(ColumnDef::new(LeaguePlayer::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(LeaguePlayer::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("uk_league_player_external_id")
                .table(LeaguePlayer::Table)
                .col(LeaguePlayer::ExternalId)
                .unique()
                .to_owned(),
        ).await?;

        // per-team player stats
        m.create_table(
            Table::create()
                .table(LeaguePlayerTeamStat::Table)
                .if_not_exists()
                .col(ColumnDef::new(LeaguePlayerTeamStat::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(LeaguePlayerTeamStat::PlayerId).integer().not_null())
                .col(ColumnDef::new(LeaguePlayerTeamStat::TeamId).integer().not_null())
                .col(ColumnDef::new(LeaguePlayerTeamStat::JerseyNumber).integer().null())
                .col(ColumnDef::new(LeaguePlayerTeamStat::GamesPlayed).integer().not_null().default(0))
                .col(ColumnDef::new(LeaguePlayerTeamStat::Goals).integer().not_null().default(0))
                .col(ColumnDef::new(LeaguePlayerTeamStat::Assists).integer().not_null().default(0))
                .col(ColumnDef::new(LeaguePlayerTeamStat::FairplayRank).integer().null())
                .col(ColumnDef::new(LeaguePlayerTeamStat::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(LeaguePlayerTeamStat::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_league_stat_player")
                        .from(LeaguePlayerTeamStat::Table, LeaguePlayerTeamStat::PlayerId)
                        .to(LeaguePlayer::Table, LeaguePlayer::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_league_stat_player_team")
                .table(LeaguePlayerTeamStat::Table)
                .col(LeaguePlayerTeamStat::PlayerId)
                .col(LeaguePlayerTeamStat::TeamId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_league_stat_team")
                .table(LeaguePlayerTeamStat::Table)
                .col(LeaguePlayerTeamStat::TeamId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(LeaguePlayerTeamStat::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(LeaguePlayer::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(LeagueMatch::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(LeagueTeam::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
