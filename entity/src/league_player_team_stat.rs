use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-team numbers of a league player. One row per (player_id, team_id) by
/// convention; the pair is indexed but not unique.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "league_player_team_stat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: i32,                   // league_player.id
    pub team_id: i32,                     // league_team.external_id
    pub jersey_number: Option<i32>,
    pub games_played: i32,
    pub goals: i32,
    pub assists: i32,
    pub fairplay_rank: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::league_player::Entity",
        from = "Column::PlayerId",
        to   = "super::league_player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::league_player::Entity> for Entity {
    fn to() -> RelationDef { Relation::Player.def() }
}

impl ActiveModelBehavior for ActiveModel {}
