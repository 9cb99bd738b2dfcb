use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum AttendanceStatus {
    #[sea_orm(string_value = "Present")]
    Present,
    #[sea_orm(string_value = "NotPresent")]
    NotPresent,
    #[sea_orm(string_value = "Maybe")]
    Maybe,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::NotPresent => "NotPresent",
            Self::Maybe => "Maybe",
        }
    }

    /// Exact, case-sensitive match on the three wire literals.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Present" => Some(Self::Present),
            "NotPresent" => Some(Self::NotPresent),
            "Maybe" => Some(Self::Maybe),
            _ => None,
        }
    }
}

/// A player's answer for one match. A player who has not answered has no row.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: i32,
    pub player_id: i32,
    pub status: AttendanceStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fixture::Entity",
        from = "Column::MatchId",
        to   = "super::fixture::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Fixture,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to   = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::fixture::Entity> for Entity {
    fn to() -> RelationDef { Relation::Fixture.def() }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef { Relation::Player.def() }
}

impl ActiveModelBehavior for ActiveModel {}
