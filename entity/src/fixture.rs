use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A match on the team calendar. `date` is epoch milliseconds (UTC).
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fixture")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: i64,
    pub location: Option<String>,
    pub name: Option<String>,
    pub team_name: Option<String>,
    pub team_id: Option<i32>,             // team.id, not enforced
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to   = "super::team::Column::Id"
    )]
    Team,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef { Relation::Team.def() }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef { Relation::Attendance.def() }
}

impl ActiveModelBehavior for ActiveModel {}
