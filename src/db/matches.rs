use std::collections::{BTreeSet, HashMap};

use crate::db::service::DbService;
use crate::db::teams::team_summaries;
use crate::types::attendance::AttendanceView;
use crate::types::error::AppError;
use crate::types::fixture::{DBMatchCreate, DBMatchPatch, MatchView};
use crate::types::player::PlayerSummary;
use chrono::Utc;
use entity::attendance::{self, Entity as Attendance};
use entity::fixture::{ActiveModel as FixtureActive, Column, Entity as Fixture, Model as FixtureModel};
use entity::player::{self, Entity as Player};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

/// Ascending by instant. Stable, so equal dates keep their incoming order.
pub fn sort_by_date(fixtures: &mut [FixtureModel]) {
    fixtures.sort_by_key(|f| f.date);
}

impl DbService {
    /// Every match, or with `player_id` only the matches of that player's
    /// teams. A player without teams (or an unknown player) sees nothing.
    pub async fn list_matches(&self, player_id: Option<i32>) -> Result<Vec<MatchView>, AppError> {
        let mut fixtures = match player_id {
            None => Fixture::find().order_by_asc(Column::Id).all(&self.db).await?,
            Some(pid) => {
                let team_ids = self.player_team_ids(pid).await?;
                if team_ids.is_empty() {
                    return Ok(Vec::new());
                }
                // one query over all teams; no repeats since a match carries at most one team_id
                Fixture::find()
                    .filter(Column::TeamId.is_in(team_ids))
                    .order_by_asc(Column::Id)
                    .all(&self.db)
                    .await?
            }
        };
        sort_by_date(&mut fixtures);
        self.resolve_matches(fixtures).await
    }

    pub async fn get_match(&self, id: i32) -> Result<Option<MatchView>, AppError> {
        match Fixture::find_by_id(id).one(&self.db).await? {
            Some(fixture) => Ok(self.resolve_matches(vec![fixture]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn match_exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(Fixture::find_by_id(id).count(&self.db).await? > 0)
    }

    /// Attaches team and attendance (with player) to each match, keeping order.
    async fn resolve_matches(&self, fixtures: Vec<FixtureModel>) -> Result<Vec<MatchView>, AppError> {
        if fixtures.is_empty() {
            return Ok(Vec::new());
        }

        let records = Attendance::find()
            .filter(attendance::Column::MatchId.is_in(fixtures.iter().map(|f| f.id)))
            .order_by_asc(attendance::Column::Id)
            .all(&self.db)
            .await?;

        let player_ids: BTreeSet<i32> = records.iter().map(|r| r.player_id).collect();
        let players: HashMap<i32, PlayerSummary> = if player_ids.is_empty() {
            HashMap::new()
        } else {
            Player::find()
                .filter(player::Column::Id.is_in(player_ids))
                .all(&self.db)
                .await?
                .iter()
                .map(|p| (p.id, PlayerSummary::from(p)))
                .collect()
        };

        let team_ids: Vec<i32> = fixtures
            .iter()
            .filter_map(|f| f.team_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let teams = team_summaries(&self.db, &team_ids).await?;

        let mut by_match: HashMap<i32, Vec<AttendanceView>> = HashMap::new();
        for record in records {
            let player = players.get(&record.player_id).cloned();
            by_match
                .entry(record.match_id)
                .or_default()
                .push(AttendanceView::new(record, player));
        }

        Ok(fixtures
            .into_iter()
            .map(|f| {
                let team = f.team_id.and_then(|tid| teams.get(&tid).cloned());
                let attendances = by_match.remove(&f.id).unwrap_or_default();
                MatchView::new(f, team, attendances)
            })
            .collect())
    }

    /// Inserts the match only; nobody has answered yet, so no attendance rows.
    pub async fn create_match(&self, payload: DBMatchCreate) -> Result<i32, AppError> {
        let now = Utc::now();
        let mid = Fixture::insert(FixtureActive {
            date: Set(payload.date),
            location: Set(payload.location),
            name: Set(payload.name),
            team_name: Set(payload.team_name),
            team_id: Set(payload.team_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&self.db)
        .await?
        .last_insert_id;
        debug!(match_id = mid, "match created");
        Ok(mid)
    }

    pub async fn update_match(&self, id: i32, patch: DBMatchPatch) -> Result<i32, AppError> {
        let current = Fixture::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Match not found".into()))?;

        let mut am: FixtureActive = current.into();
        if let Some(date) = patch.date {
            am.date = Set(date);
        }
        if let Some(location) = patch.location {
            am.location = Set(Some(location));
        }
        if let Some(name) = patch.name {
            am.name = Set(Some(name));
        }
        if let Some(team_name) = patch.team_name {
            am.team_name = Set(Some(team_name));
        }
        if let Some(team_id) = patch.team_id {
            am.team_id = Set(Some(team_id));
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await?;
        debug!(match_id = id, "match patched");
        Ok(id)
    }

    /// Removes the match's attendance answers, then the match.
    pub async fn delete_match(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let answers = Attendance::delete_many()
            .filter(attendance::Column::MatchId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;
        let deleted = Fixture::delete_by_id(id).exec(&txn).await?.rows_affected;
        if deleted == 0 {
            txn.rollback().await?;
            return Err(AppError::not_found("Match"));
        }
        txn.commit().await?;
        debug!(match_id = id, answers, "match deleted");
        Ok(())
    }
}
