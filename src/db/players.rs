use std::collections::{BTreeSet, HashMap};

use crate::db::service::DbService;
use crate::db::teams::team_summaries;
use crate::types::error::AppError;
use crate::types::player::{DBPlayerWrite, PlayerView};
use chrono::Utc;
use entity::attendance::{self, Entity as Attendance};
use entity::player::{ActiveModel as PlayerActive, Column, Entity as Player, Model as PlayerModel};
use entity::player_team::{self, ActiveModel as PlayerTeamActive, Entity as PlayerTeam};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

impl DbService {
    pub async fn list_players(&self) -> Result<Vec<PlayerView>, AppError> {
        let players = Player::find().order_by_asc(Column::Id).all(&self.db).await?;
        self.resolve_players(players).await
    }

    pub async fn get_player(&self, id: i32) -> Result<Option<PlayerView>, AppError> {
        match Player::find_by_id(id).one(&self.db).await? {
            Some(player) => Ok(self.resolve_players(vec![player]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn player_exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(Player::find_by_id(id).count(&self.db).await? > 0)
    }

    /// Stored memberships of a player, empty when the player is unknown.
    pub async fn player_team_ids(&self, id: i32) -> Result<Vec<i32>, AppError> {
        Ok(PlayerTeam::find()
            .filter(player_team::Column::PlayerId.eq(id))
            .order_by_asc(player_team::Column::TeamId)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| m.team_id)
            .collect())
    }

    async fn resolve_players(&self, players: Vec<PlayerModel>) -> Result<Vec<PlayerView>, AppError> {
        if players.is_empty() {
            return Ok(Vec::new());
        }
        let memberships = PlayerTeam::find()
            .filter(player_team::Column::PlayerId.is_in(players.iter().map(|p| p.id)))
            .order_by_asc(player_team::Column::TeamId)
            .all(&self.db)
            .await?;

        let team_ids: Vec<i32> = memberships
            .iter()
            .map(|m| m.team_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let teams = team_summaries(&self.db, &team_ids).await?;

        let mut by_player: HashMap<i32, Vec<i32>> = HashMap::new();
        for m in memberships {
            by_player.entry(m.player_id).or_default().push(m.team_id);
        }

        Ok(players
            .into_iter()
            .map(|p| {
                let ids = by_player.remove(&p.id).unwrap_or_default();
                PlayerView::new(p, ids, &teams)
            })
            .collect())
    }

    pub async fn create_player(&self, payload: DBPlayerWrite) -> Result<i32, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let pid = Player::insert(PlayerActive {
            name: Set(payload.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&txn)
        .await?
        .last_insert_id;
        insert_memberships(&txn, pid, &payload.team_ids).await?;

        txn.commit().await?;
        debug!(player_id = pid, teams = ?payload.team_ids, "player created");
        Ok(pid)
    }

    /// Replaces name and the whole membership set.
    pub async fn update_player(&self, id: i32, payload: DBPlayerWrite) -> Result<i32, AppError> {
        let txn = self.db.begin().await?;
        let current = Player::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Player not found".into()))?;

        let mut am: PlayerActive = current.into();
        am.name = Set(payload.name);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;

        PlayerTeam::delete_many()
            .filter(player_team::Column::PlayerId.eq(id))
            .exec(&txn)
            .await?;
        insert_memberships(&txn, id, &payload.team_ids).await?;

        txn.commit().await?;
        debug!(player_id = id, teams = ?payload.team_ids, "player replaced");
        Ok(id)
    }

    /// Removes the player's attendance answers, then the player.
    pub async fn delete_player(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let answers = Attendance::delete_many()
            .filter(attendance::Column::PlayerId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;
        let deleted = Player::delete_by_id(id).exec(&txn).await?.rows_affected;
        if deleted == 0 {
            txn.rollback().await?;
            return Err(AppError::not_found("Player"));
        }
        txn.commit().await?;
        debug!(player_id = id, answers, "player deleted");
        Ok(())
    }
}

async fn insert_memberships<C: ConnectionTrait>(conn: &C, player_id: i32, team_ids: &[i32]) -> Result<(), DbErr> {
    if team_ids.is_empty() {
        return Ok(());
    }
    let now = Utc::now();
    PlayerTeam::insert_many(team_ids.iter().map(|&team_id| PlayerTeamActive {
        player_id: Set(player_id),
        team_id: Set(team_id),
        created_at: Set(now),
    }))
    .exec_without_returning(conn)
    .await?;
    Ok(())
}
