use async_trait::async_trait;
use time::OffsetDateTime;
use tracing::debug;

use crate::{
    database::Database,
    facade::{BanError, BanFacade},
    impls::{accounts, timestamp},
    model::{accounts::Account, bans::BanRecord},
};

pub struct NewBan<'a> {
    pub account_id: i64,
    pub actor_name: &'a str,
    pub reason: &'a str,
    pub created_at: OffsetDateTime,
    pub until: OffsetDateTime,
}

#[derive(sqlx::FromRow)]
struct BanRow {
    id: i64,
    target_name: String,
    actor_name: String,
    reason: String,
    created_at: i64,
    until_at: i64,
}

impl TryFrom<BanRow> for BanRecord {
    type Error = sqlx::Error;

    fn try_from(row: BanRow) -> Result<Self, Self::Error> {
        Ok(BanRecord {
            id: row.id,
            target_name: row.target_name,
            actor_name: row.actor_name,
            reason: row.reason,
            created_at: timestamp("created_at", row.created_at)?,
            until: timestamp("until_at", row.until_at)?,
        })
    }
}

/// Insert a ban row and return its id.
pub async fn insert_ban(db: &Database, ban: NewBan<'_>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO bans (account_id, actor_name, reason, created_at, until_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(ban.account_id)
    .bind(ban.actor_name)
    .bind(ban.reason)
    .bind(ban.created_at.unix_timestamp())
    .bind(ban.until.unix_timestamp())
    .fetch_one(db.pool())
    .await
}

/// Latest ban for the named account whose expiry lies after `now`.
pub async fn latest_active_ban(
    db: &Database,
    name: &str,
    now: OffsetDateTime,
) -> Result<Option<BanRecord>, sqlx::Error> {
    let row: Option<BanRow> = sqlx::query_as(
        "SELECT b.id, a.name AS target_name, b.actor_name, b.reason, b.created_at, b.until_at
         FROM bans b
         JOIN accounts a ON a.id = b.account_id
         WHERE lower(a.name) = lower($1) AND b.until_at > $2
         ORDER BY b.created_at DESC, b.id DESC
         LIMIT 1",
    )
    .bind(name)
    .bind(now.unix_timestamp())
    .fetch_optional(db.pool())
    .await?;

    row.map(BanRecord::try_from).transpose()
}

/// [`BanFacade`] backed by the Postgres schema in `migrations/`.
#[derive(Clone, Debug)]
pub struct PgBanFacade {
    db: Database,
}

impl PgBanFacade {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BanFacade for PgBanFacade {
    async fn ban_player(
        &self,
        target_name: &str,
        actor_name: &str,
        until: OffsetDateTime,
        reason: &str,
    ) -> Result<BanRecord, BanError> {
        let Some(account) = accounts::find_account_by_name(&self.db, target_name).await? else {
            return Err(BanError::AccountNotFound {
                player_name: target_name.to_owned(),
            });
        };

        let created_at = gavel_utils::time::now_utc();
        let id = insert_ban(
            &self.db,
            NewBan {
                account_id: account.id,
                actor_name,
                reason,
                created_at,
                until,
            },
        )
        .await?;
        debug!(ban_id = id, target = %account.name, "ban row inserted");

        Ok(BanRecord {
            id,
            target_name: account.name,
            actor_name: actor_name.to_owned(),
            reason: reason.to_owned(),
            created_at,
            until,
        })
    }

    async fn record_login(&self, player_name: &str) -> Result<Account, BanError> {
        Ok(accounts::upsert_account(&self.db, player_name, gavel_utils::time::now_utc()).await?)
    }

    async fn active_ban(
        &self,
        player_name: &str,
        now: OffsetDateTime,
    ) -> Result<Option<BanRecord>, BanError> {
        Ok(latest_active_ban(&self.db, player_name, now).await?)
    }
}
