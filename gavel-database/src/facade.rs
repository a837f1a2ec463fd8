use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;

use crate::model::accounts::Account;
use crate::model::bans::BanRecord;

#[derive(Debug, Error)]
pub enum BanError {
    /// The target name does not belong to any known account.
    #[error("no account found for player `{player_name}`")]
    AccountNotFound { player_name: String },
    #[error("ban storage failed")]
    Storage(#[from] sqlx::Error),
}

/// Boundary through which bans are created and looked up.
#[async_trait]
pub trait BanFacade: Send + Sync {
    /// Persist a ban for `target_name` issued by `actor_name`, lasting until `until`.
    async fn ban_player(
        &self,
        target_name: &str,
        actor_name: &str,
        until: OffsetDateTime,
        reason: &str,
    ) -> Result<BanRecord, BanError>;

    /// Create the account on first sight, refresh `last_seen` otherwise.
    async fn record_login(&self, player_name: &str) -> Result<Account, BanError>;

    /// The latest ban for `player_name` that is still running at `now`.
    async fn active_ban(
        &self,
        player_name: &str,
        now: OffsetDateTime,
    ) -> Result<Option<BanRecord>, BanError>;
}
