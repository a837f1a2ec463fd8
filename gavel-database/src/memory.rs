use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use time::OffsetDateTime;

use crate::{
    facade::{BanError, BanFacade},
    model::{accounts::Account, bans::BanRecord},
};

/// Process-local [`BanFacade`] used when no database is configured, and in tests.
#[derive(Debug, Default)]
pub struct MemoryBanFacade {
    accounts: DashMap<String, Account>,
    bans: DashMap<i64, BanRecord>,
    next_account_id: AtomicI64,
    next_ban_id: AtomicI64,
}

impl MemoryBanFacade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register accounts as if each had logged in once.
    pub fn with_accounts<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let facade = Self::new();
        let now = gavel_utils::time::now_utc();
        for name in names {
            facade.upsert(name.as_ref(), now);
        }
        facade
    }

    pub fn bans(&self) -> Vec<BanRecord> {
        let mut bans: Vec<BanRecord> = self.bans.iter().map(|entry| entry.value().clone()).collect();
        bans.sort_by_key(|ban| ban.id);
        bans
    }

    fn upsert(&self, name: &str, now: OffsetDateTime) -> Account {
        let mut entry = self
            .accounts
            .entry(name.to_lowercase())
            .or_insert_with(|| Account {
                id: self.next_account_id.fetch_add(1, Ordering::Relaxed) + 1,
                name: name.to_owned(),
                first_seen: now,
                last_seen: now,
            });
        entry.name = name.to_owned();
        entry.last_seen = now;
        entry.clone()
    }
}

#[async_trait]
impl BanFacade for MemoryBanFacade {
    async fn ban_player(
        &self,
        target_name: &str,
        actor_name: &str,
        until: OffsetDateTime,
        reason: &str,
    ) -> Result<BanRecord, BanError> {
        let Some(account) = self
            .accounts
            .get(&target_name.to_lowercase())
            .map(|entry| entry.value().clone())
        else {
            return Err(BanError::AccountNotFound {
                player_name: target_name.to_owned(),
            });
        };

        let ban = BanRecord {
            id: self.next_ban_id.fetch_add(1, Ordering::Relaxed) + 1,
            target_name: account.name,
            actor_name: actor_name.to_owned(),
            reason: reason.to_owned(),
            created_at: gavel_utils::time::now_utc(),
            until,
        };
        self.bans.insert(ban.id, ban.clone());
        Ok(ban)
    }

    async fn record_login(&self, player_name: &str) -> Result<Account, BanError> {
        Ok(self.upsert(player_name, gavel_utils::time::now_utc()))
    }

    async fn active_ban(
        &self,
        player_name: &str,
        now: OffsetDateTime,
    ) -> Result<Option<BanRecord>, BanError> {
        let key = player_name.to_lowercase();
        let active = self
            .bans
            .iter()
            .filter(|entry| entry.target_name.to_lowercase() == key)
            .filter(|entry| entry.is_active_at(now))
            .max_by_key(|entry| (entry.created_at, entry.id))
            .map(|entry| entry.value().clone());

        Ok(active)
    }
}
