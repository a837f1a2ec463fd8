use time::OffsetDateTime;

/// A persisted ban. `target_name` is the account's canonical spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BanRecord {
    pub id: i64,
    pub target_name: String,
    pub actor_name: String,
    pub reason: String,
    pub created_at: OffsetDateTime,
    pub until: OffsetDateTime,
}

impl BanRecord {
    pub fn is_active_at(&self, now: OffsetDateTime) -> bool {
        self.until > now
    }

    /// Whole seconds between issuing and expiry.
    pub fn duration_seconds(&self) -> u64 {
        u64::try_from((self.until - self.created_at).whole_seconds()).unwrap_or(0)
    }
}
