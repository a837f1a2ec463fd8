use time::OffsetDateTime;

use crate::{database::Database, impls::timestamp, model::accounts::Account};

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i64,
    name: String,
    first_seen: i64,
    last_seen: i64,
}

impl TryFrom<AccountRow> for Account {
    type Error = sqlx::Error;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: row.id,
            name: row.name,
            first_seen: timestamp("first_seen", row.first_seen)?,
            last_seen: timestamp("last_seen", row.last_seen)?,
        })
    }
}

/// Insert the account or refresh its spelling and `last_seen`.
pub async fn upsert_account(
    db: &Database,
    name: &str,
    now: OffsetDateTime,
) -> Result<Account, sqlx::Error> {
    let row: AccountRow = sqlx::query_as(
        "INSERT INTO accounts (name, first_seen, last_seen) VALUES ($1, $2, $2)
         ON CONFLICT ((lower(name))) DO UPDATE SET name = EXCLUDED.name, last_seen = EXCLUDED.last_seen
         RETURNING id, name, first_seen, last_seen",
    )
    .bind(name)
    .bind(now.unix_timestamp())
    .fetch_one(db.pool())
    .await?;

    row.try_into()
}

/// Case-insensitive account lookup.
pub async fn find_account_by_name(
    db: &Database,
    name: &str,
) -> Result<Option<Account>, sqlx::Error> {
    let row: Option<AccountRow> = sqlx::query_as(
        "SELECT id, name, first_seen, last_seen FROM accounts WHERE lower(name) = lower($1)",
    )
    .bind(name)
    .fetch_optional(db.pool())
    .await?;

    row.map(Account::try_from).transpose()
}
