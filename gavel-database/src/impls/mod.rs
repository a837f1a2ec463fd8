pub mod accounts;
pub mod bans;

fn timestamp(column: &str, seconds: i64) -> Result<time::OffsetDateTime, sqlx::Error> {
    gavel_utils::time::from_unix_secs(seconds)
        .ok_or_else(|| sqlx::Error::Decode(format!("{column} out of range: {seconds}").into()))
}
