use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub first_seen: OffsetDateTime,
    pub last_seen: OffsetDateTime,
}
