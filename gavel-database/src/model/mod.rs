pub mod accounts;
pub mod bans;
