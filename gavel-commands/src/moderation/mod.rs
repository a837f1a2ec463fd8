pub mod ban;
pub mod login;
pub mod reasons;

mod reply;
