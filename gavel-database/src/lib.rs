pub mod database;
pub mod facade;
pub mod impls;
pub mod memory;
pub mod model;

pub use database::{Database, MIGRATOR};
pub use facade::{BanError, BanFacade};
pub use impls::bans::PgBanFacade;
pub use memory::MemoryBanFacade;
