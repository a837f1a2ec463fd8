use std::sync::Arc;

use gavel_database::BanFacade;

pub mod context;
pub mod host;
pub mod localization;

pub use context::{ContextError, ContextProperties, Pair, combine};
pub use host::{CommandSender, PlayerDirectory};
pub use localization::{Locale, LocalizationError, Message, MessageCatalog, MessageService};

pub type Error = anyhow::Error;

/// Tunables for the ban command that come from configuration.
#[derive(Clone, Debug)]
pub struct BanSettings {
    /// Duration applied when `/ban` is given no duration argument.
    pub default_duration: String,
}

impl Default for BanSettings {
    fn default() -> Self {
        Self {
            default_duration: gavel_utils::parse::PERMANENT_DURATION.to_owned(),
        }
    }
}

/// Everything a command invocation needs, built once by the host.
#[derive(Clone)]
pub struct Data {
    pub bans: Arc<dyn BanFacade>,
    pub players: Arc<dyn PlayerDirectory>,
    pub messages: MessageService,
    pub settings: BanSettings,
}
