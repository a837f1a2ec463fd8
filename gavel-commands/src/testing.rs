use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use time::OffsetDateTime;

use gavel_core::{
    BanSettings, CommandSender, Data, Locale, MessageCatalog, MessageService, PlayerDirectory,
};
use gavel_database::model::accounts::Account;
use gavel_database::model::bans::BanRecord;
use gavel_database::{BanError, BanFacade, MemoryBanFacade};
use gavel_utils::BAN_PERMISSION;
use gavel_utils::formatting::colorize;

pub(crate) fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

/// Expected output for an English template written with `&` codes.
pub(crate) fn section(text: &str) -> String {
    colorize(text)
}

pub(crate) struct TestSender {
    name: String,
    console: bool,
    permissions: Vec<String>,
    messages: Mutex<Vec<String>>,
}

impl TestSender {
    pub(crate) fn console() -> Self {
        Self {
            name: "CONSOLE".to_owned(),
            console: true,
            permissions: Vec::new(),
            messages: Mutex::default(),
        }
    }

    pub(crate) fn player(name: &str, permissions: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            console: false,
            permissions: args(permissions),
            messages: Mutex::default(),
        }
    }

    pub(crate) fn moderator(name: &str) -> Self {
        Self::player(name, &[BAN_PERMISSION])
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl CommandSender for TestSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_console(&self) -> bool {
        self.console
    }

    fn has_permission(&self, node: &str) -> bool {
        self.permissions.iter().any(|granted| granted == node)
    }

    fn send_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}

#[derive(Default)]
pub(crate) struct TestPlayers {
    online: Mutex<Vec<String>>,
    kicked: Mutex<Vec<(String, String)>>,
}

impl TestPlayers {
    pub(crate) fn kicked(&self) -> Vec<(String, String)> {
        self.kicked.lock().unwrap().clone()
    }
}

impl PlayerDirectory for TestPlayers {
    fn online_players(&self) -> Vec<String> {
        self.online.lock().unwrap().clone()
    }

    fn kick(&self, name: &str, message: &str) -> bool {
        let mut online = self.online.lock().unwrap();
        let Some(idx) = online.iter().position(|player| player.eq_ignore_ascii_case(name)) else {
            return false;
        };
        online.remove(idx);
        self.kicked
            .lock()
            .unwrap()
            .push((name.to_owned(), message.to_owned()));
        true
    }
}

/// Facade whose every call fails with a storage error.
pub(crate) struct FailingFacade;

#[async_trait]
impl BanFacade for FailingFacade {
    async fn ban_player(
        &self,
        _target_name: &str,
        _actor_name: &str,
        _until: OffsetDateTime,
        _reason: &str,
    ) -> Result<BanRecord, BanError> {
        Err(BanError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn record_login(&self, _player_name: &str) -> Result<Account, BanError> {
        Err(BanError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn active_ban(
        &self,
        _player_name: &str,
        _now: OffsetDateTime,
    ) -> Result<Option<BanRecord>, BanError> {
        Err(BanError::Storage(sqlx::Error::PoolTimedOut))
    }
}

/// English `Data` over an in-memory facade with `accounts` registered and `online` connected.
pub(crate) fn data_with(accounts: &[&str], online: &[&str]) -> (Data, Arc<TestPlayers>) {
    let players = Arc::new(TestPlayers {
        online: Mutex::new(args(online)),
        kicked: Mutex::default(),
    });
    let catalog = Arc::new(MessageCatalog::embedded().unwrap());

    let data = Data {
        bans: Arc::new(MemoryBanFacade::with_accounts(accounts.iter().copied())),
        players: players.clone(),
        messages: MessageService::new(catalog, Locale::En),
        settings: BanSettings::default(),
    };

    (data, players)
}
