mod config;
mod console;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;
use sqlx::postgres::PgPoolOptions;

use gavel_core::{BanSettings, Data, MessageCatalog, MessageService};
use gavel_database::{BanFacade, Database, MemoryBanFacade, PgBanFacade};

use crate::config::ConsoleConfig;
use crate::console::OnlinePlayers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the .env file
    dotenvy::dotenv().ok();

    let config = ConsoleConfig::from_env()?;

    let max_level = if config.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(move |metadata| {
        if *metadata.level() > max_level {
            return false;
        }

        !(metadata.target().starts_with("sqlx::query") && *metadata.level() > tracing::Level::WARN)
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    let catalog = match &config.locale_dir {
        Some(dir) => MessageCatalog::load_dir(dir)?,
        None => MessageCatalog::embedded()?,
    };
    info!(locale = %config.locale, "Message catalog loaded.");

    let bans: Arc<dyn BanFacade> = match &config.database_url {
        Some(database_url) => {
            let db_pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await?;
            info!("PostgreSQL connection established.");

            let db = Database::new(db_pool);
            if config.auto_run_migrations {
                db.migrate().await?;
                info!("Database migrations applied.");
            } else {
                info!("Auto migrations disabled (set AUTO_RUN_MIGRATIONS=true to run at startup).");
            }

            Arc::new(PgBanFacade::new(db))
        }
        None => {
            warn!("DATABASE_URL is not set; bans are kept in memory and lost on shutdown.");
            Arc::new(MemoryBanFacade::new())
        }
    };

    let players = Arc::new(OnlinePlayers::default());
    let data = Data {
        bans,
        players: players.clone(),
        messages: MessageService::new(Arc::new(catalog), config.locale),
        settings: BanSettings {
            default_duration: config.default_duration.clone(),
        },
    };

    for name in &config.online_players {
        console::join(&data, &players, name).await;
    }

    info!("Gavel is ready.");
    console::run(&data, players).await
}
