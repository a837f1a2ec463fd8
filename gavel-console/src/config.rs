use std::env;
use std::path::PathBuf;

use anyhow::Context as _;

use gavel_core::Locale;
use gavel_utils::parse::{PERMANENT_DURATION, parse_until};
use gavel_utils::time::now_utc;

/// Settings read from the environment (and `.env`) at startup.
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    /// Postgres connection string. Without one, bans live in memory.
    pub database_url: Option<String>,
    pub locale: Locale,
    /// Directory with `<tag>.json` overrides for the embedded locale tables.
    pub locale_dir: Option<PathBuf>,
    pub default_duration: String,
    pub auto_run_migrations: bool,
    pub debug: bool,
    /// Players treated as connected when the console starts.
    pub online_players: Vec<String>,
}

impl ConsoleConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let locale = match non_empty("GAVEL_LOCALE") {
            Some(tag) => Locale::parse(&tag).context("invalid GAVEL_LOCALE")?,
            None => Locale::default(),
        };

        let default_duration = non_empty("GAVEL_DEFAULT_DURATION")
            .map(|value| value.trim().to_owned())
            .unwrap_or_else(|| PERMANENT_DURATION.to_owned());
        parse_until(&default_duration, now_utc())
            .with_context(|| format!("invalid GAVEL_DEFAULT_DURATION `{default_duration}`"))?;

        let online_players = non_empty("GAVEL_ONLINE_PLAYERS")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url: non_empty("DATABASE_URL"),
            locale,
            locale_dir: non_empty("GAVEL_LOCALE_DIR").map(PathBuf::from),
            default_duration,
            auto_run_migrations: env_bool(lookup("AUTO_RUN_MIGRATIONS"), true),
            debug: env_bool(lookup("GAVEL_DEBUG"), false),
            online_players,
        })
    }
}

fn env_bool(value: Option<String>, default: bool) -> bool {
    match value {
        Some(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use gavel_core::Locale;

    use super::ConsoleConfig;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ConsoleConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        ConsoleConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]).unwrap();

        assert_eq!(config.database_url, None);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.default_duration, "999y");
        assert!(config.auto_run_migrations);
        assert!(!config.debug);
        assert!(config.online_players.is_empty());
    }

    #[test]
    fn reads_every_setting() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/gavel"),
            ("GAVEL_LOCALE", "de-AT"),
            ("GAVEL_LOCALE_DIR", "/etc/gavel/locales"),
            ("GAVEL_DEFAULT_DURATION", " 30d "),
            ("AUTO_RUN_MIGRATIONS", "off"),
            ("GAVEL_DEBUG", "YES"),
            ("GAVEL_ONLINE_PLAYERS", "Notch, jeb_,,Dinnerbone "),
        ])
        .unwrap();

        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/gavel"));
        assert_eq!(config.locale, Locale::De);
        assert_eq!(
            config.locale_dir.as_deref(),
            Some(std::path::Path::new("/etc/gavel/locales"))
        );
        assert_eq!(config.default_duration, "30d");
        assert!(!config.auto_run_migrations);
        assert!(config.debug);
        assert_eq!(config.online_players, vec!["Notch", "jeb_", "Dinnerbone"]);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config(&[("DATABASE_URL", "  "), ("GAVEL_LOCALE", "")]).unwrap();
        assert_eq!(config.database_url, None);
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config(&[("GAVEL_LOCALE", "fr")]).is_err());
        let err = config(&[("GAVEL_DEFAULT_DURATION", "forever")]).unwrap_err();
        assert!(err.to_string().contains("GAVEL_DEFAULT_DURATION"));

        let err = config(&[("GAVEL_DEFAULT_DURATION", "9000y")]).unwrap_err();
        assert!(err.to_string().contains("9000y"));
    }
}
