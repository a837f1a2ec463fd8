mod catalog;
mod messages;
mod service;

use std::fmt;
use std::path::PathBuf;

use strum::EnumIter;
use thiserror::Error;

pub use catalog::MessageCatalog;
pub use messages::Message;
pub use service::{MessageService, render_template};

/// Locales a catalog must provide every message for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Accepts bare language tags and region-qualified ones (`de`, `de-AT`, `en_US`).
    pub fn parse(value: &str) -> Result<Self, LocalizationError> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            _ => Err(LocalizationError::UnknownLocale(value.to_owned())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("message `{key}` is missing for locale `{locale}`")]
    MissingMessage { locale: Locale, key: &'static str },
    #[error("unsupported locale `{0}`")]
    UnknownLocale(String),
    #[error("locale table `{locale}` is not valid JSON")]
    InvalidCatalog {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
    #[error("locale table `{locale}` is missing {}", .missing.join(", "))]
    IncompleteCatalog {
        locale: Locale,
        missing: Vec<&'static str>,
    },
    #[error("failed to read locale table {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
