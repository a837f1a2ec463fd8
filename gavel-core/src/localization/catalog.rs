use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use strum::IntoEnumIterator;
use tracing::{info, warn};

use super::{Locale, LocalizationError, Message};

const EMBEDDED_EN: &str = include_str!("../../locales/en.json");
const EMBEDDED_DE: &str = include_str!("../../locales/de.json");

fn embedded_source(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EMBEDDED_EN,
        Locale::De => EMBEDDED_DE,
    }
}

/// Message templates for every supported locale.
///
/// Construction fails unless each locale defines every [`Message`] with a non-blank template.
#[derive(Debug)]
pub struct MessageCatalog {
    tables: HashMap<Locale, HashMap<Message, String>>,
}

impl MessageCatalog {
    /// Catalog compiled into the binary from `locales/*.json`.
    pub fn embedded() -> Result<Self, LocalizationError> {
        Self::from_sources(Locale::iter().map(|locale| (locale, embedded_source(locale))))
    }

    /// Catalog read from `<dir>/<tag>.json`, using the embedded table for any file that is absent.
    pub fn load_dir(dir: &Path) -> Result<Self, LocalizationError> {
        let mut sources = Vec::new();
        for locale in Locale::iter() {
            let path = dir.join(format!("{}.json", locale.tag()));
            if path.is_file() {
                let source = fs::read_to_string(&path)
                    .map_err(|source| LocalizationError::Io { path: path.clone(), source })?;
                info!(%locale, path = %path.display(), "loaded locale override");
                sources.push((locale, source));
            } else {
                sources.push((locale, embedded_source(locale).to_owned()));
            }
        }

        Self::from_sources(
            sources
                .iter()
                .map(|(locale, source)| (*locale, source.as_str())),
        )
    }

    /// Build from `(locale, json)` pairs. A later source for the same locale replaces an earlier one.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self, LocalizationError>
    where
        I: IntoIterator<Item = (Locale, &'a str)>,
    {
        let mut tables = HashMap::new();
        for (locale, source) in sources {
            tables.insert(locale, parse_table(locale, source)?);
        }

        for locale in Locale::iter() {
            if !tables.contains_key(&locale) {
                return Err(LocalizationError::IncompleteCatalog {
                    locale,
                    missing: Message::iter().map(Message::key).collect(),
                });
            }
        }

        Ok(Self { tables })
    }

    pub fn template(&self, locale: Locale, message: Message) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(&message))
            .map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }
}

fn parse_table(locale: Locale, source: &str) -> Result<HashMap<Message, String>, LocalizationError> {
    let raw: BTreeMap<String, String> = serde_json::from_str(source)
        .map_err(|source| LocalizationError::InvalidCatalog { locale, source })?;

    let mut table = HashMap::with_capacity(raw.len());
    for (key, template) in raw {
        match Message::from_key(&key) {
            Some(message) => {
                table.insert(message, template);
            }
            None => warn!(%locale, key = %key, "ignoring unknown message key"),
        }
    }

    let missing: Vec<&'static str> = Message::iter()
        .filter(|message| table.get(message).is_none_or(|template| template.trim().is_empty()))
        .map(Message::key)
        .collect();
    if !missing.is_empty() {
        return Err(LocalizationError::IncompleteCatalog { locale, missing });
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use strum::IntoEnumIterator;

    use super::{EMBEDDED_DE, EMBEDDED_EN, MessageCatalog};
    use crate::localization::{Locale, LocalizationError, Message};

    #[test]
    fn embedded_catalog_is_complete_for_every_locale() {
        let catalog = MessageCatalog::embedded().unwrap();
        for locale in Locale::iter() {
            for message in Message::iter() {
                assert!(
                    catalog.template(locale, message).is_some(),
                    "{} missing for {}",
                    message.key(),
                    locale
                );
            }
        }
    }

    #[test]
    fn rejects_tables_with_missing_keys() {
        let err = MessageCatalog::from_sources([
            (Locale::En, EMBEDDED_EN),
            (Locale::De, r#"{"ban.default_reason": "Regelverstoß"}"#),
        ])
        .unwrap_err();

        match err {
            LocalizationError::IncompleteCatalog { locale, missing } => {
                assert_eq!(locale, Locale::De);
                assert!(missing.contains(&"ban.message"));
                assert!(!missing.contains(&"ban.default_reason"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_templates() {
        let blanked = EMBEDDED_EN.replace(
            "\"Breaking the server rules\"",
            "\"   \"",
        );
        let err = MessageCatalog::from_sources([(Locale::En, blanked.as_str()), (Locale::De, EMBEDDED_DE)])
            .unwrap_err();

        assert!(matches!(
            err,
            LocalizationError::IncompleteCatalog { missing, .. } if missing == vec!["ban.default_reason"]
        ));
    }

    #[test]
    fn rejects_missing_locale() {
        let err = MessageCatalog::from_sources([(Locale::En, EMBEDDED_EN)]).unwrap_err();
        assert!(matches!(
            err,
            LocalizationError::IncompleteCatalog { locale: Locale::De, .. }
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = MessageCatalog::from_sources([(Locale::En, "{not json")]).unwrap_err();
        assert!(matches!(
            err,
            LocalizationError::InvalidCatalog { locale: Locale::En, .. }
        ));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let extended = EMBEDDED_EN.replacen('{', "{\n  \"legacy.key\": \"unused\",", 1);
        assert!(MessageCatalog::from_sources([(Locale::En, extended.as_str()), (Locale::De, EMBEDDED_DE)]).is_ok());
    }

    #[test]
    fn directory_overrides_fall_back_to_embedded() {
        let dir = std::env::temp_dir().join(format!("gavel-locales-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let custom = EMBEDDED_EN.replace("Breaking the server rules", "Custom reason");
        fs::write(dir.join("en.json"), custom).unwrap();

        let catalog = MessageCatalog::load_dir(&dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(
            catalog.template(Locale::En, Message::BanDefaultReason),
            Some("Custom reason")
        );
        assert_eq!(
            catalog.template(Locale::De, Message::BanDefaultReason),
            Some("Verstoß gegen die Serverregeln")
        );
    }
}
