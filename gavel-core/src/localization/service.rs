use std::sync::Arc;

use gavel_utils::formatting::colorize;

use super::{Locale, LocalizationError, Message, MessageCatalog};
use crate::context::ContextProperties;

/// Renders messages from a [`MessageCatalog`] in one locale.
#[derive(Clone, Debug)]
pub struct MessageService {
    catalog: Arc<MessageCatalog>,
    locale: Locale,
}

impl MessageService {
    pub fn new(catalog: Arc<MessageCatalog>, locale: Locale) -> Self {
        Self { catalog, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Same catalog, different locale.
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            locale,
        }
    }

    /// The template with colour codes applied and no placeholder substitution.
    pub fn receive(&self, message: Message) -> Result<String, LocalizationError> {
        Ok(colorize(self.template(message)?))
    }

    /// The template with colour codes applied and `{name}` placeholders filled from `ctx`.
    pub fn receive_with(
        &self,
        ctx: &ContextProperties,
        message: Message,
    ) -> Result<String, LocalizationError> {
        Ok(render_template(&colorize(self.template(message)?), ctx))
    }

    fn template(&self, message: Message) -> Result<&str, LocalizationError> {
        self.catalog
            .template(self.locale, message)
            .ok_or(LocalizationError::MissingMessage {
                locale: self.locale,
                key: message.key(),
            })
    }
}

/// Replace every `{name}` whose `name` is in `ctx`.
///
/// Unknown placeholders and unbalanced braces are copied through unchanged.
/// Substituted values are not scanned again.
pub fn render_template(template: &str, ctx: &ContextProperties) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find(['{', '}']) {
            Some(close) if after[close..].starts_with('}') => {
                let name = &after[..close];
                match ctx.get(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
