pub mod moderation;

#[cfg(test)]
pub(crate) mod testing;

use gavel_core::{CommandSender, Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub desc: &'static str,
    pub usage: &'static str,
    pub permission: &'static str,
}

impl CommandMeta {
    pub fn matches(&self, label: &str) -> bool {
        self.name.eq_ignore_ascii_case(label)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(label))
    }
}

pub const COMMANDS: &[CommandMeta] = &[moderation::ban::META];

/// Run the command registered under `label`. Returns `Ok(false)` when no command matches.
pub async fn execute(
    data: &Data,
    sender: &dyn CommandSender,
    label: &str,
    args: &[String],
) -> Result<bool, Error> {
    if moderation::ban::META.matches(label) {
        moderation::ban::ban(data, sender, args).await?;
        return Ok(true);
    }

    Ok(false)
}

/// Tab-completion candidates for the command registered under `label`.
pub fn complete(data: &Data, sender: &dyn CommandSender, label: &str, args: &[String]) -> Vec<String> {
    if moderation::ban::META.matches(label) {
        return moderation::ban::complete(data, sender, args);
    }

    Vec::new()
}
