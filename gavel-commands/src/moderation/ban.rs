use tracing::{debug, error, info};

use crate::CommandMeta;
use crate::moderation::reasons::matching_reasons;
use crate::moderation::reply::{say, say_with};
use gavel_core::context::builders::{
    allowed_units_context, ban_context, duration_context, player_context, target_player_context,
    unknown_unit_context,
};
use gavel_core::{CommandSender, ContextProperties, Data, Error, Message, combine};
use gavel_database::BanError;
use gavel_utils::BAN_PERMISSION;
use gavel_utils::formatting::strip_color;
use gavel_utils::parse::{DurationError, parse_until, suggest_durations};
use gavel_utils::time::{format_date, now_utc};

pub const META: CommandMeta = CommandMeta {
    name: "ban",
    aliases: &["tempban"],
    desc: "Ban a player for a duration (default: permanent).",
    usage: "/ban <player> [duration, e.g. 5w7d4h] [reason]",
    permission: BAN_PERMISSION,
};

/// `/ban <player> [duration] [reason...]`
///
/// Every expected failure is answered with a localized reply; only rendering
/// faults are returned to the caller.
pub async fn ban(data: &Data, sender: &dyn CommandSender, args: &[String]) -> Result<(), Error> {
    if !sender.is_console() && !sender.has_permission(META.permission) {
        return say(data, sender, Message::NoPermission);
    }

    let Some(target) = args.first() else {
        return say(data, sender, Message::BanArgsNotEnough);
    };

    if sender.name().eq_ignore_ascii_case(target) {
        return say_with(data, sender, player_context(sender.name()), Message::BanSelfBan);
    }

    let duration = args
        .get(1)
        .map_or(data.settings.default_duration.as_str(), String::as_str);

    let until = match parse_until(duration, now_utc()) {
        Ok(until) => until,
        Err(DurationError::UnknownUnit { unit }) => {
            debug!(duration, %unit, "unknown duration unit");
            return say_with(
                data,
                sender,
                combine([
                    player_context(sender.name()),
                    allowed_units_context(),
                    unknown_unit_context(unit),
                ]),
                Message::DurationInvalidUnit,
            );
        }
        Err(source) => {
            debug!(?source, duration, "rejected ban duration");
            return say_with(
                data,
                sender,
                combine([player_context(sender.name()), duration_context(duration)]),
                Message::DurationInvalid,
            );
        }
    };

    let reason = match args.get(2..).map(|rest| strip_color(&rest.join(" "))) {
        Some(reason) if !reason.trim().is_empty() => reason.trim().to_owned(),
        _ => strip_color(&data.messages.receive(Message::BanDefaultReason)?),
    };

    match data.bans.ban_player(target, sender.name(), until, &reason).await {
        Ok(ban) => {
            let kick_message = data
                .messages
                .receive_with(&ContextProperties::of(ban_context(&ban))?, Message::BanMessage)?;
            let kicked = data.players.kick(&ban.target_name, &kick_message);

            info!(
                ban_id = ban.id,
                target = %ban.target_name,
                actor = %ban.actor_name,
                until = %format_date(ban.until),
                kicked,
                "player banned"
            );

            say_with(
                data,
                sender,
                combine([
                    player_context(sender.name()),
                    target_player_context(&ban.target_name),
                ]),
                Message::BanSuccessful,
            )
        }
        Err(BanError::AccountNotFound { player_name }) => {
            say_with(data, sender, player_context(&player_name), Message::UserNoAccount)
        }
        Err(BanError::Storage(source)) => {
            error!(
                ?source,
                target = %target,
                actor = %sender.name(),
                "failed to persist ban"
            );
            say_with(data, sender, player_context(sender.name()), Message::BanError)
        }
    }
}

/// Tab-completion for `/ban`: online players, then durations, then example reasons.
pub fn complete(data: &Data, sender: &dyn CommandSender, args: &[String]) -> Vec<String> {
    match args {
        [partial] => {
            let partial = partial.to_lowercase();
            let mut players: Vec<String> = data
                .players
                .online_players()
                .into_iter()
                .filter(|name| !name.eq_ignore_ascii_case(sender.name()))
                .filter(|name| name.to_lowercase().starts_with(&partial))
                .collect();
            players.sort_unstable();
            players
        }
        [_, partial] => suggest_durations(partial),
        [_, _, partial] => matching_reasons(partial),
        _ => Vec::new(),
    }
}
