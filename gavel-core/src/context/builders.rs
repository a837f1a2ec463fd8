//! Pair lists describing one fact each, meant to be merged with [`combine`](super::combine).

use gavel_database::model::bans::BanRecord;
use gavel_utils::formatting::format_compact_duration;
use gavel_utils::parse::allowed_identifiers;
use gavel_utils::time::format_date;

use super::Pair;

pub const PLAYER: &str = "player";
pub const TARGET: &str = "target";
pub const UNITS: &str = "units";
pub const UNIT: &str = "unit";
pub const DURATION: &str = "duration";
pub const ACTOR: &str = "actor";
pub const REASON: &str = "reason";
pub const UNTIL: &str = "until";
pub const BANNED_AT: &str = "banned_at";

/// The player the message is addressed to or about.
pub fn player_context(name: &str) -> Vec<Pair> {
    vec![Pair::new(PLAYER, name)]
}

pub fn target_player_context(name: &str) -> Vec<Pair> {
    vec![Pair::new(TARGET, name)]
}

/// Every accepted duration unit letter, comma separated.
pub fn allowed_units_context() -> Vec<Pair> {
    vec![Pair::new(UNITS, allowed_identifiers().join(", "))]
}

pub fn unknown_unit_context(unit: char) -> Vec<Pair> {
    vec![Pair::new(UNIT, unit.to_string())]
}

/// The raw duration argument as typed.
pub fn duration_context(raw: &str) -> Vec<Pair> {
    vec![Pair::new(DURATION, raw)]
}

/// Who was banned, by whom, why, when and until when.
pub fn ban_context(ban: &BanRecord) -> Vec<Pair> {
    vec![
        Pair::new(TARGET, ban.target_name.as_str()),
        Pair::new(ACTOR, ban.actor_name.as_str()),
        Pair::new(REASON, ban.reason.as_str()),
        Pair::new(UNTIL, format_date(ban.until)),
        Pair::new(BANNED_AT, format_date(ban.created_at)),
        Pair::new(DURATION, format_compact_duration(ban.duration_seconds())),
    ]
}

#[cfg(test)]
mod tests {
    use gavel_database::model::bans::BanRecord;
    use time::macros::datetime;

    use super::{allowed_units_context, ban_context, player_context};
    use crate::context::{ContextProperties, combine};

    #[test]
    fn units_context_lists_every_letter() {
        let ctx = ContextProperties::of(allowed_units_context()).unwrap();
        assert_eq!(ctx.get("units").as_deref(), Some("s, m, h, d, w, M, y"));
    }

    #[test]
    fn ban_context_formats_dates() {
        let ban = BanRecord {
            id: 7,
            target_name: "Notch".to_owned(),
            actor_name: "CONSOLE".to_owned(),
            reason: "griefing".to_owned(),
            created_at: datetime!(2026-10-16 12:00 UTC),
            until: datetime!(2026-10-23 13:30 UTC),
        };

        let ctx = ContextProperties::of(combine([player_context("Alex"), ban_context(&ban)])).unwrap();

        assert_eq!(ctx.get("player").as_deref(), Some("Alex"));
        assert_eq!(ctx.get("target").as_deref(), Some("Notch"));
        assert_eq!(ctx.get("actor").as_deref(), Some("CONSOLE"));
        assert_eq!(ctx.get("reason").as_deref(), Some("griefing"));
        assert_eq!(ctx.get("until").as_deref(), Some("23-10-2026 13:30"));
        assert_eq!(ctx.get("banned_at").as_deref(), Some("16-10-2026 12:00"));
        assert_eq!(ctx.get("duration").as_deref(), Some("1w"));
    }
}
