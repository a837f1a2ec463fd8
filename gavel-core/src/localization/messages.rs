use strum::{EnumIter, IntoEnumIterator};

/// Every user-facing message. Each variant maps to one key in the locale tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Message {
    NoPermission,
    BanArgsNotEnough,
    BanSelfBan,
    BanError,
    DurationInvalidUnit,
    DurationInvalid,
    UserNoAccount,
    BanDefaultReason,
    BanMessage,
    BanSuccessful,
}

impl Message {
    pub const fn key(self) -> &'static str {
        match self {
            Self::NoPermission => "errors.no_permission",
            Self::BanArgsNotEnough => "errors.ban.args_not_enough",
            Self::BanSelfBan => "errors.ban.self_ban",
            Self::BanError => "errors.ban.error",
            Self::DurationInvalidUnit => "errors.duration.invalid_unit",
            Self::DurationInvalid => "errors.duration.invalid",
            Self::UserNoAccount => "errors.user.no_account",
            Self::BanDefaultReason => "ban.default_reason",
            Self::BanMessage => "ban.message",
            Self::BanSuccessful => "success.ban.successful",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::iter().find(|message| message.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::Message;

    #[test]
    fn keys_are_unique_and_round_trip() {
        let keys: HashSet<_> = Message::iter().map(Message::key).collect();
        assert_eq!(keys.len(), Message::iter().count());

        for message in Message::iter() {
            assert_eq!(Message::from_key(message.key()), Some(message));
        }
        assert_eq!(Message::from_key("errors.unknown"), None);
    }
}
