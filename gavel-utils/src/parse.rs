use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::debug;

/// Duration used when a ban is issued without an explicit duration.
pub const PERMANENT_DURATION: &str = "999y";

/// A unit a duration segment can be expressed in. Letters are case-sensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum DurationUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl DurationUnit {
    pub const fn letter(self) -> char {
        match self {
            Self::Second => 's',
            Self::Minute => 'm',
            Self::Hour => 'h',
            Self::Day => 'd',
            Self::Week => 'w',
            Self::Month => 'M',
            Self::Year => 'y',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Length of one unit in seconds. Months are 30 days, years 365 days.
    pub const fn seconds(self) -> u64 {
        match self {
            Self::Second => 1,
            Self::Minute => 60,
            Self::Hour => 60 * 60,
            Self::Day => 60 * 60 * 24,
            Self::Week => 60 * 60 * 24 * 7,
            Self::Month => 60 * 60 * 24 * 30,
            Self::Year => 60 * 60 * 24 * 365,
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::iter().find(|unit| unit.letter() == letter)
    }
}

/// One `<quantity><unit>` segment of a duration string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurationToken {
    pub quantity: u64,
    pub unit: DurationUnit,
}

impl DurationToken {
    fn seconds(self) -> Option<u64> {
        self.quantity.checked_mul(self.unit.seconds())
    }
}

/// Tokens of a duration string in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedDuration {
    tokens: Vec<DurationToken>,
}

impl ParsedDuration {
    pub fn tokens(&self) -> &[DurationToken] {
        &self.tokens
    }

    /// Sum of all tokens. Repeated units add up.
    pub fn total_seconds(&self) -> Result<u64, DurationError> {
        self.tokens.iter().try_fold(0_u64, |total, token| {
            token
                .seconds()
                .and_then(|seconds| total.checked_add(seconds))
                .ok_or(DurationError::Overflow)
        })
    }

    /// Offset `now` by the total length of this duration.
    pub fn apply(&self, now: OffsetDateTime) -> Result<OffsetDateTime, DurationError> {
        let seconds =
            i64::try_from(self.total_seconds()?).map_err(|_| DurationError::Overflow)?;

        now.checked_add(time::Duration::seconds(seconds))
            .ok_or(DurationError::Overflow)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("duration is empty")]
    Empty,
    #[error("unknown duration unit `{unit}`")]
    UnknownUnit { unit: char },
    #[error("duration ends with `{quantity}` but no unit")]
    MissingUnit { quantity: String },
    #[error("duration unit `{unit}` has no quantity")]
    MissingQuantity { unit: char },
    #[error("duration is too large")]
    Overflow,
}

impl DurationError {
    /// The offending letter, when the failure is an unknown unit.
    pub fn unknown_unit(&self) -> Option<char> {
        match self {
            Self::UnknownUnit { unit } => Some(*unit),
            _ => None,
        }
    }
}

/// Split a compact duration like `5w7d4h` into its tokens.
///
/// Fails fast on the first character that is neither a digit nor a known unit letter.
pub fn parse_duration(raw: &str) -> Result<ParsedDuration, DurationError> {
    if raw.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut tokens = Vec::new();
    let mut digits = String::new();

    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }

        let Some(unit) = DurationUnit::from_letter(ch) else {
            return Err(DurationError::UnknownUnit { unit: ch });
        };

        if digits.is_empty() {
            return Err(DurationError::MissingQuantity { unit: ch });
        }

        let quantity = digits.parse::<u64>().map_err(|_| DurationError::Overflow)?;
        tokens.push(DurationToken { quantity, unit });
        digits.clear();
    }

    if !digits.is_empty() {
        return Err(DurationError::MissingUnit { quantity: digits });
    }

    Ok(ParsedDuration { tokens })
}

/// Parse `raw` and return the point in time it reaches from `now`.
pub fn parse_until(raw: &str, now: OffsetDateTime) -> Result<OffsetDateTime, DurationError> {
    let parsed = parse_duration(raw)?;
    let until = parsed.apply(now)?;
    debug!(duration = raw, %until, "parsed duration");
    Ok(until)
}

/// All valid unit letters, in ascending unit length.
pub fn allowed_identifiers() -> Vec<String> {
    DurationUnit::iter()
        .map(|unit| unit.letter().to_string())
        .collect()
}

/// Completion candidates for a partially typed duration segment.
///
/// Trailing digits are kept and every unit letter is offered after them.
pub fn suggest_durations(partial: &str) -> Vec<String> {
    let digits_start = partial
        .char_indices()
        .rev()
        .take_while(|(_, ch)| ch.is_ascii_digit())
        .last()
        .map_or(partial.len(), |(idx, _)| idx);

    if parse_duration(&partial[..digits_start]).is_err() && digits_start > 0 {
        return Vec::new();
    }

    let quantity = &partial[digits_start..];
    let quantity = if quantity.is_empty() { "1" } else { quantity };
    let prefix = &partial[..digits_start];

    DurationUnit::iter()
        .map(|unit| format!("{}{}{}", prefix, quantity, unit.letter()))
        .collect()
}
