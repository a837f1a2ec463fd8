use ::time::OffsetDateTime;
use ::time::format_description::BorrowedFormatItem;
use ::time::macros::format_description;

/// Display format for every timestamp shown to players (`dd-MM-yyyy HH:mm`).
pub const DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day]-[month]-[year] [hour]:[minute]");

/// Return the current time in UTC.
pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Format a timestamp with [`DATE_TIME_FORMAT`].
pub fn format_date(date: OffsetDateTime) -> String {
    format_date_with(date, DATE_TIME_FORMAT)
}

/// Format a timestamp with a caller-supplied format, falling back to its `Display` output.
pub fn format_date_with(date: OffsetDateTime, format: &[BorrowedFormatItem<'_>]) -> String {
    date.format(format).unwrap_or_else(|_| date.to_string())
}

/// Convert stored unix seconds back into a timestamp.
pub fn from_unix_secs(seconds: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp(seconds).ok()
}
