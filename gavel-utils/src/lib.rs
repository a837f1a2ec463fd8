/// Shared formatting helpers (colour codes, compact durations).
pub mod formatting;
/// Permission node required to run the ban command.
pub const BAN_PERMISSION: &str = "gavel.ban";
/// Pure parser helpers.
pub mod parse;
/// Shared time helpers.
pub mod time;
