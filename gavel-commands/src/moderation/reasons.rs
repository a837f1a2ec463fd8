/// Reasons offered by tab-completion for the third `/ban` argument.
pub const EXAMPLE_BAN_REASONS: &[&str] = &[
    "Hacking",
    "Griefing",
    "Spamming",
    "Insulting",
    "Advertising",
    "Bug abuse",
    "Inappropriate skin",
    "Inappropriate name",
];

/// Example reasons starting with `prefix` (case-insensitive).
pub fn matching_reasons(prefix: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    EXAMPLE_BAN_REASONS
        .iter()
        .filter(|reason| reason.to_lowercase().starts_with(&prefix))
        .map(|reason| (*reason).to_owned())
        .collect()
}
