use regex::Regex;
use std::sync::LazyLock;

// Kinopoisk appends the running time to the original-title line,
// e.g. "Inception, 148 мин".
static DURATION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",?\s*\d+\s*мин\s*$").unwrap());

/// Strip a trailing duration annotation from a scraped title line.
/// Applying it to an already-clean title is a no-op.
pub fn clean_title(raw: &str) -> String {
    DURATION_SUFFIX.replace(raw.trim(), "").trim().to_string()
}
