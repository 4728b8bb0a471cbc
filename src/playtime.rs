//! Total playtime shown next to the library heading.

use crate::i18n::Translator;
use crate::models::UserGame;

/// Below this many minutes the total is shown in minutes, otherwise in hours.
pub const MAX_MINUTES_TO_SHOW_IN_PLAYTIME: f64 = 120.0;

pub fn total_play_time_seconds(games: &[UserGame]) -> u64 {
    games
        .iter()
        .fold(0u64, |acc, game| acc.saturating_add(game.play_time_in_seconds))
}

/// Presentation unit picked for a playtime total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayTime {
    /// Whole minutes, already rounded.
    Minutes(u64),
    /// Fractional hours, rounded only at formatting time.
    Hours(f64),
}

impl PlayTime {
    pub fn from_seconds(seconds: u64) -> Self {
        let minutes = seconds as f64 / 60.0;
        if minutes < MAX_MINUTES_TO_SHOW_IN_PLAYTIME {
            PlayTime::Minutes(minutes.round() as u64)
        } else {
            PlayTime::Hours(minutes / 60.0)
        }
    }
}

/// Localized total playtime of `games`, e.g. "42 minutes" or "1,204 hours".
pub fn format_play_time(
    games: &[UserGame],
    translator: &dyn Translator,
    numbers: &NumberFormatter,
) -> String {
    match PlayTime::from_seconds(total_play_time_seconds(games)) {
        PlayTime::Minutes(minutes) => {
            translator.translate("amount_minutes", &[("amount", &minutes.to_string())])
        }
        PlayTime::Hours(hours) => {
            translator.translate("amount_hours", &[("amount", &numbers.format(hours))])
        }
    }
}

/// Formats numbers with no fractional digits and the grouping rules of a locale.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatter {
    locale: String,
    group_separator: char,
    min_grouping_digits: usize,
}

impl NumberFormatter {
    pub fn new(locale: &str) -> Self {
        let lower = locale.to_ascii_lowercase();
        let primary = lower.split(['-', '_']).next().unwrap_or("");

        let (group_separator, min_grouping_digits) = match (primary, lower.as_str()) {
            (_, "pt-pt") => ('\u{a0}', 2),
            ("es" | "pl", _) => (if primary == "es" { '.' } else { '\u{a0}' }, 2),
            ("pt" | "de" | "it" | "nl" | "id" | "tr" | "da", _) => ('.', 1),
            ("fr" | "ru" | "uk" | "cs" | "sv" | "fi" | "nb" | "no", _) => ('\u{a0}', 1),
            _ => (',', 1),
        };

        Self {
            locale: locale.to_string(),
            group_separator,
            min_grouping_digits,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        // f64::round rounds half away from zero, matching the usual locale default.
        let rounded = value.round();
        let negative = rounded < 0.0;
        let digits = format!("{:.0}", rounded.abs());

        let grouped = if digits.len() >= 4 + self.min_grouping_digits - 1 {
            group_digits(&digits, self.group_separator)
        } else {
            digits
        };

        if negative { format!("-{grouped}") } else { grouped }
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
