//! Human distance between two instants ("about 3 hours ago").

use chrono::{DateTime, Datelike, Timelike, Utc};

const MINUTES_IN_DAY: f64 = 1440.0;
const MINUTES_IN_ALMOST_TWO_DAYS: f64 = 2520.0;
const MINUTES_IN_MONTH: f64 = 43200.0;
const MINUTES_IN_TWO_MONTHS: f64 = 86400.0;

pub trait RelativeTime: Send + Sync {
    fn relative_label(&self, from: DateTime<Utc>, to: DateTime<Utc>, add_suffix: bool) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Distance {
    LessThanXMinutes(i64),
    XMinutes(i64),
    AboutXHours(i64),
    XDays(i64),
    AboutXMonths(i64),
    XMonths(i64),
    AboutXYears(i64),
    OverXYears(i64),
    AlmostXYears(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Locale {
    En,
    PtBr,
}

/// Buckets a time span the same way the common JS date libraries do and
/// renders it in English or Brazilian Portuguese.
#[derive(Debug, Clone)]
pub struct DistanceFormatter {
    locale: Locale,
}

impl DistanceFormatter {
    pub fn new(language: &str) -> Self {
        let locale = if language.to_ascii_lowercase().starts_with("pt") {
            Locale::PtBr
        } else {
            Locale::En
        };
        Self { locale }
    }

    fn phrase(&self, distance: Distance) -> String {
        use Distance::*;
        let plural = |count: i64, one: &str, other: &str| {
            if count == 1 { one.to_string() } else { other.replace("{}", &count.to_string()) }
        };

        match self.locale {
            Locale::En => match distance {
                LessThanXMinutes(n) => plural(n, "less than a minute", "less than {} minutes"),
                XMinutes(n) => plural(n, "1 minute", "{} minutes"),
                AboutXHours(n) => plural(n, "about 1 hour", "about {} hours"),
                XDays(n) => plural(n, "1 day", "{} days"),
                AboutXMonths(n) => plural(n, "about 1 month", "about {} months"),
                XMonths(n) => plural(n, "1 month", "{} months"),
                AboutXYears(n) => plural(n, "about 1 year", "about {} years"),
                OverXYears(n) => plural(n, "over 1 year", "over {} years"),
                AlmostXYears(n) => plural(n, "almost 1 year", "almost {} years"),
            },
            Locale::PtBr => match distance {
                LessThanXMinutes(n) => plural(n, "menos de um minuto", "menos de {} minutos"),
                XMinutes(n) => plural(n, "1 minuto", "{} minutos"),
                AboutXHours(n) => plural(n, "cerca de 1 hora", "cerca de {} horas"),
                XDays(n) => plural(n, "1 dia", "{} dias"),
                AboutXMonths(n) => plural(n, "cerca de 1 mês", "cerca de {} meses"),
                XMonths(n) => plural(n, "1 mês", "{} meses"),
                AboutXYears(n) => plural(n, "cerca de 1 ano", "cerca de {} anos"),
                OverXYears(n) => plural(n, "mais de 1 ano", "mais de {} anos"),
                AlmostXYears(n) => plural(n, "quase 1 ano", "quase {} anos"),
            },
        }
    }

    fn with_suffix(&self, phrase: String, in_future: bool) -> String {
        match (self.locale, in_future) {
            (Locale::En, true) => format!("in {phrase}"),
            (Locale::En, false) => format!("{phrase} ago"),
            (Locale::PtBr, true) => format!("em {phrase}"),
            (Locale::PtBr, false) => format!("há {phrase}"),
        }
    }
}

impl Default for DistanceFormatter {
    fn default() -> Self {
        Self { locale: Locale::En }
    }
}

impl RelativeTime for DistanceFormatter {
    fn relative_label(&self, from: DateTime<Utc>, to: DateTime<Utc>, add_suffix: bool) -> String {
        let (earlier, later) = if from <= to { (from, to) } else { (to, from) };
        let phrase = self.phrase(distance(earlier, later));
        if add_suffix {
            self.with_suffix(phrase, from > to)
        } else {
            phrase
        }
    }
}

fn distance(earlier: DateTime<Utc>, later: DateTime<Utc>) -> Distance {
    let seconds = (later - earlier).num_seconds();
    let minutes = (seconds as f64 / 60.0).round();

    if minutes < 2.0 {
        return if minutes == 0.0 {
            Distance::LessThanXMinutes(1)
        } else {
            Distance::XMinutes(minutes as i64)
        };
    }
    if minutes < 45.0 {
        return Distance::XMinutes(minutes as i64);
    }
    if minutes < 90.0 {
        return Distance::AboutXHours(1);
    }
    if minutes < MINUTES_IN_DAY {
        return Distance::AboutXHours((minutes / 60.0).round() as i64);
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return Distance::XDays(1);
    }
    if minutes < MINUTES_IN_MONTH {
        return Distance::XDays((minutes / MINUTES_IN_DAY).round() as i64);
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        return Distance::AboutXMonths((minutes / MINUTES_IN_MONTH).round() as i64);
    }

    let months = full_months_between(earlier, later);
    if months < 12 {
        return Distance::XMonths(((minutes / MINUTES_IN_MONTH).round() as i64).max(1));
    }

    let years = months / 12;
    match months % 12 {
        0..=2 => Distance::AboutXYears(years),
        3..=8 => Distance::OverXYears(years),
        _ => Distance::AlmostXYears(years + 1),
    }
}

/// Number of whole calendar months from `earlier` to `later`.
fn full_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = (later.year() - earlier.year()) as i64 * 12
        + (later.month() as i64 - earlier.month() as i64);

    let later_in_month = (later.day(), later.num_seconds_from_midnight());
    let earlier_in_month = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && later_in_month < earlier_in_month {
        months -= 1;
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        DistanceFormatter::default().relative_label(now() - d, now(), true)
    }

    #[test]
    fn short_spans() {
        assert_eq!(ago(Duration::seconds(10)), "less than a minute ago");
        assert_eq!(ago(Duration::seconds(70)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(30)), "30 minutes ago");
        assert_eq!(ago(Duration::minutes(60)), "about 1 hour ago");
        assert_eq!(ago(Duration::hours(5)), "about 5 hours ago");
    }

    #[test]
    fn day_and_month_spans() {
        assert_eq!(ago(Duration::hours(30)), "1 day ago");
        assert_eq!(ago(Duration::days(3)), "3 days ago");
        assert_eq!(ago(Duration::days(45)), "about 2 months ago");
        assert_eq!(ago(Duration::days(100)), "3 months ago");
    }

    #[test]
    fn year_spans() {
        let formatter = DistanceFormatter::default();
        let start = Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(formatter.relative_label(start, now(), false), "about 2 years");

        let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(formatter.relative_label(start, now(), false), "over 2 years");

        let start = Utc.with_ymd_and_hms(2021, 8, 1, 0, 0, 0).unwrap();
        assert_eq!(formatter.relative_label(start, now(), false), "almost 3 years");
    }

    #[test]
    fn future_dates_get_the_future_suffix() {
        let formatter = DistanceFormatter::default();
        let label = formatter.relative_label(now() + Duration::days(2), now(), true);
        assert_eq!(label, "in 2 days");
    }

    #[test]
    fn portuguese_phrases() {
        let formatter = DistanceFormatter::new("pt-BR");
        let label = formatter.relative_label(now() - Duration::hours(3), now(), true);
        assert_eq!(label, "há cerca de 3 horas");
    }

    #[test]
    fn whole_months_respect_day_of_month() {
        let a = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
        assert_eq!(full_months_between(a, b), 0);
        let c = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        assert_eq!(full_months_between(a, c), 2);
    }
}
