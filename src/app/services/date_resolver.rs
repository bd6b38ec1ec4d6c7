//! Departure date/time resolution
//!
//! The departure date printed on a ticket carries no year. This module
//! converts the collected partial dates and clock times into a concrete
//! departure tuple by scanning the unparsed remainder of the document for
//! a corroborating full or short date. A short-form `DD.MM.YY HH:MM`
//! mention is checked before a long-form `D. <month> YYYY` mention and
//! the first hit wins; an externally supplied reference date outranks
//! both. The resolved year is whichever of {hint year, hint year + 1}
//! puts the departure closest to the hint, which handles tickets issued
//! in December for travel in January.

use std::path::Path;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use tracing::debug;

use crate::app::models::{DateToken, TimeToken};
use crate::constants::{MONTH_ABBREVIATIONS, MONTH_NAMES};
use crate::error::{Error, Result};

/// A concrete departure: inferred year plus the values taken verbatim
/// from the collected tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDeparture {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub from_hour: u32,
    pub from_minute: u32,
    pub to_hour: u32,
    pub to_minute: u32,
}

/// `DD.MM.YY HH:MM`, two-digit year assumed 2000+YY
fn short_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b([0-9]{2})\.([0-9]{2})\.([0-9]{2}) ([0-9]{1,2}):([0-9]{2})\b").unwrap()
    })
}

/// `D. <month name> YYYY` with a full Danish month name
fn long_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([0-9]{1,2})\. ([a-z]{3,10}) (20[0-9]{2})\b").unwrap())
}

/// Resolve the collected tokens into a concrete departure.
///
/// Requires exactly two partial dates and two times; the first of each
/// pair is the departure, the second the arrival.
pub fn resolve_departure(
    path: &Path,
    dates: &[DateToken],
    times: &[TimeToken],
    remainder: &str,
    external_hint: Option<NaiveDate>,
) -> Result<ResolvedDeparture> {
    if dates.len() != 2 || times.len() != 2 {
        return Err(Error::date_resolution(
            path,
            format!(
                "expected exactly two dates and two times, found {} dates and {} times",
                dates.len(),
                times.len()
            ),
        ));
    }

    let departure = &dates[0];
    let month = month_from_abbreviation(path, &departure.month_abbr)?;
    let day = departure.day;

    let hint = external_hint
        .or_else(|| find_short_date_hint(remainder))
        .or_else(|| find_long_date_hint(remainder))
        .ok_or_else(|| {
            Error::date_resolution(path, "no corroborating date found in document remainder")
        })?;
    debug!("Using date hint {} for {}", hint, path.display());

    let year = choose_year(path, hint, month, day)?;

    Ok(ResolvedDeparture {
        year,
        month,
        day,
        from_hour: times[0].hour,
        from_minute: times[0].minute,
        to_hour: times[1].hour,
        to_minute: times[1].minute,
    })
}

/// Numeric month for a three-letter Danish abbreviation
pub fn month_from_abbreviation(path: &Path, abbr: &str) -> Result<u32> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|&candidate| candidate == abbr)
        .map(|index| index as u32 + 1)
        .ok_or_else(|| {
            Error::date_resolution(path, format!("unknown month abbreviation '{}'", abbr))
        })
}

/// First short-form date+time mention, if any
fn find_short_date_hint(remainder: &str) -> Option<NaiveDate> {
    let caps = short_date_re().captures(remainder)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(2000 + year, month, day)
}

/// First long-form date mention, if any
fn find_long_date_hint(remainder: &str) -> Option<NaiveDate> {
    let caps = long_date_re().captures(remainder)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = MONTH_NAMES
        .iter()
        .position(|&name| name == &caps[2])
        .map(|index| index as u32 + 1)?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Pick the year from {hint year, hint year + 1} whose candidate date is
/// closest to the hint; ties go to the hint year.
fn choose_year(path: &Path, hint: NaiveDate, month: u32, day: u32) -> Result<i32> {
    let mut best: Option<(i32, i64)> = None;
    for year in [hint.year(), hint.year() + 1] {
        let candidate = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Error::date_resolution(
                path,
                format!("invalid departure date {:04}-{:02}-{:02}", year, month, day),
            )
        })?;
        let distance = (hint - candidate).num_days().abs();
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((year, distance));
        }
    }
    // The loop always runs twice
    let (year, _) = best.unwrap_or((hint.year(), 0));
    Ok(year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn date(day: u32, abbr: &str) -> DateToken {
        DateToken {
            day,
            month_abbr: abbr.to_string(),
        }
    }

    fn time(hour: u32, minute: u32) -> TimeToken {
        TimeToken { hour, minute }
    }

    fn doc() -> &'static Path {
        Path::new("ticket.pdf")
    }

    #[test]
    fn test_short_date_hint_resolves_year() {
        let dates = [date(24, "dec"), date(24, "dec")];
        let times = [time(8, 15), time(14, 42)];
        let remainder = "Billet købt 24.12.23 07:00\nKl. 07:00";

        let resolved = resolve_departure(doc(), &dates, &times, remainder, None).unwrap();
        assert_eq!(resolved.year, 2023);
        assert_eq!(resolved.month, 12);
        assert_eq!(resolved.day, 24);
        assert_eq!((resolved.from_hour, resolved.from_minute), (8, 15));
        assert_eq!((resolved.to_hour, resolved.to_minute), (14, 42));
    }

    #[test]
    fn test_long_date_hint_resolves_year() {
        let dates = [date(3, "maj"), date(3, "maj")];
        let times = [time(9, 0), time(11, 30)];
        let remainder = "Udstedt den 1. maj 2022 af DSB";

        let resolved = resolve_departure(doc(), &dates, &times, remainder, None).unwrap();
        assert_eq!(resolved.year, 2022);
        assert_eq!(resolved.month, 5);
    }

    #[test]
    fn test_short_form_wins_over_long_form() {
        let dates = [date(10, "jan"), date(10, "jan")];
        let times = [time(6, 5), time(7, 55)];
        // Long-form mention a year later; short-form must win
        let remainder = "Købt 09.01.21 18:00 og gyldig fra 9. januar 2022";

        let resolved = resolve_departure(doc(), &dates, &times, remainder, None).unwrap();
        assert_eq!(resolved.year, 2021);
    }

    #[test]
    fn test_external_hint_outranks_document_hints() {
        let dates = [date(10, "jan"), date(10, "jan")];
        let times = [time(6, 5), time(7, 55)];
        let remainder = "Købt 09.01.21 18:00";
        let external = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();

        let resolved =
            resolve_departure(doc(), &dates, &times, remainder, Some(external)).unwrap();
        assert_eq!(resolved.year, 2024);
    }

    #[test]
    fn test_december_hint_for_january_travel_picks_next_year() {
        let dates = [date(2, "jan"), date(2, "jan")];
        let times = [time(12, 0), time(13, 0)];
        // Issued in late December, travel on January 2nd of the next year
        let remainder = "Købt 28.12.23 19:12";

        let resolved = resolve_departure(doc(), &dates, &times, remainder, None).unwrap();
        assert_eq!(resolved.year, 2024);
    }

    #[test]
    fn test_equal_distance_keeps_hint_year() {
        // Departure Jan 1st; hint 2024-07-02 sits exactly 183 days from
        // both 2024-01-01 and 2025-01-01 (2024 is a leap year)
        let dates = [date(1, "jan"), date(1, "jan")];
        let times = [time(0, 0), time(1, 0)];
        let remainder = "02.07.24 10:00";

        let resolved = resolve_departure(doc(), &dates, &times, remainder, None).unwrap();
        assert_eq!(resolved.year, 2024);
    }

    #[test]
    fn test_missing_hint_is_fatal() {
        let dates = [date(24, "dec"), date(24, "dec")];
        let times = [time(8, 15), time(14, 42)];

        let result = resolve_departure(doc(), &dates, &times, "ingen datoer her", None);
        assert!(matches!(result, Err(Error::DateResolution { .. })));
    }

    #[test]
    fn test_unknown_month_abbreviation_is_fatal() {
        let dates = [date(24, "xyz"), date(24, "dec")];
        let times = [time(8, 15), time(14, 42)];

        let result = resolve_departure(doc(), &dates, &times, "24.12.23 07:00", None);
        assert!(matches!(result, Err(Error::DateResolution { .. })));
    }

    #[test]
    fn test_wrong_token_counts_are_fatal() {
        let dates = [date(24, "dec")];
        let times = [time(8, 15), time(14, 42)];

        let result = resolve_departure(doc(), &dates, &times, "24.12.23 07:00", None);
        assert!(matches!(result, Err(Error::DateResolution { .. })));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let dates = [date(24, "dec"), date(24, "dec")];
        let times = [time(8, 15), time(14, 42)];
        let remainder = "24.12.23 07:00";

        let first = resolve_departure(doc(), &dates, &times, remainder, None).unwrap();
        let second = resolve_departure(doc(), &dates, &times, remainder, None).unwrap();
        assert_eq!(first, second);
        assert!(first.year == 2023 || first.year == 2024);
    }

    #[test]
    fn test_all_month_abbreviations() {
        for (index, abbr) in MONTH_ABBREVIATIONS.iter().enumerate() {
            assert_eq!(
                month_from_abbreviation(doc(), abbr).unwrap(),
                index as u32 + 1
            );
        }
    }
}
