use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

const OFFSET_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
];
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a publication date, accepting the ISO-8601 shapes a JS `Date`
/// does: full or minute precision, any offset form, `YYYY-MM-DD`, `YYYY-MM`
/// and `YYYY`.
///
/// Timestamps without an offset are taken as UTC. JS reads them in the
/// local zone, so output differs from the legacy script when it ran outside UTC.
pub(super) fn parse_publication_date(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let raw = raw.trim();
    let rfc3339_err = match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => return Ok(date.with_timezone(&Utc)),
        Err(e) => e,
    };

    let with_offset = match raw.strip_suffix(['Z', 'z']) {
        Some(head) => format!("{head}+0000"),
        None => raw.to_string(),
    };
    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(date) = DateTime::parse_from_str(&with_offset, format) {
            return Ok(date.with_timezone(&Utc));
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let date = match raw.split('-').collect::<Vec<_>>().as_slice() {
        [y, m, d] if y.len() == 4 && m.len() == 2 && d.len() == 2 => {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
        }
        [y, m] if y.len() == 4 && m.len() == 2 && all_digits(y) && all_digits(m) => {
            NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok()
        }
        [y] if y.len() == 4 && all_digits(y) => {
            NaiveDate::parse_from_str(&format!("{raw}-01-01"), "%Y-%m-%d").ok()
        }
        _ => None,
    };
    match date {
        Some(date) => Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))),
        None => Err(rfc3339_err),
    }
}

/// `2015-03-12T10:00:00.000Z`
pub(super) fn format_iso_instant(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(raw: &str) -> String {
        format_iso_instant(&parse_publication_date(raw).unwrap())
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        assert_eq!(render("2015-03-12T10:00:00+02:00"), "2015-03-12T08:00:00.000Z");
        assert_eq!(render("2015-03-12T10:00:00Z"), "2015-03-12T10:00:00.000Z");
    }

    #[test]
    fn naive_timestamps_are_utc() {
        assert_eq!(render("2015-03-12T10:00:00"), "2015-03-12T10:00:00.000Z");
        assert_eq!(render("2015-03-12 23:59:01"), "2015-03-12T23:59:01.000Z");
    }

    #[test]
    fn sub_millisecond_digits_are_truncated() {
        assert_eq!(render("2015-03-12T10:00:00.1239999"), "2015-03-12T10:00:00.123Z");
    }

    #[test]
    fn minute_precision_is_accepted() {
        assert_eq!(render("2015-03-12T10:00"), "2015-03-12T10:00:00.000Z");
        assert_eq!(render("2015-03-12T10:00Z"), "2015-03-12T10:00:00.000Z");
        assert_eq!(render("2015-03-12T10:00+02:00"), "2015-03-12T08:00:00.000Z");
        assert_eq!(render("2015-03-12 10:00"), "2015-03-12T10:00:00.000Z");
    }

    #[test]
    fn offset_without_colon_is_accepted() {
        assert_eq!(render("2015-03-12T10:00:00.000+0200"), "2015-03-12T08:00:00.000Z");
        assert_eq!(render("2015-03-12T10:00:00-0130"), "2015-03-12T11:30:00.000Z");
        assert_eq!(render("2015-03-12T10:00+0200"), "2015-03-12T08:00:00.000Z");
    }

    #[test]
    fn date_only_is_midnight() {
        assert_eq!(render("2015-03-12"), "2015-03-12T00:00:00.000Z");
    }

    #[test]
    fn year_month_and_year_start_at_the_first_day() {
        assert_eq!(render("2015-03"), "2015-03-01T00:00:00.000Z");
        assert_eq!(render("2015"), "2015-01-01T00:00:00.000Z");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_publication_date("").is_err());
        assert!(parse_publication_date("yesterday").is_err());
        assert!(parse_publication_date("2015-13-40").is_err());
        assert!(parse_publication_date("2015-13").is_err());
        assert!(parse_publication_date("20150").is_err());
        assert!(parse_publication_date("2015-3").is_err());
    }
}
