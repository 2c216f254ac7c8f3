//! Calendar text recognition.
//!
//! Input is first normalized according to [`DateStyles`] (outer white space
//! trimmed or rejected, inner runs collapsed to one space), then matched
//! against a short list of shapes, first match wins:
//!
//! ```text
//! 2016-01-31T13:45:00.250+02:00   ISO 8601 (date, optional time and offset)
//! 01/31/2016 1:45 PM              numeric, field order from the culture
//! 31 January 2016 / Jan 31, 2016  English month names
//! 13:45:10                        time only; the date is today or 0001-01-01
//! ```
//!
//! Numeric dates accept `/`, `-` and `.` as separators (both separators must
//! agree). A four-digit first field always means year-month-day. Two-digit
//! years map to 1950..=2049.

use super::{Culture, DateOrder, DateStyles};
use chrono::format::{ParseErrorKind, Parsed, StrftimeItems};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use regex::Captures;

/// A wall-clock time plus the UTC offset written next to it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ParsedTime {
    time: NaiveTime,
    offset_seconds: Option<i32>,
}

/// Parse `text` as a date and time.
pub(crate) fn parse_datetime(text: &str, culture: &Culture, styles: DateStyles) -> Option<NaiveDateTime> {
    let normalized = normalize(text, styles)?;

    let (date, time) = if let Some(caps) = regex!(r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[T ](.+))?$").captures(&normalized) {
        let date = ymd(field(&caps, 1)?, field(&caps, 2)?, field(&caps, 3)?)?;
        (date, optional_time(&caps, 4)?)
    } else if let Some(caps) =
        regex!(r"^(\d{1,4})([/.\-])(\d{1,2})([/.\-])(\d{1,4})\.?(?: (.+))?$").captures(&normalized)
    {
        if caps[2] != caps[4] {
            return None;
        }
        (numeric_date(&caps, culture)?, optional_time(&caps, 6)?)
    } else if let Some(caps) =
        regex!(r"^([A-Za-z]{3,9})\.? ?(\d{1,2})(?:st|nd|rd|th)?,? (\d{4})(?:,? (.+))?$").captures(&normalized)
    {
        let date = ymd(field(&caps, 3)?, month_from_name(&caps[1])?, field(&caps, 2)?)?;
        (date, optional_time(&caps, 4)?)
    } else if let Some(caps) =
        regex!(r"^(\d{1,2})(?:st|nd|rd|th)?\.? ?([A-Za-z]{3,9})\.?,? (\d{4})(?:,? (.+))?$").captures(&normalized)
    {
        let date = ymd(field(&caps, 3)?, month_from_name(&caps[2])?, field(&caps, 1)?)?;
        (date, optional_time(&caps, 4)?)
    } else {
        let time = parse_time(&normalized)?;
        (default_date(styles)?, Some(time))
    };

    let Some(ParsedTime { time, offset_seconds }) = time else {
        return date.and_hms_opt(0, 0, 0);
    };

    to_universal(date.and_time(time), offset_seconds, styles)
}

/// Subtract a written UTC offset from `local` when `ADJUST_TO_UNIVERSAL` is
/// set; otherwise keep the wall time as written.
fn to_universal(local: NaiveDateTime, offset_seconds: Option<i32>, styles: DateStyles) -> Option<NaiveDateTime> {
    match offset_seconds {
        Some(offset) if styles.contains(DateStyles::ADJUST_TO_UNIVERSAL) => {
            local.checked_sub_signed(TimeDelta::seconds(i64::from(offset)))
        }
        _ => Some(local),
    }
}

/// Parse `text` against each `strftime` format in turn; the first format that
/// consumes the whole input wins. A `/` in a format stands for the culture's
/// date separator.
///
/// An hour without minutes or seconds reads them as zero. Formats with no time
/// fields yield midnight, formats with no date fields take the same default
/// date as [`parse_datetime`]. A `%z` offset is honored like any other offset.
pub(crate) fn parse_exact(
    text: &str,
    formats: &[&str],
    culture: &Culture,
    styles: DateStyles,
) -> Option<NaiveDateTime> {
    let normalized = normalize(text, styles)?;

    formats.iter().find_map(|format| {
        let format = format.replace('/', culture.date_separator);
        parse_with_format(&normalized, &format, styles)
    })
}

fn parse_with_format(text: &str, format: &str, styles: DateStyles) -> Option<NaiveDateTime> {
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, text, StrftimeItems::new(format)).ok()?;

    if parsed.timestamp().is_some() {
        return parsed.to_naive_datetime_with_offset(0).ok();
    }

    let has_time = parsed.hour_div_12().is_some()
        || parsed.hour_mod_12().is_some()
        || parsed.minute().is_some()
        || parsed.second().is_some()
        || parsed.nanosecond().is_some();
    let time = if has_time {
        if parsed.minute().is_none() {
            parsed.set_minute(0).ok()?;
        }
        Some(parsed.to_naive_time().ok()?)
    } else {
        None
    };

    let date = match parsed.to_naive_date() {
        Ok(date) => date,
        Err(err) if err.kind() == ParseErrorKind::NotEnough && has_time && !has_date_fields(&parsed) => {
            default_date(styles)?
        }
        Err(_) => return None,
    };
    if date.year() < 1 {
        return None;
    }

    let local = match time {
        Some(time) => date.and_time(time),
        None => date.and_hms_opt(0, 0, 0)?,
    };
    to_universal(local, parsed.offset(), styles)
}

fn has_date_fields(parsed: &Parsed) -> bool {
    parsed.year().is_some()
        || parsed.year_div_100().is_some()
        || parsed.year_mod_100().is_some()
        || parsed.isoyear().is_some()
        || parsed.month().is_some()
        || parsed.day().is_some()
        || parsed.ordinal().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some()
        || parsed.isoweek().is_some()
        || parsed.weekday().is_some()
}

/// Apply the white-space rules of `styles`. Returns `None` when outer white
/// space is present but not allowed.
fn normalize(text: &str, styles: DateStyles) -> Option<String> {
    let mut s = text.trim_end_matches('\0');

    let trimmed_start = s.trim_start();
    if trimmed_start.len() != s.len() && !styles.contains(DateStyles::ALLOW_LEADING_WHITE) {
        return None;
    }
    s = trimmed_start;

    let trimmed_end = s.trim_end();
    if trimmed_end.len() != s.len() && !styles.contains(DateStyles::ALLOW_TRAILING_WHITE) {
        return None;
    }
    s = trimmed_end;

    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if !styles.contains(DateStyles::ALLOW_INNER_WHITE) {
        return Some(collapsed);
    }

    // Drop white space that touches a separator: "01 / 01 / 2016" -> "01/01/2016".
    let mut out = String::with_capacity(collapsed.len());
    let mut chars = collapsed.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' ' {
            let next_is_sep = chars.peek().is_some_and(|n| is_separator(*n));
            let prev_is_sep = out.chars().last().is_some_and(is_separator);
            if next_is_sep || prev_is_sep {
                continue;
            }
        }
        out.push(c);
    }
    Some(out)
}

fn is_separator(c: char) -> bool {
    matches!(c, '/' | '-' | '.' | ':')
}

fn field(caps: &Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

/// Build a date; year zero is not a calendar year.
fn ymd(year: u32, month: u32, day: u32) -> Option<NaiveDate> {
    if year == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn optional_time(caps: &Captures<'_>, idx: usize) -> Option<Option<ParsedTime>> {
    match caps.get(idx) {
        Some(m) => Some(Some(parse_time(m.as_str())?)),
        None => Some(None),
    }
}

fn numeric_date(caps: &Captures<'_>, culture: &Culture) -> Option<NaiveDate> {
    let (a, b, c) = (&caps[1], &caps[3], &caps[5]);
    let order = if a.len() == 4 { DateOrder::YearMonthDay } else { culture.date_order };

    let (year, month, day) = match order {
        DateOrder::MonthDayYear => (c, a, b),
        DateOrder::DayMonthYear => (c, b, a),
        DateOrder::YearMonthDay => (a, b, c),
    };
    if month.len() > 2 || day.len() > 2 {
        return None;
    }

    let year = match year.len() {
        2 => {
            let yy: u32 = year.parse().ok()?;
            if yy < 50 { 2000 + yy } else { 1900 + yy }
        }
        4 => year.parse().ok()?,
        _ => return None,
    };
    ymd(year, month.parse().ok()?, day.parse().ok()?)
}

fn parse_time(text: &str) -> Option<ParsedTime> {
    let caps = regex!(
        r"^(\d{1,2}):(\d{2})(?::(\d{2})(?:[.,](\d{1,9}))?)?(?: ?([AaPp])\.?[Mm]\.?)?(?: ?(Z|z|[+-]\d{2}(?::?\d{2})?))?$"
    )
    .captures(text)?;

    let mut hour = field(&caps, 1)?;
    let minute = field(&caps, 2)?;
    let second = caps.get(3).map_or(Some(0), |m| m.as_str().parse().ok())?;
    let nanos = match caps.get(4) {
        Some(m) => format!("{:0<9}", m.as_str()).parse().ok()?,
        None => 0,
    };

    if let Some(designator) = caps.get(5) {
        if hour == 0 || hour > 12 {
            return None;
        }
        let pm = designator.as_str().eq_ignore_ascii_case("p");
        hour = match (pm, hour) {
            (false, 12) => 0,
            (true, 12) => 12,
            (true, h) => h + 12,
            (false, h) => h,
        };
    }

    let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)?;
    let offset_seconds = match caps.get(6) {
        Some(m) => Some(parse_offset(m.as_str())?),
        None => None,
    };
    Some(ParsedTime { time, offset_seconds })
}

fn parse_offset(text: &str) -> Option<i32> {
    if text.eq_ignore_ascii_case("z") {
        return Some(0);
    }
    let sign = if text.starts_with('-') { -1 } else { 1 };
    let digits: String = text[1..].chars().filter(char::is_ascii_digit).collect();
    let hours: i32 = digits.get(..2)?.parse().ok()?;
    let minutes: i32 = match digits.get(2..) {
        Some("") | None => 0,
        Some(m) => m.parse().ok()?,
    };
    if hours > 14 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

fn default_date(styles: DateStyles) -> Option<NaiveDate> {
    if styles.contains(DateStyles::NO_CURRENT_DATE_DEFAULT) {
        NaiveDate::from_ymd_opt(1, 1, 1)
    } else {
        Some(Local::now().date_naive())
    }
}

fn month_from_name(name: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];

    let lower = name.to_ascii_lowercase();
    if lower == "sept" {
        return Some(9);
    }
    MONTHS
        .iter()
        .position(|full| *full == lower || (lower.len() == 3 && full.starts_with(lower.as_str())))
        .map(|idx| idx as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    fn invariant() -> &'static Culture {
        Culture::invariant()
    }

    #[test]
    fn datetime_examples_matching() {
        let styles = DateStyles::ALLOW_WHITESPACES;
        let cases: Vec<(NaiveDateTime, &str)> = vec![
            (dt(2016, 1, 1, 0, 0, 0), "01/01/2016 00:00:00.000"),
            (dt(2016, 3, 1, 0, 0, 0), "03/01/2016"),
            (dt(2016, 1, 31, 13, 45, 0), "2016-01-31T13:45"),
            (dt(2016, 1, 31, 13, 45, 10), "2016-01-31 13:45:10"),
            (dt(2016, 1, 31, 13, 45, 0), "1/31/16 1:45 PM"),
            (dt(2016, 1, 31, 0, 30, 0), "01-31-2016 12:30 a.m."),
            (dt(2016, 2, 3, 0, 0, 0), "2016/02/03"),
            (dt(1999, 12, 31, 23, 59, 59), "12/31/99 23:59:59"),
            (dt(2016, 1, 31, 0, 0, 0), "31 January 2016"),
            (dt(2016, 1, 31, 8, 0, 0), "Jan 31, 2016 08:00"),
            (dt(2016, 9, 2, 0, 0, 0), "Sept 2nd, 2016"),
            (dt(2016, 1, 1, 0, 0, 0), "  01/01/2016  "),
            (dt(2016, 1, 1, 0, 0, 0), "01 / 01 / 2016"),
        ];

        for (expected, input) in cases {
            assert_eq!(parse_datetime(input, invariant(), styles), Some(expected), "input '{}'", input);
        }
    }

    #[test]
    fn datetime_examples_rejected() {
        let styles = DateStyles::ALLOW_WHITESPACES;
        for input in [
            "03/01/2016A 00:00:00.000",
            "02/30/2016",
            "13/01/2016",
            "01/01/2016 25:00",
            "01/01-2016",
            "01/01/216",
            "2016-01-01T13:00 XM",
            "13:00 PM",
            "Smarch 3, 2016",
            "01/01/0000",
            "0000-01-01",
            "",
            "today",
        ] {
            assert_eq!(parse_datetime(input, invariant(), styles), None, "input '{}'", input);
        }
    }

    #[test]
    fn culture_decides_field_order() {
        let styles = DateStyles::empty();
        let de = Culture::by_name("de-DE").unwrap();
        let ja = Culture::by_name("ja-JP").unwrap();

        assert_eq!(parse_datetime("03.01.2016", de, styles), Some(dt(2016, 1, 3, 0, 0, 0)));
        assert_eq!(parse_datetime("03/01/2016", invariant(), styles), Some(dt(2016, 3, 1, 0, 0, 0)));
        assert_eq!(parse_datetime("16/01/03", ja, styles), Some(dt(2016, 1, 3, 0, 0, 0)));
        assert_eq!(parse_datetime("2016.01.03", de, styles), Some(dt(2016, 1, 3, 0, 0, 0)));
    }

    #[test]
    fn outer_white_space_needs_a_flag() {
        let none = DateStyles::empty();
        assert_eq!(parse_datetime(" 01/01/2016", invariant(), none), None);
        assert_eq!(parse_datetime("01/01/2016 ", invariant(), none), None);
        assert_eq!(parse_datetime("01/01/2016  10:00", invariant(), none), Some(dt(2016, 1, 1, 10, 0, 0)));
        assert_eq!(parse_datetime("01 / 01 / 2016", invariant(), none), None);

        let leading = DateStyles::ALLOW_LEADING_WHITE;
        assert_eq!(parse_datetime(" 01/01/2016", invariant(), leading), Some(dt(2016, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn offsets_adjust_only_when_asked() {
        let input = "2016-01-01T10:00:00+02:00";
        assert_eq!(parse_datetime(input, invariant(), DateStyles::empty()), Some(dt(2016, 1, 1, 10, 0, 0)));
        assert_eq!(
            parse_datetime(input, invariant(), DateStyles::ADJUST_TO_UNIVERSAL),
            Some(dt(2016, 1, 1, 8, 0, 0))
        );
        assert_eq!(
            parse_datetime("2016-01-01T01:30Z", invariant(), DateStyles::ADJUST_TO_UNIVERSAL),
            Some(dt(2016, 1, 1, 1, 30, 0))
        );
        assert_eq!(
            parse_datetime("2016-01-01T01:30-0530", invariant(), DateStyles::ADJUST_TO_UNIVERSAL),
            Some(dt(2016, 1, 1, 7, 0, 0))
        );
    }

    #[test]
    fn fractional_seconds_keep_their_scale() {
        let got = parse_datetime("2016-01-01 00:00:01.25", invariant(), DateStyles::empty()).unwrap();
        let expected = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap().and_hms_milli_opt(0, 0, 1, 250).unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn time_only_uses_default_date() {
        let got = parse_datetime("13:45", invariant(), DateStyles::NO_CURRENT_DATE_DEFAULT);
        assert_eq!(got, Some(dt(1, 1, 1, 13, 45, 0)));

        let got = parse_datetime("1:45:30 pm", invariant(), DateStyles::empty()).unwrap();
        assert_eq!(got.time(), NaiveTime::from_hms_opt(13, 45, 30).unwrap());
    }

    #[test]
    fn exact_formats_try_each_in_turn() {
        let formats = ["%Y%m%d", "%d/%m/%Y %H:%M"];
        let styles = DateStyles::empty();

        assert_eq!(parse_exact("20160131", &formats, invariant(), styles), Some(dt(2016, 1, 31, 0, 0, 0)));
        assert_eq!(parse_exact("31/01/2016 09:15", &formats, invariant(), styles), Some(dt(2016, 1, 31, 9, 15, 0)));
        assert_eq!(parse_exact("2016-01-31", &formats, invariant(), styles), None);

        let de = Culture::by_name("de-DE").unwrap();
        assert_eq!(parse_exact("31.01.2016 09:15", &formats, de, styles), Some(dt(2016, 1, 31, 9, 15, 0)));

        let got = parse_exact("07:30", &["%H:%M"], invariant(), DateStyles::NO_CURRENT_DATE_DEFAULT);
        assert_eq!(got, Some(dt(1, 1, 1, 7, 30, 0)));
    }

    #[test]
    fn exact_hour_without_minutes_keeps_the_hour() {
        let styles = DateStyles::empty();
        assert_eq!(parse_exact("2016-01-31 10", &["%Y-%m-%d %H"], invariant(), styles), Some(dt(2016, 1, 31, 10, 0, 0)));
        assert_eq!(
            parse_exact("2016-01-31 10 PM", &["%Y-%m-%d %I %p"], invariant(), styles),
            Some(dt(2016, 1, 31, 22, 0, 0))
        );
        assert_eq!(parse_exact("2016-01-31 10", &["%Y-%m-%d %I"], invariant(), styles), None);
        assert_eq!(parse_exact("2016-02-30 10", &["%Y-%m-%d %H"], invariant(), styles), None);
        assert_eq!(parse_exact("2016-01-31 25", &["%Y-%m-%d %H"], invariant(), styles), None);
    }

    #[test]
    fn exact_offsets_adjust_only_when_asked() {
        let formats = ["%Y-%m-%d %H:%M %z"];
        let input = "2016-01-01 10:00 +0200";
        assert_eq!(parse_exact(input, &formats, invariant(), DateStyles::empty()), Some(dt(2016, 1, 1, 10, 0, 0)));
        assert_eq!(
            parse_exact(input, &formats, invariant(), DateStyles::ADJUST_TO_UNIVERSAL),
            Some(dt(2016, 1, 1, 8, 0, 0))
        );
        assert_eq!(
            parse_exact(input, &formats, invariant(), DateStyles::ADJUST_TO_UNIVERSAL),
            parse_datetime("2016-01-01 10:00+02:00", invariant(), DateStyles::ADJUST_TO_UNIVERSAL)
        );
    }
}
