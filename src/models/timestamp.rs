use std::fmt;
use thiserror::Error;
use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognised date/time: {0}")]
pub struct UnrecognizedTimestamp(pub String);

/// A point in time as the caller wrote it: either pinned to a UTC offset, or
/// a floating wall-clock date-time when no offset was given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
    Zoned(OffsetDateTime),
    Floating(PrimitiveDateTime),
}

const ZONED_FORMATS: &[&[FormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory]:[offset_minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute][offset_hour sign:mandatory]:[offset_minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory][offset_minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]"),
];

const FLOATING_FORMATS: &[&[FormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!("[year][month][day]T[hour][minute][second]"),
    format_description!("[year]/[month]/[day] [hour]:[minute]:[second]"),
    format_description!("[year]/[month]/[day] [hour]:[minute]"),
    format_description!("[day padding:none] [month repr:short case_sensitive:false] [year] [hour]:[minute]:[second]"),
    format_description!("[day padding:none] [month repr:short case_sensitive:false] [year] [hour]:[minute]"),
    format_description!("[month repr:short case_sensitive:false] [day padding:none] [year] [hour]:[minute]:[second]"),
    format_description!("[month repr:long case_sensitive:false] [day padding:none], [year] [hour]:[minute]:[second]"),
    format_description!("[month repr:long case_sensitive:false] [day padding:none], [year] [hour]:[minute]"),
];

const DATE_FORMATS: &[&[FormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]"),
    format_description!("[year]/[month]/[day]"),
    format_description!("[year][month][day]"),
    format_description!("[day padding:none] [month repr:short case_sensitive:false] [year]"),
    format_description!("[month repr:short case_sensitive:false] [day padding:none] [year]"),
    format_description!("[month repr:long case_sensitive:false] [day padding:none], [year]"),
    format_description!("[month repr:long case_sensitive:false] [day padding:none] [year]"),
];

/// Zoned renderings without fraction, with microseconds, with nanoseconds.
const ZONED_RENDERINGS: [&[FormatItem<'static>]; 3] = [
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6][offset_hour sign:mandatory]:[offset_minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9][offset_hour sign:mandatory]:[offset_minute]"),
];

const FLOATING_RENDERINGS: [&[FormatItem<'static>]; 3] = [
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]"),
];

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

impl Timestamp {
    /// Parses ISO-8601 and a handful of looser date/time spellings. A bare
    /// date is taken as midnight. Years outside 1..=9999 are refused.
    pub fn parse(raw: &str) -> Result<Self, UnrecognizedTimestamp> {
        parse_any(raw.trim())
            .filter(|timestamp| (MIN_YEAR..=MAX_YEAR).contains(&timestamp.year()))
            .ok_or_else(|| UnrecognizedTimestamp(raw.to_string()))
    }

    /// The instant used for ordering. Floating values are read as UTC.
    pub fn instant(&self) -> OffsetDateTime {
        match self {
            Timestamp::Zoned(time) => *time,
            Timestamp::Floating(time) => time.assume_utc(),
        }
    }

    /// Year as written by the caller, in the caller's own offset.
    pub fn year(&self) -> i32 {
        match self {
            Timestamp::Zoned(time) => time.year(),
            Timestamp::Floating(time) => time.year(),
        }
    }
}

fn parse_any(input: &str) -> Option<Timestamp> {
    if input.is_empty() {
        return None;
    }

    if let Ok(time) = OffsetDateTime::parse(input, &Rfc3339) {
        return Some(Timestamp::Zoned(time));
    }
    if let Ok(time) = OffsetDateTime::parse(input, &Rfc2822) {
        return Some(Timestamp::Zoned(time));
    }

    let input = normalize(input);
    if let Some(time) = ZONED_FORMATS
        .iter()
        .find_map(|format| OffsetDateTime::parse(&input, *format).ok())
    {
        return Some(Timestamp::Zoned(time));
    }
    if let Some(time) = FLOATING_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(&input, *format).ok())
    {
        return Some(Timestamp::Floating(time));
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| Date::parse(&input, *format).ok())
        .map(|date| Timestamp::Floating(date.with_time(Time::MIDNIGHT)))
}

/// `2024-01-01 10:00:00Z` -> `2024-01-01T10:00:00+00:00`
fn normalize(input: &str) -> String {
    let mut normalized = input.to_string();
    let bytes = input.as_bytes();
    if bytes.len() > 10 && bytes[4] == b'-' && bytes[7] == b'-' && bytes[10] == b' ' {
        normalized.replace_range(10..11, "T");
    }
    if normalized.ends_with('Z') || normalized.ends_with('z') {
        normalized.pop();
        normalized.push_str("+00:00");
    } else if let Some(stripped) = normalized.strip_suffix(" UTC") {
        normalized = format!("{}+00:00", stripped);
    }
    normalized
}

/// Index into the rendering tables: no fraction, micro or nanosecond digits.
fn precision(nanos: u32) -> usize {
    if nanos == 0 {
        0
    } else if nanos % 1_000 == 0 {
        1
    } else {
        2
    }
}

/// ISO-8601 extended format, `YYYY-MM-DDTHH:MM:SS[.ffffff][+HH:MM]`.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = match self {
            Timestamp::Zoned(value) => value.format(ZONED_RENDERINGS[precision(value.nanosecond())]),
            Timestamp::Floating(value) => value.format(FLOATING_RENDERINGS[precision(value.nanosecond())]),
        };
        f.write_str(&rendered.map_err(|_| fmt::Error)?)
    }
}
