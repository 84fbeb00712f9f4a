//! Turns earthquake records into display rows.
//!
//! Everything here is pure formatting: magnitude buckets, location
//! splitting and date/time rendering. [`RowCache`] keeps formatted rows
//! around so scrolling does not rebuild them on every frame.

pub mod location;
pub mod magnitude;

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Deserialize;

use crate::domain::Earthquake;

pub use location::{split_location, LocationParts, NEAR_THE};
pub use magnitude::{format_magnitude, MagnitudeBucket};

const DATE_FORMAT: &str = "%b %d, %Y";
const TIME_FORMAT: &str = "%I:%M, %p";

/// Time zone used for rendering dates and times. Month names and AM/PM are
/// always English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTimezone {
    #[default]
    Local,
    Utc,
}

fn in_zone<Tz: TimeZone>(time_ms: i64, tz: &Tz) -> DateTime<Tz> {
    DateTime::from_timestamp_millis(time_ms)
        .unwrap_or_default()
        .with_timezone(tz)
}

pub fn format_date<Tz: TimeZone>(time_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    in_zone(time_ms, tz).format(DATE_FORMAT).to_string()
}

pub fn format_time<Tz: TimeZone>(time_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    in_zone(time_ms, tz).format(TIME_FORMAT).to_string()
}

impl DisplayTimezone {
    pub fn format_date(self, time_ms: i64) -> String {
        match self {
            DisplayTimezone::Local => format_date(time_ms, &Local),
            DisplayTimezone::Utc => format_date(time_ms, &Utc),
        }
    }

    pub fn format_time(self, time_ms: i64) -> String {
        match self {
            DisplayTimezone::Local => format_time(time_ms, &Local),
            DisplayTimezone::Utc => format_time(time_ms, &Utc),
        }
    }
}

/// A fully formatted list row.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeRow {
    pub magnitude: String,
    pub bucket: MagnitudeBucket,
    pub offset: String,
    pub primary_location: String,
    pub date: String,
    pub time: String,
    pub url: String,
}

impl EarthquakeRow {
    pub fn build(quake: &Earthquake, timezone: DisplayTimezone) -> Self {
        let LocationParts { offset, primary } = split_location(&quake.location);

        Self {
            magnitude: format_magnitude(quake.magnitude),
            bucket: MagnitudeBucket::from_magnitude(quake.magnitude),
            offset,
            primary_location: primary,
            date: timezone.format_date(quake.time_ms),
            time: timezone.format_time(quake.time_ms),
            url: quake.url.clone(),
        }
    }
}

/// Formatted rows keyed by list position.
///
/// Must be cleared whenever the underlying record list is replaced.
pub struct RowCache {
    timezone: DisplayTimezone,
    rows: HashMap<usize, EarthquakeRow>,
}

impl RowCache {
    pub fn new(timezone: DisplayTimezone) -> Self {
        Self {
            timezone,
            rows: HashMap::new(),
        }
    }

    pub fn row(&mut self, position: usize, quake: &Earthquake) -> &EarthquakeRow {
        let timezone = self.timezone;
        self.rows
            .entry(position)
            .or_insert_with(|| EarthquakeRow::build(quake, timezone))
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
