use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::{QuakeError, Result};

/// One parsed entry of the USGS feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Earthquake {
    pub magnitude: f64,
    pub location: String,
    pub time_ms: i64,
    pub url: String,
}

impl Earthquake {
    /// Build a record, rejecting values that break the record invariants:
    /// finite magnitude, non-empty location, non-negative timestamp,
    /// parseable URL.
    pub fn new(magnitude: f64, location: String, time_ms: i64, url: String) -> Result<Self> {
        if !magnitude.is_finite() {
            return Err(QuakeError::InvalidRecord(format!(
                "non-finite magnitude {}",
                magnitude
            )));
        }
        if location.trim().is_empty() {
            return Err(QuakeError::InvalidRecord("empty location".into()));
        }
        if time_ms < 0 {
            return Err(QuakeError::InvalidRecord(format!(
                "negative timestamp {}",
                time_ms
            )));
        }
        url::Url::parse(&url)?;

        Ok(Self {
            magnitude,
            location,
            time_ms,
            url,
        })
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.time_ms).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_record() {
        let quake = Earthquake::new(
            6.5,
            "10km SE of Example".into(),
            1_000_000_000_000,
            "http://x".into(),
        )
        .unwrap();
        assert_eq!(quake.magnitude, 6.5);
        assert_eq!(quake.location, "10km SE of Example");
        assert_eq!(quake.time_ms, 1_000_000_000_000);
        assert_eq!(quake.url, "http://x");
    }

    #[test]
    fn test_new_rejects_non_finite_magnitude() {
        for magnitude in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = Earthquake::new(magnitude, "Somewhere".into(), 0, "http://x".into());
            assert!(
                matches!(result, Err(QuakeError::InvalidRecord(_))),
                "accepted magnitude {}",
                magnitude
            );
        }
    }

    #[test]
    fn test_new_rejects_empty_location() {
        let result = Earthquake::new(5.0, "  ".into(), 0, "http://x".into());
        assert!(matches!(result, Err(QuakeError::InvalidRecord(_))));
    }

    #[test]
    fn test_new_rejects_negative_time() {
        let result = Earthquake::new(5.0, "Somewhere".into(), -1, "http://x".into());
        assert!(matches!(result, Err(QuakeError::InvalidRecord(_))));
    }

    #[test]
    fn test_new_rejects_malformed_url() {
        let result = Earthquake::new(5.0, "Somewhere".into(), 0, "not a url".into());
        assert!(matches!(result, Err(QuakeError::InvalidUrl(_))));
    }

    #[test]
    fn test_timestamp_from_millis() {
        let quake =
            Earthquake::new(5.0, "Somewhere".into(), 1_000_000_000_000, "http://x".into())
                .unwrap();
        assert_eq!(quake.timestamp().to_rfc3339(), "2001-09-09T01:46:40+00:00");
    }
}
