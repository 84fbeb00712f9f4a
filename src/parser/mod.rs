use serde::Deserialize;

use crate::app::Result;
use crate::domain::Earthquake;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Properties {
    mag: f64,
    place: String,
    time: i64,
    url: String,
}

/// Turns a USGS GeoJSON response into earthquake records.
#[derive(Clone)]
pub struct FeedParser;

impl Default for FeedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a feed body. Any structural problem yields an empty list;
    /// records are all-or-nothing.
    pub fn parse(&self, json: &str) -> Vec<Earthquake> {
        if json.trim().is_empty() {
            return Vec::new();
        }

        match self.try_parse(json) {
            Ok(quakes) => quakes,
            Err(e) => {
                tracing::warn!("Problem parsing the earthquake JSON results: {}", e);
                Vec::new()
            }
        }
    }

    pub fn try_parse(&self, json: &str) -> Result<Vec<Earthquake>> {
        let collection: FeatureCollection = serde_json::from_str(json)?;

        collection
            .features
            .into_iter()
            .map(|feature| {
                let p = feature.properties;
                Earthquake::new(p.mag, p.place, p.time, p.url)
            })
            .collect()
    }
}
