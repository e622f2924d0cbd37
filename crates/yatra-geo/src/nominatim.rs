//! Nominatim geocoding client.
//!
//! Resolves a site name or address to coordinates, trying a list of region
//! suffixes in order so loosely named sites ("Shore Temple") still resolve.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use yatra_core::config::GeocoderConfig;
use yatra_core::error::{Result, YatraError};

/// One entry of a Nominatim search response. The service returns
/// coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Geocoding collaborator, tolerant by contract: lookup problems are
/// logged and collapse to `None`.
pub struct Geocoder {
    endpoint: String,
    suffixes: Vec<String>,
    client: reqwest::Client,
}

impl Geocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| YatraError::Geocode(e.to_string()))?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            suffixes: config.region_suffixes.clone(),
            client,
        })
    }

    /// Resolve a place to `(latitude, longitude)`.
    ///
    /// Tries each configured region suffix in order and returns the first
    /// hit; `None` if every variant misses or errors.
    pub async fn coordinates(&self, place: &str) -> Option<(f64, f64)> {
        for suffix in &self.suffixes {
            let query = if suffix.is_empty() {
                place.to_string()
            } else {
                format!("{place}, {suffix}")
            };

            match self.lookup(&query).await {
                Ok(Some(coords)) => {
                    debug!(%query, lat = coords.0, lon = coords.1, "Geocoded");
                    return Some(coords);
                }
                Ok(None) => continue,
                Err(e) => {
                    warn!(%query, "Geocoding failed: {e}");
                    continue;
                }
            }
        }
        None
    }

    async fn lookup(&self, query: &str) -> Result<Option<(f64, f64)>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| YatraError::Geocode(e.to_string()))?
            .error_for_status()
            .map_err(|e| YatraError::Geocode(e.to_string()))?;

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| YatraError::Geocode(e.to_string()))?;

        Ok(places.first().and_then(parse_place))
    }
}

fn parse_place(place: &NominatimPlace) -> Option<(f64, f64)> {
    let lat = place.lat.parse::<f64>().ok()?;
    let lon = place.lon.parse::<f64>().ok()?;
    Some((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserializes() {
        let body = r#"[{"place_id":12345,"lat":"12.6162","lon":"80.1924","display_name":"Shore Temple"}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(body).unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].lat, "12.6162");
    }

    #[test]
    fn test_empty_response_deserializes() {
        let places: Vec<NominatimPlace> = serde_json::from_str("[]").unwrap();
        assert!(places.is_empty());
    }

    #[test]
    fn test_parse_place() {
        let place = NominatimPlace {
            lat: "10.7828".to_string(),
            lon: "79.1318".to_string(),
        };
        let (lat, lon) = parse_place(&place).unwrap();
        assert!((lat - 10.7828).abs() < f64::EPSILON);
        assert!((lon - 79.1318).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_place_bad_numbers() {
        let place = NominatimPlace {
            lat: "north-ish".to_string(),
            lon: "79.1318".to_string(),
        };
        assert!(parse_place(&place).is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_degrades_to_none() {
        let config = GeocoderConfig {
            endpoint: "http://127.0.0.1:9/search".to_string(),
            timeout_secs: 1,
            region_suffixes: vec![String::new()],
            ..GeocoderConfig::default()
        };
        let geocoder = Geocoder::new(&config).unwrap();
        assert!(geocoder.coordinates("Shore Temple").await.is_none());
    }
}
