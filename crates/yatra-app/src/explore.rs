//! Site-exploration flow.
//!
//! One pass of "pick a place, pick a site": lists the place's sites,
//! composes a heritage report for the chosen site (directory details,
//! language-model description, coordinates, map artifact), and emits the
//! whole interaction as a JSON report. Returns the chosen site so the
//! caller can hand it to the conversation loop.

use std::io::{BufRead, Write};
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use yatra_core::error::Result;
use yatra_geo::{Geocoder, MapRenderer};
use yatra_llm::LanguageModel;
use yatra_sites::SiteDirectory;
use yatra_translate::Translator;

/// Structured record of one exploration pass.
#[derive(Debug, Default, Serialize)]
pub struct SiteInteractionReport {
    pub place: Option<String>,
    pub sites: Vec<String>,
    pub site_name: Option<String>,
    pub heritage_info: Option<String>,
    pub map_file: Option<String>,
    pub error: Option<String>,
}

/// Collaborator bundle for exploration.
pub struct Guide {
    pub translator: Arc<dyn Translator>,
    pub model: Arc<dyn LanguageModel>,
    pub directory: Arc<SiteDirectory>,
    pub geocoder: Geocoder,
    pub renderer: MapRenderer,
}

impl Guide {
    /// Run one exploration pass, writing prompts and the final JSON report
    /// to `output`. Returns the chosen site name, or `None` when the place
    /// had no sites.
    pub async fn explore<R: BufRead, W: Write>(
        &self,
        language: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<String>> {
        let mut report = SiteInteractionReport::default();

        let place_prompt = self
            .translator
            .translate("Enter the name of the place:", language)
            .await;
        let Some(place) = prompt_line(input, output, &place_prompt)? else {
            return Ok(None);
        };
        report.place = Some(place.clone());

        let sites = self.directory.sites_for_place(&place);
        if sites.is_empty() {
            report.error = Some(
                self.translator
                    .translate("No tourist sites found for this location.", language)
                    .await,
            );
            writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
            return Ok(None);
        }

        for site in &sites {
            report.sites.push(self.translator.translate(site, language).await);
        }

        let site_prompt = self
            .translator
            .translate("Enter the name of the site you want to explore:", language)
            .await;
        let Some(site_name) = prompt_line(input, output, &site_prompt)? else {
            writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
            return Ok(None);
        };
        report.site_name = Some(site_name.clone());

        let outcome = self.heritage_report(&site_name).await;
        if let Some(info) = outcome.info {
            report.heritage_info = Some(self.translator.translate(&info, language).await);
        }
        report.map_file = outcome.map_file;
        if let Some(error) = outcome.error {
            report.error = Some(self.translator.translate(&error, language).await);
        }

        writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
        Ok(Some(site_name))
    }

    /// Compose the heritage report for a site: directory lookup, model
    /// description, geocoding, and map rendering, each degrading
    /// independently.
    pub async fn heritage_report(&self, site_name: &str) -> HeritageOutcome {
        let Some(details) = self.directory.find_site_details(site_name) else {
            return HeritageOutcome {
                info: None,
                map_file: None,
                error: Some(
                    "Site not found in our records. Please check the name or try a nearby landmark."
                        .to_string(),
                ),
            };
        };

        let cleaned_name = preprocess_site_name(site_name);
        let overview = match self.model.describe(&cleaned_name).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Site description failed: {e}");
                "No description is available right now.".to_string()
            }
        };

        let coords = self.geocoder.coordinates(&details.full_address).await;
        let map_file = match coords {
            Some((lat, lon)) => match self.renderer.render(lat, lon, site_name) {
                Ok(path) => Some(path.display().to_string()),
                Err(e) => {
                    warn!("Map rendering failed: {e}");
                    None
                }
            },
            None => None,
        };

        let (lat_text, lon_text) = match coords {
            Some((lat, lon)) => (lat.to_string(), lon.to_string()),
            None => ("Not found".to_string(), "Not found".to_string()),
        };

        let info = format!(
            "Site Found: {address}\n\n\
Heritage Overview:\n{overview}\n\n\
Location Details:\n\
- Address: {address}\n\
- Latitude: {lat_text}\n\
- Longitude: {lon_text}",
            address = details.full_address,
        );

        HeritageOutcome {
            info: Some(info),
            map_file,
            error: if coords.is_none() {
                Some("Could not find location on the map.".to_string())
            } else {
                None
            },
        }
    }
}

/// Result of composing one heritage report.
pub struct HeritageOutcome {
    pub info: Option<String>,
    pub map_file: Option<String>,
    pub error: Option<String>,
}

/// Strip the generic suffix words before asking the model, so "Shore
/// Temple" and "shore" describe the same place.
pub fn preprocess_site_name(site_name: &str) -> String {
    site_name
        .trim()
        .to_lowercase()
        .replace("temple", "")
        .replace("beach", "")
        .trim()
        .to_string()
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "\n{prompt} ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io::Cursor;

    use yatra_core::config::GeocoderConfig;
    use yatra_core::error::YatraError;

    struct EchoTranslator;

    #[async_trait]
    impl Translator for EchoTranslator {
        async fn translate(&self, text: &str, _target_language: &str) -> String {
            text.to_string()
        }

        fn is_supported(&self, _language: &str) -> bool {
            true
        }
    }

    struct CannedModel;

    #[async_trait]
    impl LanguageModel for CannedModel {
        async fn describe(&self, site: &str) -> std::result::Result<String, YatraError> {
            Ok(format!("All about {site}."))
        }

        async fn chat(
            &self,
            _question: &str,
            _site: Option<&str>,
        ) -> std::result::Result<String, YatraError> {
            Ok("an answer".to_string())
        }
    }

    /// Geocoder pointed at a dead endpoint: every lookup degrades to None.
    fn offline_geocoder() -> Geocoder {
        Geocoder::new(&GeocoderConfig {
            endpoint: "http://127.0.0.1:9/search".to_string(),
            timeout_secs: 1,
            region_suffixes: vec![String::new()],
            ..GeocoderConfig::default()
        })
        .unwrap()
    }

    fn guide(dir: &std::path::Path) -> Guide {
        Guide {
            translator: Arc::new(EchoTranslator),
            model: Arc::new(CannedModel),
            directory: Arc::new(SiteDirectory::new()),
            geocoder: offline_geocoder(),
            renderer: MapRenderer::new(dir),
        }
    }

    #[test]
    fn test_preprocess_site_name() {
        assert_eq!(preprocess_site_name("  Shore Temple "), "shore");
        assert_eq!(preprocess_site_name("Marina Beach"), "marina");
        assert_eq!(preprocess_site_name("Kodaikanal Lake"), "kodaikanal lake");
    }

    #[tokio::test]
    async fn test_explore_unknown_place_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let g = guide(dir.path());
        let mut input = Cursor::new(b"Atlantis\n".to_vec());
        let mut output = Vec::new();

        let chosen = g
            .explore("english", &mut input, &mut output)
            .await
            .unwrap();
        assert!(chosen.is_none());

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("No tourist sites found for this location."));
        assert!(text.contains("\"place\": \"Atlantis\""));
    }

    #[tokio::test]
    async fn test_explore_full_pass() {
        let dir = tempfile::tempdir().unwrap();
        let g = guide(dir.path());
        let mut input = Cursor::new(b"Thanjavur\nBrihadeeswarar Temple\n".to_vec());
        let mut output = Vec::new();

        let chosen = g
            .explore("english", &mut input, &mut output)
            .await
            .unwrap();
        assert_eq!(chosen.as_deref(), Some("Brihadeeswarar Temple"));

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"site_name\": \"Brihadeeswarar Temple\""));
        assert!(text.contains("All about brihadeeswarar."));
        // Geocoding is offline in this test, so the map degrades away.
        assert!(text.contains("Could not find location on the map."));
        assert!(text.contains("Not found"));
    }

    #[tokio::test]
    async fn test_heritage_report_unknown_site() {
        let dir = tempfile::tempdir().unwrap();
        let g = guide(dir.path());

        let outcome = g.heritage_report("Eiffel Tower").await;
        assert!(outcome.info.is_none());
        assert!(outcome.map_file.is_none());
        assert!(outcome.error.unwrap().contains("Site not found"));
    }

    #[tokio::test]
    async fn test_heritage_report_known_site_degrades_gracefully() {
        let dir = tempfile::tempdir().unwrap();
        let g = guide(dir.path());

        let outcome = g.heritage_report("Shore Temple").await;
        let info = outcome.info.unwrap();
        assert!(info.contains("Site Found: Shore Temple, East Raja Street"));
        assert!(info.contains("All about shore."));
        assert!(info.contains("Latitude: Not found"));
        assert_eq!(outcome.map_file, None);
    }

    #[test]
    fn test_report_serializes_all_fields() {
        let report = SiteInteractionReport {
            place: Some("Thanjavur".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"place\":\"Thanjavur\""));
        // Unset fields still appear, as null, so callers see a stable shape.
        assert!(json.contains("\"error\":null"));
    }
}
