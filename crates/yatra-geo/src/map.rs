//! Map artifact rendering.
//!
//! Writes a self-contained Leaflet/OpenStreetMap HTML page with a single
//! marker and returns the saved path, so the site location can be viewed
//! in any browser without a plotting toolchain.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use yatra_core::error::{Result, YatraError};

/// Renders one-marker map pages into an output directory.
pub struct MapRenderer {
    output_dir: PathBuf,
}

impl MapRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write `map_<label>.html` for the given coordinates.
    pub fn render(&self, lat: f64, lon: f64, label: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        let file_name = format!("map_{}.html", slugify(label));
        let path = self.output_dir.join(file_name);

        let html = render_page(lat, lon, label);
        std::fs::write(&path, html).map_err(|e| YatraError::MapRender(e.to_string()))?;

        info!("Map saved to {}", path.display());
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// File-name form of a site label: lower-cased, spaces to underscores,
/// anything path-hostile dropped.
fn slugify(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() {
                Some(c)
            } else if c == ' ' || c == '_' || c == '-' {
                Some('_')
            } else {
                None
            }
        })
        .collect()
}

fn render_page(lat: f64, lon: f64, label: &str) -> String {
    let title = html_escape(label);
    let generated = Local::now().to_rfc3339();
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>Map Location: {title}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
  var map = L.map('map').setView([{lat}, {lon}], 12);
  L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
  }}).addTo(map);
  L.marker([{lat}, {lon}]).addTo(map).bindPopup("{title}").openPopup();
</script>
<!-- generated {generated} -->
</body>
</html>
"#
    )
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Shore Temple"), "shore_temple");
        assert_eq!(slugify("  Fort St. George "), "fort_st_george");
        assert_eq!(slugify("Arjuna's Penance"), "arjunas_penance");
    }

    #[test]
    fn test_render_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = MapRenderer::new(dir.path());

        let path = renderer.render(12.6162, 80.1924, "Shore Temple").unwrap();
        assert!(path.exists());
        assert_eq!(path.file_name().unwrap(), "map_shore_temple.html");

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Shore Temple"));
        assert!(html.contains("12.6162"));
        assert!(html.contains("80.1924"));
        assert!(html.contains("openstreetmap"));
    }

    #[test]
    fn test_render_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("maps").join("out");
        let renderer = MapRenderer::new(&nested);

        let path = renderer.render(9.2885, 79.3127, "Dhanushkodi Beach").unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[test]
    fn test_render_escapes_label() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = MapRenderer::new(dir.path());

        let path = renderer.render(1.0, 2.0, "A <b>bold</b> site").unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("A &lt;b&gt;bold&lt;/b&gt; site"));
        assert!(!html.contains("<b>bold</b>"));
    }
}
