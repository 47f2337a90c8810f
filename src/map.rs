use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tracing::info;

use crate::geo::{GeoMarker, GeoOrigin};

const LEAFLET_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css";
const LEAFLET_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js";
const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// A self-contained interactive map page: Leaflet from a CDN, the origin as
/// a green marker and one red marker per projected point, each with a popup
/// carrying coordinate, distance and timestamp.
pub struct MapDocument {
    html: String,
}

impl MapDocument {
    pub fn render(origin: GeoOrigin, markers: &[GeoMarker], zoom: u8) -> Self {
        let mut body = String::new();

        let _ = writeln!(
            body,
            "var map = L.map('map').setView([{}, {}], {});",
            origin.latitude, origin.longitude, zoom
        );
        let _ = writeln!(
            body,
            "L.tileLayer('{}', {{ attribution: '{}' }}).addTo(map);",
            TILE_URL, TILE_ATTRIBUTION
        );
        let _ = writeln!(
            body,
            "L.circleMarker([{}, {}], {{ radius: 8, color: 'green', fillColor: 'green', fillOpacity: 0.9 }})\
             .addTo(map).bindPopup('Current Location');",
            origin.latitude, origin.longitude
        );

        for marker in markers {
            let _ = writeln!(
                body,
                "L.circleMarker([{lat}, {lon}], {{ radius: 6, color: 'red', fillColor: 'red', fillOpacity: 0.9 }})\
                 .addTo(map).bindPopup('{popup}');",
                lat = marker.latitude,
                lon = marker.longitude,
                popup = popup_text(marker),
            );
        }

        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>polarscope map</title>
  <link rel="stylesheet" href="{css}" />
  <script src="{js}"></script>
  <style>
    html, body {{ height: 100%; margin: 0; }}
    #map {{ height: 100%; }}
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
{body}  </script>
</body>
</html>
"#,
            css = LEAFLET_CSS,
            js = LEAFLET_JS,
            body = body,
        );

        Self { html }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Write the document. Failure leaves nothing half-usable in memory; the
    /// caller just reports it.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.html)
            .with_context(|| format!("Failed to write map to {}", path.display()))?;
        info!("Map written to {}", path.display());
        Ok(())
    }
}

fn popup_text(marker: &GeoMarker) -> String {
    format!(
        "Latitude: {:.4}<br>Longitude: {:.4}<br>Distance: {:.2} km<br>Time: {}",
        marker.latitude,
        marker.longitude,
        marker.distance_km,
        marker.generated_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

/// Timestamped file name for an exported map.
pub fn default_filename(at: DateTime<Local>) -> String {
    format!("polarscope-map-{}.html", at.format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn marker(lat: f64, lon: f64, km: f64) -> GeoMarker {
        GeoMarker {
            latitude: lat,
            longitude: lon,
            distance_km: km,
            generated_at: Local.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap(),
        }
    }

    fn origin() -> GeoOrigin {
        GeoOrigin::new(40.0, -70.0).unwrap()
    }

    #[test]
    fn document_is_centered_on_origin() {
        let doc = MapDocument::render(origin(), &[], 12);
        assert!(doc.html().contains("leaflet"));
        assert!(doc.html().contains("setView([40, -70], 12)"));
        assert!(doc.html().contains("Current Location"));
    }

    #[test]
    fn one_marker_per_projected_point() {
        let markers = vec![marker(40.0, -69.95, 4.26), marker(40.1, -70.0, 11.12)];
        let doc = MapDocument::render(origin(), &markers, 12);

        let red = doc.html().matches("color: 'red'").count();
        assert_eq!(red, 2);
    }

    #[test]
    fn popup_carries_coordinate_distance_and_time() {
        let doc = MapDocument::render(origin(), &[marker(40.0, -69.95, 4.26)], 12);

        assert!(doc.html().contains("Latitude: 40.0000"));
        assert!(doc.html().contains("Longitude: -69.9500"));
        assert!(doc.html().contains("Distance: 4.26 km"));
        assert!(doc.html().contains("Time: 2024-06-01 12:30:00"));
    }

    #[test]
    fn save_writes_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.html");

        let doc = MapDocument::render(origin(), &[], 12);
        doc.save(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, doc.html());
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("map.html");

        let doc = MapDocument::render(origin(), &[], 12);
        let err = doc.save(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to write map"));
    }

    #[test]
    fn filename_is_timestamped() {
        let at = Local.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        assert_eq!(default_filename(at), "polarscope-map-20240601-123000.html");
    }
}
