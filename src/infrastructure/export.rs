//! Write-only reports: outcome lists as CSV and the location map as HTML.

use super::errors::InfraResult;
use crate::domain::{DeckStore, MapSnapshot, Outcome};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
struct OutcomeRow<'a> {
    outcome: Outcome,
    position: usize,
    id: &'a str,
    name: &'a str,
    cuisine: &'a str,
    price: u32,
    tags: String,
    popularity: u32,
    lat: f64,
    lng: f64,
}

pub struct OutcomeExporter;

impl OutcomeExporter {
    /// Writes every classified listing to `path`, grouped by outcome and in
    /// the order each was classified.
    pub fn export_csv(store: &DeckStore, path: &Path) -> InfraResult<PathBuf> {
        let mut writer = csv::Writer::from_path(path)?;
        for outcome in Outcome::ALL {
            for (index, item) in store.collection(outcome).iter().enumerate() {
                writer.serialize(OutcomeRow {
                    outcome,
                    position: index + 1,
                    id: item.id,
                    name: item.name,
                    cuisine: item.cuisine,
                    price: item.price,
                    tags: item.tags.join(", "),
                    popularity: item.popularity,
                    lat: item.position.lat,
                    lng: item.position.lng,
                })?;
            }
        }
        writer.flush()?;
        Ok(path.to_path_buf())
    }
}

pub struct MapExporter;

impl MapExporter {
    /// Writes a standalone Leaflet page plotting `snapshot` to `path`.
    pub fn export_html(snapshot: &MapSnapshot, path: &Path) -> InfraResult<PathBuf> {
        fs::write(path, Self::render_html(snapshot)?)?;
        Ok(path.to_path_buf())
    }

    pub fn render_html(snapshot: &MapSnapshot) -> InfraResult<String> {
        let data = serde_json::to_string(snapshot)?;
        Ok(format!(
            r##"<!DOCTYPE html>
<html>
<head>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
<style>
html,body,#map{{margin:0;padding:0;height:100%}}
.label{{background:rgba(0,0,0,.75);color:#fff;border-radius:6px;padding:2px 6px;font-size:11px}}
</style>
</head>
<body>
<div id="map"></div>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script>
const snapshot={data};
const map=L.map('map').setView([snapshot.center.lat,snapshot.center.lng],snapshot.zoom);
L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png').addTo(map);
snapshot.markers.forEach(m=>{{
  L.circleMarker([m.position.lat,m.position.lng],{{
    radius:m.active?9:6,
    color:m.active?"#ff0000":"#1e6bff",
    fillColor:m.active?"#ff0000":"#1e6bff",
    fillOpacity:.95
  }}).addTo(map).bindTooltip(m.name,{{permanent:true,direction:"top",className:"label"}});
}});
</script>
</body>
</html>
"##
        ))
    }
}
