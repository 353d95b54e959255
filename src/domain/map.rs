//! Read-only view of the catalog handed to map renderers.

use super::models::{Coordinates, Restaurant};
use serde::Serialize;

/// Where the map opens, matching the first listing.
pub const MAP_CENTER: Coordinates = Coordinates::new(12.9716, 77.5946);
pub const MAP_ZOOM: u8 = 13;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: &'static str,
    pub name: &'static str,
    pub position: Coordinates,
    /// Set on the marker of the current card
    pub active: bool,
}

/// Every listing location plus which one is on the current card.
///
/// Map renderers consume this and never feed anything back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSnapshot {
    pub current_id: Option<&'static str>,
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

impl MapSnapshot {
    pub fn new(catalog: &[Restaurant], current: Option<&Restaurant>) -> Self {
        let current_id = current.map(|r| r.id);
        let markers = catalog
            .iter()
            .map(|r| MapMarker {
                id: r.id,
                name: r.name,
                position: r.position,
                active: Some(r.id) == current_id,
            })
            .collect();

        Self {
            current_id,
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            markers,
        }
    }

    pub fn active_marker(&self) -> Option<&MapMarker> {
        self.markers.iter().find(|m| m.active)
    }

    /// Longitude and latitude bounds covering every marker and the center,
    /// widened by `padding` degrees on each side.
    pub fn bounds(&self, padding: f64) -> ([f64; 2], [f64; 2]) {
        let mut lng = [self.center.lng, self.center.lng];
        let mut lat = [self.center.lat, self.center.lat];
        for marker in &self.markers {
            lng[0] = lng[0].min(marker.position.lng);
            lng[1] = lng[1].max(marker.position.lng);
            lat[0] = lat[0].min(marker.position.lat);
            lat[1] = lat[1].max(marker.position.lat);
        }
        (
            [lng[0] - padding, lng[1] + padding],
            [lat[0] - padding, lat[1] + padding],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DATASET;

    #[test]
    fn test_current_marker_is_active() {
        let snapshot = MapSnapshot::new(DATASET, DATASET.get(2));
        assert_eq!(snapshot.markers.len(), DATASET.len());
        assert_eq!(snapshot.current_id, Some("3"));
        assert_eq!(snapshot.active_marker().map(|m| m.name), Some("Fire Bowl"));
        assert_eq!(snapshot.markers.iter().filter(|m| m.active).count(), 1);
    }

    #[test]
    fn test_no_active_marker_when_exhausted() {
        let snapshot = MapSnapshot::new(DATASET, None);
        assert!(snapshot.current_id.is_none());
        assert!(snapshot.active_marker().is_none());
    }

    #[test]
    fn test_bounds_cover_markers() {
        let snapshot = MapSnapshot::new(DATASET, None);
        let ([west, east], [south, north]) = snapshot.bounds(0.001);
        for marker in &snapshot.markers {
            assert!(marker.position.lng > west && marker.position.lng < east);
            assert!(marker.position.lat > south && marker.position.lat < north);
        }
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = MapSnapshot::new(&DATASET[..1], DATASET.first());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["current_id"], "1");
        assert_eq!(json["zoom"], 13);
        assert_eq!(json["markers"][0]["active"], true);
        assert_eq!(json["markers"][0]["position"]["lat"], 12.9716);
    }
}
