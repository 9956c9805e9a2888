//! Perimeter and vertex patterns: simple traversals of the boundary ring.

use surveyplan_structs::config::Config;
use surveyplan_structs::{BoundaryRing, Waypoint, WaypointKind};

use crate::geom;

/// Perimeter pattern. Default is direct vertex emission in ring order;
/// a nonzero `perimeter_spacing` switches to arc-length resampling of
/// the ring at that spacing.
pub fn perimeter(ring: &BoundaryRing, config: &Config) -> Vec<Waypoint> {
    if config.perimeter_spacing > 0.0 {
        let mut pts = geom::resample(ring.points(), config.perimeter_spacing);
        // resampling a closed ring repeats the start point at the end
        pts.pop();
        return pts
            .iter()
            .enumerate()
            .map(|(i, p)| Waypoint {
                id: i as u32 + 1,
                lat: p.lat,
                lng: p.lng,
                alt: config.altitude,
                kind: WaypointKind::Perimeter,
            })
            .collect();
    }
    ring_vertices(ring, config, WaypointKind::Perimeter)
}

/// Every ring vertex except the closing duplicate, in ring order.
pub fn vertices(ring: &BoundaryRing, config: &Config) -> Vec<Waypoint> {
    ring_vertices(ring, config, WaypointKind::Vertex)
}

fn ring_vertices(ring: &BoundaryRing, config: &Config, kind: WaypointKind) -> Vec<Waypoint> {
    ring.open()
        .iter()
        .enumerate()
        .map(|(i, p)| Waypoint {
            id: i as u32 + 1,
            lat: p.lat,
            lng: p.lng,
            alt: config.altitude,
            kind,
        })
        .collect()
}
