//! Boustrophedon survey grid: parallel scan lines clipped against the
//! boundary polygon, alternating direction every line.

use log::{debug, warn};
use ordered_float::OrderedFloat;
use surveyplan_structs::config::Config;
use surveyplan_structs::{BoundaryRing, LngLat, Waypoint, WaypointKind};

use crate::geom::{self, METERS_PER_DEGREE};

/// Waypoint sample interval along a survey line, meters.
const LINE_SAMPLE_INTERVAL_M: f64 = 10.0;

/// Side-overlap line spacing from the camera footprint:
/// `altitude * sensor_width / focal_length * (1 - side_overlap / 100)`.
/// `None` when the camera configuration cannot produce a grid.
pub fn line_spacing_m(config: &Config) -> Option<f64> {
    if config.altitude <= 0.0
        || config.sensor_width <= 0.0
        || config.sensor_height <= 0.0
        || config.focal_length <= 0.0
    {
        return None;
    }
    if !(0.0..100.0).contains(&config.side_overlap) {
        return None;
    }
    let footprint_w = config.altitude * config.sensor_width / config.focal_length;
    Some(footprint_w * (1.0 - config.side_overlap / 100.0))
}

/// One clipped scan-line segment, already oriented for traversal.
pub type Segment = (LngLat, LngLat);

/// Clip parallel scan lines against the boundary.
///
/// Candidate horizontal lines span a bounding box extended symmetrically
/// about its center by the larger lat/lng extent, so rotated lines still
/// cover the whole area. Intersections with the (unrotated) boundary are
/// sorted by distance from the line start and paired consecutively
/// (0,1), (2,3), ... — the deterministic tie-break for concave rings.
/// Every other line is reversed for the back-and-forth scan order.
pub fn survey_segments(
    ring: &BoundaryRing,
    angle_deg: f64,
    spacing_m: f64,
    turn_around_m: f64,
) -> Vec<Segment> {
    if spacing_m <= 0.0 {
        return Vec::new();
    }
    let b = geom::bounds(ring.points());
    let center = LngLat {
        lng: (b.min_lng + b.max_lng) / 2.0,
        lat: (b.min_lat + b.max_lat) / 2.0,
    };
    let max_dim = (b.max_lat - b.min_lat).max(b.max_lng - b.min_lng);
    let (ext_min_lat, ext_max_lat) = (center.lat - max_dim, center.lat + max_dim);
    let (ext_min_lng, ext_max_lng) = (center.lng - max_dim, center.lng + max_dim);

    // spacing applies to latitude increments, no cosine correction needed
    let spacing_deg = spacing_m / METERS_PER_DEGREE;
    let radians = angle_deg.to_radians();
    let num_lines = ((ext_max_lat - ext_min_lat) / spacing_deg).ceil() as usize;
    let m_per_deg = geom::meters_per_degree(center.lat);

    let mut segments = Vec::new();
    for i in 0..=num_lines {
        let y = ext_min_lat + i as f64 * spacing_deg;
        let line_start = geom::rotate(LngLat { lng: ext_min_lng, lat: y }, center, radians);
        let line_end = geom::rotate(LngLat { lng: ext_max_lng, lat: y }, center, radians);

        let mut hits: Vec<LngLat> = ring
            .points()
            .windows(2)
            .filter_map(|edge| geom::segment_intersection(line_start, line_end, edge[0], edge[1]))
            .collect();
        if hits.len() < 2 {
            continue;
        }
        hits.sort_by_key(|p| OrderedFloat(line_start.dist_m(p)));

        for pair in hits.chunks_exact(2) {
            let (mut start, mut end) = (pair[0], pair[1]);
            if i % 2 == 1 {
                std::mem::swap(&mut start, &mut end);
            }
            segments.push(extend_segment(start, end, turn_around_m, m_per_deg));
        }
    }
    debug!("{} survey segments at {:.1} m spacing, angle {:.1}", segments.len(), spacing_m, angle_deg);
    segments
}

/// Extend both segment ends outward by `d_m` meters along the segment
/// direction, converting through the local meter/degree scale.
fn extend_segment(a: LngLat, b: LngLat, d_m: f64, (m_lat, m_lng): (f64, f64)) -> Segment {
    if d_m <= 0.0 || m_lng.abs() < 1e-9 {
        return (a, b);
    }
    let dx_m = (b.lng - a.lng) * m_lng;
    let dy_m = (b.lat - a.lat) * m_lat;
    let len = (dx_m * dx_m + dy_m * dy_m).sqrt();
    if len < 1e-9 {
        return (a, b);
    }
    let (ux, uy) = (dx_m / len, dy_m / len);
    (
        LngLat { lng: a.lng - ux * d_m / m_lng, lat: a.lat - uy * d_m / m_lat },
        LngLat { lng: b.lng + ux * d_m / m_lng, lat: b.lat + uy * d_m / m_lat },
    )
}

/// Generate survey waypoints. An empty result means no scan line
/// intersected the boundary — nothing to fly, not an error.
pub fn generate(ring: &BoundaryRing, config: &Config) -> Vec<Waypoint> {
    let spacing = match line_spacing_m(config) {
        Some(s) => s,
        None => {
            warn!("camera configuration yields no line spacing, skipping grid");
            return Vec::new();
        }
    };
    let segments = survey_segments(
        ring,
        config.grid_angle_norm(),
        spacing,
        config.turn_around_distance,
    );

    let mut waypoints = Vec::new();
    let mut id = 1u32;
    let mut push = |wps: &mut Vec<Waypoint>, p: LngLat, kind: WaypointKind| {
        wps.push(Waypoint { id, lat: p.lat, lng: p.lng, alt: config.altitude, kind });
        id += 1;
    };

    for (start, end) in &segments {
        if config.turn_waypoints_only {
            push(&mut waypoints, *start, WaypointKind::SurveyStart);
            push(&mut waypoints, *end, WaypointKind::SurveyEnd);
        } else {
            for p in geom::resample(&[*start, *end], LINE_SAMPLE_INTERVAL_M) {
                push(&mut waypoints, p, WaypointKind::Survey);
            }
        }
    }
    waypoints
}
