//! Distance-triggered camera shot scheduling along the waypoint path.

use log::debug;
use surveyplan_structs::config::Config;
use surveyplan_structs::{CameraTriggerPoint, Waypoint};

/// Fallback trigger distance when camera parameters are unusable.
const FALLBACK_TRIGGER_DISTANCE_M: f64 = 50.0;

/// Distance between camera shots: the frontal-overlap footprint spacing,
/// floored by the minimum-time-between-shots constraint
/// `cruise_speed * min_trigger_interval`.
pub fn trigger_distance_m(config: &Config) -> f64 {
    let min_distance = config.cruise_speed * config.min_trigger_interval;
    if config.altitude <= 0.0 || config.sensor_width <= 0.0 || config.focal_length <= 0.0 {
        return FALLBACK_TRIGGER_DISTANCE_M.max(min_distance);
    }
    let footprint_w = config.altitude * config.sensor_width / config.focal_length;
    let overlap_distance = footprint_w * (1.0 - config.frontal_overlap / 100.0);
    overlap_distance.max(min_distance)
}

/// Walk the waypoint path and emit shot locations.
///
/// The distance accumulator resets at every waypoint: each segment gets
/// a trigger at its starting waypoint, interior triggers every
/// `trigger_distance` meters strictly inside the segment, and the last
/// waypoint closes the sequence. Overlap is therefore guaranteed from
/// every waypoint onward, at the cost of extra shots clustered at turns.
pub fn trigger_points(waypoints: &[Waypoint], config: &Config) -> Vec<CameraTriggerPoint> {
    if !config.camera_trigger_enabled || waypoints.len() < 2 {
        return Vec::new();
    }
    let interval = trigger_distance_m(config);
    if interval <= 0.0 {
        return Vec::new();
    }

    let mut points = Vec::new();
    let mut id = 1u32;
    for pair in waypoints.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        let seg_len = prev.loc().dist_m(&curr.loc());

        points.push(CameraTriggerPoint { id, lat: prev.lat, lng: prev.lng, alt: prev.alt });
        id += 1;

        let mut walked = 0.0;
        while walked + interval < seg_len {
            walked += interval;
            let ratio = walked / seg_len;
            points.push(CameraTriggerPoint {
                id,
                lat: prev.lat + (curr.lat - prev.lat) * ratio,
                lng: prev.lng + (curr.lng - prev.lng) * ratio,
                alt: prev.alt,
            });
            id += 1;
        }
    }
    let last = &waypoints[waypoints.len() - 1];
    points.push(CameraTriggerPoint { id, lat: last.lat, lng: last.lng, alt: last.alt });

    debug!("{} camera trigger points at {:.1} m interval", points.len(), interval);
    points
}
