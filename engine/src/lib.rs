//! Survey mission generation engine: a pure pipeline of the form
//! `(boundary, config) -> (waypoints, camera points, plan, statistics)`.
//! Each call is synchronous, re-entrant and holds no state across calls.

use log::warn;
use surveyplan_structs::config::{Config, Pattern};
use surveyplan_structs::error::PlanError;
use surveyplan_structs::plan::MissionPlan;
use surveyplan_structs::{BoundaryRing, CameraTriggerPoint, Statistics, Waypoint};

pub mod boundary;
pub mod camera;
pub mod export;
pub mod geom;
pub mod grid;
pub mod mission;
pub mod patterns;

mod pipeline_tests;

/// Everything one generate call produces. `plan` is `None` for the
/// zero-waypoint case, which is a valid empty result rather than an
/// error.
#[derive(Debug)]
pub struct Generation {
    pub waypoints: Vec<Waypoint>,
    pub camera_points: Vec<CameraTriggerPoint>,
    pub plan: Option<MissionPlan>,
    pub stats: Statistics,
}

pub fn generate(ring: &BoundaryRing, config: &Config) -> Result<Generation, PlanError> {
    config.validate()?;

    let waypoints = match config.pattern {
        Pattern::Survey => grid::generate(ring, config),
        Pattern::Perimeter => patterns::perimeter(ring, config),
        Pattern::Vertices => patterns::vertices(ring, config),
    };
    let camera_points = camera::trigger_points(&waypoints, config);

    let plan = if waypoints.is_empty() {
        warn!("generation produced no waypoints, nothing to fly");
        None
    } else {
        Some(mission::compile(ring, &waypoints, config)?)
    };

    let stats = statistics(ring, &waypoints, &camera_points, config);
    Ok(Generation { waypoints, camera_points, plan, stats })
}

/// Sum of consecutive great-circle distances along the waypoint path.
pub fn total_distance_m(waypoints: &[Waypoint]) -> f64 {
    waypoints
        .windows(2)
        .map(|pair| pair[0].loc().dist_m(&pair[1].loc()))
        .sum()
}

pub fn statistics(
    ring: &BoundaryRing,
    waypoints: &[Waypoint],
    camera_points: &[CameraTriggerPoint],
    config: &Config,
) -> Statistics {
    let distance_m = total_distance_m(waypoints).round();
    let flight_time_min = (distance_m / config.cruise_speed / 60.0 * 10.0).round() / 10.0;
    Statistics {
        waypoints: waypoints.len(),
        distance_m,
        flight_time_min,
        camera_shots: camera_points.len(),
        area_m2: geom::polygon_area_m2(ring.points()).round(),
    }
}
