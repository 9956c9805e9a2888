//! Assembles the ordered mission command list and wraps it into the
//! persisted plan document. Emission order is the vehicle's execution
//! order and is never reordered or deduplicated.

use log::info;
use surveyplan_structs::config::Config;
use surveyplan_structs::error::PlanError;
use surveyplan_structs::plan::{
    MavCmd, MavFrame, Mission, MissionItem, MissionPlan, MISSION_VERSION,
};
use surveyplan_structs::{BoundaryRing, Waypoint};

use crate::{camera, geom};

pub fn compile(
    ring: &BoundaryRing,
    waypoints: &[Waypoint],
    config: &Config,
) -> Result<MissionPlan, PlanError> {
    if waypoints.is_empty() {
        return Err(PlanError::MissionCompile("no waypoints present".to_string()));
    }
    for wp in waypoints {
        if !(wp.lat.is_finite() && wp.lng.is_finite() && wp.alt.is_finite()) {
            return Err(PlanError::MissionCompile(format!(
                "non-finite coordinate at waypoint {}",
                wp.id
            )));
        }
    }

    let mode = config.altitude_mode;
    let mut items: Vec<MissionItem> = Vec::new();
    let mut seq = 0u32;
    let mut push = |items: &mut Vec<MissionItem>, command: MavCmd, frame: MavFrame, params: [f64; 7], alt: f64| {
        items.push(MissionItem::simple(command, seq, frame, params, alt, mode));
        seq += 1;
    };

    let centroid = geom::centroid(ring.points());
    push(
        &mut items,
        MavCmd::NavTakeoff,
        MavFrame::GlobalRelativeAlt,
        [0.0, 0.0, 0.0, 0.0, centroid.lat, centroid.lng, config.altitude],
        config.altitude,
    );

    let trigger = config
        .camera_trigger_enabled
        .then(|| camera::trigger_distance_m(config))
        .filter(|d| *d > 0.0);
    if let Some(d) = trigger {
        push(
            &mut items,
            MavCmd::DoSetCamTriggDist,
            MavFrame::Mission,
            [d, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            config.altitude,
        );
    }

    for waypoint in waypoints {
        if trigger.is_some() {
            // trigger reset on arrival at this waypoint
            push(
                &mut items,
                MavCmd::DoSetCamTriggDist,
                MavFrame::Mission,
                [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
                waypoint.alt,
            );
        }
        push(
            &mut items,
            MavCmd::NavWaypoint,
            MavFrame::GlobalRelativeAlt,
            [0.0, 0.0, 0.0, 0.0, waypoint.lat, waypoint.lng, waypoint.alt],
            waypoint.alt,
        );
        if let Some(d) = trigger {
            // re-arm for the next leg
            push(
                &mut items,
                MavCmd::DoSetCamTriggDist,
                MavFrame::Mission,
                [d, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
                waypoint.alt,
            );
        }
    }

    push(
        &mut items,
        MavCmd::NavRtl,
        MavFrame::Mission,
        [0.0; 7],
        0.0,
    );

    info!("compiled {} mission items for {} waypoints", items.len(), waypoints.len());

    let home = waypoints[0];
    Ok(MissionPlan::new(Mission {
        cruise_speed: config.cruise_speed,
        firmware_type: config.firmware_type,
        global_plan_altitude_mode: config.altitude_mode,
        hover_speed: config.hover_speed,
        items,
        planned_home_position: [home.lat, home.lng, home.alt],
        vehicle_type: config.vehicle_type,
        version: MISSION_VERSION,
    }))
}
