#[cfg(test)]
mod tests {
    use serde_json::json;
    use surveyplan_structs::config::{Config, Pattern};
    use surveyplan_structs::error::PlanError;
    use surveyplan_structs::plan::{MavCmd, MissionPlan};
    use surveyplan_structs::WaypointKind;

    use crate::{boundary, export, generate};

    fn sample_boundary() -> surveyplan_structs::BoundaryRing {
        let geojson = json!({
            "type": "Feature",
            "properties": {"name": "Sample Survey Area"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [-73.9857, 40.7484],
                    [-73.9837, 40.7484],
                    [-73.9837, 40.7464],
                    [-73.9857, 40.7464],
                    [-73.9857, 40.7484]
                ]]
            }
        });
        boundary::resolve(&geojson).unwrap()
    }

    #[test]
    fn vertices_pattern_on_sample_square() {
        let _ = env_logger::try_init();
        let config = Config { pattern: Pattern::Vertices, altitude: 50.0, ..Config::default() };
        let out = generate(&sample_boundary(), &config).unwrap();

        assert_eq!(out.waypoints.len(), 4);
        let corners = [
            (-73.9857, 40.7484),
            (-73.9837, 40.7484),
            (-73.9837, 40.7464),
            (-73.9857, 40.7464),
        ];
        for (i, wp) in out.waypoints.iter().enumerate() {
            assert_eq!(wp.id, i as u32 + 1);
            assert_eq!(wp.alt, 50.0);
            assert_eq!((wp.lng, wp.lat), corners[i]);
        }
        assert!(out.plan.is_some());
        assert_eq!(out.stats.waypoints, 4);
    }

    #[test]
    fn perimeter_vertex_mode_equals_vertices_on_convex_quad() {
        let _ = env_logger::try_init();
        let ring = sample_boundary();
        let v = generate(&ring, &Config { pattern: Pattern::Vertices, ..Config::default() }).unwrap();
        let p = generate(&ring, &Config { pattern: Pattern::Perimeter, ..Config::default() }).unwrap();
        assert_eq!(v.waypoints.len(), p.waypoints.len());
        for (a, b) in v.waypoints.iter().zip(&p.waypoints) {
            assert_eq!((a.id, a.lng, a.lat, a.alt), (b.id, b.lng, b.lat, b.alt));
        }
    }

    #[test]
    fn survey_single_line_turn_waypoints_only() {
        let _ = env_logger::try_init();
        // spacing = 100 * 27 / 4.5 * (1 - 50/100) = 300 m; only one scan
        // line crosses the 222 m tall square
        let config = Config {
            pattern: Pattern::Survey,
            turn_waypoints_only: true,
            altitude: 100.0,
            sensor_width: 27.0,
            focal_length: 4.5,
            side_overlap: 50.0,
            ..Config::default()
        };
        let out = generate(&sample_boundary(), &config).unwrap();
        assert_eq!(out.waypoints.len(), 2);
        assert_eq!(out.waypoints[0].kind, WaypointKind::SurveyStart);
        assert_eq!(out.waypoints[1].kind, WaypointKind::SurveyEnd);
    }

    #[test]
    fn empty_survey_result_is_not_an_error() {
        let _ = env_logger::try_init();
        // spacing = 100 * 72 / 4.5 * (1 - 50/100) = 800 m, no line hits
        let config = Config {
            pattern: Pattern::Survey,
            altitude: 100.0,
            sensor_width: 72.0,
            focal_length: 4.5,
            side_overlap: 50.0,
            ..Config::default()
        };
        let out = generate(&sample_boundary(), &config).unwrap();
        assert!(out.waypoints.is_empty());
        assert!(out.plan.is_none());
        assert_eq!(out.stats.waypoints, 0);
        assert_eq!(out.stats.distance_m, 0.0);
        assert!(out.stats.area_m2 > 0.0);
    }

    #[test]
    fn invalid_config_blocks_generation_with_all_violations() {
        let _ = env_logger::try_init();
        let config = Config { altitude: 0.0, hover_speed: -1.0, ..Config::default() };
        match generate(&sample_boundary(), &config) {
            Err(PlanError::InvalidConfig(v)) => assert_eq!(v.len(), 2),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn pipeline_is_idempotent_byte_for_byte() {
        let _ = env_logger::try_init();
        let ring = sample_boundary();
        let config = Config {
            pattern: Pattern::Survey,
            camera_trigger_enabled: true,
            turn_waypoints_only: true,
            ..Config::default()
        };
        let a = generate(&ring, &config).unwrap();
        let b = generate(&ring, &config).unwrap();
        let ja = export::plan_json(a.plan.as_ref().unwrap()).unwrap();
        let jb = export::plan_json(b.plan.as_ref().unwrap()).unwrap();
        assert_eq!(ja, jb);
    }

    #[test]
    fn plan_json_round_trips() {
        let _ = env_logger::try_init();
        let config = Config {
            pattern: Pattern::Vertices,
            camera_trigger_enabled: true,
            ..Config::default()
        };
        let out = generate(&sample_boundary(), &config).unwrap();
        let json = export::plan_json(out.plan.as_ref().unwrap()).unwrap();
        let parsed: MissionPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(export::plan_json(&parsed).unwrap(), json);
        assert!(parsed
            .mission
            .items
            .iter()
            .any(|i| i.command == MavCmd::DoSetCamTriggDist));
    }

    #[test]
    fn statistics_track_waypoints_distance_and_shots() {
        let _ = env_logger::try_init();
        let config = Config {
            pattern: Pattern::Vertices,
            camera_trigger_enabled: true,
            cruise_speed: 15.0,
            ..Config::default()
        };
        let out = generate(&sample_boundary(), &config).unwrap();
        assert_eq!(out.stats.waypoints, 4);
        assert_eq!(out.stats.camera_shots, out.camera_points.len());
        assert!(out.stats.camera_shots > 0);
        assert_eq!(out.stats.distance_m, out.stats.distance_m.round());
        let expected_time =
            (out.stats.distance_m / 15.0 / 60.0 * 10.0).round() / 10.0;
        assert_eq!(out.stats.flight_time_min, expected_time);
        // three sides of the ~168/222 m square
        assert!(out.stats.distance_m > 500.0 && out.stats.distance_m < 650.0);
        // area of the sample square is roughly 37.5 thousand m^2
        assert!(out.stats.area_m2 > 35_000.0 && out.stats.area_m2 < 40_000.0);
    }

    #[test]
    fn survey_waypoints_feed_camera_and_mission() {
        let _ = env_logger::try_init();
        let config = Config {
            pattern: Pattern::Survey,
            camera_trigger_enabled: true,
            turn_waypoints_only: true,
            ..Config::default()
        };
        let out = generate(&sample_boundary(), &config).unwrap();
        assert!(out.waypoints.len() >= 4);
        assert!(!out.camera_points.is_empty());
        let plan = out.plan.unwrap();
        // takeoff + arm + 3 per waypoint + rtl
        assert_eq!(plan.mission.items.len(), 2 + 3 * out.waypoints.len() + 1);
        for (i, item) in plan.mission.items.iter().enumerate() {
            assert_eq!(item.do_jump_id, i as u32);
        }
    }
}
