//! Export surfaces: pretty plan JSON and the flat waypoint table.

use surveyplan_structs::plan::MissionPlan;
use surveyplan_structs::Waypoint;

/// The `.plan` document as 2-space-indented JSON. Deterministic: the
/// same structure always serializes to the same bytes.
pub fn plan_json(plan: &MissionPlan) -> serde_json::Result<String> {
    serde_json::to_string_pretty(plan)
}

/// Waypoint table with header `ID,Latitude,Longitude,Altitude,Type`,
/// coordinates at 6 decimal places. `include_home` prepends a HOME row
/// taken from the first waypoint.
pub fn waypoint_csv(waypoints: &[Waypoint], include_home: bool) -> csv::Result<Vec<u8>> {
    let mut w = csv::Writer::from_writer(Vec::new());
    w.write_record(["ID", "Latitude", "Longitude", "Altitude", "Type"])?;
    if include_home {
        if let Some(home) = waypoints.first() {
            w.write_record([
                "HOME".to_string(),
                format!("{:.6}", home.lat),
                format!("{:.6}", home.lng),
                format!("{}", home.alt),
                "home".to_string(),
            ])?;
        }
    }
    for wp in waypoints {
        w.write_record([
            wp.id.to_string(),
            format!("{:.6}", wp.lat),
            format!("{:.6}", wp.lng),
            format!("{}", wp.alt),
            wp.kind.as_str().to_string(),
        ])?;
    }
    w.flush()?;
    w.into_inner().map_err(|e| e.into_error().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use surveyplan_structs::WaypointKind;

    fn waypoints() -> Vec<Waypoint> {
        vec![
            Waypoint { id: 1, lat: 40.7484, lng: -73.9857, alt: 50.0, kind: WaypointKind::Vertex },
            Waypoint { id: 2, lat: 40.7464, lng: -73.9837, alt: 50.0, kind: WaypointKind::Vertex },
        ]
    }

    #[test]
    fn csv_has_header_and_six_decimals() {
        let bytes = waypoint_csv(&waypoints(), false).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "ID,Latitude,Longitude,Altitude,Type");
        assert_eq!(lines.next().unwrap(), "1,40.748400,-73.985700,50,vertex");
        assert_eq!(lines.next().unwrap(), "2,40.746400,-73.983700,50,vertex");
        assert!(lines.next().is_none());
    }

    #[test]
    fn csv_home_row_uses_first_waypoint() {
        let bytes = waypoint_csv(&waypoints(), true).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let second = text.lines().nth(1).unwrap();
        assert_eq!(second, "HOME,40.748400,-73.985700,50,home");
    }

    #[test]
    fn csv_of_no_waypoints_is_just_the_header() {
        let bytes = waypoint_csv(&[], true).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.trim_end(), "ID,Latitude,Longitude,Altitude,Type");
    }
}
