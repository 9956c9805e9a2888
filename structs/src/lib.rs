use serde::{Deserialize, Serialize};

pub mod config;
pub mod error;
pub mod plan;

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    /// Haversine great-circle distance in meters.
    pub fn dist_m(&self, other: &LngLat) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    pub fn eq_approx(&self, other: &LngLat) -> bool {
        (self.lng - other.lng).abs() < 1e-9 && (self.lat - other.lat).abs() < 1e-9
    }

    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }
}

/// Closed boundary ring: first point equals last, at least 4 points and
/// 3 distinct vertices. Self-intersecting rings are accepted as-is and
/// may produce degenerate grids.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct BoundaryRing(pub Vec<LngLat>);

impl BoundaryRing {
    /// All vertices including the closing duplicate.
    pub fn points(&self) -> &[LngLat] {
        &self.0
    }

    /// Vertices without the closing duplicate.
    pub fn open(&self) -> &[LngLat] {
        &self.0[..self.0.len() - 1]
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WaypointKind {
    Survey,
    SurveyStart,
    SurveyEnd,
    Perimeter,
    Vertex,
}

impl WaypointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaypointKind::Survey => "survey",
            WaypointKind::SurveyStart => "survey_start",
            WaypointKind::SurveyEnd => "survey_end",
            WaypointKind::Perimeter => "perimeter",
            WaypointKind::Vertex => "vertex",
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct Waypoint {
    pub id: u32,
    pub lat: f64,
    pub lng: f64,
    pub alt: f64,
    pub kind: WaypointKind,
}

impl Waypoint {
    pub fn loc(&self) -> LngLat {
        LngLat { lng: self.lng, lat: self.lat }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct CameraTriggerPoint {
    pub id: u32,
    pub lat: f64,
    pub lng: f64,
    pub alt: f64,
}

/// Flat summary for UI consumption, not persisted.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Statistics {
    pub waypoints: usize,
    pub distance_m: f64,
    pub flight_time_min: f64,
    pub camera_shots: usize,
    pub area_m2: f64,
}
