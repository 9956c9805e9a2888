use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::plan::AltitudeMode;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Survey,
    Perimeter,
    Vertices,
}

/// One generation call's configuration, deserialized from the upstream
/// camelCase document and validated once. Never re-read mid-algorithm.
#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub vehicle_type: i32,
    pub firmware_type: i32,
    pub altitude: f64,
    pub altitude_mode: AltitudeMode,
    pub cruise_speed: f64,
    pub hover_speed: f64,
    pub pattern: Pattern,
    /// Survey line rotation in degrees, normalized mod 360.
    pub grid_angle: f64,
    /// Extension distance at survey line ends, meters.
    pub turn_around_distance: f64,
    pub turn_waypoints_only: bool,
    /// Sensor dimensions in mm.
    pub sensor_width: f64,
    pub sensor_height: f64,
    /// Focal length in mm.
    pub focal_length: f64,
    pub image_width: u32,
    pub image_height: u32,
    /// Overlap percentages, policy range [50, 90].
    pub frontal_overlap: f64,
    pub side_overlap: f64,
    pub camera_trigger_enabled: bool,
    /// Minimum seconds between camera shots.
    pub min_trigger_interval: f64,
    /// 0 emits perimeter vertices directly; > 0 resamples the ring arc
    /// length at this spacing in meters.
    pub perimeter_spacing: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vehicle_type: 2,
            firmware_type: 12,
            altitude: 50.0,
            altitude_mode: AltitudeMode::Relative,
            cruise_speed: 15.0,
            hover_speed: 5.0,
            pattern: Pattern::Survey,
            grid_angle: 0.0,
            turn_around_distance: 0.0,
            turn_waypoints_only: false,
            sensor_width: 6.17,
            sensor_height: 4.55,
            focal_length: 4.5,
            image_width: 4000,
            image_height: 3000,
            frontal_overlap: 75.0,
            side_overlap: 65.0,
            camera_trigger_enabled: false,
            min_trigger_interval: 1.0,
            perimeter_spacing: 0.0,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ConfigViolation {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Config {
    pub fn grid_angle_norm(&self) -> f64 {
        self.grid_angle.rem_euclid(360.0)
    }

    /// Fail-closed validation: all violations are collected and reported
    /// together rather than stopping at the first one.
    pub fn validate(&self) -> Result<(), PlanError> {
        let mut violations = Vec::new();
        let mut check = |ok: bool, field: &'static str, message: &str| {
            if !ok {
                violations.push(ConfigViolation { field, message: message.to_string() });
            }
        };

        check(
            self.altitude.is_finite() && self.altitude > 0.0,
            "altitude",
            "must be positive",
        );
        check(
            self.cruise_speed.is_finite() && self.cruise_speed > 0.0,
            "cruiseSpeed",
            "must be positive",
        );
        check(
            self.hover_speed.is_finite() && self.hover_speed > 0.0,
            "hoverSpeed",
            "must be positive",
        );
        check(
            self.frontal_overlap.is_finite()
                && (50.0..=90.0).contains(&self.frontal_overlap),
            "frontalOverlap",
            "must be between 50% and 90%",
        );
        check(
            self.side_overlap.is_finite() && (50.0..=90.0).contains(&self.side_overlap),
            "sideOverlap",
            "must be between 50% and 90%",
        );
        check(
            self.sensor_width.is_finite() && self.sensor_width > 0.0,
            "sensorWidth",
            "must be positive",
        );
        check(
            self.sensor_height.is_finite() && self.sensor_height > 0.0,
            "sensorHeight",
            "must be positive",
        );
        check(
            self.focal_length.is_finite() && self.focal_length > 0.0,
            "focalLength",
            "must be positive",
        );
        check(self.image_width > 0, "imageWidth", "must be positive");
        check(self.image_height > 0, "imageHeight", "must be positive");
        check(
            self.min_trigger_interval.is_finite() && self.min_trigger_interval > 0.0,
            "minTriggerInterval",
            "must be positive",
        );
        check(
            self.turn_around_distance.is_finite() && self.turn_around_distance >= 0.0,
            "turnAroundDistance",
            "must be non-negative",
        );
        check(
            self.perimeter_spacing.is_finite() && self.perimeter_spacing >= 0.0,
            "perimeterSpacing",
            "must be non-negative",
        );
        check(self.grid_angle.is_finite(), "gridAngle", "must be a finite number");

        if violations.is_empty() {
            Ok(())
        } else {
            Err(PlanError::InvalidConfig(violations))
        }
    }
}
