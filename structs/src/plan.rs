use serde::{Deserialize, Serialize};

/// MAVLink commands used by the mission compiler. Closed enumeration,
/// serialized as the numeric command code.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(into = "u16", try_from = "u16")]
pub enum MavCmd {
    NavWaypoint = 16,
    NavRtl = 20,
    NavLand = 21,
    NavTakeoff = 22,
    DoDigicamControl = 203,
    DoSetCamTriggDist = 206,
    SetCameraMode = 530,
}

impl From<MavCmd> for u16 {
    fn from(cmd: MavCmd) -> u16 {
        cmd as u16
    }
}

impl TryFrom<u16> for MavCmd {
    type Error = String;
    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            16 => Ok(MavCmd::NavWaypoint),
            20 => Ok(MavCmd::NavRtl),
            21 => Ok(MavCmd::NavLand),
            22 => Ok(MavCmd::NavTakeoff),
            203 => Ok(MavCmd::DoDigicamControl),
            206 => Ok(MavCmd::DoSetCamTriggDist),
            530 => Ok(MavCmd::SetCameraMode),
            other => Err(format!("unknown MAV command code {}", other)),
        }
    }
}

/// The two coordinate frames the compiler emits: 2 for mission-local
/// commands, 3 for global position with relative altitude.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(into = "u8", try_from = "u8")]
pub enum MavFrame {
    Mission = 2,
    GlobalRelativeAlt = 3,
}

impl From<MavFrame> for u8 {
    fn from(frame: MavFrame) -> u8 {
        frame as u8
    }
}

impl TryFrom<u8> for MavFrame {
    type Error = String;
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            2 => Ok(MavFrame::Mission),
            3 => Ok(MavFrame::GlobalRelativeAlt),
            other => Err(format!("unknown MAV frame {}", other)),
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(into = "u8", try_from = "u8")]
pub enum AltitudeMode {
    Relative = 1,
    Absolute = 2,
    Terrain = 3,
}

impl From<AltitudeMode> for u8 {
    fn from(mode: AltitudeMode) -> u8 {
        mode as u8
    }
}

impl TryFrom<u8> for AltitudeMode {
    type Error = String;
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(AltitudeMode::Relative),
            2 => Ok(AltitudeMode::Absolute),
            3 => Ok(AltitudeMode::Terrain),
            other => Err(format!("unknown altitude mode {}", other)),
        }
    }
}

pub const PLAN_VERSION: u32 = 1;
pub const MISSION_VERSION: u32 = 2;
pub const FENCE_VERSION: u32 = 2;
pub const RALLY_VERSION: u32 = 2;

/// One mission command. Field order matches the QGroundControl `.plan`
/// document so re-serialization is byte-identical.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct MissionItem {
    #[serde(rename = "AMSLAltAboveTerrain")]
    pub amsl_alt_above_terrain: Option<f64>,
    #[serde(rename = "Altitude")]
    pub altitude: f64,
    #[serde(rename = "AltitudeMode")]
    pub altitude_mode: AltitudeMode,
    #[serde(rename = "autoContinue")]
    pub auto_continue: bool,
    pub command: MavCmd,
    #[serde(rename = "doJumpId")]
    pub do_jump_id: u32,
    pub frame: MavFrame,
    pub params: [f64; 7],
    #[serde(rename = "type")]
    pub item_type: String,
}

impl MissionItem {
    pub fn simple(
        command: MavCmd,
        do_jump_id: u32,
        frame: MavFrame,
        params: [f64; 7],
        altitude: f64,
        altitude_mode: AltitudeMode,
    ) -> MissionItem {
        MissionItem {
            amsl_alt_above_terrain: None,
            altitude,
            altitude_mode,
            auto_continue: true,
            command,
            do_jump_id,
            frame,
            params,
            item_type: "SimpleItem".to_string(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct FenceCircle {}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct FencePolygon {}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GeoFence {
    pub circles: Vec<FenceCircle>,
    pub polygons: Vec<FencePolygon>,
    pub version: u32,
}

impl Default for GeoFence {
    fn default() -> Self {
        GeoFence { circles: Vec::new(), polygons: Vec::new(), version: FENCE_VERSION }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RallyPoints {
    pub points: Vec<[f64; 3]>,
    pub version: u32,
}

impl Default for RallyPoints {
    fn default() -> Self {
        RallyPoints { points: Vec::new(), version: RALLY_VERSION }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Mission {
    #[serde(rename = "cruiseSpeed")]
    pub cruise_speed: f64,
    #[serde(rename = "firmwareType")]
    pub firmware_type: i32,
    #[serde(rename = "globalPlanAltitudeMode")]
    pub global_plan_altitude_mode: AltitudeMode,
    #[serde(rename = "hoverSpeed")]
    pub hover_speed: f64,
    pub items: Vec<MissionItem>,
    #[serde(rename = "plannedHomePosition")]
    pub planned_home_position: [f64; 3],
    #[serde(rename = "vehicleType")]
    pub vehicle_type: i32,
    pub version: u32,
}

/// The persisted `.plan` document: the compiled mission plus empty
/// geofence and rally-point sections.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct MissionPlan {
    #[serde(rename = "fileType")]
    pub file_type: String,
    #[serde(rename = "geoFence")]
    pub geo_fence: GeoFence,
    #[serde(rename = "groundStation")]
    pub ground_station: String,
    pub mission: Mission,
    #[serde(rename = "rallyPoints")]
    pub rally_points: RallyPoints,
    pub version: u32,
}

impl MissionPlan {
    pub fn new(mission: Mission) -> MissionPlan {
        MissionPlan {
            file_type: "Plan".to_string(),
            geo_fence: GeoFence::default(),
            ground_station: "QGroundControl".to_string(),
            mission,
            rally_points: RallyPoints::default(),
            version: PLAN_VERSION,
        }
    }
}
