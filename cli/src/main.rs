use std::error::Error;
use std::path::Path;

use log::info;
use surveyplan_engine::{boundary, export, generate};
use surveyplan_structs::config::Config;

/// Built-in demo area, used when no boundary file is given.
const SAMPLE_GEOJSON: &str = r#"{
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
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let args: Vec<String> = std::env::args().collect();
    let geojson: serde_json::Value = match args.get(1) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => {
            info!("no boundary file given, using the built-in sample area");
            serde_json::from_str(SAMPLE_GEOJSON)?
        }
    };
    let config: Config = match args.get(2) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    let out_dir = Path::new(args.get(3).map(String::as_str).unwrap_or("."));

    let ring = boundary::resolve(&geojson)?;
    let out = generate(&ring, &config)?;

    let csv_path = out_dir.join("waypoints.csv");
    std::fs::write(&csv_path, export::waypoint_csv(&out.waypoints, true)?)?;
    info!("wrote {}", csv_path.display());

    match &out.plan {
        Some(plan) => {
            let plan_path = out_dir.join("mission.plan");
            std::fs::write(&plan_path, export::plan_json(plan)?)?;
            info!("wrote {}", plan_path.display());
        }
        None => println!("no waypoints generated -- nothing to fly"),
    }

    let s = &out.stats;
    println!("waypoints:    {}", s.waypoints);
    println!("distance:     {} m", s.distance_m);
    println!("flight time:  {} min", s.flight_time_min);
    println!("camera shots: {}", s.camera_shots);
    println!("area:         {} m2", s.area_m2);

    Ok(())
}
