//! Normalizes heterogeneous GeoJSON input into one closed boundary ring.
//!
//! Accepted shapes: `Polygon`, `Feature`, `FeatureCollection`,
//! `MultiPolygon`. Only the first feature / first polygon part / outer
//! ring is used; multi-part boundaries are not supported.

use log::debug;
use serde_json::Value;
use surveyplan_structs::error::PlanError;
use surveyplan_structs::{BoundaryRing, LngLat};

pub fn resolve(geojson: &Value) -> Result<BoundaryRing, PlanError> {
    let geometry = unwrap_geometry(geojson)?;

    let geom_type = geometry
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("geometry has no type"))?;

    let outer = match geom_type {
        "Polygon" => outer_ring(geometry.get("coordinates"))?,
        "MultiPolygon" => {
            let parts = geometry
                .get("coordinates")
                .and_then(Value::as_array)
                .ok_or_else(|| invalid("MultiPolygon has no coordinates"))?;
            let first = parts
                .first()
                .ok_or_else(|| invalid("MultiPolygon has no coordinates"))?;
            debug!("multipolygon with {} parts, using the first", parts.len());
            outer_ring(Some(first))?
        }
        other => {
            return Err(invalid(&format!(
                "only Polygon and MultiPolygon geometries are supported, got {}",
                other
            )))
        }
    };

    if outer.len() < 4 {
        return Err(invalid("polygon must have at least 4 coordinate points"));
    }

    let ring = outer
        .iter()
        .map(parse_pair)
        .collect::<Result<Vec<LngLat>, PlanError>>()?;

    let mut distinct: Vec<LngLat> = Vec::new();
    for p in &ring {
        if !distinct.iter().any(|q| q.eq_approx(p)) {
            distinct.push(*p);
        }
    }
    if distinct.len() < 3 {
        return Err(invalid("polygon must have at least 3 distinct vertices"));
    }

    Ok(BoundaryRing(ring))
}

fn unwrap_geometry(value: &Value) -> Result<&Value, PlanError> {
    let value = match value.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => value
            .get("features")
            .and_then(Value::as_array)
            .and_then(|features| features.iter().find(|f| f.get("geometry").is_some()))
            .ok_or_else(|| invalid("FeatureCollection has no feature with a geometry"))?,
        _ => value,
    };

    if value.get("type").and_then(Value::as_str) == Some("Feature") {
        value
            .get("geometry")
            .filter(|g| !g.is_null())
            .ok_or_else(|| invalid("missing geometry"))
    } else if value.get("coordinates").is_some() {
        Ok(value)
    } else {
        Err(invalid("missing geometry"))
    }
}

fn outer_ring(coordinates: Option<&Value>) -> Result<&Vec<Value>, PlanError> {
    coordinates
        .and_then(Value::as_array)
        .and_then(|rings| rings.first())
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("invalid polygon coordinates"))
}

fn parse_pair(pair: &Value) -> Result<LngLat, PlanError> {
    let pair = pair
        .as_array()
        .filter(|p| p.len() >= 2)
        .ok_or_else(|| invalid("coordinate is not a [lng, lat] pair"))?;
    let lng = pair[0].as_f64().ok_or_else(|| invalid("non-numeric longitude"))?;
    let lat = pair[1].as_f64().ok_or_else(|| invalid("non-numeric latitude"))?;
    let p = LngLat { lng, lat };
    if !p.is_finite() {
        return Err(invalid("non-finite coordinate"));
    }
    Ok(p)
}

fn invalid(reason: &str) -> PlanError {
    PlanError::InvalidBoundary(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn square_coords() -> Value {
        json!([[
            [-73.9857, 40.7484],
            [-73.9837, 40.7484],
            [-73.9837, 40.7464],
            [-73.9857, 40.7464],
            [-73.9857, 40.7484]
        ]])
    }

    #[test]
    fn resolves_bare_polygon() {
        let v = json!({"type": "Polygon", "coordinates": square_coords()});
        let ring = resolve(&v).unwrap();
        assert_eq!(ring.points().len(), 5);
        assert_eq!(ring.open().len(), 4);
    }

    #[test]
    fn resolves_feature() {
        let v = json!({
            "type": "Feature",
            "properties": {"name": "Sample Survey Area"},
            "geometry": {"type": "Polygon", "coordinates": square_coords()}
        });
        assert_eq!(resolve(&v).unwrap().open().len(), 4);
    }

    #[test]
    fn resolves_feature_collection_first_feature() {
        let v = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": square_coords()}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}}
            ]
        });
        assert_eq!(resolve(&v).unwrap().open().len(), 4);
    }

    #[test]
    fn resolves_multipolygon_first_part() {
        let v = json!({
            "type": "MultiPolygon",
            "coordinates": [square_coords(), [[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]]
        });
        let ring = resolve(&v).unwrap();
        assert!((ring.points()[0].lng - -73.9857).abs() < 1e-12);
    }

    #[test]
    fn rejects_missing_geometry() {
        let v = json!({"type": "Feature", "properties": {}});
        assert!(matches!(resolve(&v), Err(PlanError::InvalidBoundary(_))));
    }

    #[test]
    fn rejects_unsupported_geometry_type() {
        let v = json!({"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]});
        let err = resolve(&v).unwrap_err();
        assert!(err.to_string().contains("LineString"));
    }

    #[test]
    fn rejects_empty_multipolygon() {
        let v = json!({"type": "MultiPolygon", "coordinates": []});
        assert!(resolve(&v).is_err());
    }

    #[test]
    fn rejects_short_ring() {
        let v = json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]]
        });
        assert!(resolve(&v).is_err());
    }

    #[test]
    fn rejects_all_identical_vertices() {
        let v = json!({
            "type": "Polygon",
            "coordinates": [[[1.0, 1.0], [1.0, 1.0], [1.0, 1.0], [1.0, 1.0]]]
        });
        let err = resolve(&v).unwrap_err();
        assert!(err.to_string().contains("distinct"));
    }
}
