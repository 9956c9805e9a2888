//! Planar geometry kernel. All functions are total: degenerate input
//! yields degenerate output (zero area, no intersection), never an error.
//!
//! Degree/meter conversion is a local flat-earth approximation with
//! cosine-corrected longitude, acceptable for boundaries up to a few
//! kilometers. Rings crossing the poles or antimeridian are undefined.

use surveyplan_structs::LngLat;

pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Meters per degree of (latitude, longitude) at the given latitude.
pub fn meters_per_degree(lat: f64) -> (f64, f64) {
    (METERS_PER_DEGREE, METERS_PER_DEGREE * lat.to_radians().cos())
}

/// Arithmetic mean of the ring's vertices, closing duplicate excluded.
pub fn centroid(ring: &[LngLat]) -> LngLat {
    let n = ring.len().saturating_sub(1).max(1);
    let mut lng = 0.0;
    let mut lat = 0.0;
    for p in &ring[..n.min(ring.len())] {
        lng += p.lng;
        lat += p.lat;
    }
    LngLat { lng: lng / n as f64, lat: lat / n as f64 }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

pub fn bounds(ring: &[LngLat]) -> Bounds {
    let mut b = Bounds {
        min_lng: f64::INFINITY,
        max_lng: f64::NEG_INFINITY,
        min_lat: f64::INFINITY,
        max_lat: f64::NEG_INFINITY,
    };
    for p in ring {
        b.min_lng = b.min_lng.min(p.lng);
        b.max_lng = b.max_lng.max(p.lng);
        b.min_lat = b.min_lat.min(p.lat);
        b.max_lat = b.max_lat.max(p.lat);
    }
    b
}

/// Shoelace area in square meters, scaled at the ring centroid.
/// Invariant to starting vertex and winding direction. Returns 0 for
/// rings with fewer than 3 distinct vertices.
pub fn polygon_area_m2(ring: &[LngLat]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let n = ring.len() - 1;
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += ring[i].lng * ring[j].lat;
        area -= ring[j].lng * ring[i].lat;
    }
    let area_deg2 = area.abs() / 2.0;
    let (m_lat, m_lng) = meters_per_degree(centroid(ring).lat);
    area_deg2 * m_lat * m_lng
}

/// Rotate `point` about `pivot` by `angle_rad` (counter-clockwise in
/// lng/lat coordinates).
pub fn rotate(point: LngLat, pivot: LngLat, angle_rad: f64) -> LngLat {
    let (sin, cos) = angle_rad.sin_cos();
    let dx = point.lng - pivot.lng;
    let dy = point.lat - pivot.lat;
    LngLat {
        lng: pivot.lng + dx * cos - dy * sin,
        lat: pivot.lat + dx * sin + dy * cos,
    }
}

/// Parametric segment-segment intersection. `None` for parallel segments
/// (denominator within 1e-10 of zero) or intersections outside either
/// segment.
pub fn segment_intersection(p1: LngLat, p2: LngLat, p3: LngLat, p4: LngLat) -> Option<LngLat> {
    let denom = (p1.lng - p2.lng) * (p3.lat - p4.lat) - (p1.lat - p2.lat) * (p3.lng - p4.lng);
    if denom.abs() < 1e-10 {
        return None;
    }
    let t = ((p1.lng - p3.lng) * (p3.lat - p4.lat) - (p1.lat - p3.lat) * (p3.lng - p4.lng)) / denom;
    let u = -((p1.lng - p2.lng) * (p1.lat - p3.lat) - (p1.lat - p2.lat) * (p1.lng - p3.lng)) / denom;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }
    Some(LngLat {
        lng: p1.lng + t * (p2.lng - p1.lng),
        lat: p1.lat + t * (p2.lat - p1.lat),
    })
}

/// Resample a polyline at approximately `step_m` meters. The original
/// first and last points are always included, and the distance
/// accumulator resets at every original vertex, so the final sub-segment
/// of each leg may be shorter than `step_m`.
pub fn resample(polyline: &[LngLat], step_m: f64) -> Vec<LngLat> {
    if polyline.len() < 2 || step_m <= 0.0 {
        return polyline.to_vec();
    }
    let mut out = vec![polyline[0]];
    for pair in polyline.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let seg_len = a.dist_m(&b);
        let mut walked = 0.0;
        while walked + step_m < seg_len {
            walked += step_m;
            let ratio = walked / seg_len;
            out.push(LngLat {
                lng: a.lng + (b.lng - a.lng) * ratio,
                lat: a.lat + (b.lat - a.lat) * ratio,
            });
        }
    }
    out.push(polyline[polyline.len() - 1]);
    out
}
