/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Returns the great-circle distance in meters between two WGS84 coordinates
/// given as `(lon, lat)` degree pairs, using the haversine formula.
///
/// Symmetric in its arguments; returns 0 for coincident points.
#[must_use]
pub fn haversine_distance(lon_a: f64, lat_a: f64, lon_b: f64, lat_b: f64) -> f64 {
    let phi_a = lat_a.to_radians();
    let phi_b = lat_b.to_radians();
    let d_phi = (lat_b - lat_a).to_radians();
    let d_lambda = (lon_b - lon_a).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (d_lambda / 2.0).sin().powi(2);

    // Clamp before asin: rounding can push h a hair past 1 for antipodes.
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Returns the length in meters of a polyline given as `(lon, lat)` degree
/// pairs, summing the haversine distance over consecutive vertices.
///
/// Returns 0 for polylines with fewer than two vertices.
pub fn polyline_length<I>(coords: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut total = 0.0;
    let mut prev: Option<(f64, f64)> = None;
    for (lon, lat) in coords {
        if let Some((p_lon, p_lat)) = prev {
            total += haversine_distance(p_lon, p_lat, lon, lat);
        }
        prev = Some((lon, lat));
    }
    total
}
