//! The JSON coordinate-array form: an ordered array of objects with numeric
//! `lat` and `lng` fields.

use crate::error::{GeoRingError, Result};
use crate::scalar::Point;

/// Parse a JSON array of `{"lat": .., "lng": ..}` objects.
///
/// Order is preserved. Anything that is not an array of such objects, or an
/// entry missing either key, is [`GeoRingError::MalformedInput`].
pub fn read_points(text: &str) -> Result<Vec<Point>> {
    serde_json::from_str(text).map_err(|err| GeoRingError::MalformedInput(err.to_string()))
}

/// Serialize points back to the array form: compact, `lat` before `lng` in
/// every object, point order preserved.
pub fn write_points(points: &[Point]) -> Result<String> {
    Ok(serde_json::to_string(points)?)
}
