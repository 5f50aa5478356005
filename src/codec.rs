//! Top-level conversions between the three polygon representations.

use crate::engine::{Geometry, GeometryEngine};
use crate::error::Result;
use crate::io::json;
use crate::io::wkb::WkbEngine;
use crate::io::wkt;
use crate::scalar::Point;

/// Spatial reference identifier every geometry is tagged with (WGS84).
pub const SRID: u32 = 4326;

/// Converts polygons between the JSON coordinate-array, WKT and binary
/// forms, delegating binary encoding to an injected [`GeometryEngine`].
///
/// Stateless apart from the engine; safe to share across threads when the
/// engine is.
#[derive(Debug, Clone)]
pub struct PolygonCodec<E: GeometryEngine = WkbEngine> {
    engine: E,
}

impl PolygonCodec<WkbEngine> {
    /// A codec backed by the bundled EWKB engine.
    pub fn new() -> Self {
        Self { engine: WkbEngine }
    }
}

impl Default for PolygonCodec<WkbEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: GeometryEngine> PolygonCodec<E> {
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Parse a JSON coordinate array and render it as a closed polygon WKT
    /// string. Pure text transform; the engine is not consulted.
    pub fn coordinates_to_wkt(&self, array_text: &str) -> Result<String> {
        wkt::coordinates_to_wkt(array_text)
    }

    /// Build a geometry from WKT, tagged with [`SRID`], and serialize it to
    /// its binary storage form.
    pub fn wkt_to_binary(&self, wkt: &str) -> Result<Vec<u8>> {
        let geometry = self.engine.geometry_from_wkt(wkt, SRID)?;
        geometry.serialize()
    }

    /// Read a geometry back from its binary form and emit its points as a
    /// JSON coordinate array, in engine point order.
    pub fn binary_to_coordinates(&self, bytes: &[u8]) -> Result<String> {
        let geometry = self.engine.geometry_from_bytes(bytes)?;
        let mut points = Vec::with_capacity(geometry.num_points());
        for i in 0..geometry.num_points() {
            if let Some((x, y)) = geometry.coord(i) {
                // x carries lat and y carries lng; existing stored blobs were
                // written with this mapping and depend on it
                points.push(Point { lat: x, lng: y });
            }
        }
        json::write_points(&points)
    }
}
