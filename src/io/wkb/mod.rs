//! EWKB-backed default geometry engine.
//!
//! Blobs produced here are little-endian EWKB polygons: a byte-order byte,
//! the polygon type word with the SRID flag set, the SRID, then the rings as
//! coordinate pairs. The reader additionally accepts big-endian streams and
//! plain WKB without the SRID word.

mod reader;
mod writer;

use std::str::FromStr;

use wkt::Wkt;

use crate::engine::{Geometry, GeometryEngine};
use crate::error::{GeoRingError, Result};

/// WKB geometry type code for a polygon.
pub(crate) const POLYGON_TYPE: u32 = 3;

/// EWKB flag marking a trailing SRID in the type word.
pub(crate) const SRID_FLAG: u32 = 0x2000_0000;

/// Default [`GeometryEngine`] encoding polygons as little-endian EWKB.
#[derive(Debug, Clone, Copy, Default)]
pub struct WkbEngine;

/// A polygon with its SRID, decoded from WKT or from an EWKB stream.
#[derive(Debug, Clone, PartialEq)]
pub struct WkbPolygon {
    pub(crate) srid: u32,
    /// Exterior ring first, then interiors, in authored order.
    pub(crate) rings: Vec<Vec<(f64, f64)>>,
}

impl GeometryEngine for WkbEngine {
    type Geometry = WkbPolygon;

    fn geometry_from_wkt(&self, wkt: &str, srid: u32) -> Result<WkbPolygon> {
        let parsed = Wkt::<f64>::from_str(wkt.trim())
            .map_err(|err| GeoRingError::InvalidWkt(err.to_string()))?;
        let polygon = match parsed {
            Wkt::Polygon(polygon) => polygon,
            _ => {
                return Err(GeoRingError::InvalidWkt(
                    "expected a POLYGON geometry".to_owned(),
                ))
            }
        };
        let rings = polygon
            .0
            .iter()
            .map(|ring| ring.0.iter().map(|coord| (coord.x, coord.y)).collect())
            .collect();
        Ok(WkbPolygon { srid, rings })
    }

    fn geometry_from_bytes(&self, bytes: &[u8]) -> Result<WkbPolygon> {
        reader::read_polygon(bytes)
    }
}

impl Geometry for WkbPolygon {
    fn serialize(&self) -> Result<Vec<u8>> {
        writer::write_polygon(self)
    }

    fn num_points(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }

    fn coord(&self, i: usize) -> Option<(f64, f64)> {
        let mut remaining = i;
        for ring in &self.rings {
            if remaining < ring.len() {
                return Some(ring[remaining]);
            }
            remaining -= ring.len();
        }
        None
    }
}
