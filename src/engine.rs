//! The spatial geometry engine, modeled as an injected capability so the
//! codec stays testable without a real spatial backend.

use crate::error::Result;

/// An in-memory geometry read back from WKT or from its binary form.
pub trait Geometry {
    /// Serialize this geometry to its opaque binary storage form.
    fn serialize(&self) -> Result<Vec<u8>>;

    /// Total number of points across all rings.
    fn num_points(&self) -> usize;

    /// The `i`th point (0-based, in the engine's point order) as an `(x, y)`
    /// ordinate pair.
    fn coord(&self, i: usize) -> Option<(f64, f64)>;
}

/// Builds [`Geometry`] values from the two supported sources.
///
/// Engines must be reentrant; the codec calls them with no coordination
/// across threads.
pub trait GeometryEngine {
    type Geometry: Geometry;

    /// Build a geometry from WKT tagged with `srid`.
    ///
    /// Rejection of the text (malformed syntax, wrong geometry type) is
    /// [`InvalidWkt`](crate::GeoRingError::InvalidWkt).
    fn geometry_from_wkt(&self, wkt: &str, srid: u32) -> Result<Self::Geometry>;

    /// Read a geometry back from its binary form.
    ///
    /// An unreadable stream is
    /// [`CorruptBinary`](crate::GeoRingError::CorruptBinary).
    fn geometry_from_bytes(&self, bytes: &[u8]) -> Result<Self::Geometry>;
}
