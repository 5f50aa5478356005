//! Codec for simple closed polygons, converting between three
//! representations of a ring of latitude/longitude points:
//!
//! - a JSON array of `{"lat": .., "lng": ..}` objects,
//! - a Well-Known Text `POLYGON((..))` string, and
//! - an opaque binary geometry blob tagged with SRID 4326.
//!
//! The conversions normalize ring closure (the first point is repeated at the
//! end when the input ring is open) and format coordinates with round-trip
//! precision, always using `.` as the decimal separator.
//!
//! The binary form is produced by a [`GeometryEngine`]. The bundled
//! [`WkbEngine`](io::wkb::WkbEngine) encodes little-endian EWKB; a different
//! engine can be injected through [`PolygonCodec::with_engine`].
//!
//! ```
//! use georing::PolygonCodec;
//!
//! let codec = PolygonCodec::new();
//!
//! let input = r#"[{"lat":1.0,"lng":2.0},{"lat":3.0,"lng":4.0},{"lat":5.0,"lng":6.0}]"#;
//! let wkt = codec.coordinates_to_wkt(input).unwrap();
//! assert_eq!(wkt, "POLYGON((1 2, 3 4, 5 6, 1 2))");
//!
//! let blob = codec.wkt_to_binary(&wkt).unwrap();
//! let coords = codec.binary_to_coordinates(&blob).unwrap();
//! assert_eq!(
//!     coords,
//!     r#"[{"lat":1.0,"lng":2.0},{"lat":3.0,"lng":4.0},{"lat":5.0,"lng":6.0},{"lat":1.0,"lng":2.0}]"#
//! );
//! ```

pub mod codec;
pub mod engine;
pub mod error;
pub mod io;
pub mod scalar;

pub use codec::{PolygonCodec, SRID};
pub use engine::{Geometry, GeometryEngine};
pub use error::{GeoRingError, Result};
pub use scalar::Point;
