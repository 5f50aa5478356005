//! Writing polygon rings as Well-Known Text.
//!
//! See <https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry>.

use lexical_core::{FormattedSize, WriteFloatOptions};

use crate::error::{GeoRingError, Result};
use crate::io::json;
use crate::scalar::Point;

pub(crate) const POLYGON_START: &str = "POLYGON((";
pub(crate) const POLYGON_END: &str = "))";

const FORMAT: u128 = lexical_core::format::STANDARD;

/// Format one ordinate with round-trip precision.
///
/// Shortest decimal digits that parse back to the identical bit pattern,
/// integral values without a fractional part (`1.0` renders as `"1"`), and
/// always `.` as the decimal separator regardless of host locale.
pub fn format_coord(value: f64) -> String {
    let options = WriteFloatOptions::builder()
        .trim_floats(true)
        .build()
        .unwrap();
    let mut buffer = [0u8; f64::FORMATTED_SIZE_DECIMAL];
    let written = lexical_core::write_with_options::<f64, FORMAT>(value, &mut buffer, &options);
    // lexical only emits ASCII
    std::str::from_utf8(written).unwrap().to_owned()
}

/// Render points as a closed delimited coordinate list, `"lat lng, ..."`.
///
/// The ring is closed by repeating the first point when the first and last
/// input points differ on their formatted text. Rings that arrive already
/// closed (binary blobs decode that way) pass through unchanged; the dangling
/// separator left by the emission loop is trimmed off.
pub fn ring_text(points: &[Point]) -> Result<String> {
    if points.is_empty() {
        return Err(GeoRingError::EmptyRing);
    }

    let mut out = String::new();
    for point in points {
        out.push_str(&format_coord(point.lat));
        out.push(' ');
        out.push_str(&format_coord(point.lng));
        out.push_str(", ");
    }

    let first = &points[0];
    let last = &points[points.len() - 1];
    let first_lat = format_coord(first.lat);
    let first_lng = format_coord(first.lng);
    let closed = first_lat == format_coord(last.lat) && first_lng == format_coord(last.lng);
    if !closed {
        out.push_str(&first_lat);
        out.push(' ');
        out.push_str(&first_lng);
    }

    let mut out = out.trim().to_owned();
    if out.ends_with(',') {
        out.pop();
    }
    Ok(out)
}

/// Wrap a coordinate list in the `POLYGON((..))` envelope. The content is
/// not validated.
pub fn wrap_polygon(ring: &str) -> String {
    format!("{POLYGON_START}{ring}{POLYGON_END}")
}

/// Parse a JSON coordinate array and render it as a closed polygon WKT
/// string.
pub fn coordinates_to_wkt(array_text: &str) -> Result<String> {
    let points = json::read_points(array_text)?;
    let ring = ring_text(&points)?;
    Ok(wrap_polygon(&ring))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn format_integral_without_fraction() {
        assert_eq!(format_coord(1.0), "1");
        assert_eq!(format_coord(-7.0), "-7");
        assert_eq!(format_coord(0.0), "0");
    }

    #[test]
    fn format_roundtrips_to_same_bits() {
        for value in [
            0.1,
            1.0 / 3.0,
            -122.676,
            41.385063999999998,
            f64::MIN_POSITIVE,
            1.7976931348623157e308,
        ] {
            let text = format_coord(value);
            assert_eq!(text.parse::<f64>().unwrap(), value, "{text}");
        }
    }

    #[test]
    fn format_never_contains_comma() {
        for value in [0.5, 1234.5678, -0.001, 2.5e-7, 9e99] {
            assert!(!format_coord(value).contains(','));
        }
    }

    #[test]
    fn open_ring_gets_closed() {
        let points = [
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Point::new(5.0, 6.0),
        ];
        assert_eq!(ring_text(&points).unwrap(), "1 2, 3 4, 5 6, 1 2");
    }

    #[test]
    fn closed_ring_is_untouched() {
        let points = [
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Point::new(1.0, 2.0),
        ];
        assert_eq!(ring_text(&points).unwrap(), "1 2, 3 4, 1 2");
    }

    #[test]
    fn normalization_is_idempotent() {
        let open = [
            Point::new(1.5, 2.5),
            Point::new(3.5, 4.5),
            Point::new(5.5, 6.5),
        ];
        let closed = [
            Point::new(1.5, 2.5),
            Point::new(3.5, 4.5),
            Point::new(5.5, 6.5),
            Point::new(1.5, 2.5),
        ];
        assert_eq!(ring_text(&open).unwrap(), ring_text(&closed).unwrap());
    }

    #[test]
    fn ring_closes_when_only_one_component_matches() {
        // last point shares lng with the first but not lat, so the ring is
        // still open and must be closed
        let points = [
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Point::new(5.0, 2.0),
        ];
        assert_eq!(ring_text(&points).unwrap(), "1 2, 3 4, 5 2, 1 2");
    }

    #[test]
    fn empty_ring_is_rejected() {
        assert!(matches!(
            ring_text(&[]).unwrap_err(),
            GeoRingError::EmptyRing
        ));
    }

    #[test]
    fn single_point_ring() {
        // degenerate but accepted; validation is the engine's business
        assert_eq!(ring_text(&[Point::new(1.0, 2.0)]).unwrap(), "1 2");
    }

    #[test]
    fn coordinates_to_wkt_example() {
        let wkt =
            coordinates_to_wkt(r#"[{"lat":1.0,"lng":2.0},{"lat":3.0,"lng":4.0},{"lat":5.0,"lng":6.0}]"#)
                .unwrap();
        assert_eq!(wkt, "POLYGON((1 2, 3 4, 5 6, 1 2))");
    }

    #[test]
    fn coordinates_to_wkt_already_closed() {
        let wkt =
            coordinates_to_wkt(r#"[{"lat":1.0,"lng":2.0},{"lat":3.0,"lng":4.0},{"lat":1.0,"lng":2.0}]"#)
                .unwrap();
        assert_eq!(wkt, "POLYGON((1 2, 3 4, 1 2))");
    }

    #[test]
    fn coordinates_to_wkt_malformed_input() {
        let err = coordinates_to_wkt(r#"[{"lat":1.0}]"#).unwrap_err();
        assert!(matches!(err, GeoRingError::MalformedInput(_)));
    }

    #[test]
    fn coordinates_to_wkt_empty_array() {
        let err = coordinates_to_wkt("[]").unwrap_err();
        assert!(matches!(err, GeoRingError::EmptyRing));
    }

    #[test]
    fn fractional_coordinates_keep_full_precision() {
        let wkt = coordinates_to_wkt(
            r#"[{"lat":41.385063999999998,"lng":2.1734034999999999},{"lat":41.3818,"lng":2.1685},{"lat":41.3797,"lng":2.1746}]"#,
        )
        .unwrap();
        assert_eq!(
            wkt,
            "POLYGON((41.385064 2.1734035, 41.3818 2.1685, 41.3797 2.1746, 41.385064 2.1734035))"
        );
    }
}
