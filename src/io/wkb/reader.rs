use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use super::{WkbPolygon, POLYGON_TYPE, SRID_FLAG};
use crate::error::{GeoRingError, Result};

/// Byte-order discriminant at the head of a WKB stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    fn from_byte(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(GeoRingError::CorruptBinary(format!(
                "unexpected byte order {other}"
            ))),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

fn truncated(err: std::io::Error) -> GeoRingError {
    GeoRingError::CorruptBinary(format!("truncated stream: {err}"))
}

fn read_u32(reader: &mut Cursor<&[u8]>, byte_order: Endianness) -> Result<u32> {
    match byte_order {
        Endianness::BigEndian => reader.read_u32::<BigEndian>(),
        Endianness::LittleEndian => reader.read_u32::<LittleEndian>(),
    }
    .map_err(truncated)
}

fn read_f64(reader: &mut Cursor<&[u8]>, byte_order: Endianness) -> Result<f64> {
    match byte_order {
        Endianness::BigEndian => reader.read_f64::<BigEndian>(),
        Endianness::LittleEndian => reader.read_f64::<LittleEndian>(),
    }
    .map_err(truncated)
}

/// Parse a polygon from a WKB or EWKB stream of either endianness.
///
/// Streams without the SRID word are tagged with the crate default
/// [`SRID`](crate::SRID).
pub(crate) fn read_polygon(bytes: &[u8]) -> Result<WkbPolygon> {
    let mut reader = Cursor::new(bytes);
    let byte_order = Endianness::from_byte(reader.read_u8().map_err(truncated)?)?;

    let type_word = read_u32(&mut reader, byte_order)?;
    let geometry_type = type_word & !SRID_FLAG;
    if geometry_type != POLYGON_TYPE {
        return Err(GeoRingError::CorruptBinary(format!(
            "expected polygon (type {POLYGON_TYPE}), got type {geometry_type}"
        )));
    }
    let srid = if type_word & SRID_FLAG != 0 {
        read_u32(&mut reader, byte_order)?
    } else {
        crate::SRID
    };

    let num_rings = read_u32(&mut reader, byte_order)?;
    let mut rings = Vec::new();
    for _ in 0..num_rings {
        let num_points = read_u32(&mut reader, byte_order)?;
        let mut ring = Vec::new();
        for _ in 0..num_points {
            let x = read_f64(&mut reader, byte_order)?;
            let y = read_f64(&mut reader, byte_order)?;
            ring.push((x, y));
        }
        rings.push(ring);
    }

    Ok(WkbPolygon { srid, rings })
}
