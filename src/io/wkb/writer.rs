use byteorder::{LittleEndian, WriteBytesExt};

use super::reader::Endianness;
use super::{WkbPolygon, POLYGON_TYPE, SRID_FLAG};
use crate::error::Result;

/// The byte length of the encoded polygon, including the EWKB header.
fn polygon_wkb_size(polygon: &WkbPolygon) -> usize {
    // byte order + wkbType + srid + numRings
    let mut sum = 1 + 4 + 4 + 4;
    for ring in &polygon.rings {
        sum += 4 + ring.len() * 16;
    }
    sum
}

/// Encode a polygon as little-endian EWKB.
pub(crate) fn write_polygon(polygon: &WkbPolygon) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(polygon_wkb_size(polygon));

    buf.write_u8(Endianness::LittleEndian.into())?;
    buf.write_u32::<LittleEndian>(POLYGON_TYPE | SRID_FLAG)?;
    buf.write_u32::<LittleEndian>(polygon.srid)?;

    buf.write_u32::<LittleEndian>(polygon.rings.len().try_into().unwrap())?;
    for ring in &polygon.rings {
        buf.write_u32::<LittleEndian>(ring.len().try_into().unwrap())?;
        for (x, y) in ring {
            buf.write_f64::<LittleEndian>(*x)?;
            buf.write_f64::<LittleEndian>(*y)?;
        }
    }

    Ok(buf)
}
