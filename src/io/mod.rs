//! Reading and writing the supported polygon representations.

pub mod json;
pub mod wkb;
pub mod wkt;
