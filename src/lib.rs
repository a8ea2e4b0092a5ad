pub mod configs;
pub mod errors;
pub mod structures;

pub use crate::errors::GeometryError;
pub use crate::structures::{Axis, Point3D, PointKey, ORIGIN};
