// private sub-module defined in other files
mod point3d;
mod point_key;

// exports identifiers from private sub-modules in the current module namespace
pub use self::point3d::{Axis, Point3D, ORIGIN};
pub use self::point_key::PointKey;
