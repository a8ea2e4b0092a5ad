/*
This code is part of the point3d geometry library.
Authors: Dr. John Lindsay
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/

use crate::errors::GeometryError;
use crate::structures::PointKey;
use log::{debug, error, info, warn};
use nalgebra::{Rotation2, Vector2, Vector3};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// The coordinate axes about which a point can be rotated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        write!(f, "{}", s)
    }
}

/// An immutable 3-D point, with x, y, and z coordinates.
///
/// A `Point3D` doubles as a position vector from the origin. Every operation
/// returns a new value and never modifies the receiver. Equality is
/// tolerance-based (see `Point3D::TOLERANCE`), which is why the type does
/// not implement `Eq` or `Hash`; use `Point3D::key` to place points in hash
/// containers.
#[derive(Default, Copy, Clone, Debug)]
pub struct Point3D {
    x: f64,
    y: f64,
    z: f64,
}

/// The point (0, 0, 0).
pub const ORIGIN: Point3D = Point3D {
    x: 0f64,
    y: 0f64,
    z: 0f64,
};

impl Point3D {
    /// Maximum per-coordinate difference for two points to compare equal.
    pub const TOLERANCE: f64 = 1e-10;

    /// Creates a new Point3D.
    pub fn new(x: f64, y: f64, z: f64) -> Point3D {
        debug!("Created new Point3D at ({}, {}, {})", x, y, z);
        Point3D { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Calculates the Euclidean distance between the point and another.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let distance = euclidean_norm(self.x - other.x, self.y - other.y, self.z - other.z);
        info!("Distance from {} to {} = {}", self, other, distance);
        distance
    }

    /// Calculates the distance to a point that may be absent.
    pub fn try_distance_to(&self, other: Option<&Self>) -> Result<f64, GeometryError> {
        other
            .map(|p| self.distance_to(p))
            .ok_or_else(|| missing_operand(self, "distance"))
    }

    /// Calculates the magnitude sqrt(x^2 + y^2 + z^2) of the point.
    pub fn distance_from_origin(&self) -> f64 {
        let distance = euclidean_norm(self.x, self.y, self.z);
        info!("Distance from origin for point {} = {}", self, distance);
        distance
    }

    /// Rotates the point about one of the coordinate axes by `theta` radians.
    ///
    /// Rotations are right-handed: looking from the positive end of the axis
    /// toward the origin, a positive angle turns counterclockwise. The
    /// coordinate along the rotation axis is carried over unchanged and does
    /// not enter the other two, so a non-finite value there stays isolated.
    pub fn rotate(&self, axis: Axis, theta: f64) -> Point3D {
        let rot = Rotation2::new(theta);
        // each plane is ordered so that a positive angle is right-handed
        let (x, y, z) = match axis {
            Axis::X => {
                let v = rot * Vector2::new(self.y, self.z);
                (self.x, v.x, v.y)
            }
            Axis::Y => {
                let v = rot * Vector2::new(self.z, self.x);
                (v.y, self.y, v.x)
            }
            Axis::Z => {
                let v = rot * Vector2::new(self.x, self.y);
                (v.x, v.y, self.z)
            }
        };
        let rotated = Point3D::new(x, y, z);
        info!("Rotated point {} around {}-axis by {} radians to {}", self, axis, theta, rotated);
        rotated
    }

    pub fn rotate_x(&self, theta: f64) -> Point3D {
        self.rotate(Axis::X, theta)
    }

    pub fn rotate_y(&self, theta: f64) -> Point3D {
        self.rotate(Axis::Y, theta)
    }

    pub fn rotate_z(&self, theta: f64) -> Point3D {
        self.rotate(Axis::Z, theta)
    }

    /// Calculates the midpoint between the point and another.
    pub fn midpoint(&self, other: &Self) -> Point3D {
        let mid = Point3D::new(
            (self.x + other.x) / 2f64,
            (self.y + other.y) / 2f64,
            (self.z + other.z) / 2f64,
        );
        info!("Calculated midpoint between {} and {}", self, other);
        mid
    }

    /// Calculates the midpoint with a point that may be absent.
    pub fn try_midpoint(&self, other: Option<&Self>) -> Result<Point3D, GeometryError> {
        other
            .map(|p| self.midpoint(p))
            .ok_or_else(|| missing_operand(self, "midpoint"))
    }

    pub fn translate(&self, delta_x: f64, delta_y: f64, delta_z: f64) -> Point3D {
        info!("Translating point {} by ({}, {}, {})", self, delta_x, delta_y, delta_z);
        Point3D::new(self.x + delta_x, self.y + delta_y, self.z + delta_z)
    }

    /// Scales the point about the origin. A factor of zero collapses the
    /// point onto the origin; this is reported but still carried out.
    pub fn scale(&self, factor: f64) -> Point3D {
        if factor == 0f64 {
            warn!("Scaling point {} by 0 - point will collapse to origin", self);
        } else {
            info!("Scaling point {} by factor {}", self, factor);
        }
        Point3D::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Calculates the dot product, treating both points as vectors.
    pub fn dot_product(&self, other: &Self) -> f64 {
        let result = self.x * other.x + self.y * other.y + self.z * other.z;
        info!("Dot product of {} and {} = {}", self, other, result);
        result
    }

    pub fn try_dot_product(&self, other: Option<&Self>) -> Result<f64, GeometryError> {
        other
            .map(|p| self.dot_product(p))
            .ok_or_else(|| missing_operand(self, "dot product"))
    }

    /// Calculates the cross product, treating both points as vectors. The
    /// result is perpendicular to both inputs.
    pub fn cross_product(&self, other: &Self) -> Point3D {
        let cross = Point3D::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        );
        info!("Cross product of {} and {} = {}", self, other, cross);
        cross
    }

    pub fn try_cross_product(&self, other: Option<&Self>) -> Result<Point3D, GeometryError> {
        other
            .map(|p| self.cross_product(p))
            .ok_or_else(|| missing_operand(self, "cross product"))
    }

    /// Returns the unit vector pointing in the same direction as the point.
    ///
    /// The origin has no direction, and normalizing it yields
    /// `GeometryError::ZeroMagnitude`. Any other finite point, however small
    /// or large its coordinates, gives a unit vector.
    pub fn normalize(&self) -> Result<Point3D, GeometryError> {
        if self.x == 0f64 && self.y == 0f64 && self.z == 0f64 {
            error!("Cannot normalize zero vector at origin");
            return Err(GeometryError::ZeroMagnitude);
        }
        // divide by the largest component first so the norm cannot overflow
        let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
        let (x, y, z) = (self.x / largest, self.y / largest, self.z / largest);
        let magnitude = euclidean_norm(x, y, z);
        info!("Normalizing vector {} with magnitude {}", self, largest * magnitude);
        Ok(Point3D::new(x / magnitude, y / magnitude, z / magnitude))
    }

    /// Returns the hashable grid cell holding this point.
    pub fn key(&self) -> PointKey {
        PointKey::new(self)
    }
}

fn missing_operand(p: &Point3D, operation: &'static str) -> GeometryError {
    warn!("Attempted to calculate {} from {} to a missing point", operation, p);
    GeometryError::MissingOperand { operation }
}

// sqrt(x^2 + y^2 + z^2) without intermediate overflow or underflow
fn euclidean_norm(x: f64, y: f64, z: f64) -> f64 {
    x.hypot(y).hypot(z)
}

impl PartialEq for Point3D {
    fn eq(&self, other: &Self) -> bool {
        let equal = (self.x - other.x).abs() < Point3D::TOLERANCE
            && (self.y - other.y).abs() < Point3D::TOLERANCE
            && (self.z - other.z).abs() < Point3D::TOLERANCE;
        if !equal {
            info!("Point equality check: {:?} != {:?}", self, other);
        }
        equal
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Point3D({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// Parses `x,y,z`, `(x, y, z)` or `Point3D(x, y, z)`.
impl FromStr for Point3D {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Point3D, GeometryError> {
        let parse_err = || GeometryError::Parse(s.to_string());
        let mut body = s.trim();
        body = body.strip_prefix("Point3D").unwrap_or(body).trim();
        if let Some(inner) = body.strip_prefix('(') {
            body = inner.strip_suffix(')').ok_or_else(parse_err)?;
        }
        let vals = body
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|_| parse_err())?;
        if vals.len() != 3 {
            return Err(parse_err());
        }
        Ok(Point3D::new(vals[0], vals[1], vals[2]))
    }
}

impl Add for Point3D {
    type Output = Point3D;
    fn add(self, rhs: Self) -> Point3D {
        Point3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3D {
    type Output = Point3D;
    fn sub(self, rhs: Self) -> Point3D {
        Point3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Point3D {
    type Output = Point3D;
    fn neg(self) -> Point3D {
        Point3D::new(-self.x, -self.y, -self.z)
    }
}

// dot product
impl Mul for Point3D {
    type Output = f64;
    fn mul(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl Mul<f64> for Point3D {
    type Output = Point3D;
    fn mul(self, rhs: f64) -> Point3D {
        Point3D::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<[f64; 3]> for Point3D {
    fn from(a: [f64; 3]) -> Self {
        Point3D::new(a[0], a[1], a[2])
    }
}

impl From<(f64, f64, f64)> for Point3D {
    fn from(t: (f64, f64, f64)) -> Self {
        Point3D::new(t.0, t.1, t.2)
    }
}

impl From<Point3D> for [f64; 3] {
    fn from(p: Point3D) -> Self {
        [p.x, p.y, p.z]
    }
}

impl From<Point3D> for (f64, f64, f64) {
    fn from(p: Point3D) -> Self {
        (p.x, p.y, p.z)
    }
}

impl From<Vector3<f64>> for Point3D {
    fn from(v: Vector3<f64>) -> Self {
        Point3D::new(v.x, v.y, v.z)
    }
}

impl From<Point3D> for Vector3<f64> {
    fn from(p: Point3D) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<nalgebra::Point3<f64>> for Point3D {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Point3D::new(p.x, p.y, p.z)
    }
}

impl From<Point3D> for nalgebra::Point3<f64> {
    fn from(p: Point3D) -> Self {
        nalgebra::Point3::new(p.x, p.y, p.z)
    }
}
