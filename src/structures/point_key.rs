/*
This code is part of the point3d geometry library.
Authors: Dr. John Lindsay
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/

use crate::structures::Point3D;

// Reciprocal of Point3D::TOLERANCE, written as a literal so that it is exact.
const CELLS_PER_UNIT: f64 = 1e10;

/// The grid cell containing a `Point3D`, usable as a `HashMap`/`HashSet` key.
///
/// Space is divided into cubes with a side length of `Point3D::TOLERANCE`.
/// Points that compare equal fall into the same cell unless they straddle a
/// cell boundary, in which case their keys differ. Code that needs every
/// tolerance-equal neighbour should also probe the 26 adjacent cells, which
/// `PointKey::neighbours` returns.
///
/// Coordinates beyond roughly +/-9.2e8 saturate to the outermost cell, and a
/// NaN coordinate maps to cell index 0, so NaN points share the origin's key.
///
/// ## Example
/// ```
/// use point3d::Point3D;
/// use std::collections::HashSet;
///
/// let mut seen = HashSet::new();
/// seen.insert(Point3D::new(1.0, 2.0, 3.0).key());
/// assert!(seen.contains(&Point3D::new(1.0, 2.0, 3.0).key()));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointKey {
    cell: [i64; 3],
}

impl PointKey {
    /// Creates the key for a point.
    pub fn new(p: &Point3D) -> PointKey {
        PointKey {
            cell: [
                (p.x() * CELLS_PER_UNIT).floor() as i64,
                (p.y() * CELLS_PER_UNIT).floor() as i64,
                (p.z() * CELLS_PER_UNIT).floor() as i64,
            ],
        }
    }

    pub fn cell(&self) -> [i64; 3] {
        self.cell
    }

    /// Returns the keys of the 26 cells surrounding this one.
    pub fn neighbours(&self) -> Vec<PointKey> {
        let mut ret = Vec::with_capacity(26);
        for dx in -1i64..=1 {
            for dy in -1i64..=1 {
                for dz in -1i64..=1 {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }
                    ret.push(PointKey {
                        cell: [
                            self.cell[0].saturating_add(dx),
                            self.cell[1].saturating_add(dy),
                            self.cell[2].saturating_add(dz),
                        ],
                    });
                }
            }
        }
        ret
    }
}

impl From<&Point3D> for PointKey {
    fn from(p: &Point3D) -> Self {
        PointKey::new(p)
    }
}
