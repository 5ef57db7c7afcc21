//! # Section Property Reports
//!
//! A flat, JSON-serializable snapshot of the derived properties of a weld
//! group or assembly. Snapshots are computed on request and never cached.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "length": 30.0,
//!   "area": 5.3033,
//!   "centroid": [0.0, 0.0, 0.0],
//!   "ixx": 73.6616,
//!   "iyy": 25.7891,
//!   "izz": 99.4507
//! }
//! ```

use nalgebra::{Matrix3, Point3};
use serde::{Deserialize, Serialize};

use crate::transform::diagonal;

/// Derived section properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Total weld length
    pub length: f64,

    /// Total throat area
    pub area: f64,

    /// Length-weighted centroid in the parent frame
    pub centroid: [f64; 3],

    /// Moment of inertia about the centroidal x axis
    pub ixx: f64,

    /// Moment of inertia about the centroidal y axis
    pub iyy: f64,

    /// Polar moment about the centroidal z axis
    pub izz: f64,
}

impl SectionProperties {
    pub(crate) fn new(
        length: f64,
        area: f64,
        centroid: Point3<f64>,
        inertia: &Matrix3<f64>,
    ) -> Self {
        let (ixx, iyy, izz) = diagonal(inertia);
        SectionProperties {
            length,
            area,
            centroid: [centroid.x, centroid.y, centroid.z],
            ixx,
            iyy,
            izz,
        }
    }

    /// Inertia diagonal as `(ixx, iyy, izz)`
    pub fn inertia_diagonal(&self) -> (f64, f64, f64) {
        (self.ixx, self.iyy, self.izz)
    }
}
