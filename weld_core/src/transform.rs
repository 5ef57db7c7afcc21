//! # Homogeneous Transforms and Tensor Operations
//!
//! Places local weld geometry into a parent coordinate frame and moves
//! second-rank inertia tensors between frames.
//!
//! ## Conventions
//!
//! - Right-handed axes: x horizontal, y vertical, z out of the screen
//! - Angles are given in degrees, counter-clockwise positive
//! - A placement matrix is composed as `T · Rx · Ry · Rz`
//!
//! Translation never acts on a tensor directly. A tensor is rotated with
//! [`rotate_tensor`] and moved to a new reference point with
//! [`parallel_axis_shift`].
//!
//! ## References
//!
//! - Inertia tensor transformation: <https://hepweb.ucsd.edu/ph110b/110b_notes/node24.html>
//! - Parallel axis theorem: <https://en.wikipedia.org/wiki/Parallel_axis_theorem>
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::{Point3, Vector3};
//! use weld_core::transform::{apply_to_point, compose};
//!
//! // Move 10 along x, then rotate 90° about z
//! let m = compose(&Vector3::new(10.0, 0.0, 0.0), 0.0, 0.0, 90.0);
//! let p = apply_to_point(&m, &Point3::new(0.0, -5.0, 0.0));
//! assert!((p.x - 15.0).abs() < 1e-12);
//! assert!(p.y.abs() < 1e-12);
//! ```

use nalgebra::{Matrix3, Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

// =============================================================================
// ELEMENTARY TRANSFORMS
// =============================================================================

/// Homogeneous translation matrix
pub fn translation(t: &Vector3<f64>) -> Matrix4<f64> {
    Matrix4::new_translation(t)
}

/// Homogeneous rotation about the x axis
#[rustfmt::skip]
pub fn rotation_x(degrees: f64) -> Matrix4<f64> {
    let (s, c) = degrees.to_radians().sin_cos();
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, c, -s, 0.0,
        0.0, s, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Homogeneous rotation about the y axis
#[rustfmt::skip]
pub fn rotation_y(degrees: f64) -> Matrix4<f64> {
    let (s, c) = degrees.to_radians().sin_cos();
    Matrix4::new(
        c, 0.0, s, 0.0,
        0.0, 1.0, 0.0, 0.0,
        -s, 0.0, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Homogeneous rotation about the z axis
#[rustfmt::skip]
pub fn rotation_z(degrees: f64) -> Matrix4<f64> {
    let (s, c) = degrees.to_radians().sin_cos();
    Matrix4::new(
        c, -s, 0.0, 0.0,
        s, c, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

// =============================================================================
// COMPOSITION AND APPLICATION
// =============================================================================

/// Compose a placement matrix `T · Rx · Ry · Rz`.
///
/// Each rotation acts about the axes of the frame produced by the factors to
/// its left. Changing the order changes the result whenever translation and
/// rotation are combined.
pub fn compose(
    t: &Vector3<f64>,
    rotation_x_deg: f64,
    rotation_y_deg: f64,
    rotation_z_deg: f64,
) -> Matrix4<f64> {
    translation(t)
        * rotation_x(rotation_x_deg)
        * rotation_y(rotation_y_deg)
        * rotation_z(rotation_z_deg)
}

/// Apply a homogeneous matrix to a point.
///
/// The result is divided through by the homogeneous `w` component; for rigid
/// placements `w` stays at 1.
pub fn apply_to_point(m: &Matrix4<f64>, p: &Point3<f64>) -> Point3<f64> {
    let h = m * p.to_homogeneous();
    Point3::new(h.x / h.w, h.y / h.w, h.z / h.w)
}

/// Upper-left 3×3 rotation block of a homogeneous matrix.
pub fn rotation_part(m: &Matrix4<f64>) -> Matrix3<f64> {
    m.fixed_view::<3, 3>(0, 0).into_owned()
}

// =============================================================================
// TENSOR OPERATIONS
// =============================================================================

/// Carry a tensor into another orthonormal frame: `R · I · Rᵀ`.
pub fn rotate_tensor(r: &Matrix3<f64>, i: &Matrix3<f64>) -> Matrix3<f64> {
    r * i * r.transpose()
}

/// Parallel axis theorem for a symmetric tensor.
///
/// `I = I_cg + w · ((r·r)·E − r⊗r)`
///
/// # Arguments
/// * `i_cg` - Tensor about its own centroid
/// * `weight` - Scalar weight (length- or area-like)
/// * `r` - Vector from the new reference point to the tensor's centroid
pub fn parallel_axis_shift(i_cg: &Matrix3<f64>, weight: f64, r: &Vector3<f64>) -> Matrix3<f64> {
    let shift = Matrix3::identity() * r.dot(r) - r * r.transpose();
    i_cg + shift * weight
}

/// Diagonal entries `(xx, yy, zz)` of a tensor.
pub fn diagonal(i: &Matrix3<f64>) -> (f64, f64, f64) {
    (i[(0, 0)], i[(1, 1)], i[(2, 2)])
}

// =============================================================================
// PLACEMENT
// =============================================================================

/// Rigid placement of a weld group in its parent frame.
///
/// Stored as the two user-facing vectors; the matrix is rebuilt from them on
/// every call so repeated edits replace rather than accumulate.
///
/// ## JSON Example
///
/// ```json
/// { "translation": [0.0, 5.0, 5.0], "rotation_deg": [90.0, 0.0, 0.0] }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Translation vector
    pub translation: Vector3<f64>,

    /// Rotation about x, y and z in degrees
    pub rotation_deg: Vector3<f64>,
}

impl Placement {
    /// Create a placement from translation and rotation (degrees) vectors.
    pub fn new(translation: Vector3<f64>, rotation_deg: Vector3<f64>) -> Self {
        Placement {
            translation,
            rotation_deg,
        }
    }

    /// The identity placement
    pub fn identity() -> Self {
        Placement::new(Vector3::zeros(), Vector3::zeros())
    }

    /// Homogeneous matrix `T · Rx · Ry · Rz`
    pub fn matrix(&self) -> Matrix4<f64> {
        compose(
            &self.translation,
            self.rotation_deg.x,
            self.rotation_deg.y,
            self.rotation_deg.z,
        )
    }

    pub fn is_identity(&self) -> bool {
        self.translation == Vector3::zeros() && self.rotation_deg == Vector3::zeros()
    }
}

impl Default for Placement {
    fn default() -> Self {
        Placement::identity()
    }
}
