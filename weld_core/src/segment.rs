//! # Weld Segments
//!
//! A single straight weld: two endpoints in the owning group's local
//! coordinates, a nominal size and a weld process type.
//!
//! [`WeldSegment`] stores only local geometry. Every geometric query goes
//! through [`PlacedSegment`], a view of the segment through the owning
//! group's current placement, so transformed endpoints are recomputed on
//! each access and can never go stale after a placement edit.
//!
//! ## Section Model
//!
//! The weld throat is swept along the segment length, giving a thin
//! rectangle of width `t` (throat) and length `L`. In the segment's local
//! frame:
//!
//! ```text
//!            y' (along weld)
//!            ▲
//!            │ to
//!          ┌─┼─┐
//!          │ │ │   Ix' = t·L³/12   (in-plane, across the weld)
//!          │ ● │   Iy' = t³·L/12   (about the weld axis)
//!          │ │ │   Iz' = Ix' + Iy' (polar, out of plane)
//!          └─┼─┘
//!            │ from
//!            └──────► x'
//!             t
//! ```
//!
//! ## Example
//!
//! ```rust
//! use weld_core::group::WeldGroup;
//! use weld_core::segment::WeldType;
//!
//! let mut group = WeldGroup::new("Single");
//! group.add_segment([0.0, -5.0], [0.0, 5.0], 0.25, WeldType::Fillet).unwrap();
//!
//! let segment = group.segments().next().unwrap();
//! assert!((segment.length() - 10.0).abs() < 1e-12);
//! assert!((segment.area() - 1.7678).abs() < 1e-4);
//! assert!((segment.ixx().unwrap() - 14.7314).abs() < 1e-4);
//! ```

use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix3, Matrix4, Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::errors::{ensure_positive, WeldError, WeldResult};
use crate::transform::{apply_to_point, diagonal, rotate_tensor, rotation_part};

/// Below this the long axis is treated as parallel to the group normal.
const PARALLEL_TOLERANCE: f64 = 1e-9;

// =============================================================================
// WELD TYPE
// =============================================================================

/// Weld process type.
///
/// Determines the effective throat from the nominal weld size. JSON input
/// is parsed through [`FromStr`], so it accepts the same spellings as text
/// input and rejects the same names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum WeldType {
    /// Fillet weld: throat = size / √2
    #[default]
    Fillet,
    /// Complete joint penetration groove weld: throat = size
    Groove,
}

impl WeldType {
    /// All supported weld types
    pub const ALL: [WeldType; 2] = [WeldType::Fillet, WeldType::Groove];

    /// Effective throat for a nominal weld size
    pub fn throat(&self, size: f64) -> f64 {
        match self {
            WeldType::Fillet => size * std::f64::consts::FRAC_1_SQRT_2,
            WeldType::Groove => size,
        }
    }

    /// Lowercase name used in text input and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            WeldType::Fillet => "fillet",
            WeldType::Groove => "groove",
        }
    }
}

impl fmt::Display for WeldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeldType {
    type Err = WeldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fillet" => Ok(WeldType::Fillet),
            "groove" => Ok(WeldType::Groove),
            _ => Err(WeldError::unsupported_weld_type(s)),
        }
    }
}

impl TryFrom<String> for WeldType {
    type Error = WeldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// POINT INPUT
// =============================================================================

/// Anything that can be read as a point in the group's local coordinates.
///
/// 2D inputs are lifted onto the `z = 0` plane.
pub trait IntoPoint3 {
    fn into_point3(self) -> Point3<f64>;
}

impl IntoPoint3 for Point3<f64> {
    fn into_point3(self) -> Point3<f64> {
        self
    }
}

impl IntoPoint3 for Point2<f64> {
    fn into_point3(self) -> Point3<f64> {
        Point3::new(self.x, self.y, 0.0)
    }
}

impl IntoPoint3 for [f64; 2] {
    fn into_point3(self) -> Point3<f64> {
        Point3::new(self[0], self[1], 0.0)
    }
}

impl IntoPoint3 for [f64; 3] {
    fn into_point3(self) -> Point3<f64> {
        Point3::new(self[0], self[1], self[2])
    }
}

impl IntoPoint3 for (f64, f64) {
    fn into_point3(self) -> Point3<f64> {
        Point3::new(self.0, self.1, 0.0)
    }
}

impl IntoPoint3 for (f64, f64, f64) {
    fn into_point3(self) -> Point3<f64> {
        Point3::new(self.0, self.1, self.2)
    }
}

fn ensure_finite_point(field: &str, p: &Point3<f64>) -> WeldResult<()> {
    if p.coords.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(WeldError::invalid_input(
            field,
            format!("{:?}", [p.x, p.y, p.z]),
            "Coordinates must be finite",
        ))
    }
}

// =============================================================================
// STORED SEGMENT
// =============================================================================

/// A straight weld in its owning group's local coordinates.
///
/// Size and weld type are validated when the segment is created or edited;
/// an invalid segment is never stored. Coincident endpoints are accepted
/// here and reported when the geometry is queried.
///
/// ## JSON Example
///
/// ```json
/// { "from": [0.0, -5.0, 0.0], "to": [0.0, 5.0, 0.0], "size": 0.25, "weld_type": "fillet" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SegmentInput")]
pub struct WeldSegment {
    /// Start point (group-local coordinates)
    from: Point3<f64>,

    /// End point (group-local coordinates)
    to: Point3<f64>,

    /// Nominal weld size (fillet leg or groove depth)
    size: f64,

    /// Weld process type
    weld_type: WeldType,
}

/// Unvalidated wire form of [`WeldSegment`]; deserialization goes through
/// [`WeldSegment::new`] so JSON input gets the same checks as the API.
#[derive(Deserialize)]
pub(crate) struct SegmentInput {
    from: Point3<f64>,
    to: Point3<f64>,
    size: f64,
    weld_type: String,
}

impl TryFrom<SegmentInput> for WeldSegment {
    type Error = WeldError;

    fn try_from(input: SegmentInput) -> Result<Self, Self::Error> {
        let weld_type: WeldType = input.weld_type.parse()?;
        WeldSegment::new(input.from, input.to, input.size, weld_type)
    }
}

impl WeldSegment {
    /// Create a validated segment.
    ///
    /// # Errors
    /// `InvalidInput` if `size` is not positive and finite, or a coordinate
    /// is not finite.
    pub fn new(
        from: impl IntoPoint3,
        to: impl IntoPoint3,
        size: f64,
        weld_type: WeldType,
    ) -> WeldResult<Self> {
        let from = from.into_point3();
        let to = to.into_point3();
        ensure_finite_point("from", &from)?;
        ensure_finite_point("to", &to)?;
        ensure_positive("size", size)?;
        Ok(WeldSegment {
            from,
            to,
            size,
            weld_type,
        })
    }

    /// Parse a segment from JSON.
    ///
    /// Unlike going through `serde_json` directly, validation failures keep
    /// their own variant (`UnsupportedWeldType`, `InvalidInput`) instead of
    /// collapsing into `SerializationError`.
    pub fn from_json(json: &str) -> WeldResult<Self> {
        let input: SegmentInput = serde_json::from_str(json)?;
        WeldSegment::try_from(input)
    }

    /// Start point in group-local coordinates
    pub fn local_from(&self) -> Point3<f64> {
        self.from
    }

    /// End point in group-local coordinates
    pub fn local_to(&self) -> Point3<f64> {
        self.to
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn weld_type(&self) -> WeldType {
        self.weld_type
    }

    /// Effective throat per the weld type
    pub fn throat(&self) -> f64 {
        self.weld_type.throat(self.size)
    }

    /// Replace both endpoints.
    pub fn set_endpoints(&mut self, from: impl IntoPoint3, to: impl IntoPoint3) -> WeldResult<()> {
        let from = from.into_point3();
        let to = to.into_point3();
        ensure_finite_point("from", &from)?;
        ensure_finite_point("to", &to)?;
        self.from = from;
        self.to = to;
        Ok(())
    }

    /// Replace the nominal size. Rejects non-positive sizes without changing the segment.
    pub fn set_size(&mut self, size: f64) -> WeldResult<()> {
        ensure_positive("size", size)?;
        self.size = size;
        Ok(())
    }

    pub fn set_weld_type(&mut self, weld_type: WeldType) {
        self.weld_type = weld_type;
    }

    /// View this segment through a parent placement matrix.
    pub(crate) fn placed(
        &self,
        index: usize,
        placement: Matrix4<f64>,
        tolerance: f64,
    ) -> PlacedSegment<'_> {
        PlacedSegment {
            segment: self,
            index,
            placement,
            tolerance,
        }
    }
}

// =============================================================================
// PLACED VIEW
// =============================================================================

/// A [`WeldSegment`] seen through its owning group's current placement.
///
/// All positions and tensors are expressed in the group's parent frame.
#[derive(Debug, Clone, Copy)]
pub struct PlacedSegment<'a> {
    segment: &'a WeldSegment,
    index: usize,
    placement: Matrix4<f64>,
    tolerance: f64,
}

impl<'a> PlacedSegment<'a> {
    /// The stored segment
    pub fn segment(&self) -> &'a WeldSegment {
        self.segment
    }

    /// Position of this segment within its group
    pub fn index(&self) -> usize {
        self.index
    }

    /// Transformed start point
    pub fn from_point(&self) -> Point3<f64> {
        apply_to_point(&self.placement, &self.segment.from)
    }

    /// Transformed end point
    pub fn to_point(&self) -> Point3<f64> {
        apply_to_point(&self.placement, &self.segment.to)
    }

    pub fn throat(&self) -> f64 {
        self.segment.throat()
    }

    /// Euclidean distance between the transformed endpoints
    pub fn length(&self) -> f64 {
        (self.to_point() - self.from_point()).norm()
    }

    /// Throat area: `throat · length`
    pub fn area(&self) -> f64 {
        self.throat() * self.length()
    }

    /// Midpoint of the transformed endpoints
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.from_point(), &self.to_point())
    }

    /// Fails with `DegenerateSegment` when the endpoints coincide.
    pub fn ensure_non_degenerate(&self) -> WeldResult<()> {
        if self.length() <= self.tolerance {
            let from = self.from_point();
            let to = self.to_point();
            return Err(WeldError::DegenerateSegment {
                index: self.index,
                from: [from.x, from.y, from.z],
                to: [to.x, to.y, to.z],
            });
        }
        Ok(())
    }

    /// Orthonormal local frame as a homogeneous matrix.
    ///
    /// Columns are `x'` (in-plane, across the weld), `y'` (along the weld,
    /// from → to) and `z'` (the group's out-of-plane normal); the origin is
    /// [`PlacedSegment::center`].
    ///
    /// For a segment running along the group normal the out-of-plane
    /// reference falls back to the group's x axis.
    pub fn local_frame(&self) -> WeldResult<Matrix4<f64>> {
        self.ensure_non_degenerate()?;

        let along = (self.to_point() - self.from_point()).normalize();
        let group_rotation = rotation_part(&self.placement);

        let mut reference = group_rotation * Vector3::z();
        if along.cross(&reference).norm() < PARALLEL_TOLERANCE {
            reference = group_rotation * Vector3::x();
        }

        let across = along.cross(&reference).normalize();
        let normal = across.cross(&along);

        let rotation = Matrix3::from_columns(&[across, along, normal]);
        let mut frame = rotation.to_homogeneous();
        frame
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&self.center().coords);
        Ok(frame)
    }

    /// Diagonal tensor `diag(Ix', Iy', Iz')` in the segment's own frame.
    pub fn local_inertia(&self) -> Matrix3<f64> {
        let t = self.throat();
        let l = self.length();
        let ix = t * l.powi(3) / 12.0;
        let iy = t.powi(3) * l / 12.0;
        Matrix3::from_diagonal(&Vector3::new(ix, iy, ix + iy))
    }

    /// Local tensor rotated into the parent frame, about the segment center.
    pub fn inertia(&self) -> WeldResult<Matrix3<f64>> {
        let frame = self.local_frame()?;
        Ok(rotate_tensor(&rotation_part(&frame), &self.local_inertia()))
    }

    pub fn ixx(&self) -> WeldResult<f64> {
        Ok(diagonal(&self.inertia()?).0)
    }

    pub fn iyy(&self) -> WeldResult<f64> {
        Ok(diagonal(&self.inertia()?).1)
    }

    pub fn izz(&self) -> WeldResult<f64> {
        Ok(diagonal(&self.inertia()?).2)
    }
}
