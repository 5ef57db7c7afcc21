//! # Weld Groups
//!
//! An ordered collection of weld segments sharing one placement. Segment
//! coordinates are local to the group; every position or tensor reported
//! outside the group is taken through the current [`Placement`].
//!
//! All aggregate quantities are recomputed from the stored segments and
//! placement on every call.
//!
//! ## Aggregation
//!
//! ```text
//! L   = Σ Lᵢ
//! A   = Σ tᵢ·Lᵢ
//! CG  = Σ (cᵢ·Lᵢ) / Σ Lᵢ
//! I   = Σ diag( Iᵢ + tᵢ·Lᵢ · ((rᵢ·rᵢ)·E − rᵢ⊗rᵢ) ),   rᵢ = cᵢ − CG
//! ```
//!
//! Products of inertia are dropped; the reported tensor is diagonal in the
//! parent axes.
//!
//! ## Example
//!
//! ```rust
//! use weld_core::group::WeldGroup;
//! use weld_core::segment::WeldType;
//!
//! let mut group = WeldGroup::new("Rectangle");
//! group.add_segment([-2.5, -5.0], [-2.5, 5.0], 0.25, WeldType::Fillet).unwrap();
//! group.add_segment([2.5, -5.0], [2.5, 5.0], 0.25, WeldType::Fillet).unwrap();
//! group.add_segment([-2.5, 5.0], [2.5, 5.0], 0.25, WeldType::Fillet).unwrap();
//! group.add_segment([-2.5, -5.0], [2.5, -5.0], 0.25, WeldType::Fillet).unwrap();
//!
//! assert!((group.length() - 30.0).abs() < 1e-9);
//! assert!((group.ixx().unwrap() - 73.66).abs() < 0.01);
//! ```

use nalgebra::{Matrix3, Point3, Vector3};
use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::errors::{ensure_positive, ensure_tolerance, WeldError, WeldResult};
use crate::properties::SectionProperties;
use crate::segment::{IntoPoint3, PlacedSegment, SegmentInput, WeldSegment, WeldType};
use crate::settings::CalcSettings;
use crate::transform::{diagonal, parallel_axis_shift, Placement};

// =============================================================================
// DISPLAY METADATA
// =============================================================================

/// Line style hint for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dotted,
    Dashed,
    DashDot,
}

/// Pass-through metadata for an external renderer.
///
/// Stored with the group but never read by any calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayHints {
    /// RGB line color
    pub color: [u8; 3],

    pub line_style: LineStyle,

    /// Suggested x axis limits (min, max)
    pub xlim: (f64, f64),

    /// Suggested y axis limits (min, max)
    pub ylim: (f64, f64),

    /// Line weight scale factor, 1 to 5
    #[serde(deserialize_with = "deserialize_scale")]
    scale: u8,
}

fn deserialize_scale<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let scale = u8::deserialize(deserializer)?;
    Ok(scale.clamp(DisplayHints::MIN_SCALE, DisplayHints::MAX_SCALE))
}

impl DisplayHints {
    pub const MIN_SCALE: u8 = 1;
    pub const MAX_SCALE: u8 = 5;

    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// Set the line weight scale, clamped to `1..=5`.
    pub fn set_scale(&mut self, scale: u8) {
        self.scale = scale.clamp(Self::MIN_SCALE, Self::MAX_SCALE);
    }
}

impl Default for DisplayHints {
    fn default() -> Self {
        DisplayHints {
            color: [0, 0, 0],
            line_style: LineStyle::Solid,
            xlim: (-10.0, 10.0),
            ylim: (-10.0, 10.0),
            scale: 1,
        }
    }
}

// =============================================================================
// NAMING
// =============================================================================

/// Sequence of default group names: "WeldGroup 1", "WeldGroup 2", ...
///
/// Owned by the caller and passed in where a default name is wanted, so
/// numbering is scoped to whatever the caller is building.
#[derive(Debug, Clone)]
pub struct GroupNamer {
    prefix: String,
    next: usize,
}

impl GroupNamer {
    pub fn new(prefix: impl Into<String>) -> Self {
        GroupNamer {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Produce the next name in the sequence.
    pub fn next_name(&mut self) -> String {
        let name = format!("{} {}", self.prefix, self.next);
        self.next += 1;
        name
    }
}

impl Default for GroupNamer {
    fn default() -> Self {
        GroupNamer::new("WeldGroup")
    }
}

// =============================================================================
// WELD GROUP
// =============================================================================

fn default_tolerance() -> f64 {
    CalcSettings::default().degenerate_tolerance
}

/// A collection of weld segments sharing a common placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GroupInput")]
pub struct WeldGroup {
    /// Caller-supplied name
    name: String,

    /// Segments in insertion order
    segments: Vec<WeldSegment>,

    /// Placement in the parent frame
    #[serde(default)]
    placement: Placement,

    /// Renderer hints
    #[serde(default)]
    display: DisplayHints,

    /// Degenerate length threshold
    degenerate_tolerance: f64,
}

/// Unvalidated wire form of [`WeldGroup`]
#[derive(Deserialize)]
pub(crate) struct GroupInput {
    name: String,
    segments: Vec<SegmentInput>,
    #[serde(default)]
    placement: Placement,
    #[serde(default)]
    display: DisplayHints,
    #[serde(default = "default_tolerance")]
    degenerate_tolerance: f64,
}

impl TryFrom<GroupInput> for WeldGroup {
    type Error = WeldError;

    fn try_from(input: GroupInput) -> Result<Self, Self::Error> {
        ensure_tolerance("degenerate_tolerance", input.degenerate_tolerance)?;
        let segments = input
            .segments
            .into_iter()
            .map(WeldSegment::try_from)
            .collect::<WeldResult<Vec<_>>>()?;

        Ok(WeldGroup {
            name: input.name,
            segments,
            placement: input.placement,
            display: input.display,
            degenerate_tolerance: input.degenerate_tolerance,
        })
    }
}

impl WeldGroup {
    /// Create an empty group with identity placement.
    pub fn new(name: impl Into<String>) -> Self {
        WeldGroup {
            name: name.into(),
            segments: Vec::new(),
            placement: Placement::identity(),
            display: DisplayHints::default(),
            degenerate_tolerance: default_tolerance(),
        }
    }

    /// Create an empty group named by the next entry of `namer`.
    pub fn named(namer: &mut GroupNamer) -> Self {
        WeldGroup::new(namer.next_name())
    }

    /// Create an empty group using the tolerance from `settings`.
    ///
    /// # Errors
    /// `InvalidInput` if the settings do not validate.
    pub fn with_settings(name: impl Into<String>, settings: &CalcSettings) -> WeldResult<Self> {
        settings.validate()?;
        let mut group = WeldGroup::new(name);
        group.degenerate_tolerance = settings.degenerate_tolerance;
        Ok(group)
    }

    /// Parse a group from JSON, keeping the variant of any validation error.
    pub fn from_json(json: &str) -> WeldResult<Self> {
        let input: GroupInput = serde_json::from_str(json)?;
        WeldGroup::try_from(input)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn display(&self) -> &DisplayHints {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplayHints {
        &mut self.display
    }

    // -------------------------------------------------------------------------
    // Segment management
    // -------------------------------------------------------------------------

    /// Append a segment in group-local coordinates.
    ///
    /// Size is validated before anything is stored. Placement is untouched.
    pub fn add_segment(
        &mut self,
        from: impl IntoPoint3,
        to: impl IntoPoint3,
        size: f64,
        weld_type: WeldType,
    ) -> WeldResult<()> {
        let segment = WeldSegment::new(from, to, size, weld_type).inspect_err(|e| {
            warn!(group = %self.name, error = %e, "rejected weld segment");
        })?;
        self.segments.push(segment);
        Ok(())
    }

    /// Remove and return the segment at `index`.
    pub fn remove_segment(&mut self, index: usize) -> WeldResult<WeldSegment> {
        if index >= self.segments.len() {
            return Err(WeldError::index_out_of_range("segments", index, self.segments.len()));
        }
        Ok(self.segments.remove(index))
    }

    /// Stored (local) segment at `index`
    pub fn segment(&self, index: usize) -> WeldResult<&WeldSegment> {
        let len = self.segments.len();
        self.segments
            .get(index)
            .ok_or_else(|| WeldError::index_out_of_range("segments", index, len))
    }

    /// Mutable stored segment for endpoint, size or type edits
    pub fn segment_mut(&mut self, index: usize) -> WeldResult<&mut WeldSegment> {
        let len = self.segments.len();
        self.segments
            .get_mut(index)
            .ok_or_else(|| WeldError::index_out_of_range("segments", index, len))
    }

    /// Segments viewed through the current placement, in insertion order.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = PlacedSegment<'_>> + '_ {
        let matrix = self.placement.matrix();
        let tolerance = self.degenerate_tolerance;
        self.segments
            .iter()
            .enumerate()
            .map(move |(i, s)| s.placed(i, matrix, tolerance))
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Set the nominal size of every segment.
    ///
    /// The size is validated once up front, so either every segment changes
    /// or none does.
    pub fn set_weld_size(&mut self, size: f64) -> WeldResult<()> {
        ensure_positive("size", size)?;
        for segment in &mut self.segments {
            segment.set_size(size)?;
        }
        Ok(())
    }

    /// Set the weld type of every segment.
    pub fn set_weld_type(&mut self, weld_type: WeldType) {
        for segment in &mut self.segments {
            segment.set_weld_type(weld_type);
        }
    }

    // -------------------------------------------------------------------------
    // Placement
    // -------------------------------------------------------------------------

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Replace the placement wholesale.
    ///
    /// Calling this twice with the same vectors leaves the group exactly as
    /// after the first call.
    pub fn set_placement(
        &mut self,
        translation: impl Into<Vector3<f64>>,
        rotation_deg: impl Into<Vector3<f64>>,
    ) {
        self.placement = Placement::new(translation.into(), rotation_deg.into());
        debug!(
            group = %self.name,
            translation = ?self.placement.translation,
            rotation_deg = ?self.placement.rotation_deg,
            "placement set"
        );
    }

    /// Return to the identity placement.
    pub fn reset_placement(&mut self) {
        self.placement = Placement::identity();
    }

    // -------------------------------------------------------------------------
    // Derived properties
    // -------------------------------------------------------------------------

    /// Total weld length
    pub fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    /// Total throat area
    pub fn area(&self) -> f64 {
        self.segments().map(|s| s.area()).sum()
    }

    fn ensure_queryable(&self) -> WeldResult<()> {
        if self.segments.is_empty() {
            return Err(WeldError::empty_group(&self.name));
        }
        self.segments().try_for_each(|s| s.ensure_non_degenerate())
    }

    /// Length-weighted centroid in the parent frame.
    ///
    /// # Errors
    /// `EmptyGroup` without segments, `DegenerateSegment` if any segment
    /// has coincident endpoints.
    pub fn centroid(&self) -> WeldResult<Point3<f64>> {
        self.ensure_queryable()?;

        let (weighted, total) = self
            .segments()
            .fold((Vector3::zeros(), 0.0), |(weighted, total), s| {
                let length = s.length();
                (weighted + s.center().coords * length, total + length)
            });

        Ok(Point3::from(weighted / total))
    }

    /// Centroidal inertia tensor, diagonal in the parent axes.
    ///
    /// Each segment tensor is shifted to the group centroid with weight
    /// `throat · length`; off-diagonal terms are dropped after the shift.
    pub fn inertia(&self) -> WeldResult<Matrix3<f64>> {
        let centroid = self.centroid()?;
        let placed: Vec<PlacedSegment<'_>> = self.segments().collect();

        let contributions: Vec<WeldResult<(f64, f64, f64)>> = placed
            .par_iter()
            .map(|s| -> WeldResult<(f64, f64, f64)> {
                let r = s.center() - centroid;
                let shifted = parallel_axis_shift(&s.inertia()?, s.throat() * s.length(), &r);
                Ok(diagonal(&shifted))
            })
            .collect();

        let mut total = Vector3::zeros();
        for contribution in contributions {
            let (xx, yy, zz) = contribution?;
            total += Vector3::new(xx, yy, zz);
        }

        debug!(
            group = %self.name,
            segments = placed.len(),
            ixx = total.x,
            iyy = total.y,
            izz = total.z,
            "group inertia"
        );
        Ok(Matrix3::from_diagonal(&total))
    }

    /// Inertia diagonal as `(ixx, iyy, izz)`
    pub fn inertia_diagonal(&self) -> WeldResult<(f64, f64, f64)> {
        Ok(diagonal(&self.inertia()?))
    }

    pub fn ixx(&self) -> WeldResult<f64> {
        Ok(self.inertia_diagonal()?.0)
    }

    pub fn iyy(&self) -> WeldResult<f64> {
        Ok(self.inertia_diagonal()?.1)
    }

    pub fn izz(&self) -> WeldResult<f64> {
        Ok(self.inertia_diagonal()?.2)
    }

    /// All derived properties in one snapshot.
    pub fn properties(&self) -> WeldResult<SectionProperties> {
        let centroid = self.centroid()?;
        let inertia = self.inertia()?;
        Ok(SectionProperties::new(self.length(), self.area(), centroid, &inertia))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-4;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn rectangle() -> WeldGroup {
        let mut group = WeldGroup::new("Rectangle");
        group.add_segment([-2.5, -5.0], [-2.5, 5.0], 0.25, WeldType::Fillet).unwrap();
        group.add_segment([2.5, -5.0], [2.5, 5.0], 0.25, WeldType::Fillet).unwrap();
        group.add_segment([-2.5, 5.0], [2.5, 5.0], 0.25, WeldType::Fillet).unwrap();
        group.add_segment([-2.5, -5.0], [2.5, -5.0], 0.25, WeldType::Fillet).unwrap();
        group
    }

    #[test]
    fn test_single_line() {
        let mut group = WeldGroup::new("Single");
        group.add_segment([0.0, -5.0], [0.0, 5.0], 0.25, WeldType::Fillet).unwrap();

        assert_eq!(group.length(), 10.0);
        assert!(approx_eq(group.area(), 1.7678), "A = {}", group.area());
        assert!(approx_eq(group.ixx().unwrap(), 14.7314));
        assert!(approx_eq(group.iyy().unwrap(), 0.0046));
    }

    #[test]
    fn test_rectangle() {
        let group = rectangle();
        let cg = group.centroid().unwrap();

        assert_eq!(cg, Point3::origin());
        assert_eq!(group.length(), 30.0);
        assert!(approx_eq(group.area(), 5.3033), "A = {}", group.area());

        let (ixx, iyy, izz) = group.inertia_diagonal().unwrap();
        assert!((ixx - 73.66).abs() < 0.005, "Ixx = {}", ixx);
        assert!(approx_eq(iyy, 25.7891), "Iyy = {}", iyy);
        assert!(approx_eq(izz, ixx + iyy), "Izz = {}", izz);
    }

    #[test]
    fn test_offset_centroid() {
        // Angle: left vertical plus top horizontal
        let mut group = WeldGroup::new("Angle");
        group.add_segment([-2.5, -2.5], [-2.5, 2.5], 0.25, WeldType::Fillet).unwrap();
        group.add_segment([-2.5, 2.5], [2.5, 2.5], 0.25, WeldType::Fillet).unwrap();

        let cg = group.centroid().unwrap();
        assert!(approx_eq(cg.x, -1.25) && approx_eq(cg.y, 1.25), "cg = {:?}", cg);
        assert!(approx_eq(group.ixx().unwrap(), 4.6059));
        assert!(approx_eq(group.iyy().unwrap(), 4.6059));
    }

    #[test]
    fn test_empty_group_errors() {
        let group = WeldGroup::new("Empty");
        assert_eq!(group.length(), 0.0);
        assert!(matches!(group.centroid(), Err(WeldError::EmptyGroup { .. })));
        assert!(matches!(group.inertia(), Err(WeldError::EmptyGroup { .. })));
        assert!(matches!(group.properties(), Err(WeldError::EmptyGroup { .. })));
    }

    #[test]
    fn test_degenerate_segment_fails_queries() {
        let mut group = rectangle();
        group.add_segment([1.0, 1.0], [1.0, 1.0], 0.25, WeldType::Fillet).unwrap();

        match group.inertia() {
            Err(WeldError::DegenerateSegment { index, .. }) => assert_eq!(index, 4),
            other => panic!("expected DegenerateSegment, got {:?}", other),
        }

        group.remove_segment(4).unwrap();
        assert!(group.inertia().is_ok());
    }

    #[test]
    fn test_add_segment_rejects_bad_size() {
        let mut group = rectangle();
        assert!(group.add_segment([0.0, 0.0], [1.0, 0.0], 0.0, WeldType::Fillet).is_err());
        assert_eq!(group.segment_count(), 4);
    }

    #[test]
    fn test_set_placement_is_idempotent() {
        let mut group = rectangle();
        group.set_placement([1.0, 2.0, 3.0], [30.0, 45.0, 60.0]);
        let cg1 = group.centroid().unwrap();
        let i1 = group.inertia_diagonal().unwrap();

        group.set_placement([1.0, 2.0, 3.0], [30.0, 45.0, 60.0]);
        let cg2 = group.centroid().unwrap();
        let i2 = group.inertia_diagonal().unwrap();

        assert_eq!(cg1, cg2);
        assert_eq!(i1, i2);
    }

    #[test]
    fn test_full_revolution_is_invariant() {
        let reference = rectangle();
        let (ixx0, iyy0, izz0) = reference.inertia_diagonal().unwrap();

        for rotation in [[360.0, 0.0, 0.0], [0.0, 360.0, 0.0], [0.0, 0.0, 360.0]] {
            let mut group = rectangle();
            group.set_placement([1.0, 2.0, 3.0], rotation);

            assert!(approx_eq(group.length(), reference.length()));
            assert!(approx_eq(group.area(), reference.area()));
            let (ixx, iyy, izz) = group.inertia_diagonal().unwrap();
            assert!(approx_eq(ixx, ixx0), "rotation {:?}: Ixx = {}", rotation, ixx);
            assert!(approx_eq(iyy, iyy0), "rotation {:?}: Iyy = {}", rotation, iyy);
            assert!(approx_eq(izz, izz0), "rotation {:?}: Izz = {}", rotation, izz);

            let cg = group.centroid().unwrap();
            assert!(approx_eq(cg.x, 1.0) && approx_eq(cg.y, 2.0) && approx_eq(cg.z, 3.0));
        }
    }

    #[test]
    fn test_quarter_turns_permute_axes() {
        let (ixx0, iyy0, izz0) = rectangle().inertia_diagonal().unwrap();

        let mut about_z = rectangle();
        about_z.set_placement([0.0, 0.0, 0.0], [0.0, 0.0, 90.0]);
        let (ixx, iyy, izz) = about_z.inertia_diagonal().unwrap();
        assert!(approx_eq(ixx, iyy0) && approx_eq(iyy, ixx0) && approx_eq(izz, izz0));

        // Rotated into the x-z plane: the out-of-plane axis becomes y
        let mut about_x = rectangle();
        about_x.set_placement([0.0, 0.0, 0.0], [90.0, 0.0, 0.0]);
        let (ixx, iyy, izz) = about_x.inertia_diagonal().unwrap();
        assert!(approx_eq(ixx, ixx0), "Ixx = {}", ixx);
        assert!(approx_eq(iyy, izz0), "Iyy = {}", iyy);
        assert!(approx_eq(izz, iyy0), "Izz = {}", izz);
    }

    #[test]
    fn test_placement_moves_centroid_and_endpoints() {
        let mut group = WeldGroup::new("Single");
        group.add_segment([0.0, -5.0], [0.0, 5.0], 0.25, WeldType::Fillet).unwrap();
        group.set_placement([0.0, 0.0, 0.0], [90.0, 0.0, 0.0]);

        let segment = group.segments().next().unwrap();
        let to = segment.to_point();
        assert!(approx_eq(to.y, 0.0) && approx_eq(to.z, 5.0), "to = {:?}", to);

        group.reset_placement();
        let to = group.segments().next().unwrap().to_point();
        assert!(approx_eq(to.y, 5.0) && approx_eq(to.z, 0.0));
    }

    #[test]
    fn test_group_wide_edits() {
        let mut group = rectangle();
        group.set_weld_type(WeldType::Groove);
        group.set_weld_size(0.5).unwrap();
        assert!(approx_eq(group.area(), 15.0));

        assert!(group.set_weld_size(-0.5).is_err());
        assert!(group.segments().all(|s| s.segment().size() == 0.5));
    }

    #[test]
    fn test_segment_edit_and_index_errors() {
        let mut group = rectangle();
        group.segment_mut(0).unwrap().set_endpoints([-2.5, -5.0], [-2.5, 15.0]).unwrap();
        assert!(approx_eq(group.length(), 40.0));

        assert!(matches!(group.segment(9), Err(WeldError::IndexOutOfRange { .. })));
        assert!(matches!(group.remove_segment(9), Err(WeldError::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_tolerance_from_settings() {
        let settings = CalcSettings {
            degenerate_tolerance: 0.5,
            ..CalcSettings::default()
        };
        let mut group = WeldGroup::with_settings("Tack", &settings).unwrap();
        group.add_segment([0.0, 0.0], [0.25, 0.0], 0.25, WeldType::Fillet).unwrap();
        assert!(matches!(group.centroid(), Err(WeldError::DegenerateSegment { .. })));

        let mut group = WeldGroup::new("Tack");
        group.add_segment([0.0, 0.0], [0.25, 0.0], 0.25, WeldType::Fillet).unwrap();
        assert!(group.centroid().is_ok());
    }

    #[test]
    fn test_negative_tolerance_is_rejected() {
        let settings = CalcSettings {
            degenerate_tolerance: -1.0,
            ..CalcSettings::default()
        };
        let err = WeldGroup::with_settings("Tack", &settings).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let json = r#"{
            "name": "Tack",
            "segments": [
                { "from": [1, 1, 0], "to": [1, 1, 0], "size": 0.25, "weld_type": "fillet" }
            ],
            "degenerate_tolerance": -1.0
        }"#;
        assert!(serde_json::from_str::<WeldGroup>(json).is_err());
        let err = WeldGroup::from_json(json).unwrap_err();
        match &err {
            WeldError::InvalidInput { field, .. } => assert_eq!(field, "degenerate_tolerance"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        // The same group with a valid tolerance loads and reports the zero-length segment
        let group = WeldGroup::from_json(&json.replace("-1.0", "0.0")).unwrap();
        assert!(matches!(group.inertia(), Err(WeldError::DegenerateSegment { index: 0, .. })));
    }

    #[test]
    fn test_from_json_reports_unsupported_weld_type() {
        let json = r#"{
            "name": "Plug",
            "segments": [
                { "from": [0, 0, 0], "to": [1, 0, 0], "size": 0.25, "weld_type": "plug" }
            ]
        }"#;
        let err = WeldGroup::from_json(json).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_WELD_TYPE");
    }

    #[test]
    fn test_group_namer() {
        let mut namer = GroupNamer::default();
        let first = WeldGroup::named(&mut namer);
        let second = WeldGroup::named(&mut namer);
        assert_eq!(first.name(), "WeldGroup 1");
        assert_eq!(second.name(), "WeldGroup 2");

        // Independent sequences do not share state
        let mut other = GroupNamer::new("Joint");
        assert_eq!(other.next_name(), "Joint 1");
    }

    #[test]
    fn test_display_hints_are_pass_through() {
        let mut group = rectangle();
        let before = group.properties().unwrap();

        let display = group.display_mut();
        display.color = [255, 0, 0];
        display.line_style = LineStyle::Dashed;
        display.set_scale(9);
        assert_eq!(group.display().scale(), DisplayHints::MAX_SCALE);

        assert_eq!(group.properties().unwrap(), before);
    }

    #[test]
    fn test_display_scale_is_clamped_on_load() {
        let hints: DisplayHints = serde_json::from_str(r#"{ "scale": 200 }"#).unwrap();
        assert_eq!(hints.scale(), DisplayHints::MAX_SCALE);
        assert_eq!(hints.xlim, (-10.0, 10.0));

        let hints: DisplayHints = serde_json::from_str(r#"{ "scale": 0 }"#).unwrap();
        assert_eq!(hints.scale(), DisplayHints::MIN_SCALE);

        let hints: DisplayHints = serde_json::from_str("{}").unwrap();
        assert_eq!(hints.scale(), 1);
    }

    #[test]
    fn test_group_serialization() {
        let mut group = rectangle();
        group.set_placement([0.0, 5.0, 5.0], [90.0, 0.0, 0.0]);

        let json = serde_json::to_string(&group).unwrap();
        let roundtrip: WeldGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(group, roundtrip);
        assert_eq!(WeldGroup::from_json(&json).unwrap(), group);
    }
}
