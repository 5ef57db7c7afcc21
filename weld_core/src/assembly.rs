//! # Weld Assemblies
//!
//! Several weld groups, each already placed in a shared reference frame,
//! combined one level above [`WeldGroup`]. The assembly adds no transform
//! of its own.
//!
//! ## Aggregation
//!
//! ```text
//! L   = Σ Lg
//! A   = Σ Ag
//! CG  = Σ (CGg·Lg) / Σ Lg
//! I   = Σ diag( Ig + Lg · ((rg·rg)·E − rg⊗rg) ),   rg = CGg − CG
//! ```
//!
//! The group-to-assembly shift is weighted by group length alone, where
//! the segment-to-group shift uses `throat · length`.
//!
//! ## Example
//!
//! ```rust
//! use weld_core::assembly::WeldAssembly;
//! use weld_core::profiles;
//! use weld_core::segment::WeldType;
//!
//! let lower = profiles::rectangle("Lower", 5.0, 10.0, 0.25, WeldType::Fillet).unwrap();
//! let mut upper = profiles::rectangle("Upper", 5.0, 10.0, 0.5, WeldType::Fillet).unwrap();
//! upper.set_placement([0.0, 5.0, 5.0], [90.0, 0.0, 0.0]);
//!
//! let mut assembly = WeldAssembly::new();
//! assembly.add_group(lower);
//! assembly.add_group(upper);
//!
//! let cg = assembly.centroid().unwrap();
//! assert!((cg.y - 2.5).abs() < 1e-9);
//! assert!((cg.z - 2.5).abs() < 1e-9);
//! ```

use nalgebra::{Matrix3, Point3, Vector3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{WeldError, WeldResult};
use crate::group::{GroupInput, WeldGroup};
use crate::properties::SectionProperties;
use crate::transform::{diagonal, parallel_axis_shift};

/// An ordered collection of placed weld groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeldAssembly {
    groups: Vec<WeldGroup>,
}

#[derive(Deserialize)]
struct AssemblyInput {
    groups: Vec<GroupInput>,
}

impl WeldAssembly {
    pub fn new() -> Self {
        WeldAssembly { groups: Vec::new() }
    }

    /// Parse an assembly from JSON, keeping the variant of any validation error.
    pub fn from_json(json: &str) -> WeldResult<Self> {
        let input: AssemblyInput = serde_json::from_str(json)?;
        let groups = input
            .groups
            .into_iter()
            .map(WeldGroup::try_from)
            .collect::<WeldResult<Vec<_>>>()?;
        Ok(WeldAssembly { groups })
    }

    /// Append an already-placed group.
    pub fn add_group(&mut self, group: WeldGroup) {
        debug!(group = %group.name(), segments = group.segment_count(), "group added");
        self.groups.push(group);
    }

    /// Remove and return the group at `index`.
    pub fn remove_group(&mut self, index: usize) -> WeldResult<WeldGroup> {
        if index >= self.groups.len() {
            return Err(WeldError::index_out_of_range("groups", index, self.groups.len()));
        }
        Ok(self.groups.remove(index))
    }

    pub fn group(&self, index: usize) -> WeldResult<&WeldGroup> {
        let len = self.groups.len();
        self.groups
            .get(index)
            .ok_or_else(|| WeldError::index_out_of_range("groups", index, len))
    }

    /// Mutable group for segment or placement edits
    pub fn group_mut(&mut self, index: usize) -> WeldResult<&mut WeldGroup> {
        let len = self.groups.len();
        self.groups
            .get_mut(index)
            .ok_or_else(|| WeldError::index_out_of_range("groups", index, len))
    }

    pub fn groups(&self) -> impl ExactSizeIterator<Item = &WeldGroup> {
        self.groups.iter()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total weld length over all groups
    pub fn length(&self) -> f64 {
        self.groups.iter().map(WeldGroup::length).sum()
    }

    /// Total throat area over all groups
    pub fn area(&self) -> f64 {
        self.groups.iter().map(WeldGroup::area).sum()
    }

    /// Length-weighted average of the group centroids.
    ///
    /// # Errors
    /// `EmptyAssembly` without groups; any group error is passed through.
    pub fn centroid(&self) -> WeldResult<Point3<f64>> {
        if self.groups.is_empty() {
            return Err(WeldError::EmptyAssembly);
        }

        let mut weighted = Vector3::zeros();
        let mut total = 0.0;
        for group in &self.groups {
            let length = group.length();
            weighted += group.centroid()?.coords * length;
            total += length;
        }
        Ok(Point3::from(weighted / total))
    }

    /// Centroidal inertia tensor of the assembly, diagonal in the shared axes.
    pub fn inertia(&self) -> WeldResult<Matrix3<f64>> {
        let centroid = self.centroid()?;

        let contributions: Vec<WeldResult<(f64, f64, f64)>> = self
            .groups
            .par_iter()
            .map(|group| -> WeldResult<(f64, f64, f64)> {
                let r = group.centroid()? - centroid;
                let shifted = parallel_axis_shift(&group.inertia()?, group.length(), &r);
                Ok(diagonal(&shifted))
            })
            .collect();

        let mut total = Vector3::zeros();
        for contribution in contributions {
            let (xx, yy, zz) = contribution?;
            total += Vector3::new(xx, yy, zz);
        }

        debug!(
            groups = self.groups.len(),
            ixx = total.x,
            iyy = total.y,
            izz = total.z,
            "assembly inertia"
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
