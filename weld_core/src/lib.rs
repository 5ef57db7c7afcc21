//! # weld_core - Weld Group Section Property Engine
//!
//! `weld_core` computes the section properties of welded connections made of
//! straight weld segments: total length, throat area, centroid and the
//! centroidal inertia tensor. Results feed weld stress checks; the checks
//! themselves are left to the caller.
//!
//! ## Design Philosophy
//!
//! - **Derived, never stored**: every property is recomputed from the current
//!   segments and placements, so queries always match the latest edits
//! - **Fail fast**: invalid sizes and weld types are rejected before they are
//!   stored; empty or degenerate geometry is an error, never `NaN` or `0`
//! - **JSON-First**: inputs, reports and errors implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use weld_core::profiles;
//! use weld_core::segment::WeldType;
//!
//! let group = profiles::rectangle("Base plate", 5.0, 10.0, 0.25, WeldType::Fillet).unwrap();
//! let props = group.properties().unwrap();
//!
//! assert_eq!(props.length, 30.0);
//! let json = serde_json::to_string_pretty(&props).unwrap();
//! assert!(json.contains("ixx"));
//! ```
//!
//! ## Modules
//!
//! - [`transform`] - Homogeneous transforms, tensor rotation, parallel axis shift
//! - [`segment`] - Single weld segments and their local section model
//! - [`group`] - Weld groups sharing one placement
//! - [`assembly`] - Several placed groups combined
//! - [`profiles`] - Standard weld group shapes
//! - [`properties`] - Serializable property reports
//! - [`settings`] - Tolerances and defaults
//! - [`errors`] - Structured error types

pub mod assembly;
pub mod errors;
pub mod group;
pub mod profiles;
pub mod properties;
pub mod segment;
pub mod settings;
pub mod transform;

// Re-export commonly used types at crate root for convenience
pub use assembly::WeldAssembly;
pub use errors::{ErrorCategory, WeldError, WeldResult};
pub use group::{DisplayHints, GroupNamer, LineStyle, WeldGroup};
pub use properties::SectionProperties;
pub use segment::{PlacedSegment, WeldSegment, WeldType};
pub use settings::CalcSettings;
pub use transform::Placement;
