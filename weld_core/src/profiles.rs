//! # Standard Weld Profiles
//!
//! Factory functions for common weld group shapes. Every profile is centred
//! on the group origin and returned with an identity placement; each is an
//! ordinary [`WeldGroup`] and can be edited or placed like any other.
//!
//! ```text
//!   single     parallel     angle      rectangle      tee        partial_i     circle
//!
//!     │        │     │     ┌─────     ┌───────┐    ───┬┬───    ─────────      ╭───╮
//!     │        │     │     │          │       │       ││          ││          │     │
//!     │        │     │     │          │       │       ││          ││          │     │
//!     │        │     │     │          └───────┘       ││        ─────────      ╰───╯
//! ```
//!
//! Dimension names follow the usual weld group tables: `base` (b),
//! `height` (h), `flange_width` (B), `depth` (H), `web_gap` (S) and
//! `flange_thickness` (t).
//!
//! ## Example
//!
//! ```rust
//! use weld_core::profiles::circle;
//! use weld_core::segment::WeldType;
//!
//! let ring = circle("Ring", 10.0, 100, 0.25, WeldType::Fillet).unwrap();
//! let cg = ring.centroid().unwrap();
//! assert!(cg.x.abs() < 1e-9 && cg.y.abs() < 1e-9);
//! ```

use crate::errors::{ensure_positive, WeldError, WeldResult};
use crate::group::WeldGroup;
use crate::segment::WeldType;

/// Minimum chords for a closed circular profile
pub const MIN_CHORDS: usize = 3;

fn build(
    name: &str,
    size: f64,
    weld_type: WeldType,
    lines: &[([f64; 2], [f64; 2])],
) -> WeldResult<WeldGroup> {
    ensure_positive("size", size)?;
    let mut group = WeldGroup::new(name);
    for &(from, to) in lines {
        group.add_segment(from, to, size, weld_type)?;
    }
    Ok(group)
}

/// One vertical line of length `height`.
pub fn single(name: &str, height: f64, size: f64, weld_type: WeldType) -> WeldResult<WeldGroup> {
    ensure_positive("height", height)?;
    let h = height / 2.0;
    build(name, size, weld_type, &[([0.0, -h], [0.0, h])])
}

/// Two vertical lines `base` apart.
pub fn parallel(
    name: &str,
    base: f64,
    height: f64,
    size: f64,
    weld_type: WeldType,
) -> WeldResult<WeldGroup> {
    ensure_positive("base", base)?;
    ensure_positive("height", height)?;
    let (b, h) = (base / 2.0, height / 2.0);
    build(
        name,
        size,
        weld_type,
        &[([-b, -h], [-b, h]), ([b, -h], [b, h])],
    )
}

/// Left vertical line plus top horizontal line.
pub fn angle(
    name: &str,
    base: f64,
    height: f64,
    size: f64,
    weld_type: WeldType,
) -> WeldResult<WeldGroup> {
    ensure_positive("base", base)?;
    ensure_positive("height", height)?;
    let (b, h) = (base / 2.0, height / 2.0);
    build(
        name,
        size,
        weld_type,
        &[([-b, -h], [-b, h]), ([-b, h], [b, h])],
    )
}

/// Closed rectangular outline.
pub fn rectangle(
    name: &str,
    base: f64,
    height: f64,
    size: f64,
    weld_type: WeldType,
) -> WeldResult<WeldGroup> {
    ensure_positive("base", base)?;
    ensure_positive("height", height)?;
    let (b, h) = (base / 2.0, height / 2.0);
    build(
        name,
        size,
        weld_type,
        &[
            ([-b, -h], [-b, h]),
            ([b, -h], [b, h]),
            ([-b, h], [b, h]),
            ([-b, -h], [b, -h]),
        ],
    )
}

fn check_flanged(
    flange_width: f64,
    depth: f64,
    web_gap: f64,
    flange_thickness: f64,
) -> WeldResult<()> {
    ensure_positive("flange_width", flange_width)?;
    ensure_positive("depth", depth)?;
    ensure_positive("web_gap", web_gap)?;
    ensure_positive("flange_thickness", flange_thickness)
}

/// Tee: both sides of the web plus the top of the flange.
pub fn tee(
    name: &str,
    flange_width: f64,
    depth: f64,
    web_gap: f64,
    flange_thickness: f64,
    size: f64,
    weld_type: WeldType,
) -> WeldResult<WeldGroup> {
    check_flanged(flange_width, depth, web_gap, flange_thickness)?;
    if flange_thickness >= depth {
        return Err(WeldError::invalid_input(
            "flange_thickness",
            flange_thickness.to_string(),
            "Flange must be thinner than the section depth",
        ));
    }
    let (b, h, s, t) = (flange_width / 2.0, depth / 2.0, web_gap / 2.0, flange_thickness);
    build(
        name,
        size,
        weld_type,
        &[
            ([-s, -h], [-s, h - t]),
            ([s, -h], [s, h - t]),
            ([-b, h], [b, h]),
        ],
    )
}

/// Partial I: both sides of the web between the flanges plus the outer
/// face of each flange.
pub fn partial_i(
    name: &str,
    flange_width: f64,
    depth: f64,
    web_gap: f64,
    flange_thickness: f64,
    size: f64,
    weld_type: WeldType,
) -> WeldResult<WeldGroup> {
    check_flanged(flange_width, depth, web_gap, flange_thickness)?;
    if 2.0 * flange_thickness >= depth {
        return Err(WeldError::invalid_input(
            "flange_thickness",
            flange_thickness.to_string(),
            "Both flanges must fit within the section depth",
        ));
    }
    let (b, h, s, t) = (flange_width / 2.0, depth / 2.0, web_gap / 2.0, flange_thickness);
    build(
        name,
        size,
        weld_type,
        &[
            ([-s, -h + t], [-s, h - t]),
            ([s, -h + t], [s, h - t]),
            ([-b, h], [b, h]),
            ([-b, -h], [b, -h]),
        ],
    )
}

/// Circle of `radius` approximated by `chords` equal-angle straight chords.
///
/// Angles are computed per chord index, so the last chord closes exactly
/// on the first point. The chord approximation slightly undershoots the
/// analytical inertia `π·r³·t`.
pub fn circle(
    name: &str,
    radius: f64,
    chords: usize,
    size: f64,
    weld_type: WeldType,
) -> WeldResult<WeldGroup> {
    ensure_positive("radius", radius)?;
    if chords < MIN_CHORDS {
        return Err(WeldError::invalid_input(
            "chords",
            chords.to_string(),
            "A circle needs at least 3 chords",
        ));
    }

    let point = |i: usize| {
        let theta = (i as f64 * 360.0 / chords as f64).to_radians();
        [radius * theta.cos(), radius * theta.sin()]
    };
    let lines: Vec<([f64; 2], [f64; 2])> = (0..chords).map(|i| (point(i), point(i + 1))).collect();
    build(name, size, weld_type, &lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-3;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_single() {
        let group = single("S", 10.0, 0.25, WeldType::Fillet).unwrap();
        assert_eq!(group.segment_count(), 1);
        assert!(approx_eq(group.ixx().unwrap(), 14.7314));
    }

    #[test]
    fn test_parallel() {
        let group = parallel("P", 5.0, 5.0, 0.25, WeldType::Fillet).unwrap();
        assert_eq!(group.segment_count(), 2);
        assert!(approx_eq(group.length(), 10.0));
        assert!(approx_eq(group.ixx().unwrap(), 3.6828), "Ixx = {:?}", group.ixx());
        assert!(approx_eq(group.iyy().unwrap(), 11.0531), "Iyy = {:?}", group.iyy());
    }

    #[test]
    fn test_angle_centroid() {
        let group = angle("A", 5.0, 5.0, 0.25, WeldType::Fillet).unwrap();
        let cg = group.centroid().unwrap();
        assert!(approx_eq(cg.x, -1.25) && approx_eq(cg.y, 1.25), "cg = {:?}", cg);
    }

    #[test]
    fn test_rectangle() {
        let group = rectangle("R", 5.0, 10.0, 0.25, WeldType::Fillet).unwrap();
        assert_eq!(group.length(), 30.0);
        assert!(approx_eq(group.area(), 5.3033));
        assert!((group.ixx().unwrap() - 73.66).abs() < 0.005);
    }

    #[test]
    fn test_tee_and_partial_i_lengths() {
        let tee = tee("T", 3.0, 5.0, 0.25, 0.25, 0.25, WeldType::Fillet).unwrap();
        assert_eq!(tee.segment_count(), 3);
        assert!(approx_eq(tee.length(), 2.0 * 4.75 + 3.0));
        // Flange pulls the centroid upward
        assert!(tee.centroid().unwrap().y > 0.0);

        let partial = partial_i("I", 3.0, 5.0, 0.25, 0.25, 0.25, WeldType::Fillet).unwrap();
        assert_eq!(partial.segment_count(), 4);
        assert!(approx_eq(partial.length(), 2.0 * 4.5 + 2.0 * 3.0));
        assert!(approx_eq(partial.centroid().unwrap().y, 0.0));
    }

    #[test]
    fn test_circle() {
        let radius = 10.0;
        let group = circle("C", radius, 100, 0.25, WeldType::Fillet).unwrap();
        assert_eq!(group.segment_count(), 100);

        let cg = group.centroid().unwrap();
        assert!(cg.x.abs() < 1e-9 && cg.y.abs() < 1e-9, "cg = {:?}", cg);

        let (ixx, iyy, _) = group.inertia_diagonal().unwrap();
        assert!((ixx - 554.92).abs() < 0.01, "Ixx = {}", ixx);
        assert!((iyy - 554.92).abs() < 0.01, "Iyy = {}", iyy);

        // Within 3% of, and below, the closed-form value
        let analytical = PI * radius.powi(3) * WeldType::Fillet.throat(0.25);
        assert!(ixx < analytical);
        assert!((analytical - ixx) / analytical < 0.03);
    }

    #[test]
    fn test_circle_closes() {
        let group = circle("C", 5.0, 12, 0.25, WeldType::Fillet).unwrap();
        let first = group.segments().next().unwrap().from_point();
        let last = group.segments().last().unwrap().to_point();
        assert!((first - last).norm() < 1e-9);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(rectangle("R", 0.0, 10.0, 0.25, WeldType::Fillet).is_err());
        assert!(single("S", 10.0, -0.25, WeldType::Fillet).is_err());
        assert!(circle("C", 10.0, 2, 0.25, WeldType::Fillet).is_err());
        assert!(tee("T", 3.0, 5.0, 0.25, 5.0, 0.25, WeldType::Fillet).is_err());
        assert!(partial_i("I", 3.0, 5.0, 0.25, 2.5, 0.25, WeldType::Fillet).is_err());
    }
}
