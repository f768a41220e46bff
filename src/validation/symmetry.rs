//! Approximate symmetry classification about the centroid
//!
//! A symmetry holds when more than the threshold fraction of points have an
//! image that lands strictly within tolerance of a point of the set.
//! Bilateral symmetry is tested first and wins over rotation; rotations are
//! then tried at 90, 120 and 180 degrees and the first qualifying angle wins.

use crate::io::configuration::CANDIDATE_ROTATIONS_DEGREES;
use crate::spatial::lookup::PointIndex;
use crate::spatial::point::Point;
use crate::validation::result::SymmetryType;

/// Classification together with the match ratios behind it
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetryReport {
    /// Dominant symmetry
    pub symmetry: SymmetryType,
    /// Fraction of points whose mirror image matches another point
    pub bilateral_ratio: f64,
    /// Match fraction for each rotation angle that was tried, in order
    pub rotation_ratios: Vec<(u32, f64)>,
    /// Angle that qualified as rotational symmetry
    pub rotation_degrees: Option<u32>,
}

impl SymmetryReport {
    const fn none() -> Self {
        Self {
            symmetry: SymmetryType::None,
            bilateral_ratio: 0.0,
            rotation_ratios: Vec::new(),
            rotation_degrees: None,
        }
    }
}

/// Classify the dominant symmetry of `points`
pub fn check_symmetry(points: &[Point], tolerance: f64, threshold: f64) -> SymmetryType {
    analyze_symmetry(points, tolerance, threshold).symmetry
}

/// Classify symmetry and keep the ratios that led to the decision
pub fn analyze_symmetry(points: &[Point], tolerance: f64, threshold: f64) -> SymmetryReport {
    if points.len() < 2 {
        return SymmetryReport::none();
    }
    let Some(center) = Point::centroid(points) else {
        return SymmetryReport::none();
    };

    let index = PointIndex::from_points(points, tolerance);
    let total = points.len() as f64;

    // A point on the mirror axis needs a distinct partner to count
    let mirrored = points
        .iter()
        .enumerate()
        .filter(|(slot, p)| {
            let image = p.reflect_across_vertical(center.x);
            index.find_within_excluding(&image, *slot).is_some()
        })
        .count();

    let mut report = SymmetryReport::none();
    report.bilateral_ratio = mirrored as f64 / total;
    if report.bilateral_ratio > threshold {
        report.symmetry = SymmetryType::Bilateral;
        return report;
    }

    for degrees in CANDIDATE_ROTATIONS_DEGREES {
        let radians = f64::from(degrees).to_radians();
        let matched = points
            .iter()
            .filter(|p| index.contains_near(&p.rotate_about(&center, radians)))
            .count();

        let ratio = matched as f64 / total;
        report.rotation_ratios.push((degrees, ratio));
        if ratio > threshold {
            report.symmetry = SymmetryType::Rotational;
            report.rotation_degrees = Some(degrees);
            return report;
        }
    }

    report
}
