//! Validation pipeline for point and connection graphs
//!
//! Every check runs on every call and appends to the same report; an error
//! in one check never stops the others. Checks that need more data than is
//! available (geometry below two points, connectivity without connections,
//! and the kind-specific checks) skip themselves and leave their metadata
//! unset.

use crate::generation::geometric::Connection;
use crate::io::configuration::ValidatorConfig;
use crate::io::error::Result;
use crate::math::statistics::{consecutive_gaps, variance};
use crate::spatial::lookup::PointIndex;
use crate::spatial::point::Point;
use crate::validation::alignment::{
    AlignmentReport, ContinuityReport, validate_dot_alignment, validate_line_continuity,
};
use crate::validation::connectivity::AdjacencyList;
use crate::validation::result::{
    Axis, BoundingBox, Circularity, GridInfo, PatternKind, SymmetryType, ValidationIssue,
    ValidationMetadata, ValidationResult,
};
use crate::validation::symmetry::{SymmetryReport, analyze_symmetry};

/// Findings accumulated during a single validation run
#[derive(Default)]
struct Findings {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
    metadata: ValidationMetadata,
}

impl Findings {
    fn into_result(self) -> ValidationResult {
        let Self {
            errors,
            warnings,
            metadata,
        } = self;
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            metadata,
        }
    }
}

/// Validates kolam point graphs against structural and geometric rules
///
/// Holds configuration only; every call builds a fresh report.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PatternValidator {
    config: ValidatorConfig,
}

impl PatternValidator {
    /// Create a validator with explicit thresholds
    pub const fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Create a validator with default thresholds and a custom matching tolerance
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self::new(ValidatorConfig::default().with_tolerance(tolerance))
    }

    /// Active configuration
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Run the full pipeline over `points` and `connections`
    pub fn validate_pattern(
        &self,
        points: &[Point],
        connections: &[Connection],
        kind: PatternKind,
    ) -> ValidationResult {
        let mut findings = Findings::default();

        self.check_points(points, &mut findings);
        Self::check_connections(points, connections, &mut findings);
        self.check_geometry(points, &mut findings);
        Self::check_connectivity(points, connections, &mut findings);

        match kind {
            PatternKind::General => {}
            PatternKind::Circular => self.check_circular(points, &mut findings),
            PatternKind::Grid => self.check_grid(points, &mut findings),
        }

        let result = findings.into_result();
        tracing::debug!(
            ?kind,
            points = points.len(),
            connections = connections.len(),
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "validated pattern"
        );
        result
    }

    /// Dominant symmetry of `points` at the configured tolerance
    pub fn check_symmetry(&self, points: &[Point]) -> SymmetryType {
        self.analyze_symmetry(points).symmetry
    }

    /// Symmetry classification with its match ratios
    pub fn analyze_symmetry(&self, points: &[Point]) -> SymmetryReport {
        analyze_symmetry(
            points,
            self.config.tolerance,
            self.config.symmetry_match_threshold,
        )
    }

    /// Dot alignment report; `tolerance` defaults to the configured tolerance
    ///
    /// # Errors
    ///
    /// Returns an error if `grid_spacing` is not a positive finite number
    pub fn validate_dot_alignment(
        &self,
        points: &[Point],
        grid_spacing: f64,
        tolerance: Option<f64>,
    ) -> Result<AlignmentReport> {
        validate_dot_alignment(
            points,
            grid_spacing,
            tolerance.unwrap_or(self.config.tolerance),
        )
    }

    /// Line continuity report for connections longer than `max_gap`
    pub fn validate_line_continuity(
        &self,
        points: &[Point],
        connections: &[Connection],
        max_gap: f64,
    ) -> ContinuityReport {
        validate_line_continuity(points, connections, max_gap)
    }

    /// Dot alignment report at the configured spacing and tolerance
    ///
    /// # Errors
    ///
    /// Returns an error if the configured grid spacing is not a positive
    /// finite number
    pub fn check_dot_alignment(&self, points: &[Point]) -> Result<AlignmentReport> {
        self.validate_dot_alignment(points, self.config.grid_spacing, None)
    }

    /// Line continuity report at the configured maximum gap
    pub fn check_line_continuity(
        &self,
        points: &[Point],
        connections: &[Connection],
    ) -> ContinuityReport {
        validate_line_continuity(points, connections, self.config.max_gap)
    }

    fn check_points(&self, points: &[Point], findings: &mut Findings) {
        if points.is_empty() {
            findings.errors.push(ValidationIssue::EmptyPattern);
            return;
        }

        if points.len() > self.config.max_points_advisory {
            findings.warnings.push(ValidationIssue::ExcessivePointCount {
                count: points.len(),
            });
        }

        let mut unique = PointIndex::new(self.config.identity_tolerance);
        let mut duplicates = Vec::new();
        for (index, point) in points.iter().enumerate() {
            if unique.contains_near(point) {
                duplicates.push(index);
            } else {
                unique.insert(*point);
            }
        }

        if !duplicates.is_empty() {
            findings.warnings.push(ValidationIssue::DuplicatePoints {
                indices: duplicates,
            });
        }

        findings.metadata.total_points = Some(points.len());
        findings.metadata.unique_points = Some(unique.len());
    }

    fn check_connections(points: &[Point], connections: &[Connection], findings: &mut Findings) {
        if connections.is_empty() {
            findings.warnings.push(ValidationIssue::NoConnections);
            return;
        }

        let n = points.len();
        let max = n * n.saturating_sub(1) / 2;
        if connections.len() > max {
            findings.errors.push(ValidationIssue::TooManyConnections {
                count: connections.len(),
                max,
            });
            return;
        }

        for (connection, &(a, b)) in connections.iter().enumerate() {
            for index in [a, b] {
                if index >= n {
                    findings
                        .errors
                        .push(ValidationIssue::IndexOutOfRange { connection, index });
                }
            }
            if a == b {
                findings
                    .warnings
                    .push(ValidationIssue::SelfLoop { connection });
            }
        }

        findings.metadata.total_connections = Some(connections.len());
    }

    fn check_geometry(&self, points: &[Point], findings: &mut Findings) {
        if points.len() < 2 {
            return;
        }

        let bbox = points.iter().fold(
            BoundingBox {
                min_x: f64::INFINITY,
                max_x: f64::NEG_INFINITY,
                min_y: f64::INFINITY,
                max_y: f64::NEG_INFINITY,
            },
            |b, p| BoundingBox {
                min_x: b.min_x.min(p.x),
                max_x: b.max_x.max(p.x),
                min_y: b.min_y.min(p.y),
                max_y: b.max_y.max(p.y),
            },
        );

        if bbox.width() == 0.0 || bbox.height() == 0.0 {
            findings.warnings.push(ValidationIssue::DegenerateGeometry);
        }

        let ratio = bbox.aspect_ratio();
        if ratio > self.config.max_aspect_ratio || ratio < self.config.min_aspect_ratio {
            findings
                .warnings
                .push(ValidationIssue::ExtremeAspectRatio { ratio });
        }

        findings.metadata.bounding_box = Some(bbox);
    }

    fn check_connectivity(points: &[Point], connections: &[Connection], findings: &mut Findings) {
        if connections.is_empty() {
            return;
        }

        let adjacency = AdjacencyList::from_connections(points.len(), connections);

        let isolated = adjacency.isolated_points();
        if !isolated.is_empty() {
            findings.warnings.push(ValidationIssue::IsolatedPoints {
                count: isolated.len(),
            });
        }

        if points.len() > 1 {
            let connected = adjacency.is_connected();
            findings.metadata.is_connected = Some(connected);
            if !connected {
                findings.warnings.push(ValidationIssue::Disconnected);
            }
        }

        findings.metadata.degree_stats = Some(adjacency.degree_stats());
    }

    fn check_circular(&self, points: &[Point], findings: &mut Findings) {
        if points.len() < 3 {
            return;
        }
        let Some(center) = Point::centroid(points) else {
            return;
        };

        let radii: Vec<f64> = points.iter().map(|p| p.distance_to(&center)).collect();
        let average_radius = radii.iter().sum::<f64>() / radii.len() as f64;
        let max_deviation = radii
            .iter()
            .map(|r| (r - average_radius).abs())
            .fold(0.0, f64::max);
        let relative_deviation = if average_radius > 0.0 {
            max_deviation / average_radius
        } else {
            0.0
        };

        findings.metadata.circularity = Some(Circularity {
            center_x: center.x,
            center_y: center.y,
            average_radius,
            max_deviation,
            relative_deviation,
        });

        if relative_deviation > self.config.max_circular_deviation {
            findings.warnings.push(ValidationIssue::CircularDeviation {
                relative: relative_deviation,
            });
        }
    }

    fn check_grid(&self, points: &[Point], findings: &mut Findings) {
        if points.len() < 4 {
            return;
        }

        let xs = sorted_unique(points.iter().map(|p| p.x));
        let ys = sorted_unique(points.iter().map(|p| p.y));

        for (axis, values) in [(Axis::X, &xs), (Axis::Y, &ys)] {
            if values.len() > 1
                && variance(&consecutive_gaps(values)) > self.config.max_spacing_variance
            {
                findings
                    .warnings
                    .push(ValidationIssue::IrregularSpacing { axis });
            }
        }

        findings.metadata.grid_info = Some(GridInfo {
            unique_x_coords: xs.len(),
            unique_y_coords: ys.len(),
        });
    }
}

// Distinct values compare exactly
#[allow(clippy::float_cmp)]
fn sorted_unique(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.collect();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup_by(|a, b| a == b);
    sorted
}
