//! Validation thresholds, grid limits and runtime configuration defaults

// Point matching
/// Tolerance for symmetry and alignment matching
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
/// Distance below which two points are the same point
pub const IDENTITY_TOLERANCE: f64 = 1e-9;

// Validation thresholds
/// Point count above which a performance advisory is raised
pub const MAX_POINTS_ADVISORY: usize = 10_000;
/// Largest width/height ratio before a pattern counts as elongated
pub const MAX_ASPECT_RATIO: f64 = 10.0;
/// Smallest width/height ratio before a pattern counts as elongated
pub const MIN_ASPECT_RATIO: f64 = 0.1;
/// Relative radius deviation tolerated by circular patterns
pub const MAX_CIRCULAR_DEVIATION: f64 = 0.1;
/// Variance of coordinate gaps tolerated by grid patterns
pub const MAX_SPACING_VARIANCE: f64 = 0.01;
/// Fraction of points that must match for a symmetry to be reported
pub const SYMMETRY_MATCH_THRESHOLD: f64 = 0.9;
/// Rotation angles tried by the classifier, in order
pub const CANDIDATE_ROTATIONS_DEGREES: [u32; 3] = [90, 120, 180];

// Grid engine
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Traversal neighbour order: north, east, south, west
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

// Motif generation
/// Smallest motif grid size
pub const MIN_MOTIF_SIZE: usize = 5;
/// Largest motif grid size
pub const MAX_MOTIF_SIZE: usize = 50;

// Default values for configurable parameters
/// Default grid width and height
pub const DEFAULT_GRID_SIZE: usize = 21;
/// Default number of concentric rings
pub const DEFAULT_RING_COUNT: usize = 3;
/// Default spacing for dot alignment checks
pub const DEFAULT_GRID_SPACING: f64 = 1.0;
/// Default maximum gap for line continuity checks
pub const DEFAULT_MAX_GAP: f64 = 0.1;
/// Name under which the runner registers its design
pub const DESIGN_PATTERN_NAME: &str = "design";
/// Number of entries retained by the design history
pub const HISTORY_CAPACITY: usize = 32;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Tunable thresholds for [`crate::validation::PatternValidator`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConfig {
    /// Matching tolerance for symmetry and alignment checks
    pub tolerance: f64,
    /// Distance below which points are treated as duplicates
    pub identity_tolerance: f64,
    /// Point count above which a performance warning is raised
    pub max_points_advisory: usize,
    /// Upper aspect ratio bound
    pub max_aspect_ratio: f64,
    /// Lower aspect ratio bound
    pub min_aspect_ratio: f64,
    /// Relative radius deviation allowed for circular patterns
    pub max_circular_deviation: f64,
    /// Gap variance allowed for grid patterns
    pub max_spacing_variance: f64,
    /// Match fraction required by the symmetry classifier
    pub symmetry_match_threshold: f64,
    /// Dot spacing assumed by alignment checks
    pub grid_spacing: f64,
    /// Longest connection accepted by continuity checks
    pub max_gap: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            identity_tolerance: IDENTITY_TOLERANCE,
            max_points_advisory: MAX_POINTS_ADVISORY,
            max_aspect_ratio: MAX_ASPECT_RATIO,
            min_aspect_ratio: MIN_ASPECT_RATIO,
            max_circular_deviation: MAX_CIRCULAR_DEVIATION,
            max_spacing_variance: MAX_SPACING_VARIANCE,
            symmetry_match_threshold: SYMMETRY_MATCH_THRESHOLD,
            grid_spacing: DEFAULT_GRID_SPACING,
            max_gap: DEFAULT_MAX_GAP,
        }
    }
}

impl ValidatorConfig {
    /// Copy of this configuration with a different matching tolerance
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
