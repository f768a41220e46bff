//! Validation findings, metadata and classification types

use std::fmt;

/// Which kind-specific checks the validator runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PatternKind {
    /// Structural, geometric and connectivity checks only
    #[default]
    General,
    /// Also measure deviation from a circle around the centroid
    Circular,
    /// Also measure regularity of coordinate spacing
    Grid,
}

/// Dominant symmetry of a point set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryType {
    /// No symmetry reached the match threshold
    None,
    /// Mirror symmetry across the vertical line through the centroid
    Bilateral,
    /// Rotational symmetry about the centroid
    Rotational,
}

impl fmt::Display for SymmetryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "none",
            Self::Bilateral => "bilateral",
            Self::Rotational => "rotational",
        };
        f.write_str(label)
    }
}

/// Coordinate axis named by spacing findings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal coordinates
    X,
    /// Vertical coordinates
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "X",
            Self::Y => "Y",
        })
    }
}

/// A single validation finding
///
/// Whether a finding is an error or a warning is decided by the list it is
/// recorded in; only errors affect validity.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    /// The point list is empty
    EmptyPattern,
    /// More points than the performance advisory allows
    ExcessivePointCount {
        /// Number of points supplied
        count: usize,
    },
    /// Points coinciding with an earlier point
    DuplicatePoints {
        /// Positions of the repeated points
        indices: Vec<usize>,
    },
    /// More connections than a simple graph on the points can have
    TooManyConnections {
        /// Number of connections supplied
        count: usize,
        /// Largest possible count, `n * (n - 1) / 2`
        max: usize,
    },
    /// A connection endpoint is not a valid point index
    IndexOutOfRange {
        /// Position of the connection
        connection: usize,
        /// Offending point index
        index: usize,
    },
    /// A connection joins a point to itself
    SelfLoop {
        /// Position of the connection
        connection: usize,
    },
    /// No connections were supplied
    NoConnections,
    /// All points lie on a horizontal or vertical line
    DegenerateGeometry,
    /// Width/height ratio outside the accepted band
    ExtremeAspectRatio {
        /// Width divided by height, infinite for zero height
        ratio: f64,
    },
    /// Points without any in-range connection
    IsolatedPoints {
        /// Number of isolated points
        count: usize,
    },
    /// Not every point is reachable from the first one
    Disconnected,
    /// Radii vary too much for a circular pattern
    CircularDeviation {
        /// Largest radius deviation relative to the mean radius
        relative: f64,
    },
    /// Gaps between coordinate values vary too much for a grid pattern
    IrregularSpacing {
        /// Axis with irregular gaps
        axis: Axis,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPattern => write!(f, "Pattern must contain at least one point"),
            Self::ExcessivePointCount { count } => {
                write!(f, "Pattern contains {count} points, may affect performance")
            }
            Self::DuplicatePoints { indices } => write!(
                f,
                "Found {} duplicate point(s) at indices: {indices:?}",
                indices.len()
            ),
            Self::TooManyConnections { count, max } => write!(
                f,
                "Number of connections ({count}) exceeds maximum possible ({max})"
            ),
            Self::IndexOutOfRange { connection, index } => write!(
                f,
                "Connection {connection}: point index {index} out of range"
            ),
            Self::SelfLoop { connection } => {
                write!(f, "Connection {connection}: self-loop detected")
            }
            Self::NoConnections => write!(f, "Pattern has no connections"),
            Self::DegenerateGeometry => {
                write!(f, "Pattern is degenerate (all points on a line)")
            }
            Self::ExtremeAspectRatio { ratio } => {
                write!(f, "Pattern has extreme aspect ratio: {ratio:.2}")
            }
            Self::IsolatedPoints { count } => write!(f, "Found {count} isolated point(s)"),
            Self::Disconnected => write!(f, "Pattern is not fully connected"),
            Self::CircularDeviation { relative } => write!(
                f,
                "Pattern deviates from circular shape: {:.2}%",
                relative * 100.0
            ),
            Self::IrregularSpacing { axis } => {
                write!(f, "{axis}-coordinates are not evenly spaced")
            }
        }
    }
}

/// Axis-aligned extent of a point set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Smallest x coordinate
    pub min_x: f64,
    /// Largest x coordinate
    pub max_x: f64,
    /// Smallest y coordinate
    pub min_y: f64,
    /// Largest y coordinate
    pub max_y: f64,
}

impl BoundingBox {
    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Width over height, infinite when the height is zero
    pub fn aspect_ratio(&self) -> f64 {
        let height = self.height();
        if height > 0.0 {
            self.width() / height
        } else {
            f64::INFINITY
        }
    }
}

/// Vertex degree summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeStats {
    /// Smallest degree
    pub min: usize,
    /// Largest degree
    pub max: usize,
    /// Mean degree
    pub mean: f64,
}

/// Radius measurements of a circular pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circularity {
    /// Centroid x coordinate
    pub center_x: f64,
    /// Centroid y coordinate
    pub center_y: f64,
    /// Mean distance to the centroid
    pub average_radius: f64,
    /// Largest absolute difference from the mean radius
    pub max_deviation: f64,
    /// `max_deviation / average_radius`, zero for a zero radius
    pub relative_deviation: f64,
}

/// Coordinate counts of a grid pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridInfo {
    /// Distinct x values
    pub unique_x_coords: usize,
    /// Distinct y values
    pub unique_y_coords: usize,
}

/// Measurements gathered by whichever checks ran
///
/// A field stays `None` when its check was skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationMetadata {
    /// Number of points supplied
    pub total_points: Option<usize>,
    /// Number of points after collapsing duplicates
    pub unique_points: Option<usize>,
    /// Number of connections supplied
    pub total_connections: Option<usize>,
    /// Extent of the points
    pub bounding_box: Option<BoundingBox>,
    /// Whether every point is reachable from the first
    pub is_connected: Option<bool>,
    /// Vertex degree summary
    pub degree_stats: Option<DegreeStats>,
    /// Circular pattern measurements
    pub circularity: Option<Circularity>,
    /// Grid pattern measurements
    pub grid_info: Option<GridInfo>,
}

/// Outcome of one validation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// True exactly when no errors were recorded
    pub is_valid: bool,
    /// Findings that make the pattern invalid, in discovery order
    pub errors: Vec<ValidationIssue>,
    /// Advisory findings, in discovery order
    pub warnings: Vec<ValidationIssue>,
    /// Measurements from the checks that ran
    pub metadata: ValidationMetadata,
}

impl ValidationResult {
    /// Error messages in discovery order
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Warning messages in discovery order
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}
