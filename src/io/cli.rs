//! Command-line interface for generating and validating kolam designs

use crate::analysis::{PatternFeatures, extract_pattern_features};
use crate::generation::{Motif, PointPattern};
use crate::io::configuration::{
    DEFAULT_GRID_SIZE, DEFAULT_RING_COUNT, DEFAULT_TOLERANCE, DESIGN_PATTERN_NAME,
    HISTORY_CAPACITY,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::history::{DesignHistory, HistoryEntry};
use crate::io::progress::SweepProgress;
use crate::io::report::{DesignReport, GridView};
use crate::spatial::grid::FillStatistics;
use crate::spatial::{KolamGrid, SymmetryOperation};
use crate::validation::{PatternKind, PatternValidator, SymmetryReport, ValidationResult};
use clap::{Parser, ValueEnum};

/// Design source selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Generator {
    /// Concentric square outlines around the grid centre
    Squares,
    /// Concentric midpoint circles around the grid centre
    Circles,
    /// Diamond motif
    Diamond,
    /// Banded disc motif
    Symmetrical,
    /// Ring with inner dots
    Circular,
    /// Eight-armed star motif
    Star,
    /// Connected rectangular dot grid
    DotGrid,
    /// Centre with spokes and a rim
    StarBurst,
    /// Connected concentric point rings
    Rings,
}

impl Generator {
    /// Name as accepted on the command line
    pub fn label(self) -> String {
        self.to_possible_value()
            .map_or_else(|| format!("{self:?}"), |v| v.get_name().to_string())
    }

    /// Whether the design is built on a grid and can take symmetry operations
    pub const fn uses_grid(self) -> bool {
        !matches!(self, Self::DotGrid | Self::StarBurst | Self::Rings)
    }

    /// Whether the ring count drives the design; the others depend on size only
    pub const fn uses_count(self) -> bool {
        matches!(
            self,
            Self::Squares | Self::Circles | Self::StarBurst | Self::Rings
        )
    }

    const fn motif(self) -> Option<Motif> {
        match self {
            Self::Diamond => Some(Motif::Diamond),
            Self::Symmetrical => Some(Motif::Symmetrical),
            Self::Circular => Some(Motif::Circular),
            Self::Star => Some(Motif::Star),
            _ => None,
        }
    }
}

#[derive(Parser)]
#[command(name = "kolam")]
#[command(
    author,
    version,
    about = "Generate, validate and classify symmetric dot-grid kolam designs"
)]
/// Command-line arguments for the design tool
// Independent display switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Design to generate
    #[arg(short, long, value_enum, default_value_t = Generator::Squares)]
    pub generator: Generator,

    /// Grid width and height, motif size, or dots per ring
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Ring or spoke count
    #[arg(short, long, default_value_t = DEFAULT_RING_COUNT)]
    pub count: usize,

    /// Symmetry operation applied to grid designs
    #[arg(short = 'y', long, value_enum, default_value_t = SymmetryOperation::None)]
    pub symmetry: SymmetryOperation,

    /// Kind-specific validation checks to run
    #[arg(short, long, value_enum, default_value_t = PatternKind::General)]
    pub kind: PatternKind,

    /// Matching tolerance for symmetry detection
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Generate every count from 1 up to --count
    #[arg(long)]
    pub sweep: bool,

    /// Print the drawn grid after each report
    #[arg(long)]
    pub show_grid: bool,

    /// Suppress reports and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if reports and progress should be displayed
    pub const fn should_show_output(&self) -> bool {
        !self.quiet
    }

    /// Counts to generate, in order
    pub fn counts(&self) -> Vec<usize> {
        if self.sweep {
            (1..=self.count).collect()
        } else {
            vec![self.count]
        }
    }
}

/// A generated design: the renderer contract plus the grid it was drawn on
#[derive(Debug, Clone)]
pub struct Design {
    /// Points and connections handed to the validator
    pub pattern: PointPattern,
    /// Grid holding the drawn design, for grid-based generators
    pub grid: Option<KolamGrid>,
}

impl Design {
    /// Build a design from a generator and its parameters
    ///
    /// Grid designs are registered under [`DESIGN_PATTERN_NAME`], transformed
    /// by `operation`, drawn with value 1 and connected by grid adjacency.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid grid or motif sizes, or a symmetry
    /// operation on a generator without a grid
    pub fn generate(
        generator: Generator,
        size: usize,
        count: usize,
        operation: SymmetryOperation,
    ) -> Result<Self> {
        if !generator.uses_grid() {
            if operation != SymmetryOperation::None {
                return Err(invalid_parameter(
                    "symmetry",
                    &format!("{operation:?}"),
                    &format!("{} designs have no grid to transform", generator.label()),
                ));
            }
            let pattern = match generator {
                Generator::DotGrid => PointPattern::dot_grid(size, size, 1.0),
                Generator::StarBurst => PointPattern::star(count, size as f64 / 2.0),
                _ => PointPattern::concentric_rings(count, 1.0, size),
            };
            return Ok(Self {
                pattern,
                grid: None,
            });
        }

        let mut grid = KolamGrid::new(size, size)?;
        match generator.motif() {
            Some(motif) => grid.add_pattern(DESIGN_PATTERN_NAME, motif.generate(size)?),
            None if generator == Generator::Circles => {
                grid.create_concentric_circles(count, DESIGN_PATTERN_NAME);
            }
            None => grid.create_concentric_squares(count, DESIGN_PATTERN_NAME),
        }

        let transformed = grid.apply_symmetry(DESIGN_PATTERN_NAME, operation)?;
        grid.add_pattern(DESIGN_PATTERN_NAME, transformed.iter().copied());
        grid.draw_pattern(DESIGN_PATTERN_NAME, 1)?;

        Ok(Self {
            pattern: PointPattern::from_grid_pattern(&transformed),
            grid: Some(grid),
        })
    }
}

/// Validation, symmetry and feature results for one design
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Validator findings
    pub validation: ValidationResult,
    /// Symmetry classification
    pub symmetry: SymmetryReport,
    /// Features, absent for an empty design
    pub features: Option<PatternFeatures>,
    /// Grid occupancy for grid designs
    pub fill: Option<FillStatistics>,
}

/// Generates designs according to CLI arguments and reports on them
pub struct DesignRunner {
    cli: Cli,
    validator: PatternValidator,
    history: DesignHistory,
}

impl DesignRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let validator = PatternValidator::with_tolerance(cli.tolerance);

        Self {
            cli,
            validator,
            history: DesignHistory::new(HISTORY_CAPACITY),
        }
    }

    /// Designs generated so far
    pub const fn history(&self) -> &DesignHistory {
        &self.history
    }

    /// Generate and report every requested design
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not positive or a design cannot
    /// be generated
    pub fn process(&mut self) -> Result<()> {
        if !self.cli.tolerance.is_finite() || self.cli.tolerance <= 0.0 {
            return Err(invalid_parameter(
                "tolerance",
                &self.cli.tolerance,
                &"must be a positive finite number",
            ));
        }

        let counts = self.cli.counts();
        let label = self.cli.generator.label();
        let progress = if self.cli.sweep && self.cli.should_show_output() {
            SweepProgress::new(counts.len(), &label)
        } else {
            SweepProgress::hidden(counts.len())
        };

        for count in counts {
            progress.start_step(count);
            self.process_count(count)?;
            progress.complete_step();
        }

        progress.finish();
        tracing::info!(designs = self.history.len(), "finished");
        Ok(())
    }

    /// Evaluate a design with this runner's validator
    pub fn evaluate(&self, design: &Design) -> Evaluation {
        let PointPattern {
            points,
            connections,
        } = &design.pattern;

        Evaluation {
            validation: self
                .validator
                .validate_pattern(points, connections, self.cli.kind),
            symmetry: self.validator.analyze_symmetry(points),
            features: extract_pattern_features(points, connections),
            fill: design.grid.as_ref().map(KolamGrid::fill_statistics),
        }
    }

    // Allow print for the report, which is the program output
    #[allow(clippy::print_stdout)]
    fn process_count(&mut self, count: usize) -> Result<()> {
        let generator = self.cli.generator;
        let design = Design::generate(generator, self.cli.size, count, self.cli.symmetry)?;
        let evaluation = self.evaluate(&design);

        let parameter = if generator.uses_count() {
            count
        } else {
            self.cli.size
        };
        tracing::info!(
            generator = %generator.label(),
            parameter,
            points = design.pattern.points.len(),
            valid = evaluation.validation.is_valid,
            symmetry = %evaluation.symmetry.symmetry,
            "generated design"
        );

        self.history.record(HistoryEntry {
            generator: generator.label(),
            parameter,
            operation: self.cli.symmetry,
            point_count: design.pattern.points.len(),
            connection_count: design.pattern.connections.len(),
            is_valid: evaluation.validation.is_valid,
            symmetry: evaluation.symmetry.symmetry,
            complexity: evaluation.features.map_or(0.0, |f| f.complexity),
        });

        if self.cli.should_show_output() {
            let title = format!("{} {parameter}", generator.label());
            let report = DesignReport {
                title: &title,
                validation: &evaluation.validation,
                symmetry: &evaluation.symmetry,
                features: evaluation.features.as_ref(),
                fill: evaluation.fill.as_ref(),
            };
            println!("{report}");

            if let Some(grid) = design.grid.as_ref().filter(|_| self.cli.show_grid) {
                println!("{}", GridView(grid.cells()));
            }
        }

        Ok(())
    }
}
