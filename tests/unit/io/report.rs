//! Tests for plain-text report rendering

#[cfg(test)]
mod tests {
    use kolam::analysis::extract_pattern_features;
    use kolam::generation::PointPattern;
    use kolam::io::report::{DesignReport, GridView};
    use kolam::spatial::grid::FillStatistics;
    use kolam::validation::{SymmetryReport, SymmetryType, ValidationIssue, ValidationResult};
    use ndarray::array;

    fn rotational() -> SymmetryReport {
        SymmetryReport {
            symmetry: SymmetryType::Rotational,
            bilateral_ratio: 0.5,
            rotation_ratios: vec![(90, 1.0)],
            rotation_degrees: Some(90),
        }
    }

    // Tests every section of a full report
    // Verified by omitting the rotation angle
    #[test]
    fn test_full_report() {
        let validation = ValidationResult {
            is_valid: false,
            errors: vec![ValidationIssue::EmptyPattern],
            warnings: vec![ValidationIssue::NoConnections],
            ..ValidationResult::default()
        };
        let grid = PointPattern::dot_grid(2, 3, 1.0);
        let features = extract_pattern_features(&grid.points, &grid.connections).unwrap();
        let fill = FillStatistics {
            total_cells: 441,
            filled_cells: 48,
            empty_cells: 393,
            fill_percentage: 10.88,
        };
        let symmetry = rotational();

        let text = DesignReport {
            title: "squares 3",
            validation: &validation,
            symmetry: &symmetry,
            features: Some(&features),
            fill: Some(&fill),
        }
        .to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "== squares 3 ==",
                "status: invalid (1 errors, 1 warnings)",
                "  error: Pattern must contain at least one point",
                "  warning: Pattern has no connections",
                "symmetry: rotational (90 degrees) [bilateral 0.50]",
                "points: 6, connections: 7, complexity: 0.0280",
                "  x: mean 1.000, range [0.000, 2.000], std 0.816",
                "  y: mean 0.500, range [0.000, 1.000], std 0.500",
                "grid: 48/441 cells filled (10.88%)",
            ]
        );
    }

    // Tests optional sections are left out
    // Verified by printing empty feature lines
    #[test]
    fn test_minimal_report() {
        let validation = ValidationResult {
            is_valid: true,
            ..ValidationResult::default()
        };
        let symmetry = SymmetryReport {
            symmetry: SymmetryType::None,
            bilateral_ratio: 0.0,
            rotation_ratios: Vec::new(),
            rotation_degrees: None,
        };

        let text = DesignReport {
            title: "empty",
            validation: &validation,
            symmetry: &symmetry,
            features: None,
            fill: None,
        }
        .to_string();

        assert_eq!(
            text,
            "== empty ==\nstatus: valid (0 errors, 0 warnings)\nsymmetry: none [bilateral 0.00]\n"
        );
    }

    // Tests the grid view prints the highest row first
    // Verified by printing rows in storage order
    #[test]
    fn test_grid_view() {
        let cells = array![[1, 0, 0], [0, 0, 2]];

        assert_eq!(GridView(&cells).to_string(), "..#\n#..\n");
    }
}
