//! Tests for the validation pipeline and its accumulated findings

#[cfg(test)]
mod tests {
    use kolam::generation::geometric::PointPattern;
    use kolam::io::configuration::ValidatorConfig;
    use kolam::spatial::point::Point;
    use kolam::validation::result::{Axis, PatternKind, SymmetryType, ValidationIssue};
    use kolam::validation::validator::PatternValidator;

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    // Tests a well-formed triangle produces no findings
    // Verified by flagging every pattern as degenerate
    #[test]
    fn test_valid_triangle() {
        let validator = PatternValidator::default();
        let triangle = points(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]);

        let result =
            validator.validate_pattern(&triangle, &[(0, 1), (1, 2), (2, 0)], PatternKind::General);

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.metadata.total_points, Some(3));
        assert_eq!(result.metadata.unique_points, Some(3));
        assert_eq!(result.metadata.total_connections, Some(3));
        assert_eq!(result.metadata.is_connected, Some(true));
        let degrees = result.metadata.degree_stats.unwrap();
        assert_eq!((degrees.min, degrees.max), (2, 2));
        assert!(result.metadata.circularity.is_none());
    }

    // Tests an out-of-range index is an error at its connection position
    // Verified by recording out-of-range indices as warnings
    #[test]
    fn test_out_of_range_index_is_error() {
        let validator = PatternValidator::default();
        let triangle = points(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]);

        let result = validator.validate_pattern(&triangle, &[(0, 1), (1, 5)], PatternKind::General);

        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![ValidationIssue::IndexOutOfRange {
                connection: 1,
                index: 5
            }]
        );
        // Validation keeps going after the error
        assert!(result.warnings.contains(&ValidationIssue::IsolatedPoints { count: 1 }));
        assert!(result.warnings.contains(&ValidationIssue::Disconnected));
    }

    // Tests an empty pattern is an error and later checks still run
    // Verified by returning early on the empty pattern error
    #[test]
    fn test_empty_pattern() {
        let result = PatternValidator::default().validate_pattern(&[], &[], PatternKind::Grid);

        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![ValidationIssue::EmptyPattern]);
        assert_eq!(result.warnings, vec![ValidationIssue::NoConnections]);
        assert!(result.metadata.total_points.is_none());
        assert!(result.metadata.bounding_box.is_none());
    }

    // Tests too many connections ends the connection check
    // Verified by continuing with per-connection checks
    #[test]
    fn test_too_many_connections() {
        let pair = points(&[(0.0, 0.0), (1.0, 1.0)]);

        let result = PatternValidator::default().validate_pattern(
            &pair,
            &[(0, 1), (1, 0), (0, 0)],
            PatternKind::General,
        );

        assert_eq!(
            result.errors,
            vec![ValidationIssue::TooManyConnections { count: 3, max: 1 }]
        );
        assert!(!result.warnings.contains(&ValidationIssue::SelfLoop { connection: 2 }));
        assert!(result.metadata.total_connections.is_none());
        // Connectivity still runs on the supplied connections
        assert_eq!(result.metadata.is_connected, Some(true));
    }

    // Tests duplicates and self-loops are warnings
    // Verified by recording duplicates as errors
    #[test]
    fn test_duplicates_and_self_loops() {
        let square = points(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (0.0, 1e-12), (1.0, 0.0)]);

        let result = PatternValidator::default().validate_pattern(
            &square,
            &[(0, 2), (2, 2), (2, 4), (0, 4)],
            PatternKind::General,
        );

        assert!(result.is_valid);
        assert!(result.warnings.contains(&ValidationIssue::DuplicatePoints {
            indices: vec![1, 3]
        }));
        assert!(result.warnings.contains(&ValidationIssue::SelfLoop { connection: 1 }));
        assert_eq!(result.metadata.unique_points, Some(3));
    }

    // Tests collinear points are degenerate with an extreme aspect ratio
    // Verified by treating zero height as ratio zero
    #[test]
    fn test_degenerate_geometry() {
        let line = points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);

        let result =
            PatternValidator::default().validate_pattern(&line, &[(0, 1), (1, 2)], PatternKind::General);

        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings.contains(&ValidationIssue::DegenerateGeometry));
        assert!(matches!(
            result.warnings.get(1),
            Some(ValidationIssue::ExtremeAspectRatio { ratio }) if ratio.is_infinite()
        ));
    }

    // Tests circular checks measure radius deviation
    // Verified by dividing by the maximum radius instead of the mean
    #[test]
    fn test_circular_kind() {
        let validator = PatternValidator::default();
        let ring = [(0, 1), (1, 2), (2, 3), (3, 0)];

        let round = points(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)]);
        let result = validator.validate_pattern(&round, &ring, PatternKind::Circular);
        let circularity = result.metadata.circularity.unwrap();
        assert!((circularity.average_radius - 1.0).abs() < 1e-12);
        assert!(circularity.relative_deviation.abs() < 1e-12);
        assert!(result.warnings.is_empty());

        let oval = points(&[(2.0, 0.0), (0.0, 1.0), (-2.0, 0.0), (0.0, -1.0)]);
        let result = validator.validate_pattern(&oval, &ring, PatternKind::Circular);
        let circularity = result.metadata.circularity.unwrap();
        assert!((circularity.relative_deviation - 1.0 / 3.0).abs() < 1e-12);
        assert!(matches!(
            result.warnings.last(),
            Some(ValidationIssue::CircularDeviation { .. })
        ));
    }

    // Tests grid checks flag uneven spacing per axis
    // Verified by checking only the x axis
    #[test]
    fn test_grid_kind() {
        let validator = PatternValidator::default();

        let regular = PointPattern::dot_grid(3, 3, 1.0);
        let result =
            validator.validate_pattern(&regular.points, &regular.connections, PatternKind::Grid);
        assert!(result.warnings.is_empty());
        let info = result.metadata.grid_info.unwrap();
        assert_eq!((info.unique_x_coords, info.unique_y_coords), (3, 3));

        let uneven = points(&[(0.0, 0.0), (1.0, 0.0), (3.0, 0.0), (0.0, 1.0), (1.0, 1.0), (3.0, 1.0)]);
        let result =
            validator.validate_pattern(&uneven, &[(0, 1), (1, 2), (0, 3), (3, 4), (4, 5)], PatternKind::Grid);
        assert_eq!(
            result.warnings,
            vec![ValidationIssue::IrregularSpacing { axis: Axis::X }]
        );
    }

    // Tests kind-specific checks skip small patterns
    // Verified by running the circular check on two points
    #[test]
    fn test_kind_checks_need_enough_points() {
        let validator = PatternValidator::default();
        let pair = points(&[(0.0, 0.0), (1.0, 1.0)]);

        let circular = validator.validate_pattern(&pair, &[(0, 1)], PatternKind::Circular);
        let grid = validator.validate_pattern(&pair, &[(0, 1)], PatternKind::Grid);

        assert!(circular.metadata.circularity.is_none());
        assert!(grid.metadata.grid_info.is_none());
    }

    // Tests configured thresholds replace the defaults
    // Verified by ignoring the configured point advisory
    #[test]
    fn test_custom_configuration() {
        let config = ValidatorConfig {
            max_points_advisory: 2,
            ..ValidatorConfig::default()
        };
        let validator = PatternValidator::new(config);
        let triangle = points(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]);

        let result =
            validator.validate_pattern(&triangle, &[(0, 1), (1, 2), (2, 0)], PatternKind::General);

        assert_eq!(
            result.warnings,
            vec![ValidationIssue::ExcessivePointCount { count: 3 }]
        );
        assert_eq!(validator.config().max_points_advisory, 2);
    }

    // Tests the symmetry and report wrappers use the configured tolerance
    // Verified by passing a fixed tolerance to the symmetry check
    #[test]
    fn test_wrappers_use_configured_tolerance() {
        let loose = PatternValidator::with_tolerance(0.1);
        let strict = PatternValidator::default();
        let cross = points(&[(1.0, 0.0), (0.0, 1.02), (-1.0, 0.0), (0.0, -1.0)]);

        assert_eq!(strict.check_symmetry(&cross), SymmetryType::None);
        assert_eq!(loose.check_symmetry(&cross), SymmetryType::Rotational);
        assert_eq!(loose.analyze_symmetry(&cross).rotation_degrees, Some(90));

        let near = points(&[(1.05, 0.0)]);
        assert_eq!(loose.validate_dot_alignment(&near, 1.0, None).unwrap().aligned, 1);
        assert_eq!(strict.validate_dot_alignment(&near, 1.0, None).unwrap().aligned, 0);
        assert_eq!(strict.validate_dot_alignment(&near, 1.0, Some(0.1)).unwrap().aligned, 1);

        let report = strict.validate_line_continuity(&cross, &[(0, 2)], 1.0);
        assert_eq!(report.discontinuous, 1);
    }

    // Tests the configured spacing and gap drive the default checks
    // Verified by ignoring the configured maximum gap
    #[test]
    fn test_configured_alignment_and_continuity() {
        let strict = PatternValidator::default();
        let dots = points(&[(0.0, 0.0), (1.0, 0.0), (1.5, 0.0)]);
        let connections = [(0, 1), (1, 2)];

        let alignment = strict.check_dot_alignment(&dots).unwrap();
        assert_eq!((alignment.aligned, alignment.misaligned), (2, 1));
        assert_eq!(strict.check_line_continuity(&dots, &connections).discontinuous, 2);

        let config = ValidatorConfig {
            grid_spacing: 0.5,
            max_gap: 1.0,
            ..ValidatorConfig::default()
        };
        let relaxed = PatternValidator::new(config);
        assert_eq!(relaxed.check_dot_alignment(&dots).unwrap().misaligned, 0);
        assert_eq!(relaxed.check_line_continuity(&dots, &connections).discontinuous, 0);

        let broken = PatternValidator::new(ValidatorConfig {
            grid_spacing: 0.0,
            ..ValidatorConfig::default()
        });
        assert!(broken.check_dot_alignment(&dots).is_err());
    }
}
