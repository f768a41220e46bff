//! Tests for accumulating symmetry transforms and affine pattern operations

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::spatial::grid::KolamGrid;
    use kolam::spatial::pattern::Pattern;
    use kolam::spatial::point::GridPoint;
    use kolam::spatial::transforms::SymmetryOperation;

    fn grid_with(width: usize, height: usize, patterns: &[(&str, &[(i32, i32)])]) -> KolamGrid {
        let mut grid = KolamGrid::new(width, height).unwrap();
        for (name, coords) in patterns {
            grid.add_pattern(name, coords.iter().copied().map(GridPoint::from));
        }
        grid
    }

    fn pattern_of(coords: &[(i32, i32)]) -> Pattern {
        coords.iter().copied().map(GridPoint::from).collect()
    }

    // Tests horizontal mirroring adds images and is idempotent
    // Verified by mirroring across x = width instead of width - 1
    #[test]
    fn test_double_mirror_is_idempotent() {
        let mut grid = grid_with(5, 5, &[("p", &[(0, 1), (1, 3), (2, 0)])]);

        let once = grid.mirror_horizontal("p").unwrap();
        assert_eq!(once, pattern_of(&[(0, 1), (1, 3), (2, 0), (4, 1), (3, 3)]));

        grid.add_pattern("once", once.iter().copied());
        let twice = grid.mirror_horizontal("once").unwrap();
        assert_eq!(twice, once);
    }

    // Tests vertical mirroring keeps x and is not clipped
    // Verified by clipping mirrored points to the grid
    #[test]
    fn test_mirror_vertical_does_not_clip() {
        let grid = grid_with(3, 3, &[("p", &[(1, 0), (0, 5)])]);

        let mirrored = grid.mirror_vertical("p").unwrap();

        assert_eq!(mirrored, pattern_of(&[(1, 0), (1, 2), (0, 5), (0, -3)]));
    }

    // Tests four accumulated quarter turns close the orbit
    // Verified by replacing the pattern instead of accumulating
    #[test]
    fn test_rotation_closure_on_even_grid() {
        let grid = grid_with(4, 4, &[("p", &[(1, 1)])]);
        let orbit = pattern_of(&[(1, 1), (3, 1), (3, 3), (1, 3)]);

        assert_eq!(grid.rotate("p", 360).unwrap(), orbit);
        assert_eq!(grid.rotate("p", 270).unwrap(), orbit);
        assert_eq!(grid.apply_symmetry("p", SymmetryOperation::Rotate270).unwrap(), orbit);
    }

    // Tests a half turn also contains the quarter-turn image
    // Verified by rotating only the source pattern on each step
    #[test]
    fn test_rotation_accumulates_intermediate_images() {
        let grid = grid_with(4, 4, &[("p", &[(1, 1)])]);

        let half = grid.rotate("p", 180).unwrap();

        assert_eq!(half, pattern_of(&[(1, 1), (3, 1), (3, 3)]));
        assert_eq!(grid.rotate("p", 0).unwrap(), pattern_of(&[(1, 1)]));
    }

    // Tests rotation stops once the orbit is closed
    // Verified by running every requested quarter turn
    #[test]
    fn test_rotation_stops_at_closed_orbit() {
        let grid = grid_with(4, 4, &[("p", &[(1, 1), (1, 2)])]);

        let full = grid.rotate("p", 360).unwrap();
        let many = grid.rotate("p", 90 * 40_000_000).unwrap();

        assert_eq!(full.len(), 8);
        assert_eq!(many, full);
    }

    // Tests rotated images outside the grid are dropped
    // Verified by removing the bounds check on rotated points
    #[test]
    fn test_rotation_clips_to_grid() {
        let grid = grid_with(4, 4, &[("p", &[(0, 1)])]);

        // (0, 1) -> (3, 0) -> (4, 3), which lies outside
        assert_eq!(grid.rotate("p", 180).unwrap(), pattern_of(&[(0, 1), (3, 0)]));
    }

    // Tests odd grids rotate about the fractional centre with truncation
    // Verified by rotating about the integer centre
    #[test]
    fn test_rotation_truncates_on_odd_grid() {
        let grid = grid_with(5, 5, &[("p", &[(1, 2)])]);

        assert_eq!(grid.rotate("p", 90).unwrap(), pattern_of(&[(1, 2), (3, 1)]));
    }

    // Tests rotation rejects angles that are not quarter turns
    // Verified by rounding the angle down to a multiple of 90
    #[test]
    fn test_rotation_rejects_non_quarter_turns() {
        let grid = grid_with(4, 4, &[("p", &[(1, 1)])]);

        assert!(matches!(
            grid.rotate("p", 45),
            Err(KolamError::InvalidParameter { parameter: "degrees", .. })
        ));
        assert!(matches!(
            grid.rotate("missing", 90),
            Err(KolamError::PatternNotFound { .. })
        ));
    }

    // Tests both diagonal reflections and their clipping
    // Verified by swapping the main and anti-diagonal formulas
    #[test]
    fn test_reflect_diagonal() {
        let grid = grid_with(5, 3, &[("p", &[(1, 2), (4, 0)])]);

        let main = grid.reflect_diagonal("p", true).unwrap();
        assert_eq!(main, pattern_of(&[(1, 2), (4, 0), (2, 1)]));

        let anti = grid.apply_symmetry("p", SymmetryOperation::DiagonalAnti).unwrap();
        // (1, 2) -> (2, 1); (4, 0) -> (4, -2) is dropped
        assert_eq!(anti, pattern_of(&[(1, 2), (4, 0), (2, 1)]));

        let grid = grid_with(5, 3, &[("q", &[(1, 0)])]);
        let anti = grid.reflect_diagonal("q", false).unwrap();
        assert_eq!(anti, pattern_of(&[(1, 0), (4, 1)]));
    }

    // Tests composition with default offsets and clipping
    // Verified by applying the first offset to every pattern
    #[test]
    fn test_compose_patterns() {
        let grid = grid_with(4, 4, &[("a", &[(0, 0), (3, 0)]), ("b", &[(1, 1)])]);

        let composed = grid.compose_patterns(&["a", "b"], &[(1, 0)]).unwrap();

        assert_eq!(composed, pattern_of(&[(1, 0), (1, 1)]));
    }

    // Tests composition errors for missing names and extra offsets
    // Verified by skipping unknown names silently
    #[test]
    fn test_compose_patterns_errors() {
        let grid = grid_with(4, 4, &[("a", &[(0, 0)])]);

        assert!(matches!(
            grid.compose_patterns(&["a", "missing"], &[]),
            Err(KolamError::PatternNotFound { name }) if name == "missing"
        ));
        assert!(matches!(
            grid.compose_patterns(&["a"], &[(0, 0), (1, 1)]),
            Err(KolamError::InvalidParameter { parameter: "offsets", .. })
        ));
    }

    // Tests translation drops points that leave the grid
    // Verified by wrapping translated points around the grid
    #[test]
    fn test_translate_pattern() {
        let grid = grid_with(5, 5, &[("p", &[(0, 0), (4, 4)])]);

        let moved = grid.translate_pattern("p", 1, 0).unwrap();

        assert_eq!(moved, pattern_of(&[(1, 0)]));
        assert_eq!(grid.pattern("p").map(Pattern::len), Some(2));
    }

    // Tests block scaling with clipping at the grid edge
    // Verified by scaling coordinates without filling the block
    #[test]
    fn test_scale_pattern() {
        let grid = grid_with(5, 5, &[("p", &[(1, 1)]), ("edge", &[(2, 2)])]);

        let scaled = grid.scale_pattern("p", 2).unwrap();
        assert_eq!(scaled, pattern_of(&[(2, 2), (2, 3), (3, 2), (3, 3)]));

        assert_eq!(grid.scale_pattern("edge", 2).unwrap(), pattern_of(&[(4, 4)]));
        assert_eq!(grid.scale_pattern("p", 1).unwrap(), pattern_of(&[(1, 1)]));
        assert!(grid.scale_pattern("p", 0).is_err());
    }

    // Tests the identity operation copies the stored pattern
    // Verified by returning an empty pattern for None
    #[test]
    fn test_apply_symmetry_none_copies() {
        let grid = grid_with(5, 5, &[("p", &[(0, 1)])]);

        let copy = grid.apply_symmetry("p", SymmetryOperation::None).unwrap();
        assert_eq!(Some(&copy), grid.pattern("p"));

        let mirrored = grid.apply_symmetry("p", SymmetryOperation::Horizontal).unwrap();
        assert_eq!(mirrored, pattern_of(&[(0, 1), (4, 1)]));
        let flipped = grid.apply_symmetry("p", SymmetryOperation::Vertical).unwrap();
        assert_eq!(flipped, pattern_of(&[(0, 1), (0, 3)]));
    }
}
