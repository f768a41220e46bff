//! Tests for the bounded design history

#[cfg(test)]
mod tests {
    use kolam::io::history::{DesignHistory, HistoryEntry};
    use kolam::spatial::SymmetryOperation;
    use kolam::validation::SymmetryType;

    fn entry(parameter: usize) -> HistoryEntry {
        HistoryEntry {
            generator: "squares".to_string(),
            parameter,
            operation: SymmetryOperation::None,
            point_count: parameter * 8,
            connection_count: parameter * 8,
            is_valid: true,
            symmetry: SymmetryType::Rotational,
            complexity: 0.5,
        }
    }

    // Tests the oldest entries are evicted at capacity
    // Verified by evicting the newest entry
    #[test]
    fn test_eviction() {
        let mut history = DesignHistory::new(3);

        for parameter in 1..=5 {
            history.record(entry(parameter));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.capacity(), 3);
        let kept: Vec<usize> = history.iter().map(|e| e.parameter).collect();
        assert_eq!(kept, vec![3, 4, 5]);
        assert_eq!(history.latest().map(|e| e.parameter), Some(5));
    }

    // Tests a zero capacity keeps nothing
    // Verified by keeping one entry at capacity zero
    #[test]
    fn test_zero_capacity() {
        let mut history = DesignHistory::new(0);

        history.record(entry(1));

        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    // Tests clearing keeps the capacity
    // Verified by resetting the capacity on clear
    #[test]
    fn test_clear() {
        let mut history = DesignHistory::new(2);
        history.record(entry(1));

        history.clear();

        assert!(history.is_empty());
        history.record(entry(2));
        history.record(entry(3));
        assert_eq!(history.len(), 2);
    }
}
