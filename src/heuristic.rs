use crate::common::Position;

/// Manhattan distance: admissible and consistent on a 4-way unit-cost grid.
pub fn manhattan(a: Position, b: Position) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan() {
        let a = Position::new(1, 4);
        let b = Position::new(3, 0);
        assert_eq!(manhattan(a, b), 6);
        assert_eq!(manhattan(b, a), 6);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn test_manhattan_consistent_across_one_step() {
        let goal = Position::new(4, 4);
        for row in 0..5 {
            for col in 0..5 {
                let p = Position::new(row, col);
                for q in [Position::new(row + 1, col), Position::new(row, col + 1)] {
                    // h(p) <= 1 + h(q) for every unit move.
                    assert!(manhattan(p, goal) <= 1 + manhattan(q, goal));
                    assert!(manhattan(q, goal) <= 1 + manhattan(p, goal));
                }
            }
        }
    }
}
