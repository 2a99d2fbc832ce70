//! Score sentinels for the static evaluator

/// Score constants shared by the evaluator and the search.
pub struct Score;

impl Score {
    /// The engine side already holds a k-run
    pub const MAX_WIN: i32 = 1_000_000;
    /// The opponent already holds a k-run
    pub const MIN_WIN: i32 = -1_000_000;

    /// Whether a score is one of the two win sentinels
    #[inline]
    pub fn is_terminal(score: i32) -> bool {
        score == Self::MAX_WIN || score == Self::MIN_WIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_symmetric() {
        assert_eq!(Score::MAX_WIN, -Score::MIN_WIN);
    }

    #[test]
    fn test_sentinels_exceed_any_heuristic() {
        // The heuristic counts at most one window per cell and direction.
        let max_heuristic = 4 * 255 * 255;
        assert!(Score::MAX_WIN > max_heuristic);
    }

    #[test]
    fn test_is_terminal() {
        assert!(Score::is_terminal(Score::MAX_WIN));
        assert!(Score::is_terminal(Score::MIN_WIN));
        assert!(!Score::is_terminal(0));
        assert!(!Score::is_terminal(Score::MAX_WIN - 1));
    }
}
