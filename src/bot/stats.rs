//! Bot search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected while picking one move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Legal root moves considered.
    pub candidates: u32,

    /// States produced by applying a move during search.
    pub nodes_expanded: u32,

    /// Heuristic evaluations performed.
    pub positions_evaluated: u32,

    /// Total time spent choosing (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        let mut stats = SearchStats {
            candidates: 10,
            nodes_expanded: 100,
            positions_evaluated: 90,
            time_us: 5,
        };
        stats.reset();
        assert_eq!(stats, SearchStats::default());
    }
}
