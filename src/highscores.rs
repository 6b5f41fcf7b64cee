//! Session score board
//!
//! Tracks the best runs of the current session, in memory only. Nothing
//! is written to disk; the board dies with the process.

use serde::{Deserialize, Serialize};

/// Maximum number of runs to keep
pub const MAX_ENTRIES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEntry {
    /// Obstacles cleared
    pub score: u32,
    /// How long the run lasted (seconds)
    pub duration: f32,
}

/// Best runs of the session, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreBoard {
    pub entries: Vec<RunEntry>,
}

impl ScoreBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the board
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a finished run if it qualifies
    ///
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_run(&mut self, score: u32, duration: f32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = RunEntry { score, duration };
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_never_qualifies() {
        let board = ScoreBoard::new();
        assert!(!board.qualifies(0));
        assert!(board.qualifies(1));
    }

    #[test]
    fn test_runs_rank_by_score() {
        let mut board = ScoreBoard::new();
        assert_eq!(board.add_run(5, 12.0), Some(1));
        assert_eq!(board.add_run(9, 20.0), Some(1));
        assert_eq!(board.add_run(7, 15.0), Some(2));
        assert_eq!(board.top_score(), Some(9));

        let scores: Vec<u32> = board.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![9, 7, 5]);
    }

    #[test]
    fn test_board_is_truncated() {
        let mut board = ScoreBoard::new();
        for i in 1..=(MAX_ENTRIES as u32 + 5) {
            board.add_run(i, 10.0);
        }
        assert_eq!(board.entries.len(), MAX_ENTRIES);
        // Lowest surviving score is the total minus the board size
        assert_eq!(board.entries.last().unwrap().score, 6);

        // A score below the floor no longer qualifies
        assert!(!board.qualifies(5));
        assert_eq!(board.add_run(5, 10.0), None);
    }
}
