//! High-score persistence.
//!
//! Scores live in a single plain-text file holding one decimal number.
//! Reads never fail: a missing or unparseable file counts as zero.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;

/// Default score file, resolved against the working directory.
pub const HIGH_SCORE_FILE: &str = "scores.txt";

pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored high score. Missing file or garbage content reads
    /// as zero so a fresh install starts clean.
    pub fn read_high_score(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Persist the larger of `candidate` and `previous`, returning the
    /// value written.
    pub fn write_high_score(&self, candidate: u32, previous: u32) -> Result<u32> {
        let best = candidate.max(previous);
        fs::write(&self.path, best.to_string())?;
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_score_path(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("blockfall_scores_{tag}_{nanos}.txt"))
    }

    #[test]
    fn test_missing_file_reads_as_zero() {
        let store = ScoreStore::new(unique_score_path("missing"));
        assert_eq!(store.read_high_score(), 0);
    }

    #[test]
    fn test_garbage_content_reads_as_zero() {
        let path = unique_score_path("garbage");
        fs::write(&path, "not a number").unwrap();
        let store = ScoreStore::new(&path);
        assert_eq!(store.read_high_score(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let path = unique_score_path("whitespace");
        fs::write(&path, " 1230 \n").unwrap();
        let store = ScoreStore::new(&path);
        assert_eq!(store.read_high_score(), 1230);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_keeps_the_larger_score() {
        let path = unique_score_path("larger");
        let store = ScoreStore::new(&path);

        assert_eq!(store.write_high_score(40, 90).unwrap(), 90);
        assert_eq!(store.read_high_score(), 90);

        assert_eq!(store.write_high_score(120, 90).unwrap(), 120);
        assert_eq!(store.read_high_score(), 120);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let path = unique_score_path("round_trip");
        let store = ScoreStore::new(&path);
        store.write_high_score(777, 0).unwrap();
        assert_eq!(store.read_high_score(), 777);
        let _ = fs::remove_file(&path);
    }
}
