//! Scoring module - line awards, hard-drop bonus and level arithmetic
//!
//! A lock that arms `lines` rows is worth `LINE_AWARDS[lines]`. A hard drop
//! adds a bonus proportional to how far the piece fell, and the total is
//! multiplied by the current level.

use crate::types::{Score, GRAVITY_TICKS, LINE_AWARDS};

/// Running score for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreLedger {
    score: Score,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self { score: 0 }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Add the award for a lock.
    ///
    /// `bonus = award * drop_distance / max_drop_distance` (integer division),
    /// then `score += level * (award + bonus)`. Returns the points added.
    pub fn award(
        &mut self,
        lines: u32,
        level: u32,
        drop_distance: u32,
        max_drop_distance: u32,
    ) -> Score {
        debug_assert!(lines <= 4, "at most four rows per lock: {lines}");
        debug_assert!(max_drop_distance > 0);
        debug_assert!(drop_distance <= max_drop_distance);

        let points = calculate_award(lines, level, drop_distance, max_drop_distance);
        self.score = self.score.saturating_add(points);
        points
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}

/// Points for a lock, without touching any ledger
pub fn calculate_award(lines: u32, level: u32, drop_distance: u32, max_drop_distance: u32) -> Score {
    let Some(&award) = LINE_AWARDS.get(lines as usize) else {
        return 0;
    };
    if max_drop_distance == 0 {
        return award * Score::from(level);
    }
    let bonus = award * Score::from(drop_distance) / Score::from(max_drop_distance);
    Score::from(level) * (award + bonus)
}

/// Level shown to the player for a given gravity interval.
///
/// Difficulty counts down from [`GRAVITY_TICKS`], so level counts up from 1.
pub fn level_for_difficulty(difficulty: u32) -> u32 {
    debug_assert!((1..=GRAVITY_TICKS).contains(&difficulty));
    1 + GRAVITY_TICKS - difficulty
}
