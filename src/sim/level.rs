//! Level difficulty table and progression
//!
//! `resolve` is a pure mapping from level number to difficulty parameters and is
//! re-invoked on every level transition. `next_level` is the progression state
//! machine: regular levels advance one at a time, the last regular level jumps
//! to the boss level, and the boss level never advances.

use serde::Serialize;

/// Difficulty parameters for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelConfig {
    pub level_number: u32,
    pub title: &'static str,
    /// Minimum simulated time between spawn events (ms)
    pub spawn_cadence_ms: f64,
    /// Downward acceleration applied to objects (pixels/tick²)
    pub gravity: f32,
    /// Probability that a regular spawn is a bomb, in [0, 1]
    pub bomb_chance: f64,
    /// Score at which the level advances
    pub target_score: u64,
    /// Boss mode: only hidden characters spawn
    pub is_hidden: bool,
}

/// The distinguished boss level number
pub const BOSS_LEVEL: u32 = 99;
/// Highest tabulated regular level; clearing it leads to the boss level
pub const LAST_REGULAR_LEVEL: u32 = 4;

/// Synthesized levels: cadence = max(MIN, BASE - level * DECAY)
pub const SYNTH_BASE_CADENCE_MS: f64 = 600.0;
pub const SYNTH_CADENCE_DECAY_MS: f64 = 20.0;
pub const SYNTH_MIN_CADENCE_MS: f64 = 200.0;

pub const LEVELS: [LevelConfig; 4] = [
    LevelConfig {
        level_number: 1,
        title: "Warm Up Christmas",
        spawn_cadence_ms: 1100.0,
        gravity: 0.15,
        bomb_chance: 0.0,
        target_score: 100,
        is_hidden: false,
    },
    LevelConfig {
        level_number: 2,
        title: "Snowy Speed",
        spawn_cadence_ms: 900.0,
        gravity: 0.22,
        bomb_chance: 0.15,
        target_score: 300,
        is_hidden: false,
    },
    LevelConfig {
        level_number: 3,
        title: "Blizzard Blitz",
        spawn_cadence_ms: 700.0,
        gravity: 0.28,
        bomb_chance: 0.25,
        target_score: 600,
        is_hidden: false,
    },
    LevelConfig {
        level_number: 4,
        title: "Santa's Nightmare",
        spawn_cadence_ms: 500.0,
        gravity: 0.35,
        bomb_chance: 0.35,
        target_score: 1000,
        is_hidden: false,
    },
];

pub const BOSS: LevelConfig = LevelConfig {
    level_number: BOSS_LEVEL,
    title: "HERO DIMENSION",
    spawn_cadence_ms: 350.0,
    gravity: 0.4,
    bomb_chance: 0.1,
    target_score: 99_999,
    is_hidden: true,
};

/// Resolve the configuration for a level number
pub fn resolve(level: u32) -> LevelConfig {
    if level == BOSS_LEVEL {
        return BOSS;
    }
    if let Some(config) = LEVELS.iter().find(|c| c.level_number == level) {
        return *config;
    }

    // Beyond the table: last regular shape, faster cadence
    let cadence =
        (SYNTH_BASE_CADENCE_MS - level as f64 * SYNTH_CADENCE_DECAY_MS).max(SYNTH_MIN_CADENCE_MS);
    LevelConfig {
        level_number: level,
        spawn_cadence_ms: cadence,
        ..LEVELS[LEVELS.len() - 1]
    }
}

/// Level that follows `current` once its target score is reached.
///
/// Returns `None` at the boss level.
pub fn next_level(current: u32) -> Option<u32> {
    match current {
        BOSS_LEVEL => None,
        LAST_REGULAR_LEVEL => Some(BOSS_LEVEL),
        n => Some(n.saturating_add(1)),
    }
}

/// Advance check run after every score change.
///
/// A single call moves at most one step through `next_level`.
pub fn advance_for_score(config: &LevelConfig, score: u64) -> Option<u32> {
    if score >= config.target_score {
        next_level(config.level_number)
    } else {
        None
    }
}

impl LevelConfig {
    /// Difficulty rank used for burst chance and launch speed.
    ///
    /// The boss level ranks just above the last regular level rather than at
    /// its raw number; scaling by 99 would force a burst on every spawn and
    /// add almost 50 px/tick of launch speed.
    pub fn rank(&self) -> u32 {
        if self.is_hidden {
            LAST_REGULAR_LEVEL + 1
        } else {
            self.level_number
        }
    }

    /// Probability that a spawn event produces a burst of 2-3 objects
    pub fn burst_chance(&self) -> f64 {
        use crate::consts::{BURST_CHANCE_BASE, BURST_CHANCE_PER_RANK};
        (BURST_CHANCE_BASE + BURST_CHANCE_PER_RANK * self.rank() as f64).clamp(0.0, 1.0)
    }

    /// Extra upward launch speed for this level
    pub fn launch_bonus(&self) -> f32 {
        crate::consts::LAUNCH_BONUS_PER_RANK * self.rank() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabulated_levels_verbatim() {
        for config in LEVELS {
            assert_eq!(resolve(config.level_number), config);
        }
        assert_eq!(resolve(BOSS_LEVEL), BOSS);
        assert!(resolve(BOSS_LEVEL).is_hidden);
    }

    #[test]
    fn test_synthesized_cadence() {
        let l5 = resolve(5);
        assert_eq!(l5.level_number, 5);
        assert_eq!(l5.spawn_cadence_ms, 500.0);
        assert_eq!(l5.gravity, LEVELS[3].gravity);
        assert_eq!(l5.target_score, LEVELS[3].target_score);
        assert!(!l5.is_hidden);

        assert_eq!(resolve(10).spawn_cadence_ms, 400.0);
        // Floored
        assert_eq!(resolve(20).spawn_cadence_ms, 200.0);
        assert_eq!(resolve(150).spawn_cadence_ms, 200.0);
    }

    #[test]
    fn test_progression() {
        assert_eq!(next_level(1), Some(2));
        assert_eq!(next_level(3), Some(4));
        assert_eq!(next_level(LAST_REGULAR_LEVEL), Some(BOSS_LEVEL));
        assert_eq!(next_level(BOSS_LEVEL), None);
        assert_eq!(next_level(7), Some(8));
    }

    #[test]
    fn test_advance_threshold() {
        let l1 = resolve(1);
        assert_eq!(advance_for_score(&l1, 90), None);
        assert_eq!(advance_for_score(&l1, 100), Some(2));
        // Far past the target still moves a single step
        assert_eq!(advance_for_score(&l1, 5000), Some(2));
        assert_eq!(advance_for_score(&BOSS, 1_000_000), None);
    }

    #[test]
    fn test_rank_and_burst() {
        assert_eq!(resolve(1).rank(), 1);
        assert_eq!(BOSS.rank(), LAST_REGULAR_LEVEL + 1);
        assert!((resolve(1).burst_chance() - 0.25).abs() < 1e-9);
        assert_eq!(resolve(40).burst_chance(), 1.0);
        assert!(BOSS.launch_bonus() < 5.0);
    }
}
