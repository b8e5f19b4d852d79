//! Lives, score, high score and level.

use crate::settings::Settings;

pub const FIRST_LEVEL: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    /// Best score this session; survives `reset_stats`.
    pub high_score: u32,
    pub level: u32,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        let mut stats = Self {
            ships_left: 0,
            score: 0,
            high_score: 0,
            level: FIRST_LEVEL,
        };
        stats.reset_stats(settings);
        stats
    }

    /// Start-of-game values.  The high score is kept.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = FIRST_LEVEL;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.high_score = self.high_score.max(self.score);
    }

    /// Take one ship and return how many are left.  Never goes below zero.
    pub fn lose_ship(&mut self) -> u32 {
        self.ships_left = self.ships_left.saturating_sub(1);
        self.ships_left
    }
}
