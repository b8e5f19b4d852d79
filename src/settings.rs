//! Gameplay tuning.
//!
//! Static values (screen, sprite sizes, caps, colours) never change during a
//! session.  The dynamic subset lives in [`DynamicSettings`]: it is reset to
//! `baseline` when a game starts and scaled up every time a fleet is cleared.
//! Nothing else mutates a `Settings`.

use std::env;
use std::str::FromStr;

use crate::error::GameError;
use crate::fleet::formation;
use crate::geometry::{Color, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Left,
    Right,
}

impl FleetDirection {
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// The values that reset per game and ramp up per cleared fleet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicSettings {
    /// Pixels per tick.
    pub ship_speed: f32,
    pub laser_speed: f32,
    pub alien_speed: f32,
    /// Direction a fresh game's fleet starts moving in.  Only `baseline`'s
    /// copy is read; the live direction belongs to `Fleet`.
    pub fleet_direction: FleetDirection,
    pub alien_points: u32,
}

impl Default for DynamicSettings {
    fn default() -> Self {
        Self {
            ship_speed: 1.5,
            laser_speed: 2.0,
            alien_speed: 1.0,
            fleet_direction: FleetDirection::Right,
            alien_points: 50,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    // Screen
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Color,

    // Ship
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_limit: u32,

    // Lasers
    pub laser_width: i32,
    pub laser_height: i32,
    pub laser_color: Color,
    pub laser_max_num: usize,

    // Aliens
    pub alien_width: i32,
    pub alien_height: i32,
    pub fleet_drop_speed: i32,

    // Difficulty ramp
    pub speed_up_scale: f32,
    pub score_scale: f32,

    /// Values restored by [`Settings::initialize_dynamic_settings`].
    pub baseline: DynamicSettings,
    /// Values in effect right now.
    pub current: DynamicSettings,
}

impl Default for Settings {
    fn default() -> Self {
        let baseline = DynamicSettings::default();
        Self {
            screen_width: 1200,
            screen_height: 650,
            bg_color: Color::rgb(230, 230, 230),
            ship_width: 60,
            ship_height: 48,
            ship_limit: 3,
            laser_width: 3,
            laser_height: 15,
            laser_color: Color::rgb(60, 60, 60),
            laser_max_num: 3,
            alien_width: 60,
            alien_height: 50,
            fleet_drop_speed: 10,
            speed_up_scale: 1.1,
            score_scale: 1.5,
            baseline,
            current: baseline,
        }
    }
}

impl Settings {
    /// Defaults overlaid with any `INVASION_*` environment variables, then
    /// validated.  Unparseable values are ignored.
    pub fn from_env() -> Result<Self, GameError> {
        let mut s = Self::default();
        s.ship_limit = env_or("INVASION_SHIP_LIMIT", s.ship_limit);
        s.laser_max_num = env_or("INVASION_LASER_MAX", s.laser_max_num);
        s.fleet_drop_speed = env_or("INVASION_FLEET_DROP", s.fleet_drop_speed);
        s.speed_up_scale = env_or("INVASION_SPEEDUP_SCALE", s.speed_up_scale);
        s.score_scale = env_or("INVASION_SCORE_SCALE", s.score_scale);
        s.baseline.ship_speed = env_or("INVASION_SHIP_SPEED", s.baseline.ship_speed);
        s.baseline.laser_speed = env_or("INVASION_LASER_SPEED", s.baseline.laser_speed);
        s.baseline.alien_speed = env_or("INVASION_ALIEN_SPEED", s.baseline.alien_speed);
        s.baseline.alien_points = env_or("INVASION_ALIEN_POINTS", s.baseline.alien_points);
        s.current = s.baseline;
        s.validate()?;
        Ok(s)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let sizes = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("laser_width", self.laser_width),
            ("laser_height", self.laser_height),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
        ];
        for (field, value) in sizes {
            if value <= 0 {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }
        if self.ship_limit == 0 {
            return Err(invalid("ship_limit", "must be at least 1".to_string()));
        }
        if self.laser_max_num == 0 {
            return Err(invalid("laser_max_num", "must be at least 1".to_string()));
        }
        if self.fleet_drop_speed < 0 {
            return Err(invalid("fleet_drop_speed", "must not be negative".to_string()));
        }
        for (field, value) in [
            ("speed_up_scale", self.speed_up_scale),
            ("score_scale", self.score_scale),
        ] {
            if value.is_nan() || value < 1.0 {
                return Err(invalid(field, format!("must be >= 1.0, got {value}")));
            }
        }
        // An empty formation would count as a cleared fleet on every tick.
        if formation(self).is_empty() {
            return Err(invalid(
                "alien_width",
                format!(
                    "no {}x{} alien fits a {}x{} screen",
                    self.alien_width, self.alien_height, self.screen_width, self.screen_height
                ),
            ));
        }
        Ok(())
    }

    pub fn screen_rect(&self) -> Rect {
        Rect::new(0, 0, self.screen_width, self.screen_height)
    }

    /// Restore the dynamic subset to its baseline.
    pub fn initialize_dynamic_settings(&mut self) {
        self.current = self.baseline;
    }

    /// Ramp difficulty after a cleared fleet.  Points are truncated to an
    /// integer after every step and saturate at `u32::MAX`.
    pub fn increase_speed(&mut self) {
        let scale = self.speed_up_scale;
        self.current.ship_speed *= scale;
        self.current.laser_speed *= scale;
        self.current.alien_speed *= scale;
        let points = self.current.alien_points as f64 * self.score_scale as f64;
        self.current.alien_points = points.min(u32::MAX as f64) as u32;
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn invalid(field: &'static str, reason: String) -> GameError {
    GameError::Config { field, reason }
}
