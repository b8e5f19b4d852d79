//! The game: state machine plus the fixed per-frame update order.
//!
//! Each frame: apply input events, then (while active) ship → lasers →
//! laser/alien collisions → fleet → ship/alien and bottom checks, then draw.
//!
//! ```text
//!   Inactive ──play──▶ Active ──ship hit, ships left──▶ Paused ──timer──▶ Active
//!      ▲                 │  ╰──fleet cleared (level up)──╯ (stays Active)
//!      ╰──ship hit, none left (game over)──╯
//! ```

use std::io;

use tracing::info;

use crate::collision::{resolve_bottom_breach, resolve_laser_hits, resolve_ship_hit};
use crate::config::LIFE_LOST_PAUSE;
use crate::entities::{Ship, Sprite};
use crate::error::GameError;
use crate::fleet::Fleet;
use crate::hud::{draw_scoreboard, Button};
use crate::input::{InputEvent, Key};
use crate::lasers::Lasers;
use crate::render::Canvas;
use crate::settings::Settings;
use crate::stats::GameStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    /// Waiting for Play.  Also the game-over state once no ships are left.
    Inactive,
    Active,
    /// Frozen after a lost life; input other than quit is ignored.
    Paused { frames_left: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct Game {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub lasers: Lasers,
    pub fleet: Fleet,
    pub play_button: Button,
    pub activity: Activity,
}

impl Game {
    /// A game waiting on the Play button, with a fleet already on screen.
    pub fn new(settings: Settings) -> Self {
        let mut fleet = Fleet::new(&settings);
        fleet.create_fleet(&settings);
        Self {
            stats: GameStats::new(&settings),
            ship: Ship::new(&settings),
            lasers: Lasers::new(),
            play_button: Button::new(&settings, "Play"),
            fleet,
            settings,
            activity: Activity::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        self.activity == Activity::Active
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.activity, Activity::Paused { .. })
    }

    pub fn is_game_over(&self) -> bool {
        self.activity == Activity::Inactive && self.stats.ships_left == 0
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Quit) => return Flow::Quit,
            _ if matches!(self.activity, Activity::Paused { .. }) => {}
            InputEvent::MouseDown { x, y } => {
                if self.play_button.is_clicked(x, y) {
                    self.start_game();
                }
            }
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => self.key_up(key),
        }
        Flow::Continue
    }

    fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.ship.moving_left = true,
            Key::Right => self.ship.moving_right = true,
            Key::Fire if self.is_active() => {
                self.lasers.fire(&self.settings, &self.ship);
            }
            Key::Play => {
                self.start_game();
            }
            _ => {}
        }
    }

    fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.ship.moving_left = false,
            Key::Right => self.ship.moving_right = false,
            _ => {}
        }
    }

    // ── Transitions ──────────────────────────────────────────────────────────

    /// Inactive → Active with fresh stats, settings and fleet.  A no-op in
    /// any other state; returns whether a game started.
    pub fn start_game(&mut self) -> bool {
        if self.activity != Activity::Inactive {
            return false;
        }
        self.settings.initialize_dynamic_settings();
        self.stats.reset_stats(&self.settings);
        self.fleet.reset_direction(&self.settings);
        self.lasers.clear();
        self.fleet.clear();
        self.fleet.create_fleet(&self.settings);
        self.ship.center_ship();
        self.activity = Activity::Active;
        info!(ships = self.stats.ships_left, "new game");
        true
    }

    /// A life is lost (alien touched the ship or reached the bottom).  The
    /// ship is always taken first; only then is game over decided.
    pub fn ship_hit(&mut self) {
        let ships_left = self.stats.lose_ship();
        if ships_left == 0 {
            self.activity = Activity::Inactive;
            info!(
                score = self.stats.score,
                high_score = self.stats.high_score,
                level = self.stats.level,
                "game over"
            );
            return;
        }

        self.lasers.clear();
        self.fleet.clear();
        self.fleet.create_fleet(&self.settings);
        self.ship.center_ship();
        self.activity = Activity::Paused {
            frames_left: LIFE_LOST_PAUSE,
        };
        info!(ships_left, "ship hit");
    }

    fn fleet_cleared(&mut self) {
        self.lasers.clear();
        self.fleet.create_fleet(&self.settings);
        self.settings.increase_speed();
        self.stats.level += 1;
        info!(
            level = self.stats.level,
            alien_points = self.settings.current.alien_points,
            "fleet cleared"
        );
    }

    // ── Per-frame update ─────────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    pub fn update(&mut self) {
        match self.activity {
            Activity::Inactive => {}
            Activity::Paused { frames_left } => {
                self.activity = if frames_left > 1 {
                    Activity::Paused {
                        frames_left: frames_left - 1,
                    }
                } else {
                    Activity::Active
                };
            }
            Activity::Active => {
                self.ship.update(&self.settings);
                self.update_lasers();
                self.update_aliens();
            }
        }
    }

    fn update_lasers(&mut self) {
        self.lasers.update(&self.settings);
        self.check_laser_alien_collisions();
    }

    /// Score every destroyed alien; a wiped-out fleet starts the next level.
    pub fn check_laser_alien_collisions(&mut self) {
        let hits = resolve_laser_hits(&mut self.lasers, &mut self.fleet);
        if hits.aliens_destroyed > 0 {
            let destroyed = u32::try_from(hits.aliens_destroyed).unwrap_or(u32::MAX);
            let points = self.settings.current.alien_points.saturating_mul(destroyed);
            self.stats.add_score(points);
        }
        if self.fleet.is_empty() {
            self.fleet_cleared();
        }
    }

    fn update_aliens(&mut self) {
        self.fleet.update_fleet(&self.settings);

        if resolve_ship_hit(&self.ship, &self.fleet)
            || resolve_bottom_breach(&self.fleet, &self.settings.screen_rect())
        {
            self.ship_hit();
        }
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    pub fn draw(&self, canvas: &mut dyn Canvas) -> io::Result<()> {
        canvas.fill(self.settings.bg_color);
        self.lasers.draw(canvas);
        self.ship.draw(canvas);
        self.fleet.draw(canvas);
        draw_scoreboard(canvas, &self.stats, &self.settings);
        if self.activity == Activity::Inactive {
            self.play_button.draw(canvas);
        }
        canvas.present()
    }

    /// One full frame: events, update, draw.  Stops at the first quit.
    pub fn frame<I>(&mut self, events: I, canvas: &mut dyn Canvas) -> Result<Flow, GameError>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.handle_event(event) == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
        self.update();
        self.draw(canvas)?;
        Ok(Flow::Continue)
    }
}
