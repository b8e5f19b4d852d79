//! The alien formation.
//!
//! Aliens are laid out on a grid spaced two alien-widths apart horizontally
//! and two alien-heights apart vertically.  The whole fleet shares one
//! direction: when any alien touches a side edge, every alien drops by
//! `fleet_drop_speed` and the direction flips.

use crate::entities::{Alien, Sprite};
use crate::geometry::Rect;
use crate::render::Canvas;
use crate::settings::{FleetDirection, Settings};

#[derive(Clone, Debug)]
pub struct Fleet {
    pub aliens: Vec<Alien>,
    pub direction: FleetDirection,
}

impl Fleet {
    /// An empty fleet facing the baseline direction.
    pub fn new(settings: &Settings) -> Self {
        Self {
            aliens: Vec::new(),
            direction: settings.baseline.fleet_direction,
        }
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn clear(&mut self) {
        self.aliens.clear();
    }

    /// Back to the direction a new game starts with.
    pub fn reset_direction(&mut self, settings: &Settings) {
        self.direction = settings.baseline.fleet_direction;
    }

    /// Replace the fleet with a full grid.  The current direction is kept.
    pub fn create_fleet(&mut self, settings: &Settings) {
        self.aliens = formation(settings)
            .into_iter()
            .map(|(x, y)| Alien::new(settings, x, y, self.direction))
            .collect();
    }

    /// Reverse and drop the whole fleet if any alien touches a side edge.
    /// Returns whether it did.
    pub fn check_fleet_edges(&mut self, settings: &Settings) -> bool {
        let screen = settings.screen_rect();
        if self.aliens.iter().any(|a| a.check_edges(&screen)) {
            self.change_fleet_direction(settings);
            true
        } else {
            false
        }
    }

    pub fn change_fleet_direction(&mut self, settings: &Settings) {
        self.direction = self.direction.flipped();
        for alien in &mut self.aliens {
            alien.rect.y += settings.fleet_drop_speed;
            alien.direction = self.direction;
        }
    }

    /// Edge check, then one step sideways for every alien.
    pub fn update_fleet(&mut self, settings: &Settings) {
        self.check_fleet_edges(settings);
        for alien in &mut self.aliens {
            alien.update(settings);
        }
    }

    /// First alien overlapping `rect`, if any.
    pub fn first_collision(&self, rect: &Rect) -> Option<&Alien> {
        self.aliens.iter().find(|a| a.rect.collides(rect))
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for alien in &self.aliens {
            alien.draw(canvas);
        }
    }
}

/// Top-left corners of every alien in a fresh fleet, row by row.
pub fn formation(settings: &Settings) -> Vec<(i32, i32)> {
    let (w, h) = (settings.alien_width, settings.alien_height);
    let max_x = settings.screen_width - 2 * w;
    let max_y = settings.screen_height - 3 * h;

    let mut positions = Vec::new();
    let mut y = h;
    while y < max_y {
        let mut x = w;
        while x < max_x {
            positions.push((x, y));
            x += 2 * w;
        }
        y += 2 * h;
    }
    positions
}
