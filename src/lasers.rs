//! Lasers fired by the ship.
//!
//! Membership in `Lasers` is the whole lifecycle: a laser exists while it is
//! in the collection and is gone once removed.

use tracing::debug;

use crate::entities::{Laser, Ship, Sprite};
use crate::render::Canvas;
use crate::settings::Settings;

#[derive(Clone, Debug, Default)]
pub struct Lasers {
    pub live: Vec<Laser>,
}

impl Lasers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    /// Fire from the ship's nose unless `laser_max_num` lasers are already
    /// in flight.  Returns whether a laser was spawned.
    pub fn fire(&mut self, settings: &Settings, ship: &Ship) -> bool {
        if self.live.len() >= settings.laser_max_num {
            debug!(live = self.live.len(), "fire ignored: laser cap reached");
            return false;
        }
        self.live.push(Laser::new(settings, ship));
        true
    }

    /// Move every laser up, then drop the ones that left the top.
    pub fn update(&mut self, settings: &Settings) {
        for laser in &mut self.live {
            laser.update(settings);
        }
        self.live.retain(|l| !l.is_offscreen());
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for laser in &self.live {
            laser.draw(canvas);
        }
    }
}
