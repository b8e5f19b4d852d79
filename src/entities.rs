//! The three things that move on screen: the ship, its lasers and the aliens.
//!
//! Each keeps an integer `rect` for drawing and collision plus a float mirror
//! of the axis it moves along, so sub-pixel speeds accumulate correctly.

use crate::geometry::{Color, Rect};
use crate::render::{Canvas, Image};
use crate::settings::{FleetDirection, Settings};

/// What every on-screen entity can do.
pub trait Sprite {
    fn rect(&self) -> Rect;

    /// Advance one tick.
    fn update(&mut self, settings: &Settings);

    fn draw(&self, canvas: &mut dyn Canvas);
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Ship {
    pub rect: Rect,
    /// Exact horizontal position.
    pub x: f32,
    pub moving_left: bool,
    pub moving_right: bool,
    screen: Rect,
}

impl Ship {
    /// A stationary ship at the bottom centre of the screen.
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            rect: Rect::new(0, 0, settings.ship_width, settings.ship_height),
            x: 0.0,
            moving_left: false,
            moving_right: false,
            screen: settings.screen_rect(),
        };
        ship.center_ship();
        ship
    }

    /// Put the ship back at the bottom centre and drop any movement intent.
    pub fn center_ship(&mut self) {
        self.rect.set_midbottom(self.screen.midbottom());
        self.x = self.rect.x as f32;
        self.moving_left = false;
        self.moving_right = false;
    }
}

impl Sprite for Ship {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self, settings: &Settings) {
        let speed = settings.current.ship_speed;
        if self.moving_right && self.rect.right() < self.screen.right() {
            self.x += speed;
        }
        if self.moving_left && self.rect.left() > self.screen.left() {
            self.x -= speed;
        }
        self.rect.x = self.x.floor() as i32;
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.blit(Image::Ship, self.rect);
    }
}

// ── Laser ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Laser {
    pub rect: Rect,
    /// Exact vertical position.
    pub y: f32,
    pub color: Color,
}

impl Laser {
    /// A laser whose top-centre sits on the ship's top-centre.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let mut rect = Rect::new(0, 0, settings.laser_width, settings.laser_height);
        rect.set_midtop(ship.rect.midtop());
        Self {
            rect,
            y: rect.y as f32,
            color: settings.laser_color,
        }
    }

    /// Fully above the visible area.
    pub fn is_offscreen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

impl Sprite for Laser {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self, settings: &Settings) {
        self.y -= settings.current.laser_speed;
        self.rect.y = self.y.floor() as i32;
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_rect(self.rect, self.color);
    }
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Alien {
    pub rect: Rect,
    /// Exact horizontal position.
    pub x: f32,
    /// Shared by the whole fleet; only `Fleet` changes it.
    pub direction: FleetDirection,
}

impl Alien {
    pub fn new(settings: &Settings, x: i32, y: i32, direction: FleetDirection) -> Self {
        Self {
            rect: Rect::new(x, y, settings.alien_width, settings.alien_height),
            x: x as f32,
            direction,
        }
    }

    /// Touching or past either side of `screen`.
    pub fn check_edges(&self, screen: &Rect) -> bool {
        self.rect.right() >= screen.right() || self.rect.left() <= screen.left()
    }
}

impl Sprite for Alien {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self, settings: &Settings) {
        self.x += settings.current.alien_speed * self.direction.sign();
        self.rect.x = self.x.floor() as i32;
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.blit(Image::Alien, self.rect);
    }
}
