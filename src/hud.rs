//! Scoreboard, lives indicator and the Play button.

use crate::geometry::{Color, Rect};
use crate::render::{Canvas, Image};
use crate::settings::Settings;
use crate::stats::GameStats;

const C_TEXT: Color = Color::rgb(30, 30, 30);
const C_BUTTON: Color = Color::rgb(0, 135, 0);
const C_BUTTON_TEXT: Color = Color::rgb(255, 255, 255);

const BUTTON_WIDTH: i32 = 200;
const BUTTON_HEIGHT: i32 = 50;
const MARGIN: i32 = 20;
const TEXT_HEIGHT: i32 = 30;
const TEXT_WIDTH: i32 = 300;
const LIFE_ICON: i32 = 30;

// ── Play button ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
}

impl Button {
    /// A button centred on the screen.
    pub fn new(settings: &Settings, label: &str) -> Self {
        let mut rect = Rect::new(0, 0, BUTTON_WIDTH, BUTTON_HEIGHT);
        rect.set_center(settings.screen_rect().center());
        Self {
            rect,
            label: label.to_string(),
        }
    }

    pub fn is_clicked(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point(x, y)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_rect(self.rect, C_BUTTON);
        canvas.draw_text(&self.label, self.rect, C_BUTTON_TEXT);
    }
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

/// Score top-right with the level under it, high score top-centre, one
/// icon per ship top-left (reserve ships first, then lost ones).
pub fn draw_scoreboard(canvas: &mut dyn Canvas, stats: &GameStats, settings: &Settings) {
    let screen = settings.screen_rect();

    let score = Rect::new(screen.right() - MARGIN - TEXT_WIDTH, MARGIN, TEXT_WIDTH, TEXT_HEIGHT);
    canvas.draw_text(&format_score(stats.score), score, C_TEXT);

    let mut high = Rect::new(0, MARGIN, TEXT_WIDTH, TEXT_HEIGHT);
    high.x = screen.center_x() - TEXT_WIDTH / 2;
    canvas.draw_text(&format!("High {}", format_score(stats.high_score)), high, C_TEXT);

    let level = Rect::new(score.x, score.bottom() + 10, TEXT_WIDTH, TEXT_HEIGHT);
    canvas.draw_text(&format!("Level {}", stats.level), level, C_TEXT);

    for i in 0..settings.ship_limit {
        let icon = if i < stats.ships_left {
            Image::LifeLeft
        } else {
            Image::LifeLost
        };
        let x = MARGIN + i as i32 * (LIFE_ICON + 10);
        canvas.blit(icon, Rect::new(x, MARGIN, LIFE_ICON, LIFE_ICON));
    }
}

/// Thousands-separated score, e.g. `12,450`.
pub fn format_score(score: u32) -> String {
    let digits = score.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
