#![allow(dead_code)]

use std::io;

use alien_invasion::geometry::{Color, Rect};
use alien_invasion::render::{Canvas, Image};
use alien_invasion::settings::Settings;

/// Every call a frame made, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Fill(Color),
    Blit(Image, Rect),
    Rect(Rect, Color),
    Text(String, Rect),
    Present,
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub calls: Vec<Call>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blits(&self, image: Image) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Blit(i, _) if *i == image))
            .count()
    }

    pub fn has_text(&self, text: &str) -> bool {
        self.calls
            .iter()
            .any(|c| matches!(c, Call::Text(t, _) if t == text))
    }
}

impl Canvas for RecordingCanvas {
    fn fill(&mut self, color: Color) {
        self.calls.push(Call::Fill(color));
    }

    fn blit(&mut self, image: Image, rect: Rect) {
        self.calls.push(Call::Blit(image, rect));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(Call::Rect(rect, color));
    }

    fn draw_text(&mut self, text: &str, rect: Rect, _color: Color) {
        self.calls.push(Call::Text(text.to_string(), rect));
    }

    fn present(&mut self) -> io::Result<()> {
        self.calls.push(Call::Present);
        Ok(())
    }
}

/// Default settings; the fleet is 9 columns × 5 rows.
pub fn settings() -> Settings {
    Settings::default()
}

pub const DEFAULT_FLEET_SIZE: usize = 45;
