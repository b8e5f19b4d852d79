//! The drawing surface the game renders into.
//!
//! Game code only ever talks to [`Canvas`]; the terminal implementation
//! lives in `display`, tests use a recording stub.

use std::io;

use crate::geometry::{Color, Rect};

/// Images the game can blit.  The canvas decides what each one looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Image {
    Ship,
    Alien,
    /// Lives indicator: a ship still in reserve.
    LifeLeft,
    /// Lives indicator: a ship already lost.
    LifeLost,
}

pub trait Canvas {
    /// Clear the whole frame to `color`.  Always the first call of a frame.
    fn fill(&mut self, color: Color);

    fn blit(&mut self, image: Image, rect: Rect);

    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Draw `text` centred inside `rect`.
    fn draw_text(&mut self, text: &str, rect: Rect, color: Color);

    /// Make the frame visible.  Always the last call of a frame.
    fn present(&mut self) -> io::Result<()>;
}
