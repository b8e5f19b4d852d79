//! Integer rectangles and colours in world (pixel) space.
//!
//! `y` grows downward.  `right()`/`bottom()` are exclusive edges, so two
//! rects that merely touch do not overlap.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn center(&self) -> (i32, i32) {
        (self.center_x(), self.center_y())
    }

    /// Centre of the top edge.
    pub fn midtop(&self) -> (i32, i32) {
        (self.center_x(), self.y)
    }

    /// Centre of the bottom edge.
    pub fn midbottom(&self) -> (i32, i32) {
        (self.center_x(), self.bottom())
    }

    pub fn set_midtop(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.w / 2;
        self.y = y;
    }

    pub fn set_midbottom(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.w / 2;
        self.y = y - self.h;
    }

    pub fn set_center(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.w / 2;
        self.y = y - self.h / 2;
    }

    pub fn collides(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}
