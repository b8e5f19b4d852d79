//! Text-art sprites, loaded once at startup.
//!
//! One file per image in the assets directory; each line is one row of the
//! sprite and spaces are transparent.  A missing or blank file is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::GameError;
use crate::render::Image;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<String>,
}

impl Glyph {
    /// Build from text, dropping trailing whitespace and blank trailing rows.
    pub fn parse(text: &str) -> Option<Self> {
        let mut rows: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            None
        } else {
            Some(Self { rows })
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Widest row, in characters.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Clone, Debug)]
pub struct Sprites {
    ship: Glyph,
    alien: Glyph,
    life_left: Glyph,
    life_lost: Glyph,
}

impl Sprites {
    pub fn load(dir: &Path) -> Result<Self, GameError> {
        let sprites = Self {
            ship: load_glyph(&dir.join(file_name(Image::Ship)))?,
            alien: load_glyph(&dir.join(file_name(Image::Alien)))?,
            life_left: load_glyph(&dir.join(file_name(Image::LifeLeft)))?,
            life_lost: load_glyph(&dir.join(file_name(Image::LifeLost)))?,
        };
        info!(dir = %dir.display(), "sprites loaded");
        Ok(sprites)
    }

    pub fn glyph(&self, image: Image) -> &Glyph {
        match image {
            Image::Ship => &self.ship,
            Image::Alien => &self.alien,
            Image::LifeLeft => &self.life_left,
            Image::LifeLost => &self.life_lost,
        }
    }
}

pub fn file_name(image: Image) -> &'static str {
    match image {
        Image::Ship => "ship.txt",
        Image::Alien => "alien.txt",
        Image::LifeLeft => "life_left.txt",
        Image::LifeLost => "life_lost.txt",
    }
}

fn load_glyph(path: &Path) -> Result<Glyph, GameError> {
    let text = fs::read_to_string(path).map_err(|source| GameError::AssetLoad {
        path: PathBuf::from(path),
        source,
    })?;
    Glyph::parse(&text).ok_or_else(|| GameError::EmptyAsset {
        path: PathBuf::from(path),
    })
}
