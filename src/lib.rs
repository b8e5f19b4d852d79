//! Alien Invasion: a terminal arcade shooter.
//!
//! The library holds the whole game; `main.rs` only owns the terminal and
//! drives [`game::Game::frame`] at a fixed rate.

pub mod assets;
pub mod clock;
pub mod collision;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod game;
pub mod geometry;
pub mod hud;
pub mod input;
pub mod lasers;
pub mod render;
pub mod settings;
pub mod stats;
