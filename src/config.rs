use std::{env, path::PathBuf, time::Duration};

// Runtime constants (not gameplay tuning; see `settings` for that).

pub const TICK_RATE: u32 = 60;
pub const FRAME: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Frames the game stays frozen after a life is lost (0.5 s @ 60 Hz).
pub const LIFE_LOST_PAUSE: u32 = 30;

/// A movement key counts as held if its last press/repeat arrived within
/// this many frames.  Only used on terminals that never report releases;
/// long enough to bridge the OS initial key-repeat delay (~500 ms).
pub const HOLD_WINDOW: u64 = 32;

pub fn assets_dir() -> PathBuf {
    env::var("INVASION_ASSETS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("assets"))
}

/// Log file path.  Stdout is the game screen, so logging is off unless set.
pub fn log_path() -> Option<PathBuf> {
    env::var("INVASION_LOG").ok().map(PathBuf::from)
}
