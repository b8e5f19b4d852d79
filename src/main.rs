use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::process;
use std::sync::Mutex;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::{error, info};

use alien_invasion::assets::Sprites;
use alien_invasion::clock::FrameClock;
use alien_invasion::config;
use alien_invasion::display::{TerminalCanvas, Viewport};
use alien_invasion::error::GameError;
use alien_invasion::game::{Flow, Game};
use alien_invasion::input::{InputEvent, KeyTracker};
use alien_invasion::settings::Settings;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Stdout is the game screen; only log when a file is configured.
    let Some(path) = config::log_path() else {
        return;
    };
    let file = match File::create(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("cannot open log file {}: {e}", path.display());
            return;
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        error!(%info, ?backtrace, "panic");
    }));
}

fn main() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    if let Err(e) = run() {
        error!(error = %e, "fatal");
        eprintln!("alien_invasion: {e}");
        process::exit(1);
    }
}

/// Everything fallible happens before the terminal is touched, so a missing
/// asset or bad setting prints a plain message on a normal screen.
fn run() -> Result<(), GameError> {
    let settings = Settings::from_env()?;
    let sprites = Sprites::load(&config::assets_dir())?;

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release events.  Terminals without the kitty protocol
    // refuse this and fall back to hold-window expiry.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    info!(keyboard_enhanced, "terminal ready");

    let (cols, rows) = terminal::size()?;
    let viewport = Viewport::new(cols, rows, settings.screen_width, settings.screen_height);
    let mut canvas = TerminalCanvas::new(out, sprites, viewport);

    let result = game_loop(Game::new(settings), &mut canvas, keyboard_enhanced);

    // Always restore the terminal
    let mut out = canvas.into_inner();
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = out.flush();
    let _ = terminal::disable_raw_mode();

    result
}

fn game_loop<W: Write>(
    mut game: Game,
    canvas: &mut TerminalCanvas<W>,
    keyboard_enhanced: bool,
) -> Result<(), GameError> {
    let mut keys = KeyTracker::new(keyboard_enhanced);
    let mut clock = FrameClock::new(config::FRAME);

    loop {
        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut events: Vec<InputEvent> = Vec::new();
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Event::Resize(cols, rows) = ev {
                canvas.resize(cols, rows);
                continue;
            }
            events.extend(keys.translate(&ev, &canvas.viewport()));
        }
        events.extend(keys.end_frame());

        let was_paused = game.is_paused();
        if game.frame(events, canvas)? == Flow::Quit {
            info!(
                score = game.stats.score,
                high_score = game.stats.high_score,
                "quit"
            );
            return Ok(());
        }
        // The respawned ship starts still; keys held through the pause must
        // be pressed (or repeat) again to move it.
        if was_paused && !game.is_paused() {
            keys.forget_held();
        }

        clock.tick();
    }
}
