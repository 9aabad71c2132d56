use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use debris_shooter::compute::{init_state, on_key, tick, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use debris_shooter::{config, display};
use debris_shooter::projection::Projection;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the renderer, so log lines go to a file.
fn init_logging() -> std::io::Result<()> {
    let path = config::log_file(std::env::var(config::LOG_FILE_VAR).ok().as_deref());
    let level = config::parse_log_level(std::env::var(config::LOG_LEVEL_VAR).ok().as_deref());
    simple_logging::log_to_file(&path, level)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Drive the game until the player quits.
///
/// Every frame: drain pending input, apply key presses and resizes in
/// arrival order, advance one tick, render, then sleep out the rest of the
/// frame.  State is owned here and only ever touched from this thread.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let (cols, rows) = terminal::size()?;
    let mut proj = Projection::new(cols, rows, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
    let mut state = init_state(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) => {
                    if is_quit(code, modifiers) {
                        info!("quit requested");
                        return Ok(());
                    }
                    state = on_key(&state, code, &mut rng);
                }
                Event::Resize(cols, rows) => {
                    info!("terminal resized to {}x{}", cols, rows);
                    proj.resize(cols, rows);
                }
                _ => {}
            }
        }

        state = tick(&state, &mut rng);
        display::render(out, &state, &proj)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging()?;
    info!("starting debris shooter");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                warn!("input reader stopped: {}", e);
                break;
            }
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        warn!("exiting on terminal error: {}", e);
    }
    result
}
