//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer, the current projection and an
//! immutable view of the game state.  No game logic is performed; this module
//! only translates state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::compute::DEBRIS_HALF_EXTENT;
use crate::entities::{GameState, GameStatus};
use crate::projection::Projection;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TEXT: Color = Color::White;
const C_SHIP: Color = Color::Green;
const C_BULLET: Color = Color::Yellow;
const C_DEBRIS: Color = Color::Red;
const C_GAME_OVER: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Horizontal offset of the centred text column, in playfield units.
const TEXT_OFFSET_X: i32 = 50;
/// Vertical spacing between the three centred text lines.
const TEXT_LINE_GAP: i32 = 20;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match state.status {
        GameStatus::Menu => draw_menu(out, state, proj)?,
        GameStatus::Playing => draw_game(out, state, proj)?,
        GameStatus::GameOver => draw_game_over(out, state, proj)?,
    }
    draw_controls_hint(out, state, proj)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, proj.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Text helpers ──────────────────────────────────────────────────────────────

/// Print `text` starting at the playfield point `(x, y)`.  Silently skipped
/// when the anchor is off-screen.
fn draw_text<W: Write>(
    out: &mut W,
    proj: &Projection,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    if let Some((col, row)) = proj.to_cell(x, y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(text))?;
    }
    Ok(())
}

/// The three stacked lines shared by the menu and the game-over screen.
fn draw_centre_lines<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
    lines: [&str; 3],
    color: Color,
) -> std::io::Result<()> {
    let x = state.width / 2 - TEXT_OFFSET_X;
    let top = state.height / 2 + TEXT_LINE_GAP;
    for (i, line) in lines.iter().enumerate() {
        draw_text(out, proj, x, top - TEXT_LINE_GAP * i as i32, line, color)?;
    }
    Ok(())
}

fn score_text(state: &GameState) -> String {
    format!("Score: {}", state.score)
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, state: &GameState, proj: &Projection) -> std::io::Result<()> {
    draw_centre_lines(out, state, proj, ["1. Easy", "2. Medium", "3. Hard"], C_TEXT)
}

fn draw_game<W: Write>(out: &mut W, state: &GameState, proj: &Projection) -> std::io::Result<()> {
    draw_ship(out, state, proj)?;
    if state.bullet.active {
        draw_bullet(out, state, proj)?;
    }
    draw_debris(out, state, proj)?;
    draw_text(out, proj, 10, state.height - 20, &score_text(state), C_TEXT)
}

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    let score = score_text(state);
    draw_centre_lines(
        out,
        state,
        proj,
        ["Game Over", score.as_str(), "Press 'R' to restart"],
        C_GAME_OVER,
    )
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Fill the playfield box `[x0, x1] × [y0, y1]` with `glyph`.
fn fill_box<W: Write>(
    out: &mut W,
    proj: &Projection,
    (x0, y0, x1, y1): (i32, i32, i32, i32),
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let Some((left, top, right, bottom)) = proj.to_cell_rect(x0, y0, x1, y1) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(color))?;
    let span = glyph.repeat((right - left + 1) as usize);
    for row in top..=bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print(&span))?;
    }
    Ok(())
}

fn draw_ship<W: Write>(out: &mut W, state: &GameState, proj: &Projection) -> std::io::Result<()> {
    // Triangle: apex at the anchor, base 20 wide and 20 below.
    //    ▲
    //   /█\
    let s = &state.ship;
    out.queue(style::SetForegroundColor(C_SHIP))?;

    let Some((apex_col, apex_row)) = proj.to_cell(s.x, s.y) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(apex_col, apex_row))?;
    out.queue(Print("▲"))?;

    let base_y = s.y - 20;
    if let (Some((left, base_row)), Some((right, _))) = (
        proj.to_cell((s.x - 10).max(0), base_y),
        proj.to_cell((s.x + 10).min(state.width), base_y),
    ) {
        if base_row > apex_row && right > left {
            let inner = "█".repeat((right - left).saturating_sub(1) as usize);
            out.queue(cursor::MoveTo(left, base_row))?;
            out.queue(Print(format!("/{}\\", inner)))?;
        }
    }
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, state: &GameState, proj: &Projection) -> std::io::Result<()> {
    let b = &state.bullet;
    fill_box(out, proj, (b.x - 2, b.y, b.x + 2, b.y + 10), "║", C_BULLET)
}

fn draw_debris<W: Write>(out: &mut W, state: &GameState, proj: &Projection) -> std::io::Result<()> {
    let d = &state.debris;
    let e = DEBRIS_HALF_EXTENT;
    fill_box(out, proj, (d.x - e, d.y - e, d.x + e, d.y + e), "█", C_DEBRIS)
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    // Starts at column 1 and must stop short of the last column, or the
    // terminal wraps and scrolls the frame.
    let room = proj.cols.saturating_sub(2) as usize;
    if proj.rows == 0 || room == 0 {
        return Ok(());
    }
    let hint = match state.status {
        GameStatus::Menu => "1 2 3 : Choose difficulty   Q : Quit",
        GameStatus::Playing => "← → / A D : Move   SPACE : Shoot   Q : Quit",
        GameStatus::GameOver => "R : Restart   Q : Quit",
    };
    out.queue(cursor::MoveTo(1, proj.rows - 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint.chars().take(room).collect::<String>()))?;
    Ok(())
}
