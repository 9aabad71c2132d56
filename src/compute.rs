//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG and log output.

use crossterm::event::KeyCode;
use log::{debug, info};
use rand::Rng;

use crate::entities::{Bullet, Debris, Difficulty, GameState, GameStatus, Ship};

// ── Tuning ────────────────────────────────────────────────────────────────────

pub const PLAYFIELD_WIDTH: i32 = 800;
pub const PLAYFIELD_HEIGHT: i32 = 600;

pub const SHIP_Y: i32 = 50;
pub const SHIP_STEP: i32 = 10;
pub const BULLET_SPEED: i32 = 15;
/// Bullets leave the ship this far above its apex.
pub const BULLET_OFFSET: i32 = 10;
/// Half-width and half-height of the debris hit box.
pub const DEBRIS_HALF_EXTENT: i32 = 10;
pub const SCORE_PER_DEBRIS: u32 = 10;

// ── Difficulty table ──────────────────────────────────────────────────────────

pub fn debris_speed(difficulty: Difficulty) -> i32 {
    match difficulty {
        Difficulty::Easy => 5,
        Difficulty::Medium => 10,
        Difficulty::Hard => 15,
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state shown on launch: menu open, nothing in flight.
pub fn init_state(width: i32, height: i32) -> GameState {
    GameState {
        status: GameStatus::Menu,
        difficulty: Difficulty::Easy,
        score: 0,
        ship: start_ship(width),
        bullet: Bullet { x: 0, y: 0, active: false },
        debris: Debris { x: width / 2, y: height, speed: 0 },
        width,
        height,
    }
}

fn start_ship(width: i32) -> Ship {
    Ship { x: width / 2, y: SHIP_Y }
}

/// Place the debris at a random column on the top edge, with the fall speed
/// of the current difficulty.
pub fn spawn_debris(state: &GameState, rng: &mut impl Rng) -> GameState {
    let x = rng.gen_range(0..state.width.max(1));
    GameState {
        debris: Debris {
            x,
            y: state.height,
            speed: debris_speed(state.difficulty),
        },
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Route a key press to the handler for the current screen.
pub fn on_key(state: &GameState, key: KeyCode, rng: &mut impl Rng) -> GameState {
    match state.status {
        GameStatus::Menu => menu_key(state, key, rng),
        GameStatus::Playing => playing_key(state, key),
        GameStatus::GameOver => game_over_key(state, key),
    }
}

fn menu_key(state: &GameState, key: KeyCode, rng: &mut impl Rng) -> GameState {
    match key {
        KeyCode::Char('1') => start_game(state, Difficulty::Easy, rng),
        KeyCode::Char('2') => start_game(state, Difficulty::Medium, rng),
        KeyCode::Char('3') => start_game(state, Difficulty::Hard, rng),
        _ => state.clone(),
    }
}

fn playing_key(state: &GameState, key: KeyCode) -> GameState {
    match key {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => move_ship_left(state),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => move_ship_right(state),
        KeyCode::Char(' ') => fire(state),
        _ => state.clone(),
    }
}

fn game_over_key(state: &GameState, key: KeyCode) -> GameState {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => reset(state),
        _ => state.clone(),
    }
}

/// Leave the menu: fix the difficulty and drop the first piece of debris.
pub fn start_game(state: &GameState, difficulty: Difficulty, rng: &mut impl Rng) -> GameState {
    info!("starting game on {:?}", difficulty);
    let state = GameState {
        status: GameStatus::Playing,
        difficulty,
        ..state.clone()
    };
    spawn_debris(&state, rng)
}

pub fn move_ship_left(state: &GameState) -> GameState {
    let x = (state.ship.x - SHIP_STEP).max(0);
    GameState {
        ship: Ship { x, ..state.ship.clone() },
        ..state.clone()
    }
}

pub fn move_ship_right(state: &GameState) -> GameState {
    let x = (state.ship.x + SHIP_STEP).min(state.width);
    GameState {
        ship: Ship { x, ..state.ship.clone() },
        ..state.clone()
    }
}

/// Launch the bullet from the ship's apex.  Ignored while one is in flight.
pub fn fire(state: &GameState) -> GameState {
    if state.bullet.active {
        return state.clone();
    }
    GameState {
        bullet: Bullet {
            x: state.ship.x,
            y: state.ship.y + BULLET_OFFSET,
            active: true,
        },
        ..state.clone()
    }
}

/// Back to the menu with a fresh score.  The difficulty is chosen again there.
pub fn reset(state: &GameState) -> GameState {
    info!("reset from {:?} with score {}", state.status, state.score);
    GameState {
        status: GameStatus::Menu,
        score: 0,
        ship: start_ship(state.width),
        bullet: Bullet { active: false, ..state.bullet.clone() },
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  Only the `Playing` screen moves;
/// every other status is returned untouched.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    // ── 1. Move bullet ───────────────────────────────────────────────────────
    let mut bullet = state.bullet.clone();
    if bullet.active {
        bullet.y += BULLET_SPEED;
        if bullet.y > state.height {
            bullet.active = false;
        }
    }

    // ── 2. Move debris ───────────────────────────────────────────────────────
    let moved = GameState {
        bullet,
        debris: Debris {
            y: state.debris.y - state.debris.speed,
            ..state.debris.clone()
        },
        ..state.clone()
    };
    let moved = if moved.debris.y < 0 {
        debug!("debris left the playfield at x={}", moved.debris.x);
        spawn_debris(&moved, rng)
    } else {
        moved
    };

    // ── 3. Collisions ────────────────────────────────────────────────────────
    check_collision(&moved, rng)
}

/// True when `(x, y)` lies inside the debris hit box, edges included.
fn inside_debris(debris: &Debris, x: i32, y: i32) -> bool {
    (x - debris.x).abs() <= DEBRIS_HALF_EXTENT && (y - debris.y).abs() <= DEBRIS_HALF_EXTENT
}

/// Bullet against debris first, then the ship's apex against whatever debris
/// is left on the field.
pub fn check_collision(state: &GameState, rng: &mut impl Rng) -> GameState {
    let state = if state.bullet.active
        && inside_debris(&state.debris, state.bullet.x, state.bullet.y)
    {
        let score = state.score.saturating_add(SCORE_PER_DEBRIS);
        info!("debris destroyed, score {}", score);
        let hit = GameState {
            bullet: Bullet { active: false, ..state.bullet.clone() },
            score,
            ..state.clone()
        };
        spawn_debris(&hit, rng)
    } else {
        state.clone()
    };

    if inside_debris(&state.debris, state.ship.x, state.ship.y) {
        info!("ship hit at x={}, final score {}", state.ship.x, state.score);
        return GameState {
            status: GameStatus::GameOver,
            ..state
        };
    }
    state
}
