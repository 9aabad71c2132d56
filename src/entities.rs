//! All game entity types — pure data, no logic.
//!
//! Coordinates live in the logical playfield: origin bottom-left, y grows
//! upward, `width` × `height` units regardless of the terminal size.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Menu,
    Playing,
    GameOver,
}

// ── Ship ──────────────────────────────────────────────────────────────────────

/// The player's ship.  `(x, y)` is the apex of the drawn triangle and the
/// only point tested against debris.
#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: i32,
    pub y: i32,
}

// ── Projectile ────────────────────────────────────────────────────────────────

/// The single player bullet.  Position is meaningless while `active` is false.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub active: bool,
}

// ── Debris ────────────────────────────────────────────────────────────────────

/// The single falling obstacle.  `speed` is playfield units per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Debris {
    pub x: i32,
    pub y: i32,
    pub speed: i32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub status: GameStatus,
    pub difficulty: Difficulty,
    pub score: u32,
    pub ship: Ship,
    pub bullet: Bullet,
    pub debris: Debris,
    /// Playfield width in logical units.
    pub width: i32,
    /// Playfield height in logical units.
    pub height: i32,
}
