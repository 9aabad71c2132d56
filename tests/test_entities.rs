use debris_shooter::compute::{init_state, tick};
use debris_shooter::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn menu_parks_debris_on_top_edge_without_speed() {
    let s = init_state(800, 600);
    assert_eq!(s.status, GameStatus::Menu);
    assert_eq!(s.debris, Debris { x: 400, y: 600, speed: 0 });

    // Ticking on the menu must leave it parked
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(tick(&s, &mut rng).debris, s.debris);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        status: GameStatus::Playing,
        difficulty: Difficulty::Medium,
        score: 0,
        ship: Ship { x: 400, y: 50 },
        bullet: Bullet { x: 0, y: 0, active: false },
        debris: Debris { x: 100, y: 600, speed: 10 },
        width: 800,
        height: 600,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.ship.x = 99;
    cloned.score = 999;
    cloned.bullet.active = true;
    cloned.debris.y = 0;

    assert_eq!(original.ship.x, 400);
    assert_eq!(original.score, 0);
    assert!(!original.bullet.active);
    assert_eq!(original.debris.y, 600);
}
