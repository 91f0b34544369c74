//! TurnTracker: next / back / reverse / peek и границы индекса.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use uno_engine::engine::turn::{Direction, TurnTracker};

#[test]
fn next_wraps_around() {
    let mut t = TurnTracker::new(3);
    assert_eq!(t.current(), 0);
    assert_eq!(t.direction(), Direction::Forward);

    t.next();
    t.next();
    assert_eq!(t.current(), 2);
    t.next();
    assert_eq!(t.current(), 0);
}

#[test]
fn back_undoes_next_in_both_directions() {
    let mut t = TurnTracker::new(5);
    t.next();
    t.back();
    assert_eq!(t.current(), 0);

    t.reverse_direction();
    assert_eq!(t.current(), 0, "при 5 игроках разворот не двигает указатель");
    t.next();
    assert_eq!(t.current(), 4);
    t.back();
    assert_eq!(t.current(), 0);
}

#[test]
fn peek_does_not_mutate() {
    let mut t = TurnTracker::new(4);
    t.next();
    assert_eq!(t.peek_next(), 2);
    assert_eq!(t.peek_prev(), 0);
    assert_eq!(t.current(), 1);

    t.reverse_direction();
    assert_eq!(t.peek_next(), 0);
    assert_eq!(t.peek_prev(), 2);
}

/// Вдвоём разворот эквивалентен пропуску хода.
#[test]
fn reverse_with_two_players_moves_on() {
    let mut t = TurnTracker::new(2);
    t.reverse_direction();
    assert_eq!(t.direction(), Direction::Backward);
    assert_eq!(t.current(), 1);

    // Ещё одна обычная передача хода – снова ходит игрок 0.
    t.next();
    assert_eq!(t.current(), 0);
}

#[test]
fn jump_to_ignores_out_of_range() {
    let mut t = TurnTracker::new(3);
    t.jump_to(2);
    assert_eq!(t.current(), 2);
    t.jump_to(7);
    assert_eq!(t.current(), 2);
}

/// current всегда в [0, num_players) при любой последовательности операций.
#[test]
fn current_stays_in_bounds_for_random_sequences() {
    let mut rng = StdRng::seed_from_u64(7);

    for n in 2..=10 {
        let mut t = TurnTracker::new(n);
        for _ in 0..1_000 {
            match rng.gen_range(0..3) {
                0 => t.next(),
                1 => t.back(),
                _ => t.reverse_direction(),
            }
            assert!(t.current() < n, "n={n}, current={}", t.current());
            assert!(t.peek_next() < n);
            assert!(t.peek_prev() < n);
        }
    }
}
