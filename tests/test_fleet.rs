mod support;

use alien_invasion::fleet::*;
use alien_invasion::settings::{FleetDirection, Settings};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use support::{settings, DEFAULT_FLEET_SIZE};

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn full_fleet(s: &Settings) -> Fleet {
    let mut fleet = Fleet::new(s);
    fleet.create_fleet(s);
    fleet
}

// ── create_fleet ──────────────────────────────────────────────────────────────

#[test]
fn default_fleet_is_nine_by_five() {
    let s = settings();
    let fleet = full_fleet(&s);
    assert_eq!(fleet.len(), DEFAULT_FLEET_SIZE);

    let first = &fleet.aliens[0];
    assert_eq!((first.rect.x, first.rect.y), (s.alien_width, s.alien_height));
    let second = &fleet.aliens[1];
    assert_eq!(second.rect.x, 3 * s.alien_width); // 2× width spacing
    let next_row = &fleet.aliens[9];
    assert_eq!(next_row.rect.y, 3 * s.alien_height); // 2× height spacing
}

#[test]
fn fleet_layout_stays_inside_margins_for_random_screens() {
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let mut s = settings();
        s.screen_width = rng.gen_range(200..2000);
        s.screen_height = rng.gen_range(200..1200);
        s.alien_width = rng.gen_range(5..80);
        s.alien_height = rng.gen_range(5..80);

        let fleet = full_fleet(&s);
        for alien in &fleet.aliens {
            let r = alien.rect;
            assert!(r.x >= s.alien_width);
            assert!(r.x <= s.screen_width - 2 * s.alien_width);
            assert!(r.y >= s.alien_height);
            assert!(r.y <= s.screen_height - 3 * s.alien_height);
        }
        for (i, a) in fleet.aliens.iter().enumerate() {
            for b in &fleet.aliens[i + 1..] {
                assert!(!a.rect.collides(&b.rect), "overlapping start positions");
            }
        }
    }
}

#[test]
fn tiny_screen_gives_empty_formation() {
    let mut s = settings();
    s.screen_width = 100;
    s.screen_height = 100;
    assert!(formation(&s).is_empty());
}

#[test]
fn create_fleet_keeps_current_direction() {
    let s = settings();
    let mut fleet = full_fleet(&s);
    fleet.change_fleet_direction(&s);
    fleet.create_fleet(&s);
    assert_eq!(fleet.direction, FleetDirection::Left);
    assert!(fleet.aliens.iter().all(|a| a.direction == FleetDirection::Left));
}

// ── edges & movement ──────────────────────────────────────────────────────────

#[test]
fn update_moves_every_alien_by_the_same_step() {
    let s = settings();
    let mut fleet = full_fleet(&s);
    let before: Vec<i32> = fleet.aliens.iter().map(|a| a.rect.x).collect();
    fleet.update_fleet(&s);
    for (a, x0) in fleet.aliens.iter().zip(before) {
        assert_eq!(a.rect.x, x0 + 1);
    }
}

#[test]
fn no_edge_contact_means_no_drop() {
    let s = settings();
    let mut fleet = full_fleet(&s);
    let ys: Vec<i32> = fleet.aliens.iter().map(|a| a.rect.y).collect();
    assert!(!fleet.check_fleet_edges(&s));
    assert_eq!(fleet.aliens.iter().map(|a| a.rect.y).collect::<Vec<_>>(), ys);
    assert_eq!(fleet.direction, FleetDirection::Right);
}

#[test]
fn one_alien_at_edge_drops_and_reverses_whole_fleet() {
    let s = settings();
    let mut fleet = full_fleet(&s);
    let ys: Vec<i32> = fleet.aliens.iter().map(|a| a.rect.y).collect();

    // Only the last alien is pushed onto the right edge.
    let last = fleet.aliens.last_mut().unwrap();
    last.rect.x = s.screen_width - s.alien_width;
    last.x = last.rect.x as f32;

    assert!(fleet.check_fleet_edges(&s));
    assert_eq!(fleet.direction, FleetDirection::Left);
    for (a, y0) in fleet.aliens.iter().zip(ys) {
        assert_eq!(a.rect.y, y0 + s.fleet_drop_speed);
        assert_eq!(a.direction, FleetDirection::Left);
    }
}

#[test]
fn several_aliens_at_edge_still_drop_once() {
    let s = settings();
    let mut fleet = full_fleet(&s);
    for alien in fleet.aliens.iter_mut() {
        alien.rect.x = 0;
        alien.x = 0.0;
    }
    let y0 = fleet.aliens[0].rect.y;
    fleet.check_fleet_edges(&s);
    assert_eq!(fleet.aliens[0].rect.y, y0 + s.fleet_drop_speed);
    assert_eq!(fleet.direction, FleetDirection::Left);
}

#[test]
fn fleet_marches_right_then_turns_back() {
    let s = settings();
    let mut fleet = full_fleet(&s);
    // Rightmost column starts at x=1020; it reaches the edge after 120 steps.
    for _ in 0..121 {
        fleet.update_fleet(&s);
    }
    assert_eq!(fleet.direction, FleetDirection::Left);
    assert_eq!(fleet.aliens[0].rect.y, s.alien_height + s.fleet_drop_speed);
}

#[test]
fn reset_direction_uses_settings() {
    let s = settings();
    let mut fleet = full_fleet(&s);
    fleet.change_fleet_direction(&s);
    fleet.reset_direction(&s);
    assert_eq!(fleet.direction, FleetDirection::Right);
}

#[test]
fn new_and_reset_agree_on_starting_direction() {
    let mut s = settings();
    s.baseline.fleet_direction = FleetDirection::Left;
    let mut fleet = Fleet::new(&s);
    assert_eq!(fleet.direction, FleetDirection::Left);

    fleet.change_fleet_direction(&s);
    fleet.reset_direction(&s);
    assert_eq!(fleet.direction, FleetDirection::Left);
}
