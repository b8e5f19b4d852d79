use alien_invasion::error::GameError;
use alien_invasion::settings::*;

// ── defaults ──────────────────────────────────────────────────────────────────

#[test]
fn defaults_are_valid_and_current_matches_baseline() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert_eq!(s.current, s.baseline);
    assert_eq!((s.screen_width, s.screen_height), (1200, 650));
    assert_eq!(s.laser_max_num, 3);
    assert_eq!(s.ship_limit, 3);
}

// ── increase_speed / initialize_dynamic_settings ──────────────────────────────

#[test]
fn increase_speed_twice_scales_by_square() {
    let mut s = Settings::default();
    let base = s.baseline;
    s.increase_speed();
    s.increase_speed();

    let k = s.speed_up_scale * s.speed_up_scale;
    assert!((s.current.ship_speed - base.ship_speed * k).abs() < 1e-4);
    assert!((s.current.laser_speed - base.laser_speed * k).abs() < 1e-4);
    assert!((s.current.alien_speed - base.alien_speed * k).abs() < 1e-4);

    let expected = (s.score_scale * s.score_scale * base.alien_points as f32).floor() as u32;
    assert_eq!(s.current.alien_points, expected); // 112
}

#[test]
fn increase_speed_truncates_points_each_step() {
    let mut s = Settings::default();
    s.increase_speed();
    assert_eq!(s.current.alien_points, 75);
    s.increase_speed();
    assert_eq!(s.current.alien_points, 112);
}

#[test]
fn increase_speed_leaves_static_values_alone() {
    let mut s = Settings::default();
    s.increase_speed();
    assert_eq!(s.baseline, DynamicSettings::default());
    assert_eq!(s.fleet_drop_speed, 10);
    assert_eq!(s.current.fleet_direction, FleetDirection::Right);
}

#[test]
fn alien_points_saturate_instead_of_wrapping() {
    let mut s = Settings::default();
    s.score_scale = 100.0;
    assert!(s.validate().is_ok());
    for _ in 0..8 {
        s.increase_speed();
    }
    assert_eq!(s.current.alien_points, u32::MAX);
}

#[test]
fn initialize_dynamic_settings_restores_baseline() {
    let mut s = Settings::default();
    for _ in 0..5 {
        s.increase_speed();
    }
    s.initialize_dynamic_settings();
    assert_eq!(s.current, s.baseline);
}

#[test]
fn fleet_direction_flips_and_signs() {
    assert_eq!(FleetDirection::Right.flipped(), FleetDirection::Left);
    assert_eq!(FleetDirection::Left.flipped(), FleetDirection::Right);
    assert_eq!(FleetDirection::Right.sign(), 1.0);
    assert_eq!(FleetDirection::Left.sign(), -1.0);
}

// ── validate ──────────────────────────────────────────────────────────────────

#[test]
fn zero_ship_limit_rejected() {
    let mut s = Settings::default();
    s.ship_limit = 0;
    assert!(matches!(
        s.validate(),
        Err(GameError::Config { field: "ship_limit", .. })
    ));
}

#[test]
fn screen_too_small_for_one_alien_rejected() {
    let mut s = Settings::default();
    s.screen_width = 150;
    s.screen_height = 600;
    let err = s.validate().unwrap_err();
    assert!(matches!(err, GameError::Config { field: "alien_width", .. }));
    assert!(err.to_string().contains("150x600"));
}

#[test]
fn zero_laser_cap_rejected() {
    let mut s = Settings::default();
    s.laser_max_num = 0;
    assert!(matches!(
        s.validate(),
        Err(GameError::Config { field: "laser_max_num", .. })
    ));
}

#[test]
fn non_positive_sizes_rejected() {
    let mut s = Settings::default();
    s.alien_width = 0;
    let err = s.validate().unwrap_err();
    assert_eq!(err.to_string(), "invalid setting alien_width: must be positive, got 0");
}

#[test]
fn shrinking_scale_rejected() {
    let mut s = Settings::default();
    s.speed_up_scale = 0.9;
    assert!(s.validate().is_err());
    s.speed_up_scale = f32::NAN;
    assert!(s.validate().is_err());
}

// ── from_env ──────────────────────────────────────────────────────────────────

// The only test in this binary that touches the environment.
#[test]
fn from_env_overrides_and_validates() {
    std::env::set_var("INVASION_SHIP_LIMIT", "5");
    std::env::set_var("INVASION_ALIEN_POINTS", "20");
    std::env::set_var("INVASION_LASER_MAX", "not-a-number");
    let s = Settings::from_env().unwrap();
    assert_eq!(s.ship_limit, 5);
    assert_eq!(s.baseline.alien_points, 20);
    assert_eq!(s.current.alien_points, 20);
    assert_eq!(s.laser_max_num, 3); // unparseable → default

    std::env::set_var("INVASION_SHIP_LIMIT", "0");
    assert!(Settings::from_env().is_err());

    std::env::remove_var("INVASION_SHIP_LIMIT");
    std::env::remove_var("INVASION_ALIEN_POINTS");
    std::env::remove_var("INVASION_LASER_MAX");
}
