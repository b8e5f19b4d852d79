//! Overlap detection between lasers, aliens, the ship and the screen bottom.
//!
//! Detection runs against the positions at the start of the call; removal
//! happens afterwards in a single compaction pass, so neither collection is
//! mutated while it is being scanned.

use crate::entities::Ship;
use crate::fleet::Fleet;
use crate::geometry::Rect;
use crate::lasers::Lasers;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaserHits {
    /// Aliens removed (each counted once, however many lasers hit it).
    pub aliens_destroyed: usize,
    /// Lasers removed (every laser that overlapped at least one alien).
    pub lasers_consumed: usize,
}

/// Remove every laser that overlaps an alien and every alien that overlaps
/// a laser.
pub fn resolve_laser_hits(lasers: &mut Lasers, fleet: &mut Fleet) -> LaserHits {
    let mut laser_hit = vec![false; lasers.live.len()];
    let mut alien_hit = vec![false; fleet.aliens.len()];

    for (li, laser) in lasers.live.iter().enumerate() {
        for (ai, alien) in fleet.aliens.iter().enumerate() {
            if laser.rect.collides(&alien.rect) {
                laser_hit[li] = true;
                alien_hit[ai] = true;
            }
        }
    }

    let hits = LaserHits {
        aliens_destroyed: alien_hit.iter().filter(|&&h| h).count(),
        lasers_consumed: laser_hit.iter().filter(|&&h| h).count(),
    };

    if hits.lasers_consumed > 0 {
        let mut flags = laser_hit.into_iter();
        lasers.live.retain(|_| !flags.next().unwrap_or(false));
        let mut flags = alien_hit.into_iter();
        fleet.aliens.retain(|_| !flags.next().unwrap_or(false));
    }
    hits
}

/// Any alien touching the ship.
pub fn resolve_ship_hit(ship: &Ship, fleet: &Fleet) -> bool {
    fleet.first_collision(&ship.rect).is_some()
}

/// Any alien whose bottom edge reached the bottom of `screen`.
pub fn resolve_bottom_breach(fleet: &Fleet, screen: &Rect) -> bool {
    fleet
        .aliens
        .iter()
        .any(|a| a.rect.bottom() >= screen.bottom())
}
