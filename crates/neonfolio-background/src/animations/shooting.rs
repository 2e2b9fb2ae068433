//! Shooting stars (stateful, probabilistically spawned).

use std::f32::consts::FRAC_PI_4;

use neonfolio_canvas::{Paint, Surface};
use neonfolio_core::ViewportState;
use rand::Rng;

use crate::{palette, tuning};

/// One shooting star, alive from spawn until it expires or leaves the
/// viewport margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShootingStar {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Age in frames.
    pub life: f32,
    pub max_life: f32,
}

/// Consider spawning one star this frame. The population cap is checked
/// first, so it can never be exceeded regardless of the spawn roll.
pub fn maybe_spawn<R: Rng>(list: &mut Vec<ShootingStar>, viewport: ViewportState, rng: &mut R) {
    if viewport.is_empty() || list.len() >= tuning::SHOOTING_STAR_CAP {
        return;
    }
    if rng.gen::<f32>() >= tuning::SHOOTING_STAR_CHANCE {
        return;
    }
    let from_left = rng.gen::<f32>() < 0.5;
    let start_x = if from_left {
        -tuning::SHOOT_SPAWN_MARGIN
    } else {
        viewport.width + tuning::SHOOT_SPAWN_MARGIN
    };
    let start_y = rng.gen::<f32>() * viewport.height * 0.5;
    let speed = tuning::SHOOT_SPEED_MIN + rng.gen::<f32>() * tuning::SHOOT_SPEED_SPAN;
    let dir = if from_left { 1.0 } else { -1.0 };
    list.push(ShootingStar {
        x: start_x,
        y: start_y,
        vx: dir * FRAC_PI_4.cos() * speed,
        vy: FRAC_PI_4.sin() * speed * tuning::SHOOT_VY_FACTOR,
        life: 0.0,
        max_life: tuning::SHOOT_LIFE_MIN + rng.gen::<f32>() * tuning::SHOOT_LIFE_SPAN,
    });
}

/// Advance positions and ages by one frame.
pub fn update(list: &mut [ShootingStar]) {
    for s in list {
        s.x += s.vx;
        s.y += s.vy;
        s.life += 1.0;
    }
}

/// A star is retired iff it has outlived `max_life` or its position left
/// the viewport by the exit margin.
pub fn expired(s: &ShootingStar, viewport: ViewportState) -> bool {
    s.life >= s.max_life
        || s.x < -tuning::SHOOT_EXIT_MARGIN
        || s.x > viewport.width + tuning::SHOOT_EXIT_MARGIN
        || s.y > viewport.height + tuning::SHOOT_EXIT_MARGIN
}

/// Remove expired stars in place; order is irrelevant.
pub fn retire(list: &mut Vec<ShootingStar>, viewport: ViewportState) {
    list.retain(|s| !expired(s, viewport));
}

/// Draw each star as a fading tail segment plus a glowing head.
pub fn render(surface: &mut Surface, list: &[ShootingStar]) {
    for s in list {
        let fade = (1.0 - s.life / s.max_life).max(0.0);
        surface.stroke_line(
            s.x,
            s.y,
            s.x - s.vx * tuning::SHOOT_TAIL_STEPS,
            s.y - s.vy * tuning::SHOOT_TAIL_STEPS,
            tuning::SHOOT_TAIL_WIDTH,
            &Paint::Solid(palette::WHITE.with_alpha(0.2 * fade)),
        );
        surface.fill_circle(
            s.x,
            s.y,
            tuning::SHOOT_HEAD_RADIUS,
            &Paint::Solid(palette::CYAN.with_alpha(0.25 * fade)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn viewport() -> ViewportState {
        ViewportState::new(200.0, 100.0, 1.0)
    }

    fn star(x: f32, y: f32, life: f32, max_life: f32) -> ShootingStar {
        ShootingStar {
            x,
            y,
            vx: 1.0,
            vy: 0.5,
            life,
            max_life,
        }
    }

    #[test]
    fn population_never_exceeds_the_cap() {
        // A zero RNG rolls below the spawn chance every frame, so the cap
        // is the only thing holding the population down.
        let mut rng = StepRng::new(0, 0);
        let mut list = Vec::new();
        for _ in 0..500 {
            assert!(list.len() <= tuning::SHOOTING_STAR_CAP);
            maybe_spawn(&mut list, viewport(), &mut rng);
            assert!(list.len() <= tuning::SHOOTING_STAR_CAP);
        }
        assert_eq!(list.len(), tuning::SHOOTING_STAR_CAP);
    }

    #[test]
    fn expires_exactly_on_max_life_or_out_of_bounds() {
        let vp = viewport();
        assert!(expired(&star(50.0, 50.0, 90.0, 90.0), vp));
        assert!(!expired(&star(50.0, 50.0, 89.0, 90.0), vp));

        assert!(expired(&star(-61.0, 50.0, 0.0, 90.0), vp));
        assert!(!expired(&star(-59.0, 50.0, 0.0, 90.0), vp));

        assert!(expired(&star(261.0, 50.0, 0.0, 90.0), vp));
        assert!(expired(&star(50.0, 161.0, 0.0, 90.0), vp));

        // Above the top edge is not an exit: stars arc downward.
        assert!(!expired(&star(50.0, -40.0, 0.0, 90.0), vp));
    }

    #[test]
    fn retire_removes_only_expired_stars() {
        let vp = viewport();
        let mut list = vec![
            star(50.0, 50.0, 90.0, 90.0),
            star(50.0, 50.0, 10.0, 90.0),
            star(-100.0, 50.0, 0.0, 90.0),
        ];
        retire(&mut list, vp);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].life, 10.0);
    }

    #[test]
    fn update_applies_velocity_and_age() {
        let mut list = vec![star(10.0, 20.0, 5.0, 90.0)];
        update(&mut list);
        assert_eq!(list[0].x, 11.0);
        assert_eq!(list[0].y, 20.5);
        assert_eq!(list[0].life, 6.0);
    }

    #[test]
    fn spawned_stars_start_outside_a_side_edge_and_move_inward() {
        let mut rng = StepRng::new(0, 0);
        let mut list = Vec::new();
        maybe_spawn(&mut list, viewport(), &mut rng);
        assert_eq!(list.len(), 1);
        let s = list[0];
        assert!(s.x < 0.0 || s.x > 200.0);
        // Moving toward the visible area, drifting downward.
        assert!((s.x < 0.0) == (s.vx > 0.0));
        assert!(s.vy > 0.0);
        assert!(s.max_life >= tuning::SHOOT_LIFE_MIN);
    }

    #[test]
    fn no_spawn_on_empty_viewport() {
        let mut rng = StepRng::new(0, 0);
        let mut list = Vec::new();
        maybe_spawn(&mut list, ViewportState::default(), &mut rng);
        assert!(list.is_empty());
    }
}
