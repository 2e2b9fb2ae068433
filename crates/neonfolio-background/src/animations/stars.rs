//! Parallax starfield (stateful).

use neonfolio_canvas::{Paint, Surface};
use neonfolio_core::{PointerState, ViewportState};
use rand::Rng;

use crate::{palette, tuning};

/// One background star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Position in logical pixels.
    pub x: f32,
    pub y: f32,
    /// Radius.
    pub size: f32,
    /// Speed multiplier, also the twinkle frequency.
    pub speed: f32,
}

/// Seed the star collection with randomized positions, sizes and speeds.
/// An empty viewport seeds nothing.
pub fn seed<R: Rng>(rng: &mut R, viewport: ViewportState) -> Vec<Star> {
    if viewport.is_empty() {
        return Vec::new();
    }
    (0..tuning::STAR_COUNT)
        .map(|_| Star {
            x: rng.gen::<f32>() * viewport.width,
            y: rng.gen::<f32>() * viewport.height,
            size: tuning::STAR_SIZE_MIN + rng.gen::<f32>() * tuning::STAR_SIZE_SPAN,
            speed: tuning::STAR_SPEED_MIN + rng.gen::<f32>() * tuning::STAR_SPEED_SPAN,
        })
        .collect()
}

/// Draw every star with its twinkle alpha and the pointer parallax offset.
pub fn render(surface: &mut Surface, stars: &[Star], pointer: PointerState, t: f32) {
    let drift_x = pointer.x * tuning::STAR_DRIFT;
    let drift_y = pointer.y * tuning::STAR_DRIFT;
    for s in stars {
        let twinkle = 0.5 + ((t * 0.003 + s.x + s.y) * s.speed).sin() * 0.5;
        let alpha = (0.35 + twinkle * 0.4) * palette::STAR_TINT.a;
        surface.fill_circle(
            s.x + drift_x,
            s.y + drift_y,
            s.size,
            &Paint::Solid(palette::STAR_TINT.with_alpha(alpha)),
        );
    }
}

/// Advance the downward drift and wrap stars that left the bottom edge.
pub fn update(stars: &mut [Star], height: f32) {
    for s in stars {
        s.y += s.speed * tuning::STAR_FALL;
        if s.y >= height + tuning::STAR_WRAP_MARGIN {
            s.y = -tuning::STAR_WRAP_MARGIN;
        }
    }
}
