//! Rotating hex wireframe below the horizon (stateless).

use std::f32::consts::PI;

use neonfolio_canvas::{Paint, Surface, Transform};
use neonfolio_core::{PointerState, ViewportState};

use crate::animations::grid::GridLayout;
use crate::{palette, tuning};

/// Flat-top hexagon outline centered on `(cx, cy)`.
fn hex_points(cx: f32, cy: f32, r: f32) -> [(f32, f32); 6] {
    let mut pts = [(0.0, 0.0); 6];
    for (k, p) in pts.iter_mut().enumerate() {
        let ang = PI / 3.0 * k as f32;
        *p = (cx + ang.cos() * r, cy + ang.sin() * r);
    }
    pts
}

pub fn render(
    surface: &mut Surface,
    viewport: ViewportState,
    layout: GridLayout,
    pointer: PointerState,
    t_ms: f32,
) {
    let (w, h) = (viewport.width, viewport.height);
    let t = t_ms * 0.0004;
    let rot = t * 0.35;
    let pivot_x = w / 2.0 + pointer.x * tuning::HEX_SWAY;
    let pivot_y = (h + layout.horizon) / 2.0 + tuning::HEX_PIVOT_DROP;

    surface.push_transform(Transform::rotation_about(rot, pivot_x, pivot_y));
    let paint = Paint::Solid(palette::CYAN.with_alpha(0.06));

    let size = tuning::HEX_SIZE;
    let step_x = size * 1.5;
    let step_y = 3.0f32.sqrt() * size * 0.5;
    let mut row = 0u32;
    let mut y = layout.horizon + tuning::HEX_TOP_OFFSET;
    while y < h + size {
        let offset_x = if row % 2 == 1 { size / 2.0 } else { 0.0 };
        let mut x = -size;
        while x < w + size {
            surface.stroke_polyline(&hex_points(x + offset_x, y, size * 0.5), true, 1.0, &paint);
            x += step_x;
        }
        row += 1;
        y += step_y;
    }
    surface.pop_transform();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexagon_vertices_lie_on_the_radius() {
        for (x, y) in hex_points(10.0, 20.0, 5.0) {
            let d = ((x - 10.0).powi(2) + (y - 20.0).powi(2)).sqrt();
            assert!((d - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn field_draws_only_below_the_horizon_band() {
        let vp = ViewportState::new(120.0, 100.0, 1.0);
        let layout = GridLayout::new(vp, PointerState::default());
        let mut s = Surface::new(vp);
        render(&mut s, vp, layout, PointerState::default(), 0.0);

        let lit_below = (0..120)
            .any(|x| (60..100).any(|y| s.pixel(x, y).iter().any(|&c| c > 0.0)));
        assert!(lit_below);
        // The sky well above the horizon stays untouched at zero rotation.
        let lit_top = (0..120).any(|x| (0..20).any(|y| s.pixel(x, y).iter().any(|&c| c > 0.0)));
        assert!(!lit_top);
    }
}
