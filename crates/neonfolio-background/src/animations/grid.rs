//! Perspective ground grid (stateless).

use neonfolio_canvas::{GradientStop, Paint, RadialGradient, Surface};
use neonfolio_core::{PointerState, ViewportState};

use crate::{palette, tuning};

/// Per-frame grid geometry: the pointer-swayed vanishing point and
/// horizon. Shared with the hex field and the glitch band placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub vp_x: f32,
    pub horizon: f32,
}

impl GridLayout {
    pub fn new(viewport: ViewportState, pointer: PointerState) -> Self {
        Self {
            vp_x: viewport.width / 2.0 + pointer.x * tuning::GRID_SWAY_X,
            horizon: viewport.height * tuning::GRID_HORIZON_FRAC + pointer.y * tuning::GRID_SWAY_Y,
        }
    }
}

pub fn render(surface: &mut Surface, viewport: ViewportState, layout: GridLayout) {
    let (w, h) = (viewport.width, viewport.height);

    // Radial glow around the vanishing point.
    let glow = RadialGradient::new(
        (layout.vp_x, layout.horizon),
        tuning::GLOW_INNER,
        w * 0.7,
        vec![
            GradientStop::new(0.0, palette::CYAN.with_alpha(0.12)),
            GradientStop::new(1.0, palette::CYAN.with_alpha(0.0)),
        ],
    );
    surface.fill_rect(0.0, 0.0, w, h, &Paint::Radial(glow));

    // Horizontal lines, quadratically eased so they cluster at the
    // horizon and spread toward the viewer.
    for i in 1..=tuning::GRID_ROWS {
        let t = i as f32 / tuning::GRID_ROWS as f32;
        let y = row_y(layout, h, i);
        let alpha = 0.08 + (1.0 - t) * 0.12;
        surface.stroke_line(
            0.0,
            y,
            w,
            y,
            1.0,
            &Paint::Solid(palette::CYAN.with_alpha(alpha)),
        );
    }

    // Spokes converging on the vanishing point, fading with distance
    // from center.
    let spacing = w * tuning::GRID_SPACING_FRAC;
    for i in -tuning::GRID_COLS..=tuning::GRID_COLS {
        let x_bottom = layout.vp_x + i as f32 * spacing;
        let falloff = (i.abs() as f32 / tuning::GRID_COLS as f32).min(1.0);
        let alpha = 0.08 + (1.0 - falloff) * 0.12;
        surface.stroke_line(
            layout.vp_x,
            layout.horizon,
            x_bottom,
            h,
            1.0,
            &Paint::Solid(palette::MAGENTA.with_alpha(alpha)),
        );
    }
}

/// Easing used for the horizontal lines; exposed for the tests.
pub fn row_y(layout: GridLayout, height: f32, i: usize) -> f32 {
    let t = i as f32 / tuning::GRID_ROWS as f32;
    layout.horizon + (height - layout.horizon) * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanishing_point_sways_with_the_pointer() {
        let vp = ViewportState::new(200.0, 100.0, 1.0);
        let centered = GridLayout::new(vp, PointerState::default());
        assert_eq!(centered.vp_x, 100.0);
        assert_eq!(centered.horizon, 42.0);

        let right = GridLayout::new(vp, PointerState { x: 1.0, y: -1.0 });
        assert_eq!(right.vp_x, 100.0 + tuning::GRID_SWAY_X);
        assert_eq!(right.horizon, 42.0 - tuning::GRID_SWAY_Y);
    }

    #[test]
    fn rows_cluster_near_the_horizon() {
        let vp = ViewportState::new(200.0, 100.0, 1.0);
        let layout = GridLayout::new(vp, PointerState::default());
        let first_gap = row_y(layout, 100.0, 1) - layout.horizon;
        let last_gap = row_y(layout, 100.0, tuning::GRID_ROWS)
            - row_y(layout, 100.0, tuning::GRID_ROWS - 1);
        assert!(first_gap < last_gap);
        // The final row reaches the bottom edge exactly.
        assert!((row_y(layout, 100.0, tuning::GRID_ROWS) - 100.0).abs() < 1e-4);
    }

    #[test]
    fn grid_paints_below_the_horizon() {
        let vp = ViewportState::new(100.0, 100.0, 1.0);
        let layout = GridLayout::new(vp, PointerState::default());
        let mut s = Surface::new(vp);
        render(&mut s, vp, layout);
        // The bottom-most horizontal line lands on the last row.
        let lit = (0..100).any(|x| s.pixel(x, 99).iter().any(|&c| c > 0.05));
        assert!(lit);
    }
}
