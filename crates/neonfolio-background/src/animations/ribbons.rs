//! Aurora ribbons behind the grid (stateless).
//!
//! Two translucent bands, each following a dominant sine plus a slower
//! half-frequency harmonic at 0.4 amplitude, filled with a vertical
//! gradient under additive blending so the overlap glows.

use neonfolio_canvas::{Blend, GradientStop, LinearGradient, Paint, Surface};
use neonfolio_core::ViewportState;

use crate::{palette, tuning};

pub fn render(surface: &mut Surface, viewport: ViewportState, t_ms: f32) {
    let (w, h) = (viewport.width, viewport.height);
    let t = t_ms * 0.0004;

    surface.set_blend(Blend::Lighter);
    for i in 0..2u32 {
        let fi = i as f32;
        let base_y = h * (0.18 + fi * 0.07);
        let amp = h * (tuning::RIBBON_AMP_BASE + fi * tuning::RIBBON_AMP_STEP);
        let freq = (tuning::RIBBON_CYCLES_BASE + fi * tuning::RIBBON_CYCLES_STEP) / w.max(1.0);
        let band = h * tuning::RIBBON_BAND;
        let skirt = h * tuning::RIBBON_SKIRT;

        let mid = if i == 0 {
            palette::MAGENTA.with_alpha(0.06)
        } else {
            palette::CYAN.with_alpha(0.06)
        };
        let gradient = LinearGradient::new(
            (0.0, base_y - band),
            (0.0, base_y + band),
            vec![
                GradientStop::new(0.0, palette::CYAN.with_alpha(0.02)),
                GradientStop::new(0.5, mid),
                GradientStop::new(1.0, palette::CYAN.with_alpha(0.02)),
            ],
        );

        let mut points = Vec::with_capacity((w / tuning::RIBBON_STEP) as usize + 4);
        points.push((0.0, base_y));
        let mut x = 0.0;
        while x <= w {
            let y = base_y
                + (x * freq + t * 6.0 + fi).sin() * amp
                + (x * freq * 0.6 + t * 4.2 + fi * 2.3).sin() * amp * 0.4;
            points.push((x, y));
            x += tuning::RIBBON_STEP;
        }
        points.push((w, base_y + skirt));
        points.push((0.0, base_y + skirt));
        surface.fill_polygon(&points, &Paint::Linear(gradient));
    }
    surface.set_blend(Blend::SourceOver);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ribbons_brighten_their_band_additively() {
        let vp = ViewportState::new(100.0, 100.0, 1.0);
        let mut s = Surface::new(vp);
        render(&mut s, vp, 0.0);
        // The first band's midline sits at 18% of the height; somewhere
        // along it pixels must have received light.
        let row = 18;
        let lit = (0..100).any(|x| s.pixel(x, row).iter().any(|&c| c > 0.0));
        assert!(lit);
        // Far below both bands and skirts nothing is drawn.
        assert!((0..100).all(|x| s.pixel(x, 95) == [0.0, 0.0, 0.0]));
    }

    #[test]
    fn blend_mode_is_restored_afterwards() {
        let vp = ViewportState::new(40.0, 40.0, 1.0);
        let mut s = Surface::new(vp);
        render(&mut s, vp, 123.0);
        // A subsequent opaque fill must fully replace, not add.
        s.fill_rect(
            0.0,
            0.0,
            40.0,
            40.0,
            &Paint::Solid(neonfolio_core::Rgba::new(0.25, 0.25, 0.25, 1.0)),
        );
        let p = s.pixel(20, 7);
        assert!((p[0] - 0.25).abs() < 1e-4);
    }
}
