//! Full-surface layers: background gradient, scan line, glitch bands,
//! vignette.

use neonfolio_canvas::{GradientStop, LinearGradient, Paint, RadialGradient, Surface};
use neonfolio_core::{Rgba, ViewportState};
use rand::Rng;

use crate::{palette, tuning};

/// Near-black vertical gradient painted first every frame.
pub fn backdrop(surface: &mut Surface, viewport: ViewportState) {
    let (w, h) = (viewport.width, viewport.height);
    let gradient = LinearGradient::new(
        (0.0, 0.0),
        (0.0, h),
        vec![
            GradientStop::new(0.0, palette::SKY_TOP),
            GradientStop::new(1.0, palette::SKY_BOTTOM),
        ],
    );
    surface.fill_rect(0.0, 0.0, w, h, &Paint::Linear(gradient));
}

/// One bright horizontal line cycling down the surface with time.
pub fn scan_line(surface: &mut Surface, viewport: ViewportState, t_ms: f32) {
    let (w, h) = (viewport.width, viewport.height);
    let y = scan_y(t_ms, h);
    surface.stroke_line(
        0.0,
        y,
        w,
        y,
        tuning::SCAN_WIDTH,
        &Paint::Solid(palette::CYAN.with_alpha(0.35)),
    );
}

/// Scan line position: `(t · speed) mod height`.
pub fn scan_y(t_ms: f32, height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    (t_ms * tuning::SCAN_SPEED).rem_euclid(height)
}

/// With low probability, a translucent magenta band at a random height.
pub fn glitch<R: Rng>(
    surface: &mut Surface,
    viewport: ViewportState,
    horizon: f32,
    rng: &mut R,
) {
    if rng.gen::<f32>() >= tuning::GLITCH_CHANCE {
        return;
    }
    let (w, h) = (viewport.width, viewport.height);
    let y = rng.gen::<f32>() * h * 0.8 + horizon * 0.1;
    let band_h = tuning::GLITCH_MIN_HEIGHT + rng.gen::<f32>() * tuning::GLITCH_HEIGHT_SPAN;
    surface.fill_rect(
        0.0,
        y,
        w,
        band_h,
        &Paint::Solid(palette::MAGENTA.with_alpha(0.07)),
    );
}

/// Radial darkening toward the corners.
pub fn vignette(surface: &mut Surface, viewport: ViewportState) {
    let (w, h) = (viewport.width, viewport.height);
    let gradient = RadialGradient::new(
        (w / 2.0, h / 2.0),
        w.min(h) * 0.3,
        w.max(h) * 0.7,
        vec![
            GradientStop::new(0.0, Rgba::TRANSPARENT),
            GradientStop::new(1.0, Rgba::BLACK.with_alpha(0.35)),
        ],
    );
    surface.fill_rect(0.0, 0.0, w, h, &Paint::Radial(gradient));
}
