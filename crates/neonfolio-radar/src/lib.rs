//! Polar radar chart for skill ratings.
//!
//! One synchronous draw per call, no state beyond the accent color: the
//! host re-renders only when its skill list changes. The chart is scale
//! rings, one axis per skill, the closed level polygon, glowing vertex
//! markers, and labels just outside the outer ring.

use std::f32::consts::{FRAC_PI_2, TAU};

use neonfolio_canvas::{Paint, Surface};
use neonfolio_core::{Rgba, SkillItem};

/// Ring and axis alpha, from the accent color.
const FRAME_ALPHA: f32 = 48.0 / 255.0;
/// Level polygon fill alpha.
const FILL_ALPHA: f32 = 32.0 / 255.0;
/// Vertex glow alpha.
const GLOW_ALPHA: f32 = 64.0 / 255.0;

/// Margin between the outer ring and the surface edge.
const MARGIN: f32 = 8.0;
/// Number of concentric scale rings.
const RINGS: usize = 5;
/// Label distance beyond the outer ring.
const LABEL_OFFSET: f32 = 4.0;
/// Vertical drop of the percentage line under its label.
const PERCENT_DROP: f32 = 2.0;
const POINT_RADIUS: f32 = 1.2;
const GLOW_RADIUS: f32 = 2.4;

/// Angle of axis `i` of `n`, with the first axis pointing straight up.
pub fn axis_angle(i: usize, n: usize) -> f32 {
    i as f32 * (TAU / n as f32) - FRAC_PI_2
}

/// Point at `radius` along `angle` from `center`.
pub fn point_at(center: (f32, f32), angle: f32, radius: f32) -> (f32, f32) {
    (
        center.0 + angle.cos() * radius,
        center.1 + angle.sin() * radius,
    )
}

/// Stateless radar chart renderer carrying only its accent color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarChart {
    pub accent: Rgba,
}

impl RadarChart {
    pub fn new(accent: Rgba) -> Self {
        Self { accent }
    }

    /// Draw the chart. Clears the surface first, so identical input
    /// always yields identical pixels. An empty skill list draws only
    /// the scale rings.
    pub fn render(&self, surface: &mut Surface, skills: &[SkillItem]) {
        surface.clear();
        let (w, h) = surface.logical_size();
        let center = (w / 2.0, h / 2.0);
        let max_radius = (center.0.min(center.1) - MARGIN).max(0.0);
        if max_radius <= 0.0 {
            return;
        }

        let frame = Paint::Solid(self.accent.with_alpha(FRAME_ALPHA));
        for i in 1..=RINGS {
            let r = max_radius / RINGS as f32 * i as f32;
            surface.stroke_circle(center.0, center.1, r, 1.0, &frame);
        }

        if skills.is_empty() {
            return;
        }
        let n = skills.len();

        for i in 0..n {
            let (x, y) = point_at(center, axis_angle(i, n), max_radius);
            surface.stroke_line(center.0, center.1, x, y, 1.0, &frame);
        }

        let vertices: Vec<(f32, f32)> = skills
            .iter()
            .enumerate()
            .map(|(i, s)| point_at(center, axis_angle(i, n), s.fraction() * max_radius))
            .collect();

        surface.fill_polygon(&vertices, &Paint::Solid(self.accent.with_alpha(FILL_ALPHA)));
        surface.stroke_polyline(&vertices, true, 1.0, &Paint::Solid(self.accent));

        for &(x, y) in &vertices {
            surface.fill_circle(x, y, POINT_RADIUS, &Paint::Solid(self.accent));
            surface.fill_circle(
                x,
                y,
                GLOW_RADIUS,
                &Paint::Solid(self.accent.with_alpha(GLOW_ALPHA)),
            );
        }

        for (i, skill) in skills.iter().enumerate() {
            let (x, y) = point_at(center, axis_angle(i, n), max_radius + LABEL_OFFSET);
            surface.fill_text(skill.name.clone(), x, y, Rgba::WHITE);
            surface.fill_text(format!("{}%", skill.level), x, y + PERCENT_DROP, Rgba::WHITE);
        }
    }
}
