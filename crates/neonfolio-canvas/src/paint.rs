//! Fill and stroke paints: solid colors and gradients.

use neonfolio_core::Rgba;

/// One stop of a gradient ramp. Offsets are expected sorted ascending in
/// `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

impl GradientStop {
    pub fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient between two points in logical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(from: (f32, f32), to: (f32, f32), stops: Vec<GradientStop>) -> Self {
        Self { from, to, stops }
    }

    fn sample(&self, x: f32, y: f32) -> Rgba {
        let dx = self.to.0 - self.from.0;
        let dy = self.to.1 - self.from.1;
        let len2 = dx * dx + dy * dy;
        if len2 <= f32::EPSILON {
            return sample_stops(&self.stops, 0.0);
        }
        let t = ((x - self.from.0) * dx + (y - self.from.1) * dy) / len2;
        sample_stops(&self.stops, t)
    }
}

/// Radial gradient between an inner and an outer radius around a center,
/// in logical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: (f32, f32),
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn new(
        center: (f32, f32),
        inner_radius: f32,
        outer_radius: f32,
        stops: Vec<GradientStop>,
    ) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            stops,
        }
    }

    fn sample(&self, x: f32, y: f32) -> Rgba {
        let dist = ((x - self.center.0).powi(2) + (y - self.center.1).powi(2)).sqrt();
        let span = self.outer_radius - self.inner_radius;
        if span.abs() <= f32::EPSILON {
            return sample_stops(&self.stops, if dist < self.inner_radius { 0.0 } else { 1.0 });
        }
        sample_stops(&self.stops, (dist - self.inner_radius) / span)
    }
}

/// A paint source sampled per pixel in logical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    pub fn sample(&self, x: f32, y: f32) -> Rgba {
        match self {
            Self::Solid(c) => *c,
            Self::Linear(g) => g.sample(x, y),
            Self::Radial(g) => g.sample(x, y),
        }
    }

    /// True when sampling is position-independent.
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid(_))
    }
}

impl From<Rgba> for Paint {
    fn from(c: Rgba) -> Self {
        Self::Solid(c)
    }
}

fn sample_stops(stops: &[GradientStop], t: f32) -> Rgba {
    let Some(first) = stops.first() else {
        return Rgba::TRANSPARENT;
    };
    let t = t.clamp(0.0, 1.0);
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t <= hi.offset {
            let span = hi.offset - lo.offset;
            if span <= f32::EPSILON {
                return hi.color;
            }
            return lo.color.lerp(hi.color, (t - lo.offset) / span);
        }
    }
    stops.last().map(|s| s.color).unwrap_or(Rgba::TRANSPARENT)
}
