//! Pointer and viewport state owned by the animator.
//!
//! These replace the host-global mutable `mouse`/window-size coupling of a
//! browser canvas: the host forwards events through explicit setters, and
//! the per-frame renderer only ever reads these structs.

/// Normalized pointer offset relative to the viewport center.
///
/// Both components lie in `-1.0..=1.0`: `(-1, -1)` is the top-left corner,
/// `(1, 1)` the bottom-right, `(0, 0)` the center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Normalize an absolute pointer position against a viewport:
    /// `(p / size - 0.5) * 2`, clamped into `-1.0..=1.0`.
    ///
    /// A zero-area viewport yields the centered pointer rather than a
    /// division by zero.
    pub fn normalize(px: f32, py: f32, viewport: ViewportState) -> Self {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Self::default();
        }
        Self {
            x: ((px / viewport.width - 0.5) * 2.0).clamp(-1.0, 1.0),
            y: ((py / viewport.height - 0.5) * 2.0).clamp(-1.0, 1.0),
        }
    }
}

/// Logical viewport size plus the backing-store scale factor.
///
/// `scale` plays the role of the device-pixel-ratio: the drawing surface
/// allocates `logical * scale` pixels per axis so thin strokes stay crisp.
/// It is clamped into `1.0..=2.0` at construction, so consumers never see
/// an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl ViewportState {
    pub fn new(width: f32, height: f32, scale: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            scale: scale.clamp(1.0, 2.0),
        }
    }

    /// True when there is no area to draw into.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_normalizes_edges() {
        let vp = ViewportState::new(800.0, 600.0, 1.0);
        let p = PointerState::normalize(800.0, 300.0, vp);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 0.0);

        let p = PointerState::normalize(0.0, 0.0, vp);
        assert_eq!(p.x, -1.0);
        assert_eq!(p.y, -1.0);
    }

    #[test]
    fn pointer_clamps_outside_viewport() {
        let vp = ViewportState::new(100.0, 100.0, 1.0);
        let p = PointerState::normalize(250.0, -50.0, vp);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, -1.0);
    }

    #[test]
    fn pointer_centers_on_empty_viewport() {
        let p = PointerState::normalize(10.0, 10.0, ViewportState::default());
        assert_eq!(p, PointerState::default());
    }

    #[test]
    fn viewport_clamps_scale() {
        assert_eq!(ViewportState::new(10.0, 10.0, 0.5).scale, 1.0);
        assert_eq!(ViewportState::new(10.0, 10.0, 1.5).scale, 1.5);
        assert_eq!(ViewportState::new(10.0, 10.0, 3.0).scale, 2.0);
    }
}
