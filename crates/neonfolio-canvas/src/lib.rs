//! Immediate-mode 2D drawing surface for the neonfolio renderers.
//!
//! A [`Surface`] is an RGB float pixel buffer sized from a logical viewport
//! and a clamped backing-store scale factor, with the drawing vocabulary the
//! renderers need: filled and stroked paths, circles, solid and gradient
//! paints, source-over and additive compositing, an affine transform stack,
//! and a logical-coordinate text layer. [`SurfaceWidget`] presents the
//! surface to a ratatui frame as half-block cells, two stacked pixels per
//! terminal cell.

mod paint;
mod surface;
mod transform;
mod widget;

pub use paint::{GradientStop, LinearGradient, Paint, RadialGradient};
pub use surface::{Blend, Surface, TextRun};
pub use transform::Transform;
pub use widget::SurfaceWidget;
