//! Neon color constants for the backdrop layers.

use neonfolio_core::Rgba;

/// Grid lines, scan line, ribbon edges, shooting-star heads.
pub const CYAN: Rgba = Rgba::new(0.0, 1.0, 1.0, 1.0);

/// Grid spokes, glitch bands, the warmer ribbon.
pub const MAGENTA: Rgba = Rgba::new(1.0, 0.0, 0.5, 1.0);

/// Pale cyan-white star tint.
pub const STAR_TINT: Rgba = Rgba::new(0.706, 1.0, 1.0, 0.9);

/// Shooting-star tail.
pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

/// Top stop of the background gradient.
pub const SKY_TOP: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.95);

/// Bottom stop of the background gradient, a hair above pure black.
pub const SKY_BOTTOM: Rgba = Rgba::new(0.02, 0.02, 0.031, 0.98);
